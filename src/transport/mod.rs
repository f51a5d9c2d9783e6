//! Outbound transport subsystem.
//!
//! # Data Flow
//! ```text
//! ProxyRequestContext (from the pipeline)
//!     → client.rs (materialize http request, encode credentials)
//!     → hyper client (connection establishment, actual call)
//!     → response body collected → Option<Bytes> back to the dispatcher
//! ```
//!
//! # Design Decisions
//! - The pipeline never sees this module; it hands over an immutable
//!   descriptor and the executor owns everything network-shaped
//! - Credential encoding (Basic auth) happens here, not in the core
//! - No retry, timeout, or pooling policy beyond what the hyper client
//!   provides

pub mod client;

pub use client::HyperTransport;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

use crate::proxy::ProxyRequestContext;

/// Errors surfaced by a transport executor.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid outbound URI {uri:?}: {source}")]
    InvalidUri {
        uri: String,
        #[source]
        source: axum::http::uri::InvalidUri,
    },

    #[error("configured header {name:?} is not a valid HTTP header")]
    InvalidHeader { name: String },

    #[error("failed to build outbound request: {0}")]
    Request(#[from] axum::http::Error),

    #[error("upstream request failed: {0}")]
    Upstream(#[from] hyper_util::client::legacy::Error),

    #[error("failed to read upstream body: {0}")]
    Body(axum::Error),
}

/// Executes the outbound HTTP call described by a [`ProxyRequestContext`].
#[async_trait]
pub trait TransportExecutor: Send + Sync {
    /// Execute the call. Returns the upstream response body, or `None`
    /// when the upstream responded without one.
    async fn execute(&self, context: ProxyRequestContext) -> Result<Option<Bytes>, TransportError>;
}
