//! Request translation pipeline.
//!
//! # Data Flow
//! ```text
//! Inbound request (resource key, method token, sub-path, attributes)
//!     → resolver lookup (config snapshot, read-only)
//!     → uri.rs (root URI + sub-path composition)
//!     → placeholder.rs (header templates resolved against attributes)
//!     → context.rs (immutable ProxyRequestContext)
//!     → handed to transport executor
//! ```
//!
//! # Design Decisions
//! - The pipeline is pure: no I/O, no shared mutable state, safe to run
//!   concurrently per request
//! - Unknown resource key yields an absent result, not an error; only an
//!   unrecognized method token aborts with an explicit error
//! - Header config mistakes degrade in place: bad entries are skipped,
//!   unresolvable placeholders become empty strings

pub mod attributes;
pub mod context;
pub mod pipeline;
pub mod placeholder;
pub mod uri;

pub use attributes::{AttributeValue, RequestAttributes};
pub use context::{HttpVerb, ProxyHeaders, ProxyRequestContext};
pub use pipeline::plan_request;

use thiserror::Error;

/// Errors that abort a single request's pipeline.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProxyError {
    /// The inbound method token is not one of the supported verbs.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),
}
