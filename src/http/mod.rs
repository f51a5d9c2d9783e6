//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, /proxy/{resource}/{*path} routes)
//!     → request.rs (add request ID)
//!     → [translation pipeline builds the outbound descriptor]
//!     → [transport executor performs the call]
//!     → response.rs (map body-or-absent to a status)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use server::HttpServer;
