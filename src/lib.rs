//! REST Proxy Library

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod proxy;
pub mod transport;

pub use config::{ConfigResolver, ProxyConfig, ResourceConfig};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use proxy::{ProxyError, ProxyRequestContext, RequestAttributes};
pub use transport::{TransportError, TransportExecutor};
