//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create Axum Router with the proxy handlers
//! - Wire up middleware (tracing, timeout, request ID)
//! - Snapshot request attributes for header templating
//! - Drive the translation pipeline and hand the result to the transport
//! - Map pipeline and transport outcomes to HTTP statuses
//! - Observability (metrics, correlation IDs)

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::{ConnectInfo, Path, State},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{ConfigResolver, ProxyConfig};
use crate::http::request::{RequestIdLayer, X_REQUEST_ID};
use crate::http::response::upstream_response;
use crate::observability::metrics;
use crate::proxy::{pipeline, ProxyError, RequestAttributes};
use crate::transport::{HyperTransport, TransportExecutor};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<ConfigResolver>,
    pub executor: Arc<dyn TransportExecutor>,
}

/// HTTP server for the REST proxy.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and resolver.
    pub fn new(config: &ProxyConfig, resolver: Arc<ConfigResolver>) -> Self {
        Self::with_executor(config, resolver, Arc::new(HyperTransport::new()))
    }

    /// Create a server with a specific transport executor.
    pub fn with_executor(
        config: &ProxyConfig,
        resolver: Arc<ConfigResolver>,
        executor: Arc<dyn TransportExecutor>,
    ) -> Self {
        let state = AppState { resolver, executor };
        let router = Self::build_router(config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ProxyConfig, state: AppState) -> Router {
        Router::new()
            .route("/proxy/{resource}", any(proxy_root_handler))
            .route("/proxy/{resource}/{*path}", any(proxy_sub_path_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// `/proxy/{resource}` — a request for the resource root; the sub-path is
/// blank and the composed URI is the configured root unchanged.
async fn proxy_root_handler(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Path(resource): Path<String>,
    request: Request<Body>,
) -> Response {
    dispatch(state, resource, String::new(), addr, request).await
}

/// `/proxy/{resource}/{*path}` — the wildcard capture drops the leading
/// slash, so it is restored before composition.
async fn proxy_sub_path_handler(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Path((resource, path)): Path<(String, String)>,
    request: Request<Body>,
) -> Response {
    dispatch(state, resource, format!("/{path}"), addr, request).await
}

/// Run one request through the pipeline and the transport executor.
async fn dispatch(
    state: AppState,
    resource_key: String,
    sub_path: String,
    addr: SocketAddr,
    request: Request<Body>,
) -> Response {
    let start_time = Instant::now();
    let method_token = request.method().as_str().to_string();
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    tracing::debug!(
        request_id = %request_id,
        resource_key = %resource_key,
        method = %method_token,
        sub_path = %sub_path,
        "Proxying request"
    );

    let attributes = snapshot_attributes(&request, &request_id, &sub_path, addr);

    let response = match pipeline::plan_request(
        state.resolver.as_ref(),
        &resource_key,
        &method_token,
        &sub_path,
        &attributes,
    ) {
        Ok(Some(context)) => match state.executor.execute(context).await {
            Ok(body) => upstream_response(body),
            Err(e) => {
                tracing::error!(
                    request_id = %request_id,
                    resource_key = %resource_key,
                    error = %e,
                    "Outbound call failed"
                );
                (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response()
            }
        },
        Ok(None) => (StatusCode::NOT_FOUND, "Unknown resource").into_response(),
        Err(ProxyError::UnsupportedMethod(token)) => {
            tracing::warn!(
                request_id = %request_id,
                method = %token,
                "Unsupported method on inbound request"
            );
            (StatusCode::METHOD_NOT_ALLOWED, "Unsupported method").into_response()
        }
    };

    metrics::record_request(
        &method_token,
        response.status().as_u16(),
        &resource_key,
        start_time,
    );
    response
}

/// Freeze the request-scoped attributes the header templates can see.
///
/// Every header becomes a text attribute keyed by its lowercase name; a
/// header with non-UTF-8 bytes is recorded as present but opaque. The
/// dispatcher adds `request_id`, `remote_addr`, and `sub_path`.
fn snapshot_attributes(
    request: &Request<Body>,
    request_id: &str,
    sub_path: &str,
    addr: SocketAddr,
) -> RequestAttributes {
    let mut attributes = RequestAttributes::new();

    for (name, value) in request.headers() {
        match value.to_str() {
            Ok(text) => attributes.set_text(name.as_str(), text),
            Err(_) => attributes.set_opaque(name.as_str()),
        }
    }

    attributes.set_text("request_id", request_id);
    attributes.set_text("remote_addr", addr.to_string());
    attributes.set_text("sub_path", sub_path);

    attributes
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn snapshot_tags_non_utf8_headers_as_opaque() {
        let mut request = Request::builder()
            .header("x-user-id", "42")
            .body(Body::empty())
            .unwrap();
        request.headers_mut().insert(
            "x-binary",
            HeaderValue::from_bytes(&[0xFF, 0xFE]).unwrap(),
        );

        let addr: SocketAddr = "127.0.0.1:9999".parse().unwrap();
        let attributes = snapshot_attributes(&request, "rid-1", "/users/42", addr);

        assert_eq!(attributes.text("x-user-id"), Some("42"));
        assert_eq!(attributes.text("x-binary"), None);
        assert!(attributes.get("x-binary").is_some());
        assert_eq!(attributes.text("request_id"), Some("rid-1"));
        assert_eq!(attributes.text("sub_path"), Some("/users/42"));
        assert_eq!(attributes.text("remote_addr"), Some("127.0.0.1:9999"));
    }
}
