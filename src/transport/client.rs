//! Hyper-backed transport executor.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, HeaderName, HeaderValue, Method, Request, Uri};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use bytes::Bytes;
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;

use crate::proxy::{HttpVerb, ProxyRequestContext};
use crate::transport::{TransportError, TransportExecutor};

/// Transport executor backed by the hyper legacy client.
pub struct HyperTransport {
    client: Client<HttpConnector, Body>,
}

impl HyperTransport {
    pub fn new() -> Self {
        Self {
            client: Client::builder(TokioExecutor::new()).build(HttpConnector::new()),
        }
    }
}

impl Default for HyperTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn method_for(verb: HttpVerb) -> Method {
    match verb {
        HttpVerb::Get => Method::GET,
        HttpVerb::Head => Method::HEAD,
        HttpVerb::Post => Method::POST,
        HttpVerb::Put => Method::PUT,
        HttpVerb::Patch => Method::PATCH,
        HttpVerb::Delete => Method::DELETE,
        HttpVerb::Options => Method::OPTIONS,
        HttpVerb::Trace => Method::TRACE,
    }
}

/// Encode `username[:password]` as a Basic authorization header value.
fn basic_auth(username: &str, password: Option<&[u8]>) -> Result<HeaderValue, TransportError> {
    let mut credentials = Vec::with_capacity(username.len() + 1 + password.map_or(0, <[u8]>::len));
    credentials.extend_from_slice(username.as_bytes());
    credentials.push(b':');
    if let Some(password) = password {
        credentials.extend_from_slice(password);
    }

    HeaderValue::from_str(&format!("Basic {}", BASE64.encode(credentials))).map_err(|_| {
        TransportError::InvalidHeader {
            name: header::AUTHORIZATION.to_string(),
        }
    })
}

#[async_trait]
impl TransportExecutor for HyperTransport {
    async fn execute(&self, context: ProxyRequestContext) -> Result<Option<Bytes>, TransportError> {
        let uri: Uri = context
            .uri()
            .parse()
            .map_err(|source| TransportError::InvalidUri {
                uri: context.uri().to_string(),
                source,
            })?;

        let mut builder = Request::builder()
            .method(method_for(context.method()))
            .uri(uri);

        if let Some(headers) = builder.headers_mut() {
            for (name, value) in context.headers().iter() {
                let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                    TransportError::InvalidHeader {
                        name: name.to_string(),
                    }
                })?;
                let header_value =
                    HeaderValue::from_str(value).map_err(|_| TransportError::InvalidHeader {
                        name: name.to_string(),
                    })?;
                headers.insert(header_name, header_value);
            }

            if let Some(username) = context.username() {
                headers.insert(
                    header::AUTHORIZATION,
                    basic_auth(username, context.password())?,
                );
            }
        }

        let request = builder.body(Body::empty())?;

        tracing::debug!(
            resource_key = %context.resource_key(),
            method = %context.method(),
            uri = %context.uri(),
            "executing outbound request"
        );

        let response = self.client.request(request).await?;
        let status = response.status();
        let body = axum::body::to_bytes(Body::new(response.into_body()), usize::MAX)
            .await
            .map_err(TransportError::Body)?;

        tracing::debug!(
            resource_key = %context.resource_key(),
            status = %status,
            bytes = body.len(),
            "upstream responded"
        );

        if body.is_empty() {
            Ok(None)
        } else {
            Ok(Some(body))
        }
    }
}
