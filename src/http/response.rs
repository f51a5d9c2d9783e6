//! Response mapping for proxied calls.
//!
//! # Responsibilities
//! - Translate the executor's body-or-absent result into an HTTP response
//!
//! # Design Decisions
//! - A present body is 200; an absent body is 204 rather than an empty 200,
//!   so callers can distinguish "upstream said nothing" cheaply

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bytes::Bytes;

/// Map an upstream body into the client-facing response.
pub fn upstream_response(body: Option<Bytes>) -> Response {
    match body {
        Some(bytes) => (StatusCode::OK, bytes).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_body_maps_to_200() {
        let response = upstream_response(Some(Bytes::from_static(b"hello")));
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn absent_body_maps_to_204() {
        let response = upstream_response(None);
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
