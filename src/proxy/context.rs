//! Outbound request descriptor.
//!
//! # Responsibilities
//! - Fixed enumeration of the HTTP verbs the proxy will forward
//! - Ordered header mapping with last-write-wins on duplicate names
//! - Immutable `ProxyRequestContext` assembled once per request
//!
//! # Design Decisions
//! - Verb parsing is exact and case-sensitive (HTTP method tokens are
//!   case-sensitive); anything else is `UnsupportedMethod`
//! - The password is stored as bytes; credential encoding (e.g. Basic
//!   auth) is the transport executor's job, never done here
//! - Fields are private: once built, the context cannot change hands
//!   with different contents

use std::fmt;

use crate::proxy::ProxyError;

/// The verbs the proxy recognizes on inbound requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpVerb {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Options,
    Trace,
}

impl HttpVerb {
    /// Parse an inbound method token. Unrecognized tokens (including
    /// lowercase spellings) fail with [`ProxyError::UnsupportedMethod`].
    pub fn parse(token: &str) -> Result<Self, ProxyError> {
        match token {
            "GET" => Ok(Self::Get),
            "HEAD" => Ok(Self::Head),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            "OPTIONS" => Ok(Self::Options),
            "TRACE" => Ok(Self::Trace),
            _ => Err(ProxyError::UnsupportedMethod(token.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
            Self::Trace => "TRACE",
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered header mapping.
///
/// Iteration order is insertion (configuration) order. Inserting an
/// existing name overwrites its value in place, keeping the original
/// position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxyHeaders {
    entries: Vec<(String, String)>,
}

impl ProxyHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything the transport executor needs for one outbound call.
///
/// Immutable once built; ownership moves to the executor.
#[derive(Clone, PartialEq, Eq)]
pub struct ProxyRequestContext {
    resource_key: String,
    method: HttpVerb,
    uri: String,
    username: Option<String>,
    password: Option<Vec<u8>>,
    headers: ProxyHeaders,
}

impl ProxyRequestContext {
    /// Assemble the outbound descriptor. Pure and deterministic; the only
    /// failure mode is an unrecognized method token.
    pub fn build(
        resource_key: &str,
        method_token: &str,
        uri: String,
        username: Option<String>,
        password: Option<&str>,
        headers: ProxyHeaders,
    ) -> Result<Self, ProxyError> {
        let method = HttpVerb::parse(method_token)?;
        Ok(Self {
            resource_key: resource_key.to_string(),
            method,
            uri,
            username,
            password: password.map(|p| p.as_bytes().to_vec()),
            headers,
        })
    }

    pub fn resource_key(&self) -> &str {
        &self.resource_key
    }

    pub fn method(&self) -> HttpVerb {
        self.method
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn password(&self) -> Option<&[u8]> {
        self.password.as_deref()
    }

    pub fn headers(&self) -> &ProxyHeaders {
        &self.headers
    }
}

// Manual Debug so the password never lands in a log line.
impl fmt::Debug for ProxyRequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyRequestContext")
            .field("resource_key", &self.resource_key)
            .field("method", &self.method)
            .field("uri", &self.uri)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("headers", &self.headers)
            .finish()
    }
}
