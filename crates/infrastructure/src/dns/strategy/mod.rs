//! Encodings of one DNS question onto an HTTP exchange.
//!
//! Each strategy turns (server, domain, type) into an [`HttpRequest`] and turns
//! the matching [`HttpResponse`] back into records. Strategies hold no state.

pub mod get_binary;
pub mod json_get;
pub mod post_binary;

use doh_client_application::ports::{HttpRequest, HttpResponse};
use doh_client_domain::{DohMethod, DomainError, RecordType, ResourceRecord};

pub use get_binary::GetBinaryStrategy;
pub use json_get::JsonGetStrategy;
pub use post_binary::PostBinaryStrategy;

/// Media type of RFC 8484 wire-format bodies.
pub const DNS_MESSAGE_CONTENT_TYPE: &str = "application/dns-message";

/// Media type of JSON answer bodies.
pub const DNS_JSON_CONTENT_TYPE: &str = "application/dns-json";

pub trait DohStrategy {
    fn method(&self) -> DohMethod;

    /// Errors only when the query itself cannot be encoded.
    fn build_request(
        &self,
        server: &str,
        domain: &str,
        record_type: RecordType,
    ) -> Result<HttpRequest, DomainError>;

    fn parse_response(&self, response: &HttpResponse) -> Result<Vec<ResourceRecord>, DomainError>;
}

#[derive(Debug, Clone, Copy)]
pub enum Strategy {
    GetBinary(GetBinaryStrategy),
    PostBinary(PostBinaryStrategy),
    JsonGet(JsonGetStrategy),
}

impl Strategy {
    pub fn for_method(method: DohMethod) -> Self {
        match method {
            DohMethod::Get => Self::GetBinary(GetBinaryStrategy),
            DohMethod::Post => Self::PostBinary(PostBinaryStrategy),
            DohMethod::JsonGet => Self::JsonGet(JsonGetStrategy),
        }
    }

    pub fn method(&self) -> DohMethod {
        match self {
            Self::GetBinary(s) => s.method(),
            Self::PostBinary(s) => s.method(),
            Self::JsonGet(s) => s.method(),
        }
    }

    pub fn build_request(
        &self,
        server: &str,
        domain: &str,
        record_type: RecordType,
    ) -> Result<HttpRequest, DomainError> {
        match self {
            Self::GetBinary(s) => s.build_request(server, domain, record_type),
            Self::PostBinary(s) => s.build_request(server, domain, record_type),
            Self::JsonGet(s) => s.build_request(server, domain, record_type),
        }
    }

    pub fn parse_response(
        &self,
        response: &HttpResponse,
    ) -> Result<Vec<ResourceRecord>, DomainError> {
        match self {
            Self::GetBinary(s) => s.parse_response(response),
            Self::PostBinary(s) => s.parse_response(response),
            Self::JsonGet(s) => s.parse_response(response),
        }
    }
}

pub(crate) fn ensure_ok(response: &HttpResponse) -> Result<(), DomainError> {
    if response.is_ok() {
        Ok(())
    } else {
        Err(DomainError::HttpStatus(response.status))
    }
}

/// Append `query` to `url`, respecting a query string already present.
pub(crate) fn append_query(url: &str, query: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}", url, separator, query)
}
