use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Malformed DNS response: {0}")]
    MalformedResponse(String),

    #[error("DNS message is not a response (QR bit clear)")]
    NotAResponse,

    #[error("DoH server returned HTTP {0}")]
    HttpStatus(u16),

    #[error("Transport timeout talking to {server}")]
    TransportTimeout { server: String },

    #[error("Transport error talking to {server}: {message}")]
    Transport { server: String, message: String },

    #[error("Failed to parse JSON response: {0}")]
    JsonParse(String),

    #[error("System resolver failed for {domain}: {message}")]
    SystemResolver { domain: String, message: String },
}

impl DomainError {
    /// True when the error stems from the caller's input rather than from the
    /// server, the network or the local resolver.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, DomainError::InvalidDomainName(_))
    }
}
