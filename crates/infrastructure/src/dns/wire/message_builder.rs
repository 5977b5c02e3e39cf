//! DNS query construction.
//!
//! Produces a single-question recursive query. The transaction id is always 0
//! (RFC 8484 §4.1) so identical GET requests stay cacheable by HTTP caches.

use super::{CLASS_IN, HEADER_LEN, MAX_LABEL_LEN, MAX_NAME_LEN};
use doh_client_domain::{DomainError, RecordType};

pub const QUERY_ID: u16 = 0;

/// Standard query, recursion desired.
pub const QUERY_FLAGS: u16 = 0x0100;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Serialize a query for `domain` / `record_type` to wire format.
    ///
    /// `"."` queries the root. A single trailing dot is accepted. Empty labels,
    /// labels longer than 63 bytes and names longer than 255 bytes are rejected
    /// with [`DomainError::InvalidDomainName`].
    pub fn build_query(domain: &str, record_type: RecordType) -> Result<Vec<u8>, DomainError> {
        let qname = Self::encode_name(domain)?;

        let mut message = Vec::with_capacity(HEADER_LEN + qname.len() + 4);
        message.extend_from_slice(&QUERY_ID.to_be_bytes());
        message.extend_from_slice(&QUERY_FLAGS.to_be_bytes());
        message.extend_from_slice(&1u16.to_be_bytes()); // QDCOUNT
        message.extend_from_slice(&0u16.to_be_bytes()); // ANCOUNT
        message.extend_from_slice(&0u16.to_be_bytes()); // NSCOUNT
        message.extend_from_slice(&0u16.to_be_bytes()); // ARCOUNT
        message.extend_from_slice(&qname);
        message.extend_from_slice(&record_type.to_u16().to_be_bytes());
        message.extend_from_slice(&CLASS_IN.to_be_bytes());

        Ok(message)
    }

    /// Length-prefixed labels followed by the zero terminator.
    pub fn encode_name(domain: &str) -> Result<Vec<u8>, DomainError> {
        if domain == "." {
            return Ok(vec![0]);
        }

        let name = domain.strip_suffix('.').unwrap_or(domain);
        if name.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "domain name is empty".to_string(),
            ));
        }

        let mut encoded = Vec::with_capacity(name.len() + 2);
        for label in name.split('.') {
            if label.is_empty() {
                return Err(DomainError::InvalidDomainName(format!(
                    "empty label in '{}'",
                    domain
                )));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DomainError::InvalidDomainName(format!(
                    "label '{}' in '{}' is {} bytes, limit is {}",
                    label,
                    domain,
                    label.len(),
                    MAX_LABEL_LEN
                )));
            }
            encoded.push(label.len() as u8);
            encoded.extend_from_slice(label.as_bytes());
        }
        encoded.push(0);

        if encoded.len() > MAX_NAME_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' encodes to {} bytes, limit is {}",
                domain,
                encoded.len(),
                MAX_NAME_LEN
            )));
        }

        Ok(encoded)
    }
}
