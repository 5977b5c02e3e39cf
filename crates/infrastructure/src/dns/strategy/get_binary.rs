use super::{append_query, ensure_ok, DohStrategy, DNS_MESSAGE_CONTENT_TYPE};
use crate::dns::wire::{base64url, MessageBuilder, ResponseParser};
use doh_client_application::ports::{HttpRequest, HttpResponse};
use doh_client_domain::{DohMethod, DomainError, RecordType, ResourceRecord};

/// RFC 8484 §4.1 GET: the wire query travels base64url-encoded in `?dns=`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetBinaryStrategy;

impl DohStrategy for GetBinaryStrategy {
    fn method(&self) -> DohMethod {
        DohMethod::Get
    }

    fn build_request(
        &self,
        server: &str,
        domain: &str,
        record_type: RecordType,
    ) -> Result<HttpRequest, DomainError> {
        let query = MessageBuilder::build_query(domain, record_type)?;
        let url = append_query(server, &format!("dns={}", base64url::encode(&query)));

        Ok(HttpRequest::get(url).with_header("Accept", DNS_MESSAGE_CONTENT_TYPE))
    }

    fn parse_response(&self, response: &HttpResponse) -> Result<Vec<ResourceRecord>, DomainError> {
        ensure_ok(response)?;
        ResponseParser::parse(&response.body)
    }
}
