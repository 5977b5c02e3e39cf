use super::{ensure_ok, DohStrategy, DNS_MESSAGE_CONTENT_TYPE};
use crate::dns::wire::{MessageBuilder, ResponseParser};
use doh_client_application::ports::{HttpRequest, HttpResponse};
use doh_client_domain::{DohMethod, DomainError, RecordType, ResourceRecord};

/// RFC 8484 §4.1 POST: the wire query is the request body.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostBinaryStrategy;

impl DohStrategy for PostBinaryStrategy {
    fn method(&self) -> DohMethod {
        DohMethod::Post
    }

    fn build_request(
        &self,
        server: &str,
        domain: &str,
        record_type: RecordType,
    ) -> Result<HttpRequest, DomainError> {
        let query = MessageBuilder::build_query(domain, record_type)?;

        Ok(HttpRequest::post(server, query)
            .with_header("Accept", DNS_MESSAGE_CONTENT_TYPE)
            .with_header("Content-Type", DNS_MESSAGE_CONTENT_TYPE))
    }

    fn parse_response(&self, response: &HttpResponse) -> Result<Vec<ResourceRecord>, DomainError> {
        ensure_ok(response)?;
        ResponseParser::parse(&response.body)
    }
}
