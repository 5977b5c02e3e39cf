use super::{ensure_ok, DohStrategy, DNS_JSON_CONTENT_TYPE};
use crate::dns::json_answer::JsonAnswerDecoder;
use crate::dns::wire::MessageBuilder;
use doh_client_application::ports::{HttpRequest, HttpResponse};
use doh_client_domain::{DohMethod, DomainError, RecordType, ResourceRecord};

/// JSON API GET (`?name=&type=`), as served by Google and Cloudflare.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonGetStrategy;

impl DohStrategy for JsonGetStrategy {
    fn method(&self) -> DohMethod {
        DohMethod::JsonGet
    }

    fn build_request(
        &self,
        server: &str,
        domain: &str,
        record_type: RecordType,
    ) -> Result<HttpRequest, DomainError> {
        MessageBuilder::encode_name(domain)?;

        let mut url = reqwest::Url::parse(server).map_err(|e| DomainError::Transport {
            server: server.to_string(),
            message: format!("invalid server URL: {}", e),
        })?;
        url.query_pairs_mut()
            .append_pair("name", domain)
            .append_pair("type", &record_type.to_u16().to_string());

        Ok(HttpRequest::get(url.as_str()).with_header("Accept", DNS_JSON_CONTENT_TYPE))
    }

    fn parse_response(&self, response: &HttpResponse) -> Result<Vec<ResourceRecord>, DomainError> {
        ensure_ok(response)?;
        JsonAnswerDecoder::decode(&response.body)
    }
}
