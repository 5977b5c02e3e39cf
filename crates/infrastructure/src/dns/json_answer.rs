//! Decoder for the JSON answer format (`application/dns-json`) served by
//! Google, Cloudflare and most other public resolvers.

use doh_client_domain::{DomainError, RecordType, ResourceRecord};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct JsonAnswerEntry {
    name: String,
    #[serde(rename = "type")]
    record_type: u16,
    #[serde(rename = "TTL")]
    ttl: u32,
    #[serde(default)]
    data: Value,
}

pub struct JsonAnswerDecoder;

impl JsonAnswerDecoder {
    /// Decode the `Answer` array of a JSON response body.
    ///
    /// An unparseable body is an error. A body without an `Answer` array decodes
    /// to no records, and entries lacking `name`, `type` or `TTL` are skipped.
    pub fn decode(body: &[u8]) -> Result<Vec<ResourceRecord>, DomainError> {
        let document: Value =
            serde_json::from_slice(body).map_err(|e| DomainError::JsonParse(e.to_string()))?;

        if let Some(status) = document.get("Status").and_then(Value::as_u64) {
            debug!(status, "JSON response status");
        }

        let Some(answers) = document.get("Answer").and_then(Value::as_array) else {
            debug!("JSON response has no Answer section");
            return Ok(Vec::new());
        };

        let mut records = Vec::with_capacity(answers.len());
        for (index, entry) in answers.iter().enumerate() {
            match JsonAnswerEntry::deserialize(entry) {
                Ok(entry) => {
                    let record_type = RecordType::from_u16(entry.record_type);
                    let data = render_data(record_type, &entry.data);
                    records.push(ResourceRecord::new(entry.name, record_type, entry.ttl, data));
                }
                Err(e) => {
                    debug!(answer = index, error = %e, "Skipping JSON answer entry");
                }
            }
        }

        Ok(records)
    }
}

fn render_data(record_type: RecordType, data: &Value) -> String {
    match (record_type, data) {
        (RecordType::A | RecordType::AAAA, Value::String(text)) => text.clone(),
        (RecordType::CNAME | RecordType::NS, Value::String(text)) => {
            text.strip_suffix('.').unwrap_or(text).to_string()
        }
        _ => data.to_string(),
    }
}
