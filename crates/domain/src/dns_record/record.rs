use super::RecordType;

/// One decoded answer entry.
///
/// `data` is the presentation form of the payload: dotted-quad for A,
/// colon-separated hex groups for AAAA, and a lowercase hex dump for payloads
/// the wire decoder does not interpret. `ttl` is always the value received,
/// never adjusted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,

    pub record_type: RecordType,

    pub ttl: u32,

    pub data: String,
}

impl ResourceRecord {
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        ttl: u32,
        data: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            ttl,
            data: data.into(),
        }
    }
}
