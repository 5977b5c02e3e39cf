use super::{DohMethod, RecordType};

/// One resolution request: what to ask, how to ask it, and whether the
/// system resolver may be consulted when DoH yields nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DohQuery {
    pub domain: String,
    pub record_type: RecordType,
    pub method: DohMethod,
    pub fallback_enabled: bool,
}

impl DohQuery {
    pub fn new(domain: impl Into<String>, record_type: RecordType, method: DohMethod) -> Self {
        Self {
            domain: domain.into(),
            record_type,
            method,
            fallback_enabled: true,
        }
    }

    pub fn with_fallback(mut self, enabled: bool) -> Self {
        self.fallback_enabled = enabled;
        self
    }
}
