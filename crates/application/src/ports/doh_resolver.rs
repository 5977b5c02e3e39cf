use async_trait::async_trait;
use doh_client_domain::{DohQuery, DomainError, ResourceRecord};

#[async_trait]
pub trait DohResolver: Send + Sync {
    /// Resolve one query. An empty vector means no usable answer was obtained
    /// from DoH or the fallback; `Err` is reserved for caller input defects.
    async fn resolve(&self, query: &DohQuery) -> Result<Vec<ResourceRecord>, DomainError>;
}
