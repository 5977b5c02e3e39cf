use crate::ports::DohResolver;
use doh_client_domain::{DohMethod, DohQuery, DomainError, ResourceRecord};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

pub struct ResolveDomainUseCase {
    resolver: Arc<dyn DohResolver>,
}

impl ResolveDomainUseCase {
    pub fn new(resolver: Arc<dyn DohResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, query: &DohQuery) -> Result<Vec<ResourceRecord>, DomainError> {
        let domain = query.domain.trim();
        if domain.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "domain must not be empty".to_string(),
            ));
        }

        let query = DohQuery {
            domain: domain.to_string(),
            ..query.clone()
        };

        info!(
            domain = %query.domain,
            record_type = %query.record_type,
            method = %query.method,
            fallback = query.fallback_enabled,
            "Resolving domain"
        );

        let start = Instant::now();
        let records = self.resolver.resolve(&query).await?;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        if records.is_empty() {
            warn!(domain = %query.domain, elapsed_ms, "No records found");
        } else {
            info!(
                domain = %query.domain,
                count = records.len(),
                elapsed_ms,
                "Resolution complete"
            );
        }

        Ok(records)
    }
}

/// Map a user-supplied method name to a [`DohMethod`], falling back to JSON GET.
pub fn select_method(name: &str) -> DohMethod {
    name.parse().unwrap_or_else(|_| {
        warn!(method = %name, "Unknown DoH method, using JSON GET");
        DohMethod::JsonGet
    })
}
