use async_trait::async_trait;
use doh_client_domain::DomainError;
use std::net::Ipv4Addr;

#[async_trait]
pub trait SystemResolver: Send + Sync {
    async fn lookup_ipv4(&self, domain: &str) -> Result<Vec<Ipv4Addr>, DomainError>;
}
