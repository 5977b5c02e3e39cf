use async_trait::async_trait;
use doh_client_application::ports::SystemResolver;
use doh_client_domain::DomainError;
use std::net::{IpAddr, Ipv4Addr};
use tracing::debug;

/// Resolves through the operating system (`getaddrinfo`) via tokio's blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSystemResolver;

impl TokioSystemResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SystemResolver for TokioSystemResolver {
    async fn lookup_ipv4(&self, domain: &str) -> Result<Vec<Ipv4Addr>, DomainError> {
        let resolved = tokio::net::lookup_host((domain, 0))
            .await
            .map_err(|e| DomainError::SystemResolver {
                domain: domain.to_string(),
                message: e.to_string(),
            })?;

        let addresses = ipv4_only(resolved.map(|addr| addr.ip()));
        debug!(domain = %domain, count = addresses.len(), "System resolver answered");

        Ok(addresses)
    }
}

/// IPv4 addresses in resolver order, first occurrence kept.
fn ipv4_only(addresses: impl IntoIterator<Item = IpAddr>) -> Vec<Ipv4Addr> {
    let mut out: Vec<Ipv4Addr> = Vec::new();
    for addr in addresses {
        if let IpAddr::V4(v4) = addr {
            if !out.contains(&v4) {
                out.push(v4);
            }
        }
    }
    out
}
