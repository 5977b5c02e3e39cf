use super::strategy::Strategy;
use async_trait::async_trait;
use doh_client_application::ports::{DohResolver, HttpTransport, SystemResolver};
use doh_client_domain::{DohMethod, DohQuery, DomainError, RecordType, ResourceRecord};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// TTL given to records synthesized from the system resolver, which reports none.
pub const SYSTEM_FALLBACK_TTL: u32 = 300;

/// Resolves names against one DoH server, falling back to the system resolver
/// for A queries that produce nothing.
pub struct DohClient {
    server: String,
    transport: Arc<dyn HttpTransport>,
    system_resolver: Arc<dyn SystemResolver>,
}

impl DohClient {
    pub fn new(
        server: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
        system_resolver: Arc<dyn SystemResolver>,
    ) -> Self {
        Self {
            server: server.into(),
            transport,
            system_resolver,
        }
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    /// Run one query.
    ///
    /// Only a domain that cannot be encoded is returned as `Err`. HTTP, transport
    /// and decoding failures are logged and treated as an empty answer, which is
    /// what triggers the fallback.
    pub async fn query(
        &self,
        domain: &str,
        record_type: RecordType,
        method: DohMethod,
        fallback_enabled: bool,
    ) -> Result<Vec<ResourceRecord>, DomainError> {
        let strategy = Strategy::for_method(method);
        let request = strategy.build_request(&self.server, domain, record_type)?;

        debug!(
            server = %self.server,
            method = %method,
            http_method = %request.method,
            url = %request.url,
            "Sending DoH request"
        );

        let records = match self.transport.execute(&request).await {
            Ok(response) => match strategy.parse_response(&response) {
                Ok(records) => records,
                Err(e) => {
                    warn!(
                        server = %self.server,
                        domain = %domain,
                        status = response.status,
                        error = %e,
                        "DoH response unusable"
                    );
                    Vec::new()
                }
            },
            Err(e) => {
                warn!(server = %self.server, domain = %domain, error = %e, "DoH request failed");
                Vec::new()
            }
        };

        if !records.is_empty() {
            debug!(domain = %domain, count = records.len(), "DoH answer decoded");
            return Ok(records);
        }

        if !fallback_enabled {
            debug!(domain = %domain, "DoH returned nothing and fallback is disabled");
            return Ok(records);
        }

        if record_type != RecordType::A {
            debug!(
                domain = %domain,
                record_type = %record_type,
                "System resolver fallback only covers A records"
            );
            return Ok(records);
        }

        Ok(self.system_fallback(domain).await)
    }

    async fn system_fallback(&self, domain: &str) -> Vec<ResourceRecord> {
        info!(domain = %domain, "Falling back to system resolver");

        match self.system_resolver.lookup_ipv4(domain).await {
            Ok(addresses) => addresses
                .into_iter()
                .map(|addr| {
                    ResourceRecord::new(
                        domain,
                        RecordType::A,
                        SYSTEM_FALLBACK_TTL,
                        addr.to_string(),
                    )
                })
                .collect(),
            Err(e) => {
                warn!(domain = %domain, error = %e, "System resolver fallback failed");
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl DohResolver for DohClient {
    async fn resolve(&self, query: &DohQuery) -> Result<Vec<ResourceRecord>, DomainError> {
        self.query(
            &query.domain,
            query.record_type,
            query.method,
            query.fallback_enabled,
        )
        .await
    }
}
