#![allow(dead_code)]

use async_trait::async_trait;
use doh_client_application::ports::{HttpRequest, HttpResponse, HttpTransport, SystemResolver};
use doh_client_domain::DomainError;
use std::net::Ipv4Addr;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockHttpTransport {
    outcome: Arc<Mutex<Result<HttpResponse, DomainError>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockHttpTransport {
    pub fn responding(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self::with_outcome(Ok(HttpResponse::new(status, body)))
    }

    pub fn failing(error: DomainError) -> Self {
        Self::with_outcome(Err(error))
    }

    fn with_outcome(outcome: Result<HttpResponse, DomainError>) -> Self {
        Self {
            outcome: Arc::new(Mutex::new(outcome)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, DomainError> {
        self.requests.lock().unwrap().push(request.clone());
        self.outcome.lock().unwrap().clone()
    }
}

#[derive(Clone)]
pub struct MockSystemResolver {
    outcome: Arc<Mutex<Result<Vec<Ipv4Addr>, DomainError>>>,
    lookups: Arc<Mutex<Vec<String>>>,
}

impl MockSystemResolver {
    pub fn with_addresses(addresses: &[&str]) -> Self {
        let parsed = addresses.iter().map(|a| a.parse().unwrap()).collect();
        Self::with_outcome(Ok(parsed))
    }

    pub fn failing() -> Self {
        Self::with_outcome(Err(DomainError::SystemResolver {
            domain: "mock".to_string(),
            message: "no such host".to_string(),
        }))
    }

    fn with_outcome(outcome: Result<Vec<Ipv4Addr>, DomainError>) -> Self {
        Self {
            outcome: Arc::new(Mutex::new(outcome)),
            lookups: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl SystemResolver for MockSystemResolver {
    async fn lookup_ipv4(&self, domain: &str) -> Result<Vec<Ipv4Addr>, DomainError> {
        self.lookups.lock().unwrap().push(domain.to_string());
        self.outcome.lock().unwrap().clone()
    }
}
