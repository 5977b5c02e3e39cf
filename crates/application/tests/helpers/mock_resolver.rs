#![allow(dead_code)]

use async_trait::async_trait;
use doh_client_application::ports::DohResolver;
use doh_client_domain::{DohQuery, DomainError, ResourceRecord};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MockDohResolver {
    responses: Arc<Mutex<HashMap<String, Vec<ResourceRecord>>>>,
    errors: Arc<Mutex<HashMap<String, DomainError>>>,
    received: Arc<Mutex<Vec<DohQuery>>>,
}

impl MockDohResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, domain: &str, records: Vec<ResourceRecord>) {
        self.responses
            .lock()
            .unwrap()
            .insert(domain.to_string(), records);
    }

    pub fn set_error(&self, domain: &str, error: DomainError) {
        self.errors
            .lock()
            .unwrap()
            .insert(domain.to_string(), error);
    }

    pub fn received(&self) -> Vec<DohQuery> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl DohResolver for MockDohResolver {
    async fn resolve(&self, query: &DohQuery) -> Result<Vec<ResourceRecord>, DomainError> {
        self.received.lock().unwrap().push(query.clone());

        if let Some(error) = self.errors.lock().unwrap().get(&query.domain) {
            return Err(error.clone());
        }

        Ok(self
            .responses
            .lock()
            .unwrap()
            .get(&query.domain)
            .cloned()
            .unwrap_or_default())
    }
}
