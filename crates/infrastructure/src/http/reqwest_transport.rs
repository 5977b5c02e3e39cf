//! HTTP transport for DoH requests, backed by a rustls `reqwest::Client`.
//!
//! One client per transport: connections are pooled across queries issued
//! through the same `DohClient`, never shared process-wide.

use async_trait::async_trait;
use bytes::Bytes;
use doh_client_application::ports::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use doh_client_domain::DomainError;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("doh-client/", env!("CARGO_PKG_VERSION"));

const MAX_REDIRECTS: usize = 5;

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(connect_timeout: Duration, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .pool_max_idle_per_host(4)
            .build()
            .map_err(|e| DomainError::Transport {
                server: String::new(),
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, DomainError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(Bytes::copy_from_slice(body));
        }

        debug!(
            method = %request.method,
            url = %request.url,
            body_len = request.body.as_ref().map_or(0, Vec::len),
            "Executing HTTP request"
        );

        let response = builder
            .send()
            .await
            .map_err(|e| map_error(&request.url, e))?;
        let status = response.status().as_u16();
        let body: Bytes = response
            .bytes()
            .await
            .map_err(|e| map_error(&request.url, e))?;

        debug!(url = %request.url, status, body_len = body.len(), "HTTP response received");

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

fn map_error(url: &str, error: reqwest::Error) -> DomainError {
    if error.is_timeout() {
        DomainError::TransportTimeout {
            server: url.to_string(),
        }
    } else {
        DomainError::Transport {
            server: url.to_string(),
            message: error.to_string(),
        }
    }
}
