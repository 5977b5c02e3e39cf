use serde::{Deserialize, Serialize};

use crate::DohMethod;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DohServerConfig {
    pub name: String,

    pub url: String,

    /// Encodings the server is known to accept
    #[serde(default = "default_methods")]
    pub methods: Vec<DohMethod>,

    /// Lower values are preferred
    #[serde(default = "default_priority")]
    pub priority: u32,

    /// Total request timeout in seconds for this server; unset uses `client.timeout`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,

    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl DohServerConfig {
    pub fn new(name: &str, url: &str, methods: &[DohMethod], priority: u32) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            methods: methods.to_vec(),
            priority,
            timeout: None,
            enabled: true,
        }
    }

    pub fn supports(&self, method: DohMethod) -> bool {
        self.methods.contains(&method)
    }

    /// Public resolvers shipped as the default server table.
    pub fn defaults() -> Vec<Self> {
        use DohMethod::{Get, JsonGet, Post};

        vec![
            Self::new("cloudflare", "https://cloudflare-dns.com/dns-query", &[Get, Post, JsonGet], 1),
            Self::new("google", "https://dns.google/dns-query", &[Get, Post], 2),
            Self::new("google_json", "https://dns.google/resolve", &[JsonGet], 3),
            Self::new("quad9", "https://dns.quad9.net/dns-query", &[Get, Post, JsonGet], 4),
            Self::new("alibaba", "https://dns.alidns.com/dns-query", &[Get, Post], 5),
            Self::new("alibaba_json", "http://dns.alidns.com/resolve", &[JsonGet], 6),
            Self::new("360", "https://doh.360.cn/dns-query", &[Get, Post, JsonGet], 7),
            Self::new("tencent", "https://doh.pub/dns-query", &[Get, Post, JsonGet], 8),
        ]
    }
}

fn default_methods() -> Vec<DohMethod> {
    vec![DohMethod::Get, DohMethod::Post, DohMethod::JsonGet]
}

fn default_priority() -> u32 {
    1
}

fn default_true() -> bool {
    true
}
