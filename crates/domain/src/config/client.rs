use serde::{Deserialize, Serialize};

use crate::DohMethod;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Server URL (or configured server name) used when none is given on the command line
    #[serde(default = "default_server")]
    pub default_server: String,

    #[serde(default)]
    pub default_method: DohMethod,

    /// Total request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,

    #[serde(default = "default_true")]
    pub enable_fallback: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            default_server: default_server(),
            default_method: DohMethod::default(),
            timeout: default_timeout(),
            connect_timeout: default_connect_timeout(),
            enable_fallback: true,
        }
    }
}

fn default_server() -> String {
    "https://cloudflare-dns.com/dns-query".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_true() -> bool {
    true
}
