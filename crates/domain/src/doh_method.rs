use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// HTTP encoding used to carry a query to the DoH server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DohMethod {
    /// RFC 8484 GET: wire-format query, base64url-encoded in `?dns=`.
    Get,

    /// RFC 8484 POST: wire-format query as the request body.
    Post,

    /// JSON API GET: `?name=&type=`, JSON answer document.
    #[default]
    #[serde(alias = "json")]
    JsonGet,
}

impl DohMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::JsonGet => "json_get",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Get => "GET (RFC 8484)",
            Self::Post => "POST (RFC 8484)",
            Self::JsonGet => "JSON GET (Google API)",
        }
    }
}

impl fmt::Display for DohMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl FromStr for DohMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "get" => Ok(Self::Get),
            "post" => Ok(Self::Post),
            "json" | "json_get" => Ok(Self::JsonGet),
            _ => Err(format!("Unknown DoH method: {}", s)),
        }
    }
}
