use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_REGION: &str = "tyo1";

/// Options for one ConoHa-managed domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct Config {
    #[validate(length(min = 1, message = "Domain name cannot be empty"))]
    pub domain: String,

    #[validate(length(min = 1, message = "Region cannot be empty"))]
    pub region: Option<String>,

    pub auth_token: Option<String>,
    pub auth_username: Option<String>,
    pub auth_password: Option<String>,
    pub auth_tenant_id: Option<String>,

    #[validate(range(min = 1, message = "TTL must be greater than 0"))]
    pub ttl: Option<u32>,

    /// Required when creating MX and SRV records.
    pub priority: Option<u16>,

    /// Overrides the region-derived DNS service base URL.
    pub api_endpoint: Option<String>,
    /// Overrides the region-derived identity base URL.
    pub identity_endpoint: Option<String>,
}

impl Config {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Self::default()
        }
    }

    pub fn region(&self) -> &str {
        self.region.as_deref().unwrap_or(DEFAULT_REGION)
    }

    pub fn api_endpoint(&self) -> String {
        match &self.api_endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://dns-service.{}.conoha.io/v1", self.region()),
        }
    }

    pub fn identity_endpoint(&self) -> String {
        match &self.identity_endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://identity.{}.conoha.io/v2.0", self.region()),
        }
    }
}
