mod models;

pub use models::{Config, DEFAULT_REGION};

use anyhow::{Context, Result};
use std::{fs::File, io::Read};
use validator::Validate;

impl Config {
    /// Reads, parses and validates a YAML config file.
    pub fn load(config_file: &str) -> Result<Self> {
        let mut file = File::open(config_file)
            .with_context(|| format!("Failed to open config file: {}", config_file))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .with_context(|| format!("Failed to read config file: {}", config_file))?;

        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", config_file))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", config_file))?;

        Ok(config)
    }

    /// Overlays `CONOHA_*` values returned by `lookup`. Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let overlay = |key: &str, field: &mut Option<String>| {
            if let Some(value) = lookup(key).filter(|v| !v.is_empty()) {
                log::debug!("Using {} from environment", key);
                *field = Some(value);
            }
        };

        overlay("CONOHA_REGION", &mut self.region);
        overlay("CONOHA_AUTH_TOKEN", &mut self.auth_token);
        overlay("CONOHA_AUTH_USERNAME", &mut self.auth_username);
        overlay("CONOHA_AUTH_PASSWORD", &mut self.auth_password);
        overlay("CONOHA_AUTH_TENANT_ID", &mut self.auth_tenant_id);
    }
}
