use anyhow::{Context, Result};
use conoha_dns::{Config, ConohaProvider, DnsProvider};
use log::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config_file = std::env::args().nth(1).unwrap_or_else(|| "config.yaml".into());
    let mut config = Config::load(&config_file)?;
    config.apply_env(|key| std::env::var(key).ok());

    let mut provider = ConohaProvider::new(config).context("Failed to create provider")?;

    if let Err(e) = provider.authenticate().await {
        if e.is_expected() {
            warn!("Authentication failed: {}", e);
        } else {
            error!("Authentication failed: {}", e);
        }
        return Err(e.into());
    }

    let records = provider.list_records(None, None, None).await?;
    info!("{} records in {}", records.len(), provider.domain());
    for record in &records {
        info!(
            "{} {} {} (ttl {:?}, id {})",
            record.r#type, record.name, record.content, record.ttl, record.id
        );
    }

    Ok(())
}
