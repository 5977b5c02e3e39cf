use doh_client_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;

    Ok(config)
}

/// Write the default configuration to `path` (or the local default path).
pub fn init_config(path: Option<&str>) -> anyhow::Result<String> {
    let path = path.unwrap_or(Config::default_config_path()).to_string();

    Config::default()
        .save(&path)
        .map_err(|e| anyhow::anyhow!("Failed to write configuration: {}", e))?;

    info!(path = %path, "Default configuration written");
    Ok(path)
}
