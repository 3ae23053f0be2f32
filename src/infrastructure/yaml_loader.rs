use std::fs;
use std::path::Path;
use tracing::{debug, error, info};
use crate::domain::{error::ConfigError, models::Config};

/// Reads, merges and validates the config at `path`.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    debug!("Reading config file: {}", path.display());

    let src = fs::read(path).map_err(|e| {
        error!("Failed to read config {}: {}", path.display(), e);
        ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    let config = parse_config(&src)?;
    info!(
        "Loaded config for queue {} with {} targets",
        config.queue_name,
        config.targets.len()
    );
    Ok(config)
}

/// Decodes YAML bytes, applies global defaults to every target and checks
/// the required fields.
pub fn parse_config(src: &[u8]) -> Result<Config, ConfigError> {
    let raw: Config = serde_yaml::from_slice(src).map_err(|e| {
        error!("Failed to parse config YAML: {}", e);
        ConfigError::Parse(e)
    })?;

    let config = raw.merged();
    validate(&config)?;

    for (i, target) in config.targets.iter().enumerate() {
        debug!(
            "Target {}: {} -> {}",
            i + 1,
            target.s3.as_ref().map(ToString::to_string).unwrap_or_default(),
            target.redshift.as_ref().map(|r| r.table.as_str()).unwrap_or_default(),
        );
    }
    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.queue_name.is_empty() {
        return Err(ConfigError::Validation { field: "queue_name" });
    }
    if config.targets.is_empty() {
        return Err(ConfigError::Validation { field: "targets" });
    }
    Ok(())
}
