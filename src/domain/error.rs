use std::path::PathBuf;
use thiserror::Error;

/// Failures while turning the YAML source into a usable [`Config`](super::models::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("{field} required")]
    Validation { field: &'static str },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("target has no {section} section")]
    MissingConfig { section: &'static str },
}

#[derive(Debug, Error)]
pub enum IngestionError {
    #[error("build error: {0}")]
    Build(#[from] BuildError),
    #[error("invalid S3 event notification: {0}")]
    Notification(#[from] serde_json::Error),
    #[error("no target matches s3://{bucket}/{key}")]
    NoMatchingTarget { bucket: String, key: String },
    #[error("executor error: {0}")]
    Executor(String),
}
