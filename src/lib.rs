pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::load_service::{LoadService, LoadSummary};
pub use domain::error::{BuildError, ConfigError, IngestionError};
pub use domain::models::{Config, Credentials, EventRecord, Redshift, Target, S3};
pub use infrastructure::yaml_loader::{load_config, parse_config};
