use async_trait::async_trait;
use crate::domain::{error::IngestionError, models::Target};

/// Runs a rendered COPY statement against the target's Redshift cluster.
/// Connection handling, transactions and retries belong to the implementor.
#[async_trait]
pub trait CopyExecutor: Send + Sync {
    async fn execute(&self, target: &Target, sql: &str) -> Result<(), IngestionError>;
}
