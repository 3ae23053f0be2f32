use std::sync::Arc;
use tracing::{debug, error, info, warn};
use crate::{
    domain::{
        error::IngestionError,
        models::{Config, EventRecord},
        ports::CopyExecutor,
    },
    infrastructure::s3_event::parse_s3_event,
};

/// Outcome of one notification message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub skipped: usize,
}

pub struct LoadService {
    config: Arc<Config>,
    executor: Arc<dyn CopyExecutor>,
}

impl LoadService {
    /// `config` must already be merged; see [`crate::load_config`].
    pub fn new(config: Arc<Config>, executor: Arc<dyn CopyExecutor>) -> Self {
        Self { config, executor }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Handles one S3 event notification body. Records that no target owns
    /// are skipped; any other failure aborts the remaining records.
    pub async fn process_message(&self, body: &str) -> Result<LoadSummary, IngestionError> {
        let event = parse_s3_event(body)?;
        let mut summary = LoadSummary::default();

        if event.records.is_empty() {
            warn!("S3 event contains no records");
            return Ok(summary);
        }

        info!("Processing {} S3 records", event.records.len());
        for (i, record) in event.records.iter().enumerate() {
            debug!("Processing S3 record {} of {}", i + 1, event.records.len());
            match self.process_record(record).await {
                Ok(()) => summary.loaded += 1,
                Err(IngestionError::NoMatchingTarget { bucket, key }) => {
                    warn!("No target matches s3://{}/{}, skipping", bucket, key);
                    summary.skipped += 1;
                }
                Err(e) => {
                    error!(
                        "Failed to load s3://{}/{}: {}",
                        record.bucket(),
                        record.key(),
                        e
                    );
                    return Err(e);
                }
            }
        }

        info!(
            "Message processed: {} loaded, {} skipped",
            summary.loaded, summary.skipped
        );
        Ok(summary)
    }

    pub async fn process_record(&self, record: &EventRecord) -> Result<(), IngestionError> {
        let (bucket, key) = (record.bucket(), record.key());
        debug!("Routing s3://{}/{}", bucket, key);

        let target = self
            .config
            .route_record(record)
            .ok_or_else(|| IngestionError::NoMatchingTarget {
                bucket: bucket.to_string(),
                key: key.to_string(),
            })?;

        if let Some(s3) = &target.s3 {
            debug!("Matched target {}", s3);
        }

        let sql = target.build_copy_sql(key, &self.config.credentials)?;
        self.executor.execute(target, &sql).await?;

        info!("Dispatched COPY for s3://{}/{}", bucket, key);
        Ok(())
    }
}
