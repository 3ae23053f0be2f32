use tracing::{debug, error};
use crate::domain::{error::IngestionError, models::S3Event};

/// Decodes an SQS message body carrying an S3 event notification.
///
/// Test events published by S3 when a notification is first configured
/// carry no `Records` array and decode to an empty event.
pub fn parse_s3_event(body: &str) -> Result<S3Event, IngestionError> {
    let event: S3Event = serde_json::from_str(body).map_err(|e| {
        error!("Failed to parse S3 event JSON: {}", e);
        IngestionError::Notification(e)
    })?;
    debug!("S3 event parsed with {} records", event.records.len());
    Ok(event)
}
