use std::io::Read;
use std::sync::Arc;
use rin::{infrastructure::dry_run::DryRunExecutor, load_config, LoadService};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("rin=debug".parse()?))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("RIN_CONFIG").ok())
        .ok_or("usage: rin <config.yml> < event.json (or set RIN_CONFIG)")?;
    info!("Starting rin with config {}", config_path);

    let config = Arc::new(load_config(&config_path)?);
    info!("Using queue: {}", config.queue_name);

    let mut body = String::new();
    std::io::stdin().read_to_string(&mut body)?;
    debug!("Read {} bytes of S3 event from stdin", body.len());

    let service = LoadService::new(config, Arc::new(DryRunExecutor::new(true)));
    let summary = service.process_message(&body).await?;
    info!(
        "Done: {} statements rendered, {} records skipped",
        summary.loaded, summary.skipped
    );
    Ok(())
}
