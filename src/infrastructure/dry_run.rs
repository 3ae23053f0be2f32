use std::sync::Mutex;
use async_trait::async_trait;
use tracing::{debug, info};
use crate::domain::{error::IngestionError, models::Target, ports::CopyExecutor};

/// Executor that never connects anywhere. Statements are kept in memory and
/// optionally echoed to stdout.
#[derive(Debug, Default)]
pub struct DryRunExecutor {
    echo: bool,
    statements: Mutex<Vec<String>>,
}

impl DryRunExecutor {
    pub fn new(echo: bool) -> Self {
        Self {
            echo,
            statements: Mutex::default(),
        }
    }

    pub fn statements(&self) -> Vec<String> {
        self.statements
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CopyExecutor for DryRunExecutor {
    async fn execute(&self, target: &Target, sql: &str) -> Result<(), IngestionError> {
        if let Some(rs) = &target.redshift {
            debug!("Dry run against {}:{}/{} table {}", rs.host, rs.port, rs.dbname, rs.table);
        }
        if self.echo {
            println!("{sql}");
        }
        self.statements
            .lock()
            .map_err(|e| IngestionError::Executor(e.to_string()))?
            .push(sql.to_string());
        info!("Dry run recorded COPY statement");
        Ok(())
    }
}
