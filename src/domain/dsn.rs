use std::fmt;

use url::form_urlencoded;

use crate::domain::models::{Redshift, S3};

fn escape(v: &str) -> String {
    form_urlencoded::byte_serialize(v.as_bytes()).collect()
}

impl Redshift {
    /// Connection string for a Postgres-protocol client.
    pub fn dsn(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            escape(&self.user),
            escape(&self.password),
            escape(&self.host),
            self.port,
            escape(&self.dbname),
        )
    }
}

/// Diagnostic form only: the table is appended unescaped.
impl fmt::Display for Redshift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}?table={}", self.dsn(), self.table)
    }
}

impl fmt::Display for S3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s3://{}/{}*", self.bucket, self.key_prefix)
    }
}
