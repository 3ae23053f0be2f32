//! Rendering of the Redshift `COPY` statement.

use std::fmt;

use crate::domain::error::BuildError;
use crate::domain::models::{Credentials, Target};

/// Postgres drivers treat a query starting with `COPY` as a COPY FROM STDIN
/// and expect a copy-in response, which Redshift does not send. The leading
/// comment keeps them on the plain query path.
pub const COMMENT_MARKER: &str = "/* Rin */";

/// Wraps `v` in single quotes, doubling embedded single quotes.
pub fn quote_value(v: &str) -> String {
    format!("'{}'", v.replace('\'', "''"))
}

/// Wraps `ident` in double quotes, doubling embedded double quotes.
pub fn quote_identifier(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

pub fn qualified_table(schema: &str, table: &str) -> String {
    if schema.is_empty() {
        quote_identifier(table)
    } else {
        format!("{}.{}", quote_identifier(schema), quote_identifier(table))
    }
}

pub fn s3_uri(bucket: &str, key: &str) -> String {
    format!("s3://{bucket}/{key}")
}

pub fn credentials_clause(credentials: &Credentials) -> String {
    format!(
        "aws_access_key_id={};aws_secret_access_key={}",
        credentials.aws_access_key_id, credentials.aws_secret_access_key
    )
}

/// Parameters of one COPY statement. Every field is kept raw; quoting
/// happens when the statement is rendered through [`fmt::Display`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyStatement<'a> {
    pub schema: &'a str,
    pub table: &'a str,
    pub bucket: &'a str,
    pub key: &'a str,
    pub credentials: &'a Credentials,
    pub region: &'a str,
    pub option: &'a str,
}

impl fmt::Display for CopyStatement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} COPY {} FROM {} CREDENTIALS {} REGION {} {}",
            COMMENT_MARKER,
            qualified_table(self.schema, self.table),
            quote_value(&s3_uri(self.bucket, self.key)),
            quote_value(&credentials_clause(self.credentials)),
            quote_value(self.region),
            self.option,
        )
    }
}

impl Target {
    /// Collects the COPY parameters for `key` from this (merged) target.
    pub fn copy_statement<'a>(
        &'a self,
        key: &'a str,
        credentials: &'a Credentials,
    ) -> Result<CopyStatement<'a>, BuildError> {
        let redshift = self
            .redshift
            .as_ref()
            .ok_or(BuildError::MissingConfig { section: "redshift" })?;
        let s3 = self
            .s3
            .as_ref()
            .ok_or(BuildError::MissingConfig { section: "s3" })?;

        Ok(CopyStatement {
            schema: &redshift.schema,
            table: &redshift.table,
            bucket: &s3.bucket,
            key,
            credentials,
            region: &s3.region,
            option: &self.sql_option,
        })
    }

    pub fn build_copy_sql(&self, key: &str, credentials: &Credentials) -> Result<String, BuildError> {
        Ok(self.copy_statement(key, credentials)?.to_string())
    }
}
