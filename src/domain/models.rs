use serde::{Deserialize, Serialize};

/// Root of the YAML config. Global `redshift`, `s3` and `sql_option` act as
/// defaults for every entry in `targets`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub queue_name: String,
    pub targets: Vec<Target>,
    pub credentials: Credentials,
    pub redshift: Option<Redshift>,
    pub s3: Option<S3>,
    pub sql_option: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
    pub aws_region: String,
}

/// One routing rule: objects under `s3` are loaded into `redshift`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Target {
    pub redshift: Option<Redshift>,
    pub s3: Option<S3>,
    /// Appended verbatim to the COPY statement (e.g. `CSV GZIP`).
    pub sql_option: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct S3 {
    pub region: String,
    pub bucket: String,
    pub key_prefix: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Redshift {
    pub host: String,
    pub port: u16,
    pub dbname: String,
    pub user: String,
    pub password: String,
    pub schema: String,
    pub table: String,
}

/// Envelope of an S3 event notification as delivered through SQS.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct S3Event {
    #[serde(rename = "Records", default)]
    pub records: Vec<EventRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    #[serde(default)]
    pub event_name: String,
    #[serde(default)]
    pub aws_region: String,
    pub s3: EventS3,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventS3 {
    pub bucket: EventBucket,
    pub object: EventObject,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventBucket {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventObject {
    pub key: String,
    #[serde(default)]
    pub size: u64,
}

impl EventRecord {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            s3: EventS3 {
                bucket: EventBucket { name: bucket.into() },
                object: EventObject {
                    key: key.into(),
                    size: 0,
                },
            },
            ..Self::default()
        }
    }

    pub fn bucket(&self) -> &str {
        &self.s3.bucket.name
    }

    pub fn key(&self) -> &str {
        &self.s3.object.key
    }
}
