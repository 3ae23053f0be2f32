use crate::domain::models::{Config, EventRecord, Target};

impl Target {
    /// True when `bucket` is this target's bucket and `key` starts with its
    /// key prefix. A target without an `s3` section matches nothing.
    pub fn matches(&self, bucket: &str, key: &str) -> bool {
        self.s3
            .as_ref()
            .is_some_and(|s3| s3.bucket == bucket && key.starts_with(&s3.key_prefix))
    }

    pub fn matches_record(&self, record: &EventRecord) -> bool {
        self.matches(record.bucket(), record.key())
    }

    fn prefix_len(&self) -> usize {
        self.s3.as_ref().map_or(0, |s3| s3.key_prefix.len())
    }
}

impl Config {
    /// Every target matching the object, in config order.
    pub fn matching_targets<'a>(
        &'a self,
        bucket: &'a str,
        key: &'a str,
    ) -> impl Iterator<Item = &'a Target> + 'a {
        self.targets.iter().filter(move |t| t.matches(bucket, key))
    }

    /// Picks the owning target for an object. Overlapping targets resolve to
    /// the longest key prefix; on equal prefixes the earlier target wins.
    pub fn route(&self, bucket: &str, key: &str) -> Option<&Target> {
        self.targets
            .iter()
            .filter(|t| t.matches(bucket, key))
            .fold(None, |best: Option<&Target>, t| match best {
                Some(b) if b.prefix_len() >= t.prefix_len() => Some(b),
                _ => Some(t),
            })
    }

    pub fn route_record(&self, record: &EventRecord) -> Option<&Target> {
        self.route(record.bucket(), record.key())
    }
}
