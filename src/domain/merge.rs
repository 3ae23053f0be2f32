//! Default inheritance from the global config into each target.
//!
//! A field counts as unset when it is empty (or `0` for the port). There is
//! no way to override a global default with an explicitly empty value.

use crate::domain::models::{Config, Redshift, Target, S3};

fn inherit(field: &mut String, default: &str) {
    if field.is_empty() {
        *field = default.to_string();
    }
}

fn merge_redshift(default: &Redshift, target: &Redshift) -> Redshift {
    let mut merged = target.clone();
    inherit(&mut merged.host, &default.host);
    if merged.port == 0 {
        merged.port = default.port;
    }
    inherit(&mut merged.dbname, &default.dbname);
    inherit(&mut merged.user, &default.user);
    inherit(&mut merged.password, &default.password);
    inherit(&mut merged.schema, &default.schema);
    inherit(&mut merged.table, &default.table);
    merged
}

fn merge_s3(default: &S3, target: &S3) -> S3 {
    let mut merged = target.clone();
    inherit(&mut merged.bucket, &default.bucket);
    inherit(&mut merged.region, &default.region);
    inherit(&mut merged.key_prefix, &default.key_prefix);
    merged
}

fn merge_section<T: Clone>(
    default: Option<&T>,
    target: Option<&T>,
    merge: impl Fn(&T, &T) -> T,
) -> Option<T> {
    match (default, target) {
        (Some(default), Some(target)) => Some(merge(default, target)),
        (Some(default), None) => Some(default.clone()),
        (None, target) => target.cloned(),
    }
}

/// Resolves one target against the global defaults of `config`.
pub fn merge_target(config: &Config, target: &Target) -> Target {
    let mut sql_option = target.sql_option.clone();
    inherit(&mut sql_option, &config.sql_option);

    Target {
        redshift: merge_section(
            config.redshift.as_ref(),
            target.redshift.as_ref(),
            merge_redshift,
        ),
        s3: merge_section(config.s3.as_ref(), target.s3.as_ref(), merge_s3),
        sql_option,
    }
}

impl Config {
    /// Returns a copy of the config whose targets have every unset field
    /// filled from the global sections. The globals are left untouched.
    pub fn merged(&self) -> Config {
        Config {
            targets: self.targets.iter().map(|t| merge_target(self, t)).collect(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global() -> Config {
        Config {
            queue_name: "q1".to_string(),
            redshift: Some(Redshift {
                host: "rs.example.com".to_string(),
                port: 5439,
                dbname: "dev".to_string(),
                user: "loader".to_string(),
                password: "secret".to_string(),
                schema: "public".to_string(),
                table: "default_table".to_string(),
            }),
            s3: Some(S3 {
                region: "us-east-1".to_string(),
                bucket: "logs".to_string(),
                key_prefix: String::new(),
            }),
            sql_option: "JSON 'auto' GZIP".to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn fills_empty_fields_from_globals() {
        let config = global();
        let target = Target {
            redshift: Some(Redshift {
                table: "events".to_string(),
                ..Redshift::default()
            }),
            s3: Some(S3 {
                key_prefix: "app/".to_string(),
                ..S3::default()
            }),
            sql_option: String::new(),
        };

        let merged = merge_target(&config, &target);
        let rs = merged.redshift.unwrap();
        let s3 = merged.s3.unwrap();

        assert_eq!(rs.host, "rs.example.com");
        assert_eq!(rs.port, 5439);
        assert_eq!(rs.dbname, "dev");
        assert_eq!(rs.user, "loader");
        assert_eq!(rs.password, "secret");
        assert_eq!(rs.schema, "public");
        assert_eq!(rs.table, "events");
        assert_eq!(s3.bucket, "logs");
        assert_eq!(s3.region, "us-east-1");
        assert_eq!(s3.key_prefix, "app/");
        assert_eq!(merged.sql_option, "JSON 'auto' GZIP");
    }

    #[test]
    fn never_overwrites_set_fields() {
        let config = global();
        let target = Target {
            redshift: Some(Redshift {
                host: "other.example.com".to_string(),
                port: 5440,
                dbname: "prod".to_string(),
                user: "etl".to_string(),
                password: "pw".to_string(),
                schema: "raw".to_string(),
                table: "clicks".to_string(),
            }),
            s3: Some(S3 {
                region: "ap-northeast-1".to_string(),
                bucket: "clicks".to_string(),
                key_prefix: "c/".to_string(),
            }),
            sql_option: "CSV".to_string(),
        };

        assert_eq!(merge_target(&config, &target), target);
    }

    #[test]
    fn missing_target_sections_inherit_whole_globals() {
        let config = global();
        let merged = merge_target(&config, &Target::default());

        assert_eq!(merged.redshift, config.redshift);
        assert_eq!(merged.s3, config.s3);
    }

    #[test]
    fn missing_globals_leave_target_as_is() {
        let config = Config {
            queue_name: "q1".to_string(),
            ..Config::default()
        };
        let target = Target {
            s3: Some(S3 {
                bucket: "logs".to_string(),
                ..S3::default()
            }),
            ..Target::default()
        };

        let merged = merge_target(&config, &target);
        assert_eq!(merged, target);
        assert!(merged.redshift.is_none());
    }

    #[test]
    fn merged_config_is_stable_on_second_pass() {
        let mut config = global();
        config.targets = vec![
            Target::default(),
            Target {
                s3: Some(S3 {
                    key_prefix: "app/".to_string(),
                    ..S3::default()
                }),
                ..Target::default()
            },
        ];

        let once = config.merged();
        let twice = once.merged();
        assert_eq!(once, twice);
        assert_eq!(once.redshift, config.redshift);
        assert_eq!(once.s3, config.s3);
    }
}
