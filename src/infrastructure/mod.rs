pub mod dry_run;
pub mod s3_event;
pub mod yaml_loader;
