pub mod dsn;
pub mod error;
pub mod matcher;
pub mod merge;
pub mod models;
pub mod ports;
pub mod sql;
