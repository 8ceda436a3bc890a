use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown table: {0}")]
    UnknownTable(String),

    #[error("Invalid table name for {table}: {name:?} ({reason})")]
    InvalidTableName {
        table: &'static str,
        name: String,
        reason: &'static str,
    },
}
