use std::env;
use tracing::debug;

use crate::tables::{TableName, TableNames};

pub const REGION_ENV: &str = "AWS_REGION";
pub const DEFAULT_REGION: &str = "ap-south-1";

/// Region and table names for the DynamoDB backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub region: String,
    pub tables: TableNames,
}

impl DbConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve every setting through `lookup`. Unset or empty values fall back to the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let setting = |key: &str, default: &str| match lookup(key) {
            Some(value) if !value.is_empty() => {
                debug!("{} overridden: {}", key, value);
                value
            }
            _ => default.to_string(),
        };

        let region = setting(REGION_ENV, DEFAULT_REGION);
        let tables = TableNames::resolve(|table: TableName| {
            setting(table.env_var(), table.default_name())
        });

        Self { region, tables }
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            tables: TableNames::default(),
        }
    }
}
