//! DynamoDB client and table registry for the blood-bank management backend.
//!
//! Build a [`Database`] once at startup and pass it by reference to anything
//! that talks to DynamoDB. Table names and the region come from the
//! environment, falling back to fixed defaults:
//!
//! - `AWS_REGION` (`ap-south-1`)
//! - `DYNAMODB_USERS_TABLE` (`bbms-users`)
//! - `DYNAMODB_DONORS_TABLE` (`bbms-donors`)
//! - `DYNAMODB_REQUESTS_TABLE` (`bbms-requests`)
//! - `DYNAMODB_INVENTORY_TABLE` (`bbms-inventory`)

// Module declarations
pub mod client;
pub mod config;
pub mod error;
pub mod tables;

// Re-export commonly used types
pub use client::Database;
pub use config::{DbConfig, DEFAULT_REGION, REGION_ENV};
pub use error::ConfigError;
pub use tables::{TableName, TableNames};
