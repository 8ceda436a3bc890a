use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::Client;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::config::DbConfig;
use crate::tables::{TableName, TableNames};

// Process-wide handle, built on first use and reused across invocations
static SHARED: OnceCell<Database> = OnceCell::const_new();

/// DynamoDB client together with the configuration it was built from
#[derive(Clone, Debug)]
pub struct Database {
    client: Arc<Client>,
    config: DbConfig,
}

impl Database {
    /// Build a client for `config.region`. No requests are sent until the client is used.
    pub async fn connect(config: DbConfig) -> Self {
        info!("Initializing DynamoDB client for region {}", config.region);
        let shared_cfg = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        Self::with_client(Client::new(&shared_cfg), config)
    }

    pub async fn from_env() -> Self {
        Self::connect(DbConfig::from_env()).await
    }

    /// Process-wide handle resolved from the environment on first call
    pub async fn shared() -> &'static Database {
        if let Some(db) = SHARED.get() {
            debug!("Reusing existing DynamoDB client");
            return db;
        }
        SHARED.get_or_init(Self::from_env).await
    }

    pub fn with_client(client: Client, config: DbConfig) -> Self {
        Self {
            client: Arc::new(client),
            config,
        }
    }

    pub fn client(&self) -> &Arc<Client> {
        &self.client
    }

    pub fn config(&self) -> &DbConfig {
        &self.config
    }

    pub fn region(&self) -> &str {
        &self.config.region
    }

    pub fn tables(&self) -> &TableNames {
        &self.config.tables
    }

    /// Physical name of a logical table
    pub fn table(&self, table: TableName) -> &str {
        self.config.tables.get(table)
    }
}
