mod logging;

use anyhow::{Context, Result};
use db::{Database, DbConfig};
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<()> {
    // .env must be applied before the filter reads RUST_LOG
    let dotenv = dotenvy::dotenv();
    logging::init("bbms-db")?;

    match dotenv {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env loaded: {}", e),
    }

    let config = DbConfig::from_env();
    config
        .tables
        .validate()
        .context("Invalid DynamoDB table configuration")?;

    let db = Database::connect(config).await;

    info!("DynamoDB region: {}", db.region());
    for (table, name) in db.tables().iter() {
        info!("{} -> {}", table, name);
    }

    println!("{}", serde_json::to_string_pretty(db.tables())?);
    Ok(())
}
