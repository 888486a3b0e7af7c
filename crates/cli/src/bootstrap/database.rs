use rerouter_infrastructure::database::create_pool;
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(database_url: &str) -> anyhow::Result<SqlitePool> {
    info!("Initializing database: {}", database_url);

    let pool = create_pool(database_url).await.map_err(|e| {
        error!("Failed to initialize database: {}", e);
        anyhow::anyhow!(e)
    })?;

    info!("Database initialized successfully");
    Ok(pool)
}
