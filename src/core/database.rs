//! Database - creazione del pool SQLite e migrazioni

use crate::core::Config;
use crate::repositories::PoolType;
use sqlx::sqlite::SqlitePoolOptions;
use std::time::Duration;
use tracing::{info, instrument};

/// Migrazioni incorporate nel binario da `migrations/`
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

#[instrument(skip(config))]
pub async fn connect(config: &Config) -> Result<PoolType, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .max_lifetime(Duration::from_secs(config.connection_lifetime_secs))
        .connect(&config.database_url)
        .await?;

    info!("Connected to database");
    Ok(pool)
}

pub async fn migrate(pool: &PoolType) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}

/// Pool in memoria con schema già applicato.
/// Una sola connessione mai riciclata: ogni connessione `:memory:` è un database a sé.
pub async fn connect_in_memory() -> Result<PoolType, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;

    MIGRATOR.run(&pool).await?;
    Ok(pool)
}
