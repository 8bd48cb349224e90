use crate::config::Config;
use crate::error::Result;
use sqlx::{postgres::PgPoolOptions, Pool, Postgres};

pub type DbPool = Pool<Postgres>;

pub async fn create_pool(config: &Config) -> Result<DbPool> {
    let max_connections = config.database.max_connections.unwrap_or(10);

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(&config.database.url)
        .await?;

    Ok(pool)
}

/// Idempotent bootstrap of the readings table. The date uniqueness
/// constraint backs the one-reading-per-day invariant.
pub async fn init_schema(pool: &DbPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS readings (
            id UUID PRIMARY KEY,
            date DATE NOT NULL UNIQUE,
            value DOUBLE PRECISION NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
