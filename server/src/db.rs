//! SQLite-backed pipeline log store.
//!
//! One table, one optional seed row. Schema creation and seeding happen here,
//! once, when the pool is initialized at startup; request handlers only read.

use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::ConnectOptions;
use utoipa::ToSchema;

const SEED_MESSAGE: &str = "First Log from Pipeline";

/// A row in the pipeline log table.
#[derive(Debug, Clone, Serialize, ToSchema, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PipelineLog {
    pub id: i64,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Initialize the SQLite connection pool, creating the schema and the seed
/// row as needed. Called once at startup, never per request.
pub async fn init_pool(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(30))
        .disable_statement_logging();

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(30))
        .connect_with(options)
        .await
        .context("failed to create database connection pool")?;

    migrate(&pool).await?;
    seed_if_empty(&pool).await?;

    Ok(pool)
}

async fn migrate(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS pipeline_logs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            message TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .context("failed to create pipeline_logs table")?;

    Ok(())
}

async fn seed_if_empty(pool: &SqlitePool) -> Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pipeline_logs")
        .fetch_one(pool)
        .await
        .context("failed to count pipeline logs")?;

    if count > 0 {
        return Ok(());
    }

    sqlx::query("INSERT INTO pipeline_logs (message, created_at) VALUES (?1, ?2)")
        .bind(SEED_MESSAGE)
        .bind(Utc::now())
        .execute(pool)
        .await
        .context("failed to seed pipeline log")?;

    Ok(())
}

/// Connectivity probe used by the db-check endpoint.
pub async fn ping(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// All persisted pipeline log rows, oldest first.
pub async fn list_logs(pool: &SqlitePool) -> Result<Vec<PipelineLog>, sqlx::Error> {
    sqlx::query_as::<_, PipelineLog>(
        "SELECT id, message, created_at FROM pipeline_logs ORDER BY id",
    )
    .fetch_all(pool)
    .await
}
