use std::str::FromStr;
use std::time::Duration;

use migration::MigrationCommand;
use sea_orm::{DatabaseConnection, SqlxSqliteConnector};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{info, trace};

use crate::config::db::{db_url, DbProfile};
use crate::error::AppError;

/// Per-connection session settings, applied through the pool hook.
async fn apply_sqlite_config(conn: &mut sqlx::SqliteConnection) -> Result<(), sqlx::Error> {
    for stmt in ["PRAGMA foreign_keys = ON;", "PRAGMA busy_timeout = 5000;"] {
        sqlx::query(stmt).execute(&mut *conn).await?;
    }
    Ok(())
}

/// Pool bounds per profile.
///
/// Each in-memory SQLite connection is its own database, so the Test pool
/// must never grow past the single connection the migrations ran on.
fn pool_bounds(profile: DbProfile) -> (u32, u32) {
    match profile {
        DbProfile::Prod => (1, 5),
        DbProfile::Test => (1, 1),
    }
}

/// Build the app pool *and* guarantee the schema is current.
///
/// The schema is created automatically at startup if absent: the database
/// file is created on first connect and `Migrator::up` runs before the pool
/// is handed to the application.
pub async fn bootstrap_db(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile)?;

    info!("bootstrap=start profile={:?} path={}", profile, url);

    let connect_opts = SqliteConnectOptions::from_str(&url)
        .map_err(|e| AppError::config(format!("invalid SQLite connection options: {e}")))?
        .create_if_missing(true);

    let (pool_min, pool_max) = pool_bounds(profile);
    let pool: SqlitePool = SqlitePoolOptions::new()
        .min_connections(pool_min)
        .max_connections(pool_max)
        .acquire_timeout(Duration::from_secs(2))
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                apply_sqlite_config(conn).await?;
                trace!("db=sqlite hook=after_connect ok");
                Ok::<_, sqlx::Error>(())
            })
        })
        .connect_with(connect_opts)
        .await
        .map_err(|e| AppError::config(format!("failed to create SQLite connection pool: {e}")))?;

    // warm-up to ensure the hook ran on the initial connection
    {
        let mut conn = pool
            .acquire()
            .await
            .map_err(|e| AppError::config(format!("connection acquisition failed during warmup: {e}")))?;
        sqlx::query("SELECT 1;")
            .execute(&mut *conn)
            .await
            .map_err(|e| AppError::config(format!("warmup query failed: {e}")))?;
    }

    // Hand back to SeaORM
    let db = SqlxSqliteConnector::from_sqlx_sqlite_pool(pool);

    migration::migrate(&db, MigrationCommand::Up).await?;

    info!(
        "bootstrap=ready pool_min={} pool_max={}",
        pool_min, pool_max
    );
    Ok(db)
}
