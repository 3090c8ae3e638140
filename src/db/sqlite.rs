use crate::db::schema::SQLITE_INIT;
use crate::error::PersistenceError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

pub type SqlitePool = Pool<Sqlite>;

/// Open a pool for `database_url`, creating the database file when missing.
///
/// In-memory databases live only as long as their connection, so they are
/// pinned to a single connection that is never recycled.
pub async fn connect(database_url: &str) -> Result<SqlitePool, PersistenceError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_opts = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(Option::<Duration>::None)
            .max_lifetime(Option::<Duration>::None)
    } else {
        SqlitePoolOptions::new()
    };

    let pool = pool_opts.connect_with(connect_opts).await?;
    debug!(database_url, "sqlite pool ready");
    Ok(pool)
}

/// Apply the bundled DDL.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), PersistenceError> {
    execute_script(pool, SQLITE_INIT).await
}

/// Run a `;`-separated SQL script in one transaction.
///
/// `sqlx::query` prepares a single statement, so the script is split first.
/// The split is purely textual: a `;` inside a string literal is not supported.
pub async fn execute_script(pool: &SqlitePool, script: &str) -> Result<(), PersistenceError> {
    let statements = split_statements(script);
    let mut tx = pool.begin().await?;
    for stmt in &statements {
        sqlx::query(stmt).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    debug!(count = statements.len(), "sql script executed");
    Ok(())
}

fn split_statements(script: &str) -> Vec<String> {
    let without_comments: String = script
        .lines()
        .filter(|line| !line.trim_start().starts_with("--"))
        .collect::<Vec<_>>()
        .join("\n");

    without_comments
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
