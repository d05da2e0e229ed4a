use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{DbKind, DbProfile};
use crate::error::AppError;

/// Open a pool for `profile`. Does not run migrations.
pub async fn connect_db(profile: &DbProfile) -> Result<DatabaseConnection, AppError> {
    let mut opts = ConnectOptions::new(profile.url.clone());
    opts.max_connections(profile.max_connections)
        .sqlx_logging(false);
    if profile.kind == DbKind::SqliteMemory {
        // The schema lives only as long as this connection.
        opts.min_connections(1);
    }

    let conn = Database::connect(opts).await?;
    info!(kind = ?profile.kind, max_connections = profile.max_connections, "database connected");
    Ok(conn)
}

/// Connect, and for in-memory SQLite also bring the schema up on that
/// same connection. Persistent databases are migrated by `migration-cli`.
pub async fn bootstrap_db(profile: &DbProfile) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(profile).await?;
    if profile.kind == DbKind::SqliteMemory {
        migrate(&conn, MigrationCommand::Up)
            .await
            .map_err(|e| AppError::config(format!("in-memory migration failed: {e}")))?;
    }
    Ok(conn)
}
