use crate::config::env::{must_var, opt_var};
use crate::error::AppError;

/// Backend family, inferred from the connection URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    /// Private to one connection; must be migrated on that connection.
    SqliteMemory,
}

/// Everything needed to open the pool.
#[derive(Debug, Clone, PartialEq)]
pub struct DbProfile {
    pub url: String,
    pub kind: DbKind,
    pub max_connections: u32,
}

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

impl DbProfile {
    pub fn from_url(url: impl Into<String>) -> Result<Self, AppError> {
        let url = url.into();
        let kind = if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            DbKind::Postgres
        } else if url.starts_with("sqlite::memory:") || url.contains("mode=memory") {
            DbKind::SqliteMemory
        } else if url.starts_with("sqlite:") {
            DbKind::SqliteFile
        } else {
            return Err(AppError::config(
                "DATABASE_URL must start with postgres://, postgresql:// or sqlite:",
            ));
        };

        let max_connections = match kind {
            DbKind::SqliteMemory => 1,
            _ => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            url,
            kind,
            max_connections,
        })
    }

    /// `DATABASE_URL` (required) and `DB_MAX_CONNECTIONS` (optional).
    pub fn from_env() -> Result<Self, AppError> {
        let mut profile = Self::from_url(must_var("DATABASE_URL")?)?;
        if let Some(raw) = opt_var("DB_MAX_CONNECTIONS") {
            let n = raw.parse::<u32>().map_err(|_| {
                AppError::config(format!("DB_MAX_CONNECTIONS must be a positive integer, got '{raw}'"))
            })?;
            profile = profile.with_max_connections(n);
        }
        Ok(profile)
    }

    /// Fresh private database; used by tests.
    pub fn sqlite_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            kind: DbKind::SqliteMemory,
            max_connections: 1,
        }
    }

    /// In-memory SQLite is pinned to one connection regardless.
    pub fn with_max_connections(mut self, n: u32) -> Self {
        if self.kind != DbKind::SqliteMemory {
            self.max_connections = n.max(1);
        }
        self
    }
}
