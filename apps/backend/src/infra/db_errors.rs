//! SeaORM -> DomainError translation.
//!
//! Constraint violations are classified by the driver's structured error
//! kind and the identity of the violated constraint, never by matching
//! free-form message text against a generic phrase. Postgres reports the
//! constraint name directly. SQLite reports none, so a unique violation is
//! identified by the exact column set it names.

use std::collections::BTreeSet;

use migration::{APPLICATIONS_JOB_WORKER_UNIQUE, USERS_EMAIL_UNIQUE};
use sqlx::error::{DatabaseError, ErrorKind};
use sea_orm::{DbErr, RuntimeErr};
use tracing::{error, warn};

use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// Unique constraints the application gives meaning to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownUnique {
    /// One application per (job, worker)
    ApplicationJobWorker,
    UserEmail,
}

/// Integrity violation reported by the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolation {
    /// `None` when the constraint is not one we recognise
    Unique(Option<KnownUnique>),
    ForeignKey,
    NotNull,
    Check,
}

const SQLITE_UNIQUE_PREFIX: &str = "UNIQUE constraint failed: ";

fn database_error(e: &DbErr) -> Option<&dyn DatabaseError> {
    match e {
        DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Database(db)))
        | DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Database(db))) => {
            Some(db.as_ref())
        }
        _ => None,
    }
}

fn known_by_name(name: &str) -> Option<KnownUnique> {
    match name {
        APPLICATIONS_JOB_WORKER_UNIQUE => Some(KnownUnique::ApplicationJobWorker),
        USERS_EMAIL_UNIQUE => Some(KnownUnique::UserEmail),
        _ => None,
    }
}

/// SQLite names the violated columns as `table.col, table.col`.
pub(crate) fn known_by_sqlite_columns(message: &str) -> Option<KnownUnique> {
    let rest = message.strip_prefix(SQLITE_UNIQUE_PREFIX)?;
    let columns: BTreeSet<&str> = rest.split(',').map(str::trim).collect();

    let job_worker: BTreeSet<&str> = ["applications.job_id", "applications.worker_id"].into();
    let email: BTreeSet<&str> = ["users.email"].into();

    if columns == job_worker {
        Some(KnownUnique::ApplicationJobWorker)
    } else if columns == email {
        Some(KnownUnique::UserEmail)
    } else {
        None
    }
}

/// Structured classification of an integrity violation, if `e` is one.
pub fn classify(e: &DbErr) -> Option<ConstraintViolation> {
    let db = database_error(e)?;
    match db.kind() {
        ErrorKind::UniqueViolation => {
            let known = match db.constraint() {
                Some(name) => known_by_name(name),
                None => known_by_sqlite_columns(db.message()),
            };
            Some(ConstraintViolation::Unique(known))
        }
        ErrorKind::ForeignKeyViolation => Some(ConstraintViolation::ForeignKey),
        ErrorKind::NotNullViolation => Some(ConstraintViolation::NotNull),
        ErrorKind::CheckViolation => Some(ConstraintViolation::Check),
        _ => None,
    }
}

/// Translate a `DbErr` into a `DomainError` with sanitized, PII-safe detail.
pub fn map_db_err(e: DbErr) -> DomainError {
    let trace_id = trace_ctx::trace_id();

    if let Some(violation) = classify(&e) {
        warn!(trace_id = %trace_id, violation = ?violation, raw_error = %Redacted(&e.to_string()), "Constraint violation");
        return match violation {
            ConstraintViolation::Unique(Some(KnownUnique::ApplicationJobWorker)) => {
                DomainError::conflict(
                    ConflictKind::DuplicateApplication,
                    "You have already applied to this job",
                )
            }
            ConstraintViolation::Unique(Some(KnownUnique::UserEmail)) => {
                DomainError::conflict(ConflictKind::EmailTaken, "Email already registered")
            }
            ConstraintViolation::Unique(None) => DomainError::conflict(
                ConflictKind::Other("Unique".into()),
                "Resource already exists",
            ),
            ConstraintViolation::ForeignKey => DomainError::validation(
                ValidationKind::Other("ForeignKey".into()),
                "Referenced record does not exist",
            ),
            ConstraintViolation::NotNull | ConstraintViolation::Check => DomainError::validation(
                ValidationKind::Other("Constraint".into()),
                "Value violates a storage constraint",
            ),
        };
    }

    match &e {
        DbErr::RecordNotFound(_) => {
            DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found")
        }
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&e.to_string()), "Database unavailable");
            DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable")
        }
        _ => {
            error!(trace_id = %trace_id, raw_error = %Redacted(&e.to_string()), "Unhandled database error");
            DomainError::infra(InfraErrorKind::Other("DbErr".into()), "Database error")
        }
    }
}

impl From<DbErr> for DomainError {
    fn from(e: DbErr) -> Self {
        map_db_err(e)
    }
}
