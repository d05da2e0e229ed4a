//! Job lifecycle rules: expiry windows, salary ranges and application
//! eligibility. Everything here is pure; time is always passed in.

use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

pub const MIN_EXPIRY_DAYS: i64 = 1;
pub const MAX_EXPIRY_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Open,
    Closed,
}

/// Compute `now + days`, rejecting windows outside `[1, 7]` days.
pub fn expiry_from(now: OffsetDateTime, days: i64) -> Result<OffsetDateTime, DomainError> {
    if !(MIN_EXPIRY_DAYS..=MAX_EXPIRY_DAYS).contains(&days) {
        return Err(DomainError::validation(
            ValidationKind::InvalidExpiryDays,
            format!("expiry_days must be between {MIN_EXPIRY_DAYS} and {MAX_EXPIRY_DAYS}, got {days}"),
        ));
    }
    Ok(now + Duration::days(days))
}

/// Salaries are optional; when both ends are present `min <= max`.
pub fn validate_salary_range(min: Option<f64>, max: Option<f64>) -> Result<(), DomainError> {
    for value in [min, max].into_iter().flatten() {
        if !value.is_finite() || value < 0.0 {
            return Err(DomainError::validation(
                ValidationKind::InvalidSalaryRange,
                "salary values must be non-negative numbers",
            ));
        }
    }
    if let (Some(lo), Some(hi)) = (min, max) {
        if lo > hi {
            return Err(DomainError::validation(
                ValidationKind::InvalidSalaryRange,
                format!("salary_min ({lo}) must not exceed salary_max ({hi})"),
            ));
        }
    }
    Ok(())
}

/// The slice of a job that decides whether it takes applications.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JobWindow {
    pub status: JobStatus,
    pub is_active: bool,
    pub expires_at: OffsetDateTime,
}

/// Why a job cannot receive a new application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ineligibility {
    NotFound,
    Closed,
    Expired,
}

impl Ineligibility {
    /// Caller-facing message for each reason.
    pub const fn message(&self) -> &'static str {
        match self {
            Ineligibility::NotFound => "Job not found",
            Ineligibility::Closed => "This job is no longer accepting applications",
            Ineligibility::Expired => "This job has expired",
        }
    }
}

impl From<Ineligibility> for DomainError {
    fn from(reason: Ineligibility) -> Self {
        match reason {
            Ineligibility::NotFound => DomainError::not_found(NotFoundKind::Job, reason.message()),
            Ineligibility::Closed => {
                DomainError::validation(ValidationKind::JobClosed, reason.message())
            }
            Ineligibility::Expired => {
                DomainError::validation(ValidationKind::JobExpired, reason.message())
            }
        }
    }
}

/// A job takes applications only while active, open and unexpired.
///
/// Inactive jobs report `Closed`; closure is checked before expiry.
pub fn eligibility(job: Option<&JobWindow>, now: OffsetDateTime) -> Result<(), Ineligibility> {
    let job = job.ok_or(Ineligibility::NotFound)?;
    if !job.is_active || job.status != JobStatus::Open {
        return Err(Ineligibility::Closed);
    }
    if job.expires_at <= now {
        return Err(Ineligibility::Expired);
    }
    Ok(())
}
