//! Machine-readable error codes for the HTTP API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! Every code renders as SCREAMING_SNAKE_CASE in Problem Details bodies.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    Unauthorized,
    UnauthorizedMissingBearer,
    UnauthorizedInvalidJwt,
    UnauthorizedExpiredJwt,
    /// Login with unknown email or wrong password
    InvalidCredentials,
    /// Verified token for an account that no longer exists
    UnknownAccount,
    Forbidden,
    /// Caller's role does not permit the operation
    ForbiddenRole,
    /// Caller does not own the job or application
    NotJobOwner,
    /// Caller may only see their own applications
    NotApplicant,
    NotProfileOwner,

    // Request Validation
    ValidationError,
    BadRequest,
    InvalidExpiryDays,
    InvalidSalaryRange,
    InvalidStatus,
    InvalidRole,
    InvalidWorker,
    InvalidCategory,
    InvalidEmail,
    WeakPassword,
    JobClosed,
    JobExpired,

    // Resource Not Found
    NotFound,
    UserNotFound,
    JobNotFound,
    ApplicationNotFound,

    // Conflicts
    Conflict,
    DuplicateApplication,
    ApplicationFinalized,
    EmailTaken,

    // System Errors
    DbError,
    DbUnavailable,
    DbTimeout,
    Internal,
    ConfigError,
    DataCorruption,
}

impl ErrorCode {
    /// The exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            Self::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::UnknownAccount => "UNKNOWN_ACCOUNT",
            Self::Forbidden => "FORBIDDEN",
            Self::ForbiddenRole => "FORBIDDEN_ROLE",
            Self::NotJobOwner => "NOT_JOB_OWNER",
            Self::NotApplicant => "NOT_APPLICANT",
            Self::NotProfileOwner => "NOT_PROFILE_OWNER",

            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidExpiryDays => "INVALID_EXPIRY_DAYS",
            Self::InvalidSalaryRange => "INVALID_SALARY_RANGE",
            Self::InvalidStatus => "INVALID_STATUS",
            Self::InvalidRole => "INVALID_ROLE",
            Self::InvalidWorker => "INVALID_WORKER",
            Self::InvalidCategory => "INVALID_CATEGORY",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::WeakPassword => "WEAK_PASSWORD",
            Self::JobClosed => "JOB_CLOSED",
            Self::JobExpired => "JOB_EXPIRED",

            Self::NotFound => "NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::JobNotFound => "JOB_NOT_FOUND",
            Self::ApplicationNotFound => "APPLICATION_NOT_FOUND",

            Self::Conflict => "CONFLICT",
            Self::DuplicateApplication => "DUPLICATE_APPLICATION",
            Self::ApplicationFinalized => "APPLICATION_FINALIZED",
            Self::EmailTaken => "EMAIL_TAKEN",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
