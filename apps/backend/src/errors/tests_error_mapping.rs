// Unit tests for error mapping - pure domain logic without HTTP or database dependencies
use crate::errors::domain::{
    ConflictKind, DomainError, ForbiddenKind, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::errors::ErrorCode;
use crate::AppError;

#[test]
fn maps_validation_to_400() {
    let de = DomainError::validation(ValidationKind::InvalidExpiryDays, "expiry_days must be 1-7");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::InvalidExpiryDays);
    assert_eq!(app.status().as_u16(), 400);

    let other = DomainError::validation(ValidationKind::Other("x".into()), "bad field");
    let app: AppError = other.into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
}

#[test]
fn maps_ineligible_jobs_to_400() {
    let closed = DomainError::validation(ValidationKind::JobClosed, "closed");
    let app: AppError = closed.into();
    assert_eq!(app.code().as_str(), "JOB_CLOSED");
    assert_eq!(app.status().as_u16(), 400);

    let expired = DomainError::validation(ValidationKind::JobExpired, "expired");
    let app: AppError = expired.into();
    assert_eq!(app.code().as_str(), "JOB_EXPIRED");
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn maps_conflicts() {
    let dup = DomainError::conflict(ConflictKind::DuplicateApplication, "dup");
    let app: AppError = dup.into();
    assert_eq!(app.code().as_str(), "DUPLICATE_APPLICATION");
    assert_eq!(app.status().as_u16(), 409);

    let done = DomainError::conflict(ConflictKind::ApplicationFinalized, "done");
    let app: AppError = done.into();
    assert_eq!(app.code().as_str(), "APPLICATION_FINALIZED");
    assert_eq!(app.status().as_u16(), 409);

    let other = DomainError::conflict(ConflictKind::Other("unique".into()), "generic");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn maps_not_found() {
    let nf = DomainError::not_found(NotFoundKind::Job, "Job not found");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "JOB_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);
}

#[test]
fn maps_forbidden_and_unauthenticated() {
    let role = DomainError::forbidden(ForbiddenKind::Role, "Only employers can post jobs");
    let app: AppError = role.into();
    assert_eq!(app.code(), ErrorCode::ForbiddenRole);
    assert_eq!(app.status().as_u16(), 403);

    let gone = DomainError::unauthenticated("account no longer exists");
    let app: AppError = gone.into();
    assert_eq!(app.code(), ErrorCode::UnknownAccount);
    assert_eq!(app.status().as_u16(), 401);
}

#[test]
fn maps_infra() {
    let t = DomainError::infra(InfraErrorKind::Timeout, "timeout");
    let app: AppError = t.into();
    assert_eq!(app.code().as_str(), "DB_TIMEOUT");
    assert_eq!(app.status().as_u16(), 504);

    let down = DomainError::infra(InfraErrorKind::DbUnavailable, "down");
    let app: AppError = down.into();
    assert_eq!(app.code().as_str(), "DB_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let other = DomainError::infra(InfraErrorKind::Other("DbErr".into()), "failed");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "DB_ERROR");
    assert_eq!(app.status().as_u16(), 500);
}
