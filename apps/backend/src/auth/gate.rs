//! Role gate: binds an operation to the role it requires.

use crate::auth::jwt::Claims;
use crate::domain::roles::Role;
use crate::errors::ErrorCode;
use crate::logging::security;
use crate::AppError;

/// True iff the claim carries `required`.
pub fn admit(claims: &Claims, required: Role) -> bool {
    claims.role == required
}

/// [`admit`] as a guard: turns a mismatch into `403 FORBIDDEN_ROLE`
/// with the caller-facing `detail`.
pub fn require_role(claims: &Claims, required: Role, detail: &str) -> Result<(), AppError> {
    if admit(claims, required) {
        return Ok(());
    }
    security::access_denied(claims.user_id, "role", detail);
    Err(AppError::forbidden(ErrorCode::ForbiddenRole, detail))
}
