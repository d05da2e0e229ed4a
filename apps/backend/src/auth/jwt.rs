use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::roles::Role;
use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Identity claims carried by access tokens.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    pub user_id: i64,
    pub email: String,
    #[serde(rename = "user_type")]
    pub role: Role,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

fn epoch_secs(at: SystemTime) -> Result<i64, AppError> {
    at.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .map_err(|_| AppError::internal("System clock is before the Unix epoch"))
}

/// Mint an access token for `user_id` valid for the configured TTL (24h).
pub fn mint_access_token(
    user_id: i64,
    email: &str,
    role: Role,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = epoch_secs(now)?;

    let claims = Claims {
        user_id,
        email: email.to_string(),
        role,
        iat,
        exp: iat + security.token_ttl_secs,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Verify signature and expiry and return the claims.
///
/// Expiry is checked against `now` with no leeway: a token whose `exp`
/// is at or before `now` is expired.
///
/// Errors:
/// - expired → `UNAUTHORIZED_EXPIRED_JWT`
/// - bad signature, malformed token, wrong algorithm → `UNAUTHORIZED_INVALID_JWT`
pub fn verify_access_token(
    token: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<Claims, AppError> {
    let mut validation = Validation::new(security.algorithm);
    // exp stays a required claim; the comparison itself happens below.
    validation.validate_exp = false;
    validation.leeway = 0;

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::unauthorized_expired_jwt(),
        _ => AppError::unauthorized_invalid_jwt(),
    })?;

    if claims.exp <= epoch_secs(now)? {
        return Err(AppError::unauthorized_expired_jwt());
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use super::{mint_access_token, verify_access_token};
    use crate::domain::roles::Role;
    use crate::errors::ErrorCode;
    use crate::state::security_config::SecurityConfig;

    const DAY: u64 = 24 * 60 * 60;

    fn security() -> SecurityConfig {
        SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes())
    }

    #[test]
    fn test_mint_and_verify_roundtrip() {
        let security = security();
        let now = SystemTime::now();

        let token = mint_access_token(42, "worker@example.com", Role::Worker, now, &security).unwrap();
        let claims = verify_access_token(&token, now, &security).unwrap();

        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.email, "worker@example.com");
        assert_eq!(claims.role, Role::Worker);
        assert_eq!(
            claims.iat,
            now.duration_since(UNIX_EPOCH).unwrap().as_secs() as i64
        );
        assert_eq!(claims.exp, claims.iat + DAY as i64);
    }

    #[test]
    fn test_expired_token() {
        let security = security();
        let issued = SystemTime::now() - Duration::from_secs(DAY + 60);

        let token = mint_access_token(7, "e@example.com", Role::Employer, issued, &security).unwrap();
        let err = verify_access_token(&token, SystemTime::now(), &security).unwrap_err();

        assert_eq!(err.code(), ErrorCode::UnauthorizedExpiredJwt);
    }

    #[test]
    fn test_expiry_boundary_is_inclusive() {
        let security = security();
        let issued = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let token = mint_access_token(7, "e@example.com", Role::Employer, issued, &security).unwrap();

        let just_before = issued + Duration::from_secs(DAY - 1);
        assert!(verify_access_token(&token, just_before, &security).is_ok());

        let at_exp = issued + Duration::from_secs(DAY);
        let err = verify_access_token(&token, at_exp, &security).unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnauthorizedExpiredJwt);
    }

    #[test]
    fn test_bad_signature() {
        let security_a = SecurityConfig::new("secret-A".as_bytes());
        let token =
            mint_access_token(9, "e@example.com", Role::Employer, SystemTime::now(), &security_a)
                .unwrap();

        let security_b = SecurityConfig::new("secret-B".as_bytes());
        let err = verify_access_token(&token, SystemTime::now(), &security_b).unwrap_err();

        assert_eq!(err.code(), ErrorCode::UnauthorizedInvalidJwt);
    }

    #[test]
    fn test_tampered_signature_segment() {
        let security = security();
        let now = SystemTime::now();
        let token = mint_access_token(9, "e@example.com", Role::Employer, now, &security).unwrap();

        // Flip one character of the signature segment
        let (head, sig) = token.rsplit_once('.').unwrap();
        let mut sig: Vec<char> = sig.chars().collect();
        sig[0] = if sig[0] == 'A' { 'B' } else { 'A' };
        let tampered = format!("{head}.{}", sig.into_iter().collect::<String>());

        let err = verify_access_token(&tampered, now, &security).unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnauthorizedInvalidJwt);
    }

    #[test]
    fn test_garbage_token() {
        let err = verify_access_token("not-a-jwt", SystemTime::now(), &security()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnauthorizedInvalidJwt);
    }
}
