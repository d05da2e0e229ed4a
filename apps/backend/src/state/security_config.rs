use jsonwebtoken::Algorithm;
use tracing::warn;

use crate::config::env::{opt_var, RuntimeEnv};
use crate::error::AppError;

/// Lifetime of an issued access token.
pub const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// Signing key used when none is configured outside production.
const FALLBACK_DEV_SECRET: &str = "jobboard-insecure-development-secret";

/// Signing and hashing settings shared by the issuer, verifier and
/// password store.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// HMAC key for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    pub algorithm: Algorithm,
    pub token_ttl_secs: i64,
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
    pub using_fallback_key: bool,
}

impl SecurityConfig {
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            token_ttl_secs: TOKEN_TTL_SECS,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            using_fallback_key: false,
        }
    }

    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    /// Production refuses to start without a key. Elsewhere a missing key
    /// falls back to a fixed development key, loudly.
    pub fn resolve(env: RuntimeEnv, secret: Option<String>) -> Result<Self, AppError> {
        match secret.filter(|s| !s.trim().is_empty()) {
            Some(secret) => Ok(Self::new(secret.into_bytes())),
            None if env.is_prod() => Err(AppError::config(
                "JWT_SECRET must be set when APP_ENV=prod",
            )),
            None => {
                warn!(
                    env = ?env,
                    "JWT_SECRET is not set; signing tokens with the built-in development key"
                );
                let mut cfg = Self::new(FALLBACK_DEV_SECRET.as_bytes().to_vec());
                cfg.using_fallback_key = true;
                Ok(cfg)
            }
        }
    }

    pub fn from_env(env: RuntimeEnv) -> Result<Self, AppError> {
        Self::resolve(env, opt_var("JWT_SECRET"))
    }
}
