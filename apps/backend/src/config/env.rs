use std::env;
use std::str::FromStr;

use crate::error::AppError;

/// Deployment mode, from `APP_ENV` (defaults to `dev`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Dev,
    Test,
    Prod,
}

impl RuntimeEnv {
    pub fn from_env() -> Result<Self, AppError> {
        match opt_var("APP_ENV") {
            Some(raw) => raw.parse(),
            None => Ok(RuntimeEnv::Dev),
        }
    }

    pub fn is_prod(&self) -> bool {
        matches!(self, RuntimeEnv::Prod)
    }
}

impl FromStr for RuntimeEnv {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dev" | "development" => Ok(RuntimeEnv::Dev),
            "test" => Ok(RuntimeEnv::Test),
            "prod" | "production" => Ok(RuntimeEnv::Prod),
            other => Err(AppError::config(format!(
                "APP_ENV must be one of dev, test, prod; got '{other}'"
            ))),
        }
    }
}

/// Get required environment variable or return error
pub(crate) fn must_var(name: &str) -> Result<String, AppError> {
    opt_var(name)
        .ok_or_else(|| AppError::config(format!("Required environment variable '{name}' is not set")))
}

/// Unset and blank are the same thing.
pub(crate) fn opt_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
