use crate::config::env::opt_var;
use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ORIGIN: &str = "http://localhost:5173";

/// Listener and CORS settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// `BACKEND_HOST`, `PORT`, `CORS_ALLOWED_ORIGINS`.
    pub fn from_env() -> Result<Self, AppError> {
        let host = opt_var("BACKEND_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match opt_var("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| AppError::config(format!("PORT must be a valid port number, got '{raw}'")))?,
            None => DEFAULT_PORT,
        };
        let cors_origins = parse_origins(&opt_var("CORS_ALLOWED_ORIGINS").unwrap_or_default());

        Ok(Self {
            host,
            port,
            cors_origins,
        })
    }
}

/// Comma-separated http(s) origins; blanks, `null` and other schemes are
/// dropped. Falls back to the local frontend dev server.
pub fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(|s| s.trim_end_matches('/').to_string())
        .collect();

    if origins.is_empty() {
        vec![DEFAULT_ORIGIN.to_string()]
    } else {
        origins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_filters_origins() {
        let got = parse_origins(" https://jobs.example.com/ ,null,,ftp://x, http://localhost:3000");
        assert_eq!(
            got,
            vec![
                "https://jobs.example.com".to_string(),
                "http://localhost:3000".to_string()
            ]
        );
    }

    #[test]
    fn empty_falls_back_to_dev_origin() {
        assert_eq!(parse_origins(""), vec![DEFAULT_ORIGIN.to_string()]);
        assert_eq!(parse_origins("null"), vec![DEFAULT_ORIGIN.to_string()]);
    }
}
