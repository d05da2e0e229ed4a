use backend::config::env::RuntimeEnv;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "info,actix_web=info,sqlx=warn,sea_orm=warn";

/// Install the global subscriber, filtered by `RUST_LOG`.
///
/// Dev gets compact human-readable lines; test and prod emit JSON with the
/// current request span attached.
pub fn init_tracing(env: RuntimeEnv) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let registry = tracing_subscriber::registry().with(env_filter);

    match env {
        RuntimeEnv::Dev => registry
            .with(fmt::layer().compact().with_target(false))
            .init(),
        RuntimeEnv::Test | RuntimeEnv::Prod => registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .json()
                    .with_current_span(true)
                    .with_span_list(false),
            )
            .init(),
    }
}
