use backend::config::db::DbProfile;
use backend::infra::state::build_state;
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;
use backend::AppError;

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_purposes_only";

/// Lowest cost bcrypt accepts; keeps registration fast in tests.
pub const TEST_BCRYPT_COST: u32 = 4;

pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(TEST_JWT_SECRET.as_bytes()).with_bcrypt_cost(TEST_BCRYPT_COST)
}

/// Fresh, migrated in-memory SQLite database per call.
pub async fn build_test_state() -> Result<AppState, AppError> {
    build_state()
        .with_security(test_security())
        .with_db(DbProfile::sqlite_memory())
        .build()
        .await
}
