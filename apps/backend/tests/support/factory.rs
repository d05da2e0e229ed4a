use std::time::SystemTime;

use backend::auth::jwt::mint_access_token;
use backend::db::txn::with_txn;
use backend::domain::Role;
use backend::repos::jobs::Job;
use backend::repos::users::User;
use backend::services::{JobDraft, JobService, Registration, UserService};
use backend::state::app_state::AppState;
use backend::AppError;
use backend_test_support::fixtures::{unique_email, unique_title};
use time::OffsetDateTime;

pub const TEST_PASSWORD: &str = "correct-horse";

/// A registered account and a live token for it.
pub struct Seeded {
    pub user: User,
    pub token: String,
}

impl Seeded {
    pub fn id(&self) -> i64 {
        self.user.id
    }
}

/// Register an account through the same service path as `/api/register`.
pub async fn seed_user(state: &AppState, role: Role) -> Result<Seeded, AppError> {
    let account = UserService::new()
        .prepare_registration(
            Registration {
                email: unique_email(role.as_str()),
                password: TEST_PASSWORD.to_string(),
                full_name: format!("Test {role}"),
                role,
                phone: None,
                location: None,
            },
            &state.security,
        )
        .await?;

    let now = OffsetDateTime::now_utc();
    let user = with_txn(state, move |txn| {
        Box::pin(async move { UserService::new().register(txn, account, now).await })
    })
    .await?;

    let token = mint_access_token(
        user.id,
        &user.email,
        user.role,
        SystemTime::now(),
        &state.security,
    )?;
    Ok(Seeded { user, token })
}

pub async fn seed_worker(state: &AppState) -> Result<Seeded, AppError> {
    seed_user(state, Role::Worker).await
}

pub async fn seed_employer(state: &AppState) -> Result<Seeded, AppError> {
    seed_user(state, Role::Employer).await
}

/// A minimal valid draft.
pub fn job_draft(expiry_days: i64) -> JobDraft {
    JobDraft {
        title: unique_title("Warehouse helper"),
        description: "Loading and unloading deliveries".to_string(),
        location: "Lagos".to_string(),
        expiry_days,
        ..Default::default()
    }
}

/// Post a job for `employer_id` as of `now`.
pub async fn seed_job_at(
    state: &AppState,
    employer_id: i64,
    draft: JobDraft,
    now: OffsetDateTime,
) -> Result<Job, AppError> {
    with_txn(state, move |txn| {
        Box::pin(async move {
            JobService::new()
                .create_job(txn, employer_id, draft, now)
                .await
        })
    })
    .await
}

pub async fn seed_job(state: &AppState, employer_id: i64) -> Result<Job, AppError> {
    seed_job_at(state, employer_id, job_draft(3), OffsetDateTime::now_utc()).await
}
