//! Accounts: registration, login and profiles.

use std::time::SystemTime;

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;
use tracing::info;

use crate::adapters::users_sea::{ProfileUpdate, UserCreate};
use crate::auth::jwt::mint_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::domain::Role;
use crate::error::AppError;
use crate::errors::domain::{DomainError, ForbiddenKind, NotFoundKind, ValidationKind};
use crate::logging::pii::Redacted;
use crate::logging::security;
use crate::repos::users::{self as users_repo, User, UserWithHash};
use crate::state::security_config::SecurityConfig;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Sign-up request as received.
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: Role,
    pub phone: Option<String>,
    pub location: Option<String>,
}

/// A validated registration with its password already hashed.
#[derive(Debug, Clone)]
pub struct NewAccount(UserCreate);

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub struct UserService;

impl UserService {
    pub fn new() -> Self {
        Self
    }

    /// Validate and hash. Runs before any connection is borrowed so the
    /// bcrypt work never holds a transaction open.
    pub async fn prepare_registration(
        &self,
        reg: Registration,
        security: &SecurityConfig,
    ) -> Result<NewAccount, AppError> {
        let email = reg.email.trim().to_lowercase();
        if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            return Err(
                DomainError::validation(ValidationKind::InvalidEmail, "Invalid email address")
                    .into(),
            );
        }
        if reg.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(DomainError::validation(
                ValidationKind::WeakPassword,
                format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
            )
            .into());
        }
        let full_name = reg.full_name.trim().to_string();
        if full_name.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::MissingField,
                "full_name is required",
            )
            .into());
        }

        let password_hash = hash_password(&reg.password, security.bcrypt_cost).await?;

        Ok(NewAccount(UserCreate {
            email,
            password_hash,
            full_name,
            role: reg.role.into(),
            phone: non_blank(reg.phone),
            location: non_blank(reg.location),
        }))
    }

    /// Duplicate emails surface as `EMAIL_TAKEN` from the unique index.
    pub async fn register<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        account: NewAccount,
        now: OffsetDateTime,
    ) -> Result<User, AppError> {
        let user = users_repo::create_user(conn, account.0, now).await?;
        info!(user_id = user.id, email = %Redacted(&user.email), role = %user.role, "user registered");
        Ok(user)
    }

    /// Stored credentials for `email`, if any. This is the only part of a
    /// login that needs a connection.
    pub async fn find_credentials<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        email: &str,
    ) -> Result<Option<UserWithHash>, AppError> {
        let email = email.trim().to_lowercase();
        Ok(users_repo::find_with_hash_by_email(conn, &email).await?)
    }

    /// Check the password against `found` and issue a token. Unknown email
    /// and wrong password produce the same error.
    ///
    /// Takes no connection: the bcrypt check must run after the lookup's
    /// transaction has been released.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
        found: Option<UserWithHash>,
        security: &SecurityConfig,
        now: SystemTime,
    ) -> Result<(String, User), AppError> {
        let email = email.trim().to_lowercase();

        let Some(found) = found else {
            security::login_failed("unknown_email", &email);
            return Err(AppError::invalid_credentials());
        };

        if !verify_password(password, &found.password_hash).await? {
            security::login_failed("bad_password", &email);
            return Err(AppError::invalid_credentials());
        }

        let user = found.user;
        let token = mint_access_token(user.id, &user.email, user.role, now, security)?;
        info!(user_id = user.id, "login succeeded");
        Ok((token, user))
    }

    pub async fn get_profile<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: i64,
    ) -> Result<User, AppError> {
        users_repo::find_user_by_id(conn, user_id)
            .await?
            .ok_or_else(|| DomainError::not_found(NotFoundKind::User, "User not found").into())
    }

    /// Owner-only partial update; absent or blank fields keep their values.
    pub async fn update_profile<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        caller_id: i64,
        user_id: i64,
        changes: ProfileUpdate,
        now: OffsetDateTime,
    ) -> Result<User, AppError> {
        if caller_id != user_id {
            security::access_denied(caller_id, "profile_owner", "updating another user's profile");
            return Err(DomainError::forbidden(
                ForbiddenKind::NotProfileOwner,
                "You can only update your own profile",
            )
            .into());
        }

        let changes = ProfileUpdate {
            full_name: non_blank(changes.full_name),
            phone: non_blank(changes.phone),
            location: non_blank(changes.location),
            bio: non_blank(changes.bio),
        };

        let user = users_repo::update_profile(conn, user_id, changes, now).await?;
        info!(user_id, "profile updated");
        Ok(user)
    }
}

impl Default for UserService {
    fn default() -> Self {
        Self::new()
    }
}
