//! User repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::adapters::users_sea as users_adapter;
use crate::adapters::users_sea::{ProfileUpdate, UserCreate};
use crate::domain::Role;
use crate::entities::users;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Public view of an account. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    #[serde(rename = "user_type")]
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Account plus stored hash, for login only.
#[derive(Debug, Clone)]
pub struct UserWithHash {
    pub user: User,
    pub password_hash: String,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            full_name: model.full_name,
            role: model.role.into(),
            phone: model.phone,
            location: model.location,
            bio: model.bio,
            avatar_url: model.avatar_url,
            created_at: model.created_at,
        }
    }
}

pub async fn find_user_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_by_id(conn, id).await?;
    Ok(user.map(User::from))
}

pub async fn find_role<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<Role>, DomainError> {
    let role = users_adapter::find_role(conn, id).await?;
    Ok(role.map(Role::from))
}

pub async fn find_with_hash_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Option<UserWithHash>, DomainError> {
    let user = users_adapter::find_by_email(conn, email).await?;
    Ok(user.map(|model| {
        let password_hash = model.password_hash.clone();
        UserWithHash {
            user: User::from(model),
            password_hash,
        }
    }))
}

pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: UserCreate,
    now: OffsetDateTime,
) -> Result<User, DomainError> {
    let user = users_adapter::create_user(conn, dto, now).await?;
    Ok(User::from(user))
}

pub async fn update_profile<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    changes: ProfileUpdate,
    now: OffsetDateTime,
) -> Result<User, DomainError> {
    users_adapter::update_profile(conn, id, changes, now)
        .await?
        .map(User::from)
        .ok_or_else(|| DomainError::not_found(NotFoundKind::User, "User not found"))
}
