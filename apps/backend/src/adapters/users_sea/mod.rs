//! SeaORM adapter for users.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QuerySelect,
    Set,
};
use time::OffsetDateTime;

use crate::entities::users::{self, UserRole};

pub mod dto;

pub use dto::{ProfileUpdate, UserCreate};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find_by_id(id).one(conn).await
}

pub async fn find_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .one(conn)
        .await
}

/// Role lookup without loading the rest of the row.
pub async fn find_role<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<UserRole>, sea_orm::DbErr> {
    users::Entity::find_by_id(id)
        .select_only()
        .column(users::Column::Role)
        .into_tuple::<UserRole>()
        .one(conn)
        .await
}

pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: UserCreate,
    now: OffsetDateTime,
) -> Result<users::Model, sea_orm::DbErr> {
    let user_active = users::ActiveModel {
        id: NotSet,
        email: Set(dto.email),
        password_hash: Set(dto.password_hash),
        full_name: Set(dto.full_name),
        role: Set(dto.role),
        phone: Set(dto.phone),
        location: Set(dto.location),
        bio: Set(None),
        avatar_url: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };

    user_active.insert(conn).await
}

/// Returns `None` when no user has `id`.
pub async fn update_profile<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    dto: ProfileUpdate,
    now: OffsetDateTime,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    let Some(existing) = find_by_id(conn, id).await? else {
        return Ok(None);
    };
    if dto.is_empty() {
        return Ok(Some(existing));
    }

    let mut active: users::ActiveModel = existing.into();
    if let Some(full_name) = dto.full_name {
        active.full_name = Set(full_name);
    }
    if let Some(phone) = dto.phone {
        active.phone = Set(Some(phone));
    }
    if let Some(location) = dto.location {
        active.location = Set(Some(location));
    }
    if let Some(bio) = dto.bio {
        active.bio = Set(Some(bio));
    }
    active.updated_at = Set(now);

    active.update(conn).await.map(Some)
}
