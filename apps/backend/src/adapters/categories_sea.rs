//! SeaORM adapter for job categories.

use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder};

use crate::entities::categories;

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<categories::Model>, sea_orm::DbErr> {
    categories::Entity::find()
        .order_by_asc(categories::Column::Name)
        .all(conn)
        .await
}

pub async fn exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<bool, sea_orm::DbErr> {
    Ok(categories::Entity::find_by_id(id).one(conn).await?.is_some())
}
