use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::categories_sea as categories_adapter;
use crate::entities::categories;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

impl From<categories::Model> for Category {
    fn from(model: categories::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

pub async fn list_categories<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Category>, DomainError> {
    let rows = categories_adapter::list_all(conn).await?;
    Ok(rows.into_iter().map(Category::from).collect())
}

pub async fn category_exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<bool, DomainError> {
    Ok(categories_adapter::exists(conn, id).await?)
}
