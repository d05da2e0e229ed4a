//! SeaORM adapter for jobs.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, JoinType, NotSet, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Select, Set,
};
use time::OffsetDateTime;

use crate::entities::jobs::{self, JobStatusDb};
use crate::entities::{categories, users};

pub mod dto;

pub use dto::{JobCreate, JobListingRow};

use super::query_lenient;

pub async fn create_job<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: JobCreate,
    now: OffsetDateTime,
) -> Result<jobs::Model, sea_orm::DbErr> {
    let job_active = jobs::ActiveModel {
        id: NotSet,
        employer_id: Set(dto.employer_id),
        title: Set(dto.title),
        description: Set(dto.description),
        category_id: Set(dto.category_id),
        location: Set(dto.location),
        salary_min: Set(dto.salary_min),
        salary_max: Set(dto.salary_max),
        duration: Set(dto.duration),
        requirements: Set(dto.requirements),
        contact_phone: Set(dto.contact_phone),
        contact_email: Set(dto.contact_email),
        expires_at: Set(dto.expires_at),
        status: Set(JobStatusDb::Open),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
    };

    job_active.insert(conn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<jobs::Model>, sea_orm::DbErr> {
    jobs::Entity::find_by_id(id).one(conn).await
}

fn listing_select() -> Select<jobs::Entity> {
    jobs::Entity::find()
        .column_as(users::Column::FullName, "employer_name")
        .column_as(categories::Column::Name, "category_name")
        .join(JoinType::LeftJoin, jobs::Relation::Employer.def())
        .join(JoinType::LeftJoin, jobs::Relation::Category.def())
}

/// Active, open, unexpired jobs; newest first.
pub async fn list_open<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    now: OffsetDateTime,
) -> Result<Vec<JobListingRow>, sea_orm::DbErr> {
    let query = listing_select()
        .filter(jobs::Column::IsActive.eq(true))
        .filter(jobs::Column::Status.eq(JobStatusDb::Open))
        .filter(jobs::Column::ExpiresAt.gt(now))
        .order_by_desc(jobs::Column::CreatedAt)
        .order_by_desc(jobs::Column::Id);

    query_lenient(conn, query, "open_jobs").await
}

/// Any job by id regardless of status, with the same enrichment as the
/// open listing.
pub async fn find_listing_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<JobListingRow>, sea_orm::DbErr> {
    listing_select()
        .filter(jobs::Column::Id.eq(id))
        .into_model::<JobListingRow>()
        .one(conn)
        .await
}
