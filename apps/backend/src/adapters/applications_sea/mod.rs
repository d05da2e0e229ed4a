//! SeaORM adapter for applications.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, JoinType, NotSet, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set,
};
use time::OffsetDateTime;

use crate::entities::applications::{self, ApplicationStatusDb};
use crate::entities::{jobs, users};

pub mod dto;

pub use dto::{ApplicationCreate, JobApplicationRow, WorkerApplicationRow};

use super::query_lenient;

/// Insert in `pending`. A second insert for the same (job, worker) fails
/// with the unique-index violation; callers rely on that, not a pre-check.
pub async fn insert_application<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ApplicationCreate,
    now: OffsetDateTime,
) -> Result<applications::Model, sea_orm::DbErr> {
    let application_active = applications::ActiveModel {
        id: NotSet,
        job_id: Set(dto.job_id),
        worker_id: Set(dto.worker_id),
        cover_letter: Set(dto.cover_letter),
        status: Set(ApplicationStatusDb::Pending),
        applied_at: Set(now),
        updated_at: Set(now),
    };

    application_active.insert(conn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<applications::Model>, sea_orm::DbErr> {
    applications::Entity::find_by_id(id).one(conn).await
}

/// Move a still-pending application to `status`. Returns the number of
/// rows changed: 0 means it was no longer pending.
pub async fn decide_if_pending<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    status: ApplicationStatusDb,
    now: OffsetDateTime,
) -> Result<u64, sea_orm::DbErr> {
    let res = applications::Entity::update_many()
        .set(applications::ActiveModel {
            status: Set(status),
            updated_at: Set(now),
            ..Default::default()
        })
        .filter(applications::Column::Id.eq(id))
        .filter(applications::Column::Status.eq(ApplicationStatusDb::Pending))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}

pub async fn list_for_worker<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    worker_id: i64,
) -> Result<Vec<WorkerApplicationRow>, sea_orm::DbErr> {
    let query = applications::Entity::find()
        .select_only()
        .columns([
            applications::Column::Id,
            applications::Column::JobId,
            applications::Column::WorkerId,
            applications::Column::CoverLetter,
            applications::Column::Status,
            applications::Column::AppliedAt,
        ])
        .column_as(jobs::Column::Title, "job_title")
        .column_as(jobs::Column::Location, "location")
        .column_as(jobs::Column::SalaryMin, "salary_min")
        .column_as(jobs::Column::SalaryMax, "salary_max")
        .column_as(users::Column::FullName, "employer_name")
        .join(JoinType::InnerJoin, applications::Relation::Job.def())
        .join(JoinType::InnerJoin, jobs::Relation::Employer.def())
        .filter(applications::Column::WorkerId.eq(worker_id))
        .order_by_desc(applications::Column::AppliedAt)
        .order_by_desc(applications::Column::Id);

    query_lenient(conn, query, "worker_applications").await
}

pub async fn list_for_job<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    job_id: i64,
) -> Result<Vec<JobApplicationRow>, sea_orm::DbErr> {
    let query = applications::Entity::find()
        .select_only()
        .columns([
            applications::Column::Id,
            applications::Column::JobId,
            applications::Column::WorkerId,
            applications::Column::CoverLetter,
            applications::Column::Status,
            applications::Column::AppliedAt,
        ])
        .column_as(users::Column::FullName, "worker_name")
        .column_as(users::Column::Email, "worker_email")
        .column_as(users::Column::Phone, "worker_phone")
        .column_as(users::Column::Location, "worker_location")
        .join(JoinType::InnerJoin, applications::Relation::Worker.def())
        .filter(applications::Column::JobId.eq(job_id))
        .order_by_desc(applications::Column::AppliedAt)
        .order_by_desc(applications::Column::Id);

    query_lenient(conn, query, "job_applications").await
}
