use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

use crate::domain::ApplicationStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "application_status")]
pub enum ApplicationStatusDb {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "accepted")]
    Accepted,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

impl From<ApplicationStatusDb> for ApplicationStatus {
    fn from(s: ApplicationStatusDb) -> Self {
        match s {
            ApplicationStatusDb::Pending => ApplicationStatus::Pending,
            ApplicationStatusDb::Accepted => ApplicationStatus::Accepted,
            ApplicationStatusDb::Rejected => ApplicationStatus::Rejected,
        }
    }
}

impl From<ApplicationStatus> for ApplicationStatusDb {
    fn from(s: ApplicationStatus) -> Self {
        match s {
            ApplicationStatus::Pending => ApplicationStatusDb::Pending,
            ApplicationStatus::Accepted => ApplicationStatusDb::Accepted,
            ApplicationStatus::Rejected => ApplicationStatusDb::Rejected,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "applications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "job_id")]
    pub job_id: i64,
    #[sea_orm(column_name = "worker_id")]
    pub worker_id: i64,
    #[sea_orm(column_name = "cover_letter", column_type = "Text", nullable)]
    pub cover_letter: Option<String>,
    pub status: ApplicationStatusDb,
    #[sea_orm(column_name = "applied_at")]
    pub applied_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::jobs::Entity",
        from = "Column::JobId",
        to = "super::jobs::Column::Id"
    )]
    Job,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::WorkerId",
        to = "super::users::Column::Id"
    )]
    Worker,
}

impl Related<super::jobs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Job.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Worker.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
