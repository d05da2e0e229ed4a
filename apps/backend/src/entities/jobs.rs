use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

use crate::domain::JobStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "job_status")]
pub enum JobStatusDb {
    #[sea_orm(string_value = "open")]
    Open,
    #[sea_orm(string_value = "closed")]
    Closed,
}

impl From<JobStatusDb> for JobStatus {
    fn from(s: JobStatusDb) -> Self {
        match s {
            JobStatusDb::Open => JobStatus::Open,
            JobStatusDb::Closed => JobStatus::Closed,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "jobs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "employer_id")]
    pub employer_id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_name = "category_id")]
    pub category_id: Option<i64>,
    pub location: String,
    #[sea_orm(column_name = "salary_min", column_type = "Double", nullable)]
    pub salary_min: Option<f64>,
    #[sea_orm(column_name = "salary_max", column_type = "Double", nullable)]
    pub salary_max: Option<f64>,
    pub duration: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub requirements: Option<String>,
    #[sea_orm(column_name = "contact_phone")]
    pub contact_phone: Option<String>,
    #[sea_orm(column_name = "contact_email")]
    pub contact_email: Option<String>,
    #[sea_orm(column_name = "expires_at")]
    pub expires_at: OffsetDateTime,
    pub status: JobStatusDb,
    #[sea_orm(column_name = "is_active")]
    pub is_active: bool,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::EmployerId",
        to = "super::users::Column::Id"
    )]
    Employer,
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id"
    )]
    Category,
    #[sea_orm(has_many = "super::applications::Entity")]
    Applications,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employer.def()
    }
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::applications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applications.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
