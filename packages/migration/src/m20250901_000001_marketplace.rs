use sea_orm_migration::sea_orm::{self, Statement};
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::extension::postgres::Type as PgType;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Query, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Users {
    Table,
    Id,
    Email,
    PasswordHash,
    FullName,
    Role,
    Phone,
    Location,
    Bio,
    AvatarUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Categories {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Jobs {
    Table,
    Id,
    EmployerId,
    Title,
    Description,
    CategoryId,
    Location,
    SalaryMin,
    SalaryMax,
    Duration,
    Requirements,
    ContactPhone,
    ContactEmail,
    ExpiresAt,
    Status,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Applications {
    Table,
    Id,
    JobId,
    WorkerId,
    CoverLetter,
    Status,
    AppliedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum UserRoleEnum {
    #[iden = "user_role"]
    Type,
}

#[derive(Iden)]
enum JobStatusEnum {
    #[iden = "job_status"]
    Type,
}

#[derive(Iden)]
enum ApplicationStatusEnum {
    #[iden = "application_status"]
    Type,
}

/// Unique index backing "one application per (job, worker)".
pub const APPLICATIONS_JOB_WORKER_UNIQUE: &str = "applications_job_id_worker_id_key";
/// Unique index on users.email.
pub const USERS_EMAIL_UNIQUE: &str = "users_email_key";

const SEED_CATEGORIES: [&str; 6] = [
    "Construction",
    "Cleaning",
    "Delivery",
    "Hospitality",
    "Agriculture",
    "Other",
];

async fn enum_exists(manager: &SchemaManager<'_>, enum_name: &str) -> Result<bool, DbErr> {
    let result = manager
        .get_connection()
        .query_one(Statement::from_string(
            sea_orm::DatabaseBackend::Postgres,
            format!("SELECT 1 FROM pg_type WHERE typname = '{enum_name}'"),
        ))
        .await?;
    Ok(result.is_some())
}

async fn create_enums(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    match manager.get_database_backend() {
        sea_orm::DatabaseBackend::Postgres => {
            if !enum_exists(manager, "user_role").await? {
                manager
                    .create_type(
                        PgType::create()
                            .as_enum(UserRoleEnum::Type)
                            .values(["worker", "employer"])
                            .to_owned(),
                    )
                    .await?;
            }
            if !enum_exists(manager, "job_status").await? {
                manager
                    .create_type(
                        PgType::create()
                            .as_enum(JobStatusEnum::Type)
                            .values(["open", "closed"])
                            .to_owned(),
                    )
                    .await?;
            }
            if !enum_exists(manager, "application_status").await? {
                manager
                    .create_type(
                        PgType::create()
                            .as_enum(ApplicationStatusEnum::Type)
                            .values(["pending", "accepted", "rejected"])
                            .to_owned(),
                    )
                    .await?;
            }
            Ok(())
        }
        // SQLite stores the enum columns as TEXT
        sea_orm::DatabaseBackend::Sqlite => Ok(()),
        _ => Err(DbErr::Custom("Unsupported database backend".into())),
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        create_enums(manager).await?;

        // users
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::FullName).string().not_null())
                    .col(
                        ColumnDef::new(Users::Role)
                            .custom(UserRoleEnum::Type)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Users::Phone).string().null())
                    .col(ColumnDef::new(Users::Location).string().null())
                    .col(ColumnDef::new(Users::Bio).text().null())
                    .col(ColumnDef::new(Users::AvatarUrl).string().null())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(USERS_EMAIL_UNIQUE)
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // categories
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Categories::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(Categories::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        let mut seed = Query::insert();
        seed.into_table(Categories::Table).columns([Categories::Name]);
        for name in SEED_CATEGORIES {
            seed.values([name.into()])
                .map_err(|e| DbErr::Custom(format!("category seed: {e}")))?;
        }
        manager.exec_stmt(seed).await?;

        // jobs
        manager
            .create_table(
                Table::create()
                    .table(Jobs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Jobs::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Jobs::EmployerId).big_integer().not_null())
                    .col(ColumnDef::new(Jobs::Title).string().not_null())
                    .col(ColumnDef::new(Jobs::Description).text().not_null())
                    .col(ColumnDef::new(Jobs::CategoryId).big_integer().null())
                    .col(ColumnDef::new(Jobs::Location).string().not_null())
                    .col(ColumnDef::new(Jobs::SalaryMin).double().null())
                    .col(ColumnDef::new(Jobs::SalaryMax).double().null())
                    .col(ColumnDef::new(Jobs::Duration).string().null())
                    .col(ColumnDef::new(Jobs::Requirements).text().null())
                    .col(ColumnDef::new(Jobs::ContactPhone).string().null())
                    .col(ColumnDef::new(Jobs::ContactEmail).string().null())
                    .col(
                        ColumnDef::new(Jobs::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Jobs::Status)
                            .custom(JobStatusEnum::Type)
                            .not_null()
                            .default("open"),
                    )
                    .col(
                        ColumnDef::new(Jobs::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Jobs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Jobs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_jobs_employer_id")
                            .from(Jobs::Table, Jobs::EmployerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_jobs_category_id")
                            .from(Jobs::Table, Jobs::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // open-job browsing filters on these and sorts by created_at
        manager
            .create_index(
                Index::create()
                    .name("ix_jobs_open_listing")
                    .table(Jobs::Table)
                    .col(Jobs::Status)
                    .col(Jobs::IsActive)
                    .col(Jobs::ExpiresAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_jobs_employer_id")
                    .table(Jobs::Table)
                    .col(Jobs::EmployerId)
                    .to_owned(),
            )
            .await?;

        // applications
        manager
            .create_table(
                Table::create()
                    .table(Applications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Applications::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Applications::JobId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Applications::WorkerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Applications::CoverLetter).text().null())
                    .col(
                        ColumnDef::new(Applications::Status)
                            .custom(ApplicationStatusEnum::Type)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Applications::AppliedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Applications::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_applications_job_id")
                            .from(Applications::Table, Applications::JobId)
                            .to(Jobs::Table, Jobs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_applications_worker_id")
                            .from(Applications::Table, Applications::WorkerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(APPLICATIONS_JOB_WORKER_UNIQUE)
                    .table(Applications::Table)
                    .col(Applications::JobId)
                    .col(Applications::WorkerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_applications_worker_id")
                    .table(Applications::Table)
                    .col(Applications::WorkerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order + drop index before table
        manager
            .drop_index(
                Index::drop()
                    .name("ix_applications_worker_id")
                    .table(Applications::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(APPLICATIONS_JOB_WORKER_UNIQUE)
                    .table(Applications::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Applications::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_jobs_employer_id")
                    .table(Jobs::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_jobs_open_listing")
                    .table(Jobs::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Jobs::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(USERS_EMAIL_UNIQUE)
                    .table(Users::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        // Drop enum types (PostgreSQL only)
        match manager.get_database_backend() {
            sea_orm::DatabaseBackend::Postgres => {
                manager
                    .drop_type(
                        PgType::drop()
                            .name(ApplicationStatusEnum::Type)
                            .if_exists()
                            .to_owned(),
                    )
                    .await?;

                manager
                    .drop_type(
                        PgType::drop()
                            .name(JobStatusEnum::Type)
                            .if_exists()
                            .to_owned(),
                    )
                    .await?;

                manager
                    .drop_type(
                        PgType::drop()
                            .name(UserRoleEnum::Type)
                            .if_exists()
                            .to_owned(),
                    )
                    .await?;
            }
            sea_orm::DatabaseBackend::Sqlite => {
                // SQLite doesn't have enum types to drop
            }
            _ => {
                return Err(DbErr::Custom("Unsupported database backend".into()));
            }
        }

        Ok(())
    }
}
