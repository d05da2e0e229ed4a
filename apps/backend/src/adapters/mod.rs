//! SeaORM adapters. Free functions generic over the connection, returning
//! `DbErr`; the repos layer maps to `DomainError`.

pub mod applications_sea;
pub mod categories_sea;
pub mod jobs_sea;
pub mod users_sea;

use sea_orm::{ConnectionTrait, DbErr, FromQueryResult, QueryTrait};
use tracing::warn;

/// Run an enrichment listing and decode it row by row. A row that fails to
/// decode is logged and skipped; the rest of the listing is returned.
pub(crate) async fn query_lenient<C, Q, R>(
    conn: &C,
    query: Q,
    listing: &'static str,
) -> Result<Vec<R>, DbErr>
where
    C: ConnectionTrait + Send + Sync,
    Q: QueryTrait,
    R: FromQueryResult,
{
    let stmt = query.build(conn.get_database_backend());
    let rows = conn.query_all(stmt).await?;
    let total = rows.len();

    let decoded: Vec<R> = rows
        .iter()
        .enumerate()
        .filter_map(|(idx, row)| match R::from_query_result(row, "") {
            Ok(r) => Some(r),
            Err(e) => {
                warn!(listing, row = idx, error = %e, "skipping malformed listing row");
                None
            }
        })
        .collect();

    if decoded.len() < total {
        warn!(listing, total, kept = decoded.len(), "listing returned partial results");
    }
    Ok(decoded)
}
