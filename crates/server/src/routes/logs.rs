use axum::{
    extract::{Path, Query},
    Json,
};
use shared::{
    api::{
        error::ServerError,
        payloads::{LogQuery, LogResponse},
        response_errors::LogError,
    },
    model::LogEntry,
};
use tracing::instrument;

use super::find_user;
use crate::db::DatabaseConnection;

#[instrument(skip(conn))]
pub async fn fetch_log(
    DatabaseConnection(conn): DatabaseConnection,
    Path(user_id): Path<String>,
    Query(query): Query<LogQuery>,
) -> Result<Json<LogResponse>, ServerError<LogError>> {
    let response = conn
        .interact(move |conn| {
            let user = find_user(conn, &user_id)?.ok_or(LogError::UserNotFound)?;
            let filter = query.filter()?;

            let log = LogEntry::fetch_for_user(conn, &user.id, &filter)?;
            let count = LogEntry::count_for_user(conn, &user.id, &filter)?;

            Ok::<_, ServerError<LogError>>(LogResponse::new(user, count, log))
        })
        .await??;

    Ok(Json(response))
}
