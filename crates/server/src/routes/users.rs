use axum::{Form, Json};
use shared::{
    api::{
        error::ServerError,
        payloads::CreateUserRequest,
        response_errors::{CreateUserError, FetchError},
    },
    model::User,
};
use tracing::instrument;

use crate::db::DatabaseConnection;

#[instrument(skip(conn))]
pub async fn create_user(
    DatabaseConnection(conn): DatabaseConnection,
    Form(req): Form<CreateUserRequest>,
) -> Result<Json<User>, ServerError<CreateUserError>> {
    let username = req.username()?.to_owned();

    let user = conn
        .interact(move |conn| {
            Ok::<_, ServerError<CreateUserError>>(User::find_or_create(conn, username)?)
        })
        .await??;

    Ok(Json(user))
}

#[instrument(skip(conn))]
pub async fn fetch_users(
    DatabaseConnection(conn): DatabaseConnection,
) -> Result<Json<Vec<User>>, ServerError<FetchError>> {
    let users = conn
        .interact(|conn| Ok::<_, ServerError<FetchError>>(User::fetch_all(conn)?))
        .await??;

    Ok(Json(users))
}
