use axum::{extract::Path, Form, Json};
use shared::{
    api::{
        error::ServerError,
        payloads::{CreateExerciseRequest, ExerciseResponse},
        response_errors::ExerciseError,
    },
    model::Exercise,
};
use tracing::instrument;

use super::find_user;
use crate::db::DatabaseConnection;

#[instrument(skip(conn))]
pub async fn create_exercise(
    DatabaseConnection(conn): DatabaseConnection,
    Path(user_id): Path<String>,
    Form(req): Form<CreateExerciseRequest>,
) -> Result<Json<ExerciseResponse>, ServerError<ExerciseError>> {
    let exercise = conn
        .interact(move |conn| {
            let user = find_user(conn, &user_id)?.ok_or(ExerciseError::UserNotFound)?;
            let details = req.details()?;
            let exercise = Exercise::create(conn, &user, details)?;

            Ok::<_, ServerError<ExerciseError>>(exercise)
        })
        .await??;

    Ok(Json(exercise.into()))
}
