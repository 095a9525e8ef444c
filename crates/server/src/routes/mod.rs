use axum::{
    extract::FromRef,
    routing::{get, post},
    Router,
};
use deadpool_sqlite::Pool;
use rusqlite::Connection;
use shared::{api::Object, model::User, types::Uuid};

mod ping;
pub use ping::*;

mod users;
pub use users::*;

mod exercises;
pub use exercises::*;

mod logs;
pub use logs::*;

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    Pool: FromRef<S>,
{
    Router::new()
        .route(Object::Users.path(), get(fetch_users).post(create_user))
        .route(Object::UserExercises.path(), post(create_exercise))
        .route(Object::UserLogs.path(), get(fetch_log))
        .route(Object::Ping.path(), get(ping))
}

/// Looks up the user named by a path segment. An id that isn't a valid uuid
/// can't belong to anyone so it's treated as missing
fn find_user(conn: &Connection, id: &str) -> Result<Option<User>, rusqlite::Error> {
    match Uuid::parse(id) {
        Ok(id) => User::fetch_by_id(conn, &id),
        Err(_) => Ok(None),
    }
}
