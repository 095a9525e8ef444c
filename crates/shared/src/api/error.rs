use std::fmt;

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use deadpool_sqlite::{HookError, InteractError, PoolError};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::error;

/// Error type for routes that have no errors of their own
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Nothing {}

impl fmt::Display for Nothing {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl std::error::Error for Nothing {}

/// Error returned by every route.
///
/// `T` is the route specific error enum (see [`crate::api::response_errors`]),
/// everything else (database, pool, thread interaction) ends up in `Other`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ServerError<T> {
    Inner {
        #[serde(with = "http_serde::status_code")]
        code: StatusCode,
        inner: T,
    },
    Other {
        message: String,
    },
}

#[macro_export]
macro_rules! other_error {
    ($($arg:tt)*) => {
        $crate::api::error::ServerError::Other { message: format!($($arg)*) }
    };
}

impl<T> ServerError<T> {
    pub fn code(&self) -> StatusCode {
        match self {
            ServerError::Inner { code, .. } => *code,
            ServerError::Other { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The route specific error, if that's what this is
    pub fn inner(&self) -> Option<&T> {
        match self {
            ServerError::Inner { inner, .. } => Some(inner),
            ServerError::Other { .. } => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for ServerError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Inner { code, inner } => write!(f, "{code}: {inner}"),
            ServerError::Other { message } => write!(f, "{message}"),
        }
    }
}

impl<T: fmt::Debug + fmt::Display> std::error::Error for ServerError<T> {}

impl<T> From<rusqlite::Error> for ServerError<T> {
    fn from(err: rusqlite::Error) -> Self {
        other_error!("rusqlite error: {err}")
    }
}

impl<T> From<PoolError> for ServerError<T> {
    fn from(err: PoolError) -> Self {
        other_error!("Pool error: {err}")
    }
}

impl<T> From<InteractError> for ServerError<T> {
    fn from(err: InteractError) -> Self {
        other_error!("Interact error: {err:?}")
    }
}

impl<T: fmt::Display> From<ServerError<T>> for HookError {
    fn from(err: ServerError<T>) -> Self {
        HookError::Message(err.to_string())
    }
}

impl<T: Serialize + fmt::Debug> IntoResponse for ServerError<T> {
    fn into_response(self) -> Response {
        let code = self.code();
        if code.is_server_error() {
            error!(error = ?self, "Request failed");
        }
        (code, Json(self)).into_response()
    }
}
