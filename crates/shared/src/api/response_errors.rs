use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::error::{Nothing, ServerError};

macro_rules! response_error {
    ($name:ident {
        $(
            #[code($variant_code:expr)]
            $variant:ident
            $({ $($var_struct_body_tt:tt)* })?
        ,)*
    }) => {

        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
        pub enum $name {
            $(
                #[error("{}::{}: {:?}", stringify!($name), stringify!($variant), self)]
                $variant $({
                    $($var_struct_body_tt)*
                })?,
            )*
        }

        impl From<$name> for ServerError<$name> {
            fn from(inner: $name) -> Self {
                let code = match &inner {
                    $( $name::$variant { .. } => $variant_code, )*
                };
                Self::Inner { code, inner }
            }
        }
    };
}

response_error!(CreateUserError {
    #[code(StatusCode::BAD_REQUEST)]
    UsernameMissing,
});

response_error!(ExerciseError {
    #[code(StatusCode::NOT_FOUND)]
    UserNotFound,
    #[code(StatusCode::BAD_REQUEST)]
    DescriptionMissing,
    #[code(StatusCode::BAD_REQUEST)]
    DurationMissing,
    #[code(StatusCode::BAD_REQUEST)]
    InvalidDuration { value: String },
    #[code(StatusCode::BAD_REQUEST)]
    InvalidDate { value: String },
});

response_error!(LogError {
    #[code(StatusCode::NOT_FOUND)]
    UserNotFound,
    #[code(StatusCode::BAD_REQUEST)]
    InvalidDate { value: String },
});

// Alias used to allow future expansion of the errors without having to go back
// and update all routes that use it
pub type FetchError = Nothing;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_inner_errors_carry_their_status_code() {
        let err: ServerError<ExerciseError> = ExerciseError::UserNotFound.into();
        assert_eq!(err.code(), StatusCode::NOT_FOUND);

        let err: ServerError<ExerciseError> = ExerciseError::InvalidDuration {
            value: "thirty".to_owned(),
        }
        .into();
        assert_eq!(err.code(), StatusCode::BAD_REQUEST);

        let err: ServerError<LogError> = LogError::InvalidDate { value: "x".to_owned() }.into();
        assert_eq!(err.code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_other_errors_are_server_errors() {
        let err: ServerError<CreateUserError> = crate::other_error!("disk on fire");
        assert_eq!(err.code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.inner(), None);
    }

    #[test]
    fn test_error_serializes_with_numeric_code() {
        let err: ServerError<CreateUserError> = CreateUserError::UsernameMissing.into();
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "Inner": { "code": 400, "inner": "UsernameMissing" } })
        );
    }
}
