use serde::{Deserialize, Serialize};

use crate::{api::response_errors::CreateUserError, utils::non_empty};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: Option<String>,
}

impl CreateUserRequest {
    pub fn username(&self) -> Result<&str, CreateUserError> {
        non_empty(&self.username).ok_or(CreateUserError::UsernameMissing)
    }
}
