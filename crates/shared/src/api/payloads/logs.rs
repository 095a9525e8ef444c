use serde::{Deserialize, Serialize};

use crate::{
    api::response_errors::LogError,
    model::{LogEntry, LogFilter, User},
    types::Uuid,
    utils::{date::parse_date, leading_number, non_empty},
};

/// Query string of `GET /api/users/:id/logs`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogQuery {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

impl LogQuery {
    /// Dates that are given must parse. The limit is read from its leading
    /// digits, one that doesn't start with a positive number is ignored
    pub fn filter(&self) -> Result<LogFilter, LogError> {
        let from = Self::date(&self.from)?;
        let to = Self::date(&self.to)?;
        let limit = non_empty(&self.limit).and_then(leading_number);

        Ok(LogFilter::new(from, to, limit))
    }

    fn date(value: &Option<String>) -> Result<Option<chrono::NaiveDate>, LogError> {
        non_empty(value)
            .map(|v| {
                parse_date(v).ok_or_else(|| LogError::InvalidDate {
                    value: v.to_owned(),
                })
            })
            .transpose()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogResponse {
    pub username: String,
    pub id: Uuid,
    pub count: i64,
    pub log: Vec<LogEntry>,
}

impl LogResponse {
    pub fn new(user: User, count: i64, log: Vec<LogEntry>) -> Self {
        Self {
            username: user.username,
            id: user.id,
            count,
            log,
        }
    }
}
