use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    api::response_errors::ExerciseError,
    model::{Exercise, ExerciseDetails},
    types::Uuid,
    utils::{
        date::{date_string, parse_date, today},
        non_empty,
    },
};

/// Form body of `POST /api/users/:id/exercises`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateExerciseRequest {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl CreateExerciseRequest {
    /// A blank date means today
    pub fn details(&self) -> Result<ExerciseDetails, ExerciseError> {
        let description = non_empty(&self.description).ok_or(ExerciseError::DescriptionMissing)?;

        let duration = non_empty(&self.duration).ok_or(ExerciseError::DurationMissing)?;
        let duration = duration
            .trim()
            .parse::<i64>()
            .map_err(|_| ExerciseError::InvalidDuration {
                value: duration.to_owned(),
            })?;

        let date = match non_empty(&self.date) {
            None => today(),
            Some(date) => parse_date(date).ok_or_else(|| ExerciseError::InvalidDate {
                value: date.to_owned(),
            })?,
        };

        Ok(ExerciseDetails {
            description: description.to_owned(),
            duration,
            date,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseResponse {
    pub username: String,
    pub description: String,
    pub duration: i64,
    #[serde(with = "date_string")]
    pub date: NaiveDate,
    /// The owning user's id, not the exercise's
    pub id: Uuid,
    pub exercise_id: Uuid,
}

impl From<Exercise> for ExerciseResponse {
    fn from(exercise: Exercise) -> Self {
        Self {
            username: exercise.username,
            description: exercise.description,
            duration: exercise.duration,
            date: exercise.date,
            id: exercise.user_id,
            exercise_id: exercise.id,
        }
    }
}
