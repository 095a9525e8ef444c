use chrono::NaiveDate;
use exemplar::Model;
use rusqlite::{Connection, OptionalExtension};
use sea_query::{enum_def, Expr, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_rusqlite::RusqliteBinder;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{model::User, types::Uuid};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Model)]
#[table("exercise")]
#[check("../../../server/migrations/002-exercise/up.sql")]
#[enum_def]
pub struct Exercise {
    pub id: Uuid,
    pub user_id: Uuid,
    pub username: String,
    pub description: String,
    pub duration: i64,
    pub date: NaiveDate,
}

/// The user supplied part of an exercise, already validated
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseDetails {
    pub description: String,
    pub duration: i64,
    pub date: NaiveDate,
}

impl Exercise {
    pub fn new(user: &User, details: ExerciseDetails) -> Self {
        let ExerciseDetails {
            description,
            duration,
            date,
        } = details;

        Self {
            id: Uuid::new_v4(),
            user_id: user.id,
            username: user.username.clone(),
            description,
            duration,
            date,
        }
    }

    fn select_star() -> SelectStatement {
        Query::select()
            .columns([
                ExerciseIden::Id,
                ExerciseIden::UserId,
                ExerciseIden::Username,
                ExerciseIden::Description,
                ExerciseIden::Duration,
                ExerciseIden::Date,
            ])
            .from(ExerciseIden::Table)
            .to_owned()
    }

    pub fn fetch_by_id(conn: &Connection, id: &Uuid) -> Result<Option<Exercise>, rusqlite::Error> {
        let (sql, values) = Self::select_star()
            .and_where(Expr::col(ExerciseIden::Id).eq(id))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt.query_row(&*values.as_params(), Exercise::from_row).optional()?;
        Ok(res)
    }

    /// Stores a new exercise for `user`. The user must already exist
    pub fn create(
        conn: &Connection,
        user: &User,
        details: ExerciseDetails,
    ) -> Result<Exercise, rusqlite::Error> {
        let new_exercise = Exercise::new(user, details);
        new_exercise.insert(conn)?;

        let exercise = Exercise::fetch_by_id(conn, &new_exercise.id)?
            .ok_or(rusqlite::Error::QueryReturnedNoRows)?;
        info!(id = %exercise.id, user_id = %exercise.user_id, "Exercise saved");
        Ok(exercise)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::test_connection;

    fn details(date: NaiveDate) -> ExerciseDetails {
        ExerciseDetails {
            description: "run".to_owned(),
            duration: 30,
            date,
        }
    }

    #[test]
    fn test_create_copies_owner() {
        let mut conn = test_connection();
        let user = User::find_or_create(&mut conn, "runner").unwrap();
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();

        let exercise = Exercise::create(&conn, &user, details(date)).unwrap();

        assert_eq!(exercise.user_id, user.id);
        assert_eq!(exercise.username, "runner");
        assert_eq!(exercise.description, "run");
        assert_eq!(exercise.duration, 30);
        assert_eq!(exercise.date, date);
        assert_ne!(exercise.id, user.id);
    }

    #[test]
    fn test_create_requires_existing_user() {
        let conn = test_connection();
        let ghost = User {
            id: Uuid::new_v4(),
            username: "ghost".to_owned(),
        };
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();

        assert!(Exercise::create(&conn, &ghost, details(date)).is_err());
    }
}
