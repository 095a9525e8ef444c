use chrono::NaiveDate;
use exemplar::Model;
use rusqlite::Connection;
use sea_query::{Alias, Expr, Func, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_rusqlite::RusqliteBinder;
use serde::{Deserialize, Serialize};

use crate::{model::ExerciseIden, types::Uuid, utils::date::date_string};

/// The part of an exercise shown in a user's log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Model)]
#[table("exercise")]
pub struct LogEntry {
    pub description: String,
    pub duration: i64,
    #[serde(with = "date_string")]
    pub date: NaiveDate,
}

/// Inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogFilter {
    pub range: Option<DateRange>,
    pub limit: Option<u64>,
}

impl LogFilter {
    /// The range only applies when both ends are given, a lone bound is
    /// ignored. A limit of 0 means no limit, larger ones are capped to what
    /// sqlite can bind
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>, limit: Option<u64>) -> Self {
        let range = match (from, to) {
            (Some(from), Some(to)) => Some(DateRange { from, to }),
            _ => None,
        };

        Self {
            range,
            limit: limit.filter(|l| *l > 0).map(|l| l.min(i64::MAX as u64)),
        }
    }

    fn apply(&self, user_id: &Uuid, query: &mut SelectStatement) {
        query.and_where(Expr::col(ExerciseIden::UserId).eq(user_id));
        if let Some(DateRange { from, to }) = self.range {
            query.and_where(Expr::col(ExerciseIden::Date).between(from, to));
        }
    }
}

impl LogEntry {
    /// Matching entries ordered by date, then by when they were logged. Only
    /// this is capped by the filter's limit
    pub fn fetch_for_user(
        conn: &Connection,
        user_id: &Uuid,
        filter: &LogFilter,
    ) -> Result<Vec<LogEntry>, rusqlite::Error> {
        let mut query = Query::select()
            .columns([
                ExerciseIden::Description,
                ExerciseIden::Duration,
                ExerciseIden::Date,
            ])
            .from(ExerciseIden::Table)
            .order_by(ExerciseIden::Date, Order::Asc)
            .order_by(Alias::new("rowid"), Order::Asc)
            .to_owned();
        filter.apply(user_id, &mut query);
        if let Some(limit) = filter.limit {
            query.limit(limit);
        }
        let (sql, values) = query.build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt
            .query_map(&*values.as_params(), LogEntry::from_row)?
            .collect::<Result<_, _>>()?;
        Ok(res)
    }

    /// Number of entries matching the filter, ignoring its limit
    pub fn count_for_user(
        conn: &Connection,
        user_id: &Uuid,
        filter: &LogFilter,
    ) -> Result<i64, rusqlite::Error> {
        let mut query = Query::select()
            .expr(Func::count(Expr::col(ExerciseIden::Id)))
            .from(ExerciseIden::Table)
            .to_owned();
        filter.apply(user_id, &mut query);
        let (sql, values) = query.build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        stmt.query_row(&*values.as_params(), |row| row.get(0))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::{test_connection, Exercise, ExerciseDetails, User};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn log(conn: &Connection, user: &User, description: &str, date: NaiveDate) {
        Exercise::create(
            conn,
            user,
            ExerciseDetails {
                description: description.to_owned(),
                duration: 10,
                date,
            },
        )
        .unwrap();
    }

    fn descriptions(entries: &[LogEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.description.as_str()).collect()
    }

    #[test]
    fn test_filter_needs_both_bounds() {
        let filter = LogFilter::new(Some(ymd(2023, 1, 1)), None, None);
        assert_eq!(filter.range, None);

        let filter = LogFilter::new(None, Some(ymd(2023, 1, 1)), None);
        assert_eq!(filter.range, None);

        let filter = LogFilter::new(Some(ymd(2023, 1, 1)), Some(ymd(2023, 1, 2)), None);
        assert_eq!(
            filter.range,
            Some(DateRange {
                from: ymd(2023, 1, 1),
                to: ymd(2023, 1, 2)
            })
        );
    }

    #[test]
    fn test_zero_limit_is_no_limit() {
        assert_eq!(LogFilter::new(None, None, Some(0)).limit, None);
        assert_eq!(LogFilter::new(None, None, Some(3)).limit, Some(3));
        assert_eq!(
            LogFilter::new(None, None, Some(u64::MAX)).limit,
            Some(i64::MAX as u64)
        );
    }

    #[test]
    fn test_range_is_inclusive() {
        let mut conn = test_connection();
        let user = User::find_or_create(&mut conn, "u").unwrap();
        log(&conn, &user, "before", ymd(2022, 12, 31));
        log(&conn, &user, "first", ymd(2023, 1, 1));
        log(&conn, &user, "last", ymd(2023, 1, 31));
        log(&conn, &user, "after", ymd(2023, 2, 1));

        let filter = LogFilter::new(Some(ymd(2023, 1, 1)), Some(ymd(2023, 1, 31)), None);
        let entries = LogEntry::fetch_for_user(&conn, &user.id, &filter).unwrap();

        assert_eq!(descriptions(&entries), ["first", "last"]);
        assert_eq!(LogEntry::count_for_user(&conn, &user.id, &filter).unwrap(), 2);
    }

    #[test]
    fn test_limit_does_not_change_count() {
        let mut conn = test_connection();
        let user = User::find_or_create(&mut conn, "u").unwrap();
        log(&conn, &user, "a", ymd(2023, 1, 2));
        log(&conn, &user, "b", ymd(2023, 1, 1));

        let filter = LogFilter::new(None, None, Some(1));
        let entries = LogEntry::fetch_for_user(&conn, &user.id, &filter).unwrap();

        assert_eq!(descriptions(&entries), ["b"]);
        assert_eq!(LogEntry::count_for_user(&conn, &user.id, &filter).unwrap(), 2);
    }

    #[test]
    fn test_only_the_users_own_entries() {
        let mut conn = test_connection();
        let alice = User::find_or_create(&mut conn, "alice").unwrap();
        let bob = User::find_or_create(&mut conn, "bob").unwrap();
        log(&conn, &alice, "alice's", ymd(2023, 1, 1));
        log(&conn, &bob, "bob's", ymd(2023, 1, 1));

        let filter = LogFilter::default();
        let entries = LogEntry::fetch_for_user(&conn, &bob.id, &filter).unwrap();

        assert_eq!(descriptions(&entries), ["bob's"]);
        assert_eq!(LogEntry::count_for_user(&conn, &bob.id, &filter).unwrap(), 1);
    }

    #[test]
    fn test_entry_serializes_date_string() {
        let entry = LogEntry {
            description: "run".to_owned(),
            duration: 30,
            date: ymd(2023, 1, 1),
        };

        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            serde_json::json!({ "description": "run", "duration": 30, "date": "Sun Jan 01 2023" })
        );
    }
}
