use exemplar::Model;
use rusqlite::{Connection, OptionalExtension, TransactionBehavior};
use sea_query::{enum_def, Alias, Expr, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_rusqlite::RusqliteBinder;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::types::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Model)]
#[table("user")]
#[check("../../../server/migrations/001-user/up.sql")]
#[enum_def]
pub struct User {
    pub id: Uuid,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Model)]
#[table("user")]
pub struct NewUser {
    pub id: Uuid,
    pub username: String,
}

impl NewUser {
    pub fn new<T: Into<String>>(username: T) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
        }
    }
}

impl User {
    fn select_star() -> SelectStatement {
        Query::select()
            .columns([UserIden::Id, UserIden::Username])
            .from(UserIden::Table)
            .to_owned()
    }

    pub fn fetch_by_id(conn: &Connection, id: &Uuid) -> Result<Option<User>, rusqlite::Error> {
        let (sql, values) = Self::select_star()
            .and_where(Expr::col(UserIden::Id).eq(id))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let user = stmt.query_row(&*values.as_params(), User::from_row).optional()?;
        Ok(user)
    }

    pub fn fetch_by_username<T: AsRef<str>>(
        conn: &Connection,
        username: T,
    ) -> Result<Option<User>, rusqlite::Error> {
        let (sql, values) = Self::select_star()
            .and_where(Expr::col(UserIden::Username).eq(username.as_ref()))
            .order_by(Alias::new("rowid"), Order::Asc)
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let user = stmt.query_row(&*values.as_params(), User::from_row).optional()?;
        Ok(user)
    }

    pub fn fetch_all(conn: &Connection) -> Result<Vec<User>, rusqlite::Error> {
        let (sql, values) = Self::select_star()
            .order_by(Alias::new("rowid"), Order::Asc)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let users = stmt
            .query_map(&*values.as_params(), User::from_row)?
            .collect::<Result<_, _>>()?;
        Ok(users)
    }

    pub fn create(conn: &Connection, new_user: NewUser) -> Result<User, rusqlite::Error> {
        new_user.insert(conn)?;
        let user = User::fetch_by_id(conn, &new_user.id)?
            .ok_or(rusqlite::Error::QueryReturnedNoRows)?;
        info!(id = %user.id, username = %user.username, "User saved");
        Ok(user)
    }

    /// Returns the first user with exactly this username, creating one if
    /// there isn't one yet
    pub fn find_or_create<T: AsRef<str>>(
        conn: &mut Connection,
        username: T,
    ) -> Result<User, rusqlite::Error> {
        let username = username.as_ref();

        // Immediate so two racing requests can't both miss the lookup
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        let user = match User::fetch_by_username(&tx, username)? {
            Some(user) => user,
            None => User::create(&tx, NewUser::new(username))?,
        };
        tx.commit()?;

        Ok(user)
    }
}
