mod user;
pub use user::*;

mod exercise;
pub use exercise::*;

mod log;
pub use log::*;

/// In-memory database with the server's schema applied
#[cfg(test)]
pub(crate) fn test_connection() -> rusqlite::Connection {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    conn.pragma_update(None, "foreign_keys", "ON").unwrap();
    conn.execute_batch(include_str!("../../../server/migrations/001-user/up.sql"))
        .unwrap();
    conn.execute_batch(include_str!("../../../server/migrations/002-exercise/up.sql"))
        .unwrap();
    conn
}
