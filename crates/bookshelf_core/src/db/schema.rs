//! `books` table definition.

use rusqlite::Connection;

pub const BOOKS_TABLE: &str = "books";

const CREATE_BOOKS_SQL: &str = "CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    author TEXT NOT NULL
);";

/// Creates the `books` table when absent. Existing rows are untouched.
pub fn create_books_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(CREATE_BOOKS_SQL)
}

/// Returns whether `table_name` exists in the main schema.
pub fn table_exists(conn: &Connection, table_name: &str) -> rusqlite::Result<bool> {
    conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table_name],
        |row| row.get(0),
    )
}
