//! Book repository contract and its SQLite-backed store.
//!
//! # Responsibility
//! - Own exactly one connection to one storage target.
//! - Provide CRUD and full-scan reads over the `books` table.
//!
//! # Invariants
//! - Each public operation reads or writes rows with a single SQL statement,
//!   so a write is applied whole or not at all. The preceding `sqlite_master`
//!   check is a separate read.
//! - When several rows share a title, lookups, updates and deletes act on the
//!   row with the lowest internal id.
//! - The internal `id` column never leaves this module.

use crate::db::schema::{create_books_table, table_exists, BOOKS_TABLE};
use crate::db::{open_connection, StoreError, StoreResult, StoreTarget};
use crate::model::book::Book;
use log::{debug, error, info};
use rusqlite::{params, Connection, OptionalExtension, Row};

const BOOK_SELECT_SQL: &str = "SELECT title, description, author FROM books";

/// Data access contract for books, keyed by title.
pub trait BookRepository {
    /// Ensures the backing table exists. Safe to repeat; keeps rows.
    fn create_table(&self) -> StoreResult<()>;
    /// Appends one row. Title collisions are not checked.
    fn insert_book(&self, book: &Book) -> StoreResult<()>;
    /// Returns every row in insertion order.
    fn get_all_books(&self) -> StoreResult<Vec<Book>>;
    /// Exact, case-sensitive title match.
    fn find_by_title(&self, title: &str) -> StoreResult<Option<Book>>;
    /// Overwrites description and author of the row titled `book.title`.
    ///
    /// Returns the number of rows changed (0 when the title is absent).
    fn update_book(&self, book: &Book) -> StoreResult<usize>;
    /// Removes the row titled `book.title`.
    ///
    /// Returns the number of rows removed (0 when the title is absent).
    fn delete_book(&self, book: &Book) -> StoreResult<usize>;
    /// Removes all rows, keeping the table.
    fn clear_table(&self) -> StoreResult<()>;
    /// Returns the number of stored rows.
    fn count_books(&self) -> StoreResult<usize>;
}

/// SQLite-backed book store owning a single connection.
///
/// Release the connection with [`BookStore::close`], or use
/// [`BookStore::scoped`] to have it released on every exit path.
pub struct BookStore {
    conn: Connection,
    target: StoreTarget,
}

impl BookStore {
    /// Opens a store bound to `target`.
    ///
    /// `&str` targets are parsed, so `":memory:"` selects a transient database
    /// whose rows disappear when the store is closed.
    ///
    /// # Errors
    /// - `StorageUnavailable` when the target cannot be opened or read.
    pub fn open(target: impl Into<StoreTarget>) -> StoreResult<Self> {
        let target = target.into();
        let conn = open_connection(&target)?;
        info!(
            "event=store_open module=store status=ok mode={}",
            target.mode()
        );
        Ok(Self { conn, target })
    }

    pub fn open_in_memory() -> StoreResult<Self> {
        Self::open(StoreTarget::Memory)
    }

    /// Opens a store, hands it to `work`, and closes it afterwards whether or
    /// not `work` succeeded.
    ///
    /// `work` may use its own error type as long as store errors convert into
    /// it. An error from `work` takes precedence over an error from closing.
    pub fn scoped<T, E, F>(target: impl Into<StoreTarget>, work: F) -> Result<T, E>
    where
        E: From<StoreError>,
        F: FnOnce(&BookStore) -> Result<T, E>,
    {
        let store = Self::open(target)?;
        let outcome = work(&store);
        let closed = store.close();

        match (outcome, closed) {
            (Ok(value), Ok(())) => Ok(value),
            (Err(err), _) => Err(err),
            (Ok(_), Err(err)) => Err(err.into()),
        }
    }

    pub fn target(&self) -> &StoreTarget {
        &self.target
    }

    /// Releases the connection. Consuming `self` makes any later use of the
    /// store a compile error.
    pub fn close(self) -> StoreResult<()> {
        let mode = self.target.mode();
        match self.conn.close() {
            Ok(()) => {
                info!("event=store_close module=store status=ok mode={mode}");
                Ok(())
            }
            Err((_conn, err)) => {
                error!(
                    "event=store_close module=store status=error mode={mode} error={err}"
                );
                Err(StoreError::Close(err))
            }
        }
    }

    fn ensure_schema(&self) -> StoreResult<()> {
        if table_exists(&self.conn, BOOKS_TABLE)? {
            Ok(())
        } else {
            Err(StoreError::SchemaMissing(BOOKS_TABLE))
        }
    }
}

impl BookRepository for BookStore {
    fn create_table(&self) -> StoreResult<()> {
        create_books_table(&self.conn)?;
        debug!("event=table_create module=store status=ok table={BOOKS_TABLE}");
        Ok(())
    }

    fn insert_book(&self, book: &Book) -> StoreResult<()> {
        self.ensure_schema()?;
        self.conn.execute(
            "INSERT INTO books (title, description, author) VALUES (?1, ?2, ?3);",
            params![
                book.title.as_str(),
                book.description.as_str(),
                book.author.as_str()
            ],
        )?;
        debug!("event=book_insert module=store status=ok");
        Ok(())
    }

    fn get_all_books(&self) -> StoreResult<Vec<Book>> {
        self.ensure_schema()?;
        let mut stmt = self
            .conn
            .prepare(&format!("{BOOK_SELECT_SQL} ORDER BY id ASC;"))?;
        let books = stmt
            .query_map([], parse_book_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        debug!(
            "event=book_list module=store status=ok count={}",
            books.len()
        );
        Ok(books)
    }

    fn find_by_title(&self, title: &str) -> StoreResult<Option<Book>> {
        self.ensure_schema()?;
        let book = self
            .conn
            .query_row(
                &format!("{BOOK_SELECT_SQL} WHERE title = ?1 ORDER BY id ASC LIMIT 1;"),
                [title],
                parse_book_row,
            )
            .optional()?;
        debug!(
            "event=book_find module=store status=ok found={}",
            book.is_some()
        );
        Ok(book)
    }

    fn update_book(&self, book: &Book) -> StoreResult<usize> {
        self.ensure_schema()?;
        let changed = self.conn.execute(
            "UPDATE books
             SET
                description = ?1,
                author = ?2
             WHERE id = (
                SELECT id FROM books WHERE title = ?3 ORDER BY id ASC LIMIT 1
             );",
            params![
                book.description.as_str(),
                book.author.as_str(),
                book.title.as_str()
            ],
        )?;
        debug!("event=book_update module=store status=ok rows={changed}");
        Ok(changed)
    }

    fn delete_book(&self, book: &Book) -> StoreResult<usize> {
        self.ensure_schema()?;
        let removed = self.conn.execute(
            "DELETE FROM books
             WHERE id = (
                SELECT id FROM books WHERE title = ?1 ORDER BY id ASC LIMIT 1
             );",
            [book.title.as_str()],
        )?;
        debug!("event=book_delete module=store status=ok rows={removed}");
        Ok(removed)
    }

    fn clear_table(&self) -> StoreResult<()> {
        self.ensure_schema()?;
        let removed = self.conn.execute("DELETE FROM books;", [])?;
        debug!("event=table_clear module=store status=ok rows={removed}");
        Ok(())
    }

    fn count_books(&self) -> StoreResult<usize> {
        self.ensure_schema()?;
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM books;", [], |row| row.get(0))?;
        Ok(count)
    }
}

fn parse_book_row(row: &Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        title: row.get("title")?,
        description: row.get("description")?,
        author: row.get("author")?,
    })
}

#[cfg(test)]
mod tests {
    use super::{BookRepository, BookStore};
    use crate::db::StoreError;
    use crate::model::book::Book;

    #[test]
    fn duplicate_titles_resolve_to_lowest_id() {
        let store = BookStore::open_in_memory().unwrap();
        store.create_table().unwrap();
        store.insert_book(&Book::new("Twin", "first", "a")).unwrap();
        store.insert_book(&Book::new("Twin", "second", "b")).unwrap();

        let found = store.find_by_title("Twin").unwrap().unwrap();
        assert_eq!(found.description, "first");

        let changed = store.update_book(&Book::new("Twin", "edited", "c")).unwrap();
        assert_eq!(changed, 1);
        let all = store.get_all_books().unwrap();
        assert_eq!(all[0].description, "edited");
        assert_eq!(all[1].description, "second");

        assert_eq!(store.delete_book(&found).unwrap(), 1);
        let remaining = store.find_by_title("Twin").unwrap().unwrap();
        assert_eq!(remaining.description, "second");
        store.close().unwrap();
    }

    #[test]
    fn operations_before_create_table_report_missing_schema() {
        let store = BookStore::open_in_memory().unwrap();
        let book = Book::new("A", "genre1", "author1");

        assert!(matches!(
            store.insert_book(&book),
            Err(StoreError::SchemaMissing("books"))
        ));
        assert!(matches!(
            store.get_all_books(),
            Err(StoreError::SchemaMissing(_))
        ));
        assert!(matches!(
            store.find_by_title("A"),
            Err(StoreError::SchemaMissing(_))
        ));
        assert!(matches!(
            store.update_book(&book),
            Err(StoreError::SchemaMissing("books"))
        ));
        assert!(matches!(
            store.clear_table(),
            Err(StoreError::SchemaMissing(_))
        ));
        store.close().unwrap();
    }
}
