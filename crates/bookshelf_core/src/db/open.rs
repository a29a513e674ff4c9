//! Connection bootstrap for book store targets.
//!
//! # Invariants
//! - A returned connection has already read its target's header page.
//! - Every failure to reach the target maps to `StorageUnavailable`.

use super::{StoreError, StoreResult, StoreTarget};
use log::{error, info};
use rusqlite::Connection;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens a SQLite connection for `target`.
///
/// # Side effects
/// - Creates the database file when it does not exist yet.
/// - Emits `db_open` logging events with duration and status.
pub fn open_connection(target: &StoreTarget) -> StoreResult<Connection> {
    let started_at = Instant::now();
    let mode = target.mode();
    info!("event=db_open module=db status=start mode={mode}");

    let result = match target {
        StoreTarget::File(path) if path.as_os_str().is_empty() => {
            Err(StoreError::StorageUnavailable {
                target: target.to_string(),
                source: None,
            })
        }
        StoreTarget::File(path) => Connection::open(path)
            .and_then(bootstrap_connection)
            .map_err(|err| unavailable(target, err)),
        StoreTarget::Memory => Connection::open_in_memory()
            .and_then(bootstrap_connection)
            .map_err(|err| unavailable(target, err)),
    };

    match &result {
        Ok(_) => info!(
            "event=db_open module=db status=ok mode={mode} duration_ms={}",
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=db_open module=db status=error mode={mode} duration_ms={} error_code=db_open_failed error={}",
            started_at.elapsed().as_millis(),
            err
        ),
    }

    result
}

fn bootstrap_connection(conn: Connection) -> rusqlite::Result<Connection> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    // Opening is lazy; reading the schema cookie forces the file to be touched.
    conn.query_row("PRAGMA schema_version;", [], |row| row.get::<_, i64>(0))?;
    Ok(conn)
}

fn unavailable(target: &StoreTarget, err: rusqlite::Error) -> StoreError {
    StoreError::StorageUnavailable {
        target: target.to_string(),
        source: Some(err),
    }
}
