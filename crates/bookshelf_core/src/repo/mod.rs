//! Repository layer for persisted books.
//!
//! # Responsibility
//! - Define the book data access contract.
//! - Keep SQL details inside the store implementation.
//!
//! # Invariants
//! - Missing rows are reported as `None` or zero affected rows, never errors.
//! - Table operations fail with `SchemaMissing` until the table exists.

pub mod book_store;
