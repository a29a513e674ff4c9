//! Domain model for persisted records.
//!
//! # Invariants
//! - Records carry no storage identifiers; the natural key is the title.

pub mod book;
