//! Book persistence over SQLite plus a simulated network device
//! configuration manager.

pub mod db;
pub mod device;
pub mod logging;
pub mod model;
pub mod repo;

pub use db::{StoreError, StoreResult, StoreTarget, MEMORY_DESIGNATOR};
pub use device::network_config::{ConfigError, InterfaceState, NetworkConfigManager};
pub use logging::{active_log_config, default_log_level, init_logging, LogConfig, LoggingError};
pub use model::book::Book;
pub use repo::book_store::{BookRepository, BookStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
