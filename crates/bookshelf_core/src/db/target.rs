//! Storage target resolution.

use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Designator selecting a transient, connection-scoped database.
pub const MEMORY_DESIGNATOR: &str = ":memory:";

/// Where a store keeps its rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreTarget {
    /// Persistent database file.
    File(PathBuf),
    /// Transient database living exactly as long as the owning store.
    Memory,
}

impl StoreTarget {
    /// Resolves a target string. `":memory:"` selects the transient target;
    /// every other value is taken as a file path verbatim.
    pub fn parse(value: &str) -> Self {
        if value.trim() == MEMORY_DESIGNATOR {
            Self::Memory
        } else {
            Self::File(PathBuf::from(value))
        }
    }

    /// Stable mode label used in log events.
    pub fn mode(&self) -> &'static str {
        match self {
            Self::File(_) => "file",
            Self::Memory => "memory",
        }
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Display for StoreTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Memory => f.write_str(MEMORY_DESIGNATOR),
        }
    }
}

impl From<&str> for StoreTarget {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for StoreTarget {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&Path> for StoreTarget {
    fn from(value: &Path) -> Self {
        Self::File(value.to_path_buf())
    }
}

impl From<PathBuf> for StoreTarget {
    fn from(value: PathBuf) -> Self {
        Self::File(value)
    }
}

impl From<&PathBuf> for StoreTarget {
    fn from(value: &PathBuf) -> Self {
        Self::File(value.clone())
    }
}
