//! Process-wide file logging for store and device events.
//!
//! # Invariants
//! - At most one logger is installed per process.
//! - Re-initializing with an equal [`LogConfig`] is a no-op; any other config
//!   is rejected while a logger is active.
//! - Events carry modes, counts and durations only, never book contents.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{info, LevelFilter};
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "bookshelf";
const ROTATE_AT_BYTES: u64 = 5 * 1024 * 1024;
const KEEP_ROTATED_FILES: usize = 3;

static INSTALLED: OnceCell<Installed> = OnceCell::new();

struct Installed {
    config: LogConfig,
    _handle: LoggerHandle,
}

/// Level and directory for the rotating `bookshelf_*.log` files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LevelFilter,
    pub dir: PathBuf,
}

impl LogConfig {
    /// Builds a config from textual input.
    ///
    /// `level` is any `log` level name (case-insensitive, `off` included).
    /// A relative `dir` is resolved against the current working directory.
    pub fn parse(level: &str, dir: impl AsRef<Path>) -> Result<Self, LoggingError> {
        let level = level
            .trim()
            .parse::<LevelFilter>()
            .map_err(|_| LoggingError::UnknownLevel(level.trim().to_string()))?;

        let dir = dir.as_ref();
        if dir.as_os_str().is_empty() {
            return Err(LoggingError::EmptyDirectory);
        }
        let dir = if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            std::env::current_dir()
                .map_err(|err| LoggingError::Io {
                    path: dir.to_path_buf(),
                    source: err,
                })?
                .join(dir)
        };

        Ok(Self { level, dir })
    }

    /// Config at [`default_log_level`] under `dir`.
    pub fn with_default_level(dir: impl AsRef<Path>) -> Result<Self, LoggingError> {
        Self::parse(default_log_level().as_str(), dir)
    }
}

#[derive(Debug)]
pub enum LoggingError {
    UnknownLevel(String),
    EmptyDirectory,
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Backend(flexi_logger::FlexiLoggerError),
    /// A logger with a different config is already running.
    AlreadyActive {
        active: LogConfig,
        requested: LogConfig,
    },
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownLevel(level) => write!(
                f,
                "unknown log level `{level}`; expected off|error|warn|info|debug|trace"
            ),
            Self::EmptyDirectory => f.write_str("log directory cannot be empty"),
            Self::Io { path, source } => {
                write!(f, "log directory `{}` is unusable: {source}", path.display())
            }
            Self::Backend(err) => write!(f, "failed to start file logger: {err}"),
            Self::AlreadyActive { active, requested } => write!(
                f,
                "logging already active at level {} in `{}`; cannot switch to level {} in `{}`",
                active.level,
                active.dir.display(),
                requested.level,
                requested.dir.display()
            ),
        }
    }
}

impl Error for LoggingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Backend(err) => Some(err),
            Self::UnknownLevel(_) | Self::EmptyDirectory | Self::AlreadyActive { .. } => None,
        }
    }
}

/// Installs the file logger described by `config`.
///
/// # Errors
/// - `Io` when the directory cannot be created.
/// - `Backend` when flexi_logger refuses to start.
/// - `AlreadyActive` when a logger with another config is running.
pub fn init_logging(config: &LogConfig) -> Result<(), LoggingError> {
    let installed = INSTALLED.get_or_try_init(|| install(config))?;
    if installed.config != *config {
        return Err(LoggingError::AlreadyActive {
            active: installed.config.clone(),
            requested: config.clone(),
        });
    }
    Ok(())
}

/// Config of the running logger, if one was installed.
pub fn active_log_config() -> Option<LogConfig> {
    INSTALLED.get().map(|installed| installed.config.clone())
}

/// `Debug` in debug builds, `Info` in release builds.
pub fn default_log_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn install(config: &LogConfig) -> Result<Installed, LoggingError> {
    std::fs::create_dir_all(&config.dir).map_err(|err| LoggingError::Io {
        path: config.dir.clone(),
        source: err,
    })?;

    let spec = config.level.as_str().to_ascii_lowercase();
    let handle = Logger::try_with_str(&spec)
        .map_err(LoggingError::Backend)?
        .log_to_file(
            FileSpec::default()
                .directory(config.dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_ROTATED_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(LoggingError::Backend)?;

    info!(
        "event=logging_init module=core status=ok level={spec} version={}",
        env!("CARGO_PKG_VERSION")
    );

    Ok(Installed {
        config: config.clone(),
        _handle: handle,
    })
}
