//! CLI smoke entry point.
//!
//! Usage: `bookshelf_cli [TARGET] [LOG_DIR]`
//!
//! Runs the three-book scenario against `TARGET` (`:memory:` when omitted)
//! and prints what the store reports. A file target must have no stored
//! books; the scenario removes the rows it added before exiting. When
//! `LOG_DIR` is given, store events are written there.

use bookshelf_core::{
    core_version, init_logging, Book, BookRepository, BookStore, LogConfig, LoggingError,
    StoreError, StoreTarget, MEMORY_DESIGNATOR,
};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::process::ExitCode;

#[derive(Debug)]
enum CliError {
    Logging(LoggingError),
    Store(StoreError),
    /// The target already holds books; the scenario never touches them.
    TargetNotEmpty { target: String, rows: usize },
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Logging(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::TargetNotEmpty { target, rows } => write!(
                f,
                "target `{target}` already holds {rows} book(s); use an empty database or {MEMORY_DESIGNATOR}"
            ),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Logging(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::TargetNotEmpty { .. } => None,
        }
    }
}

impl From<StoreError> for CliError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<LoggingError> for CliError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ScenarioReport {
    books: usize,
    found_description: Option<String>,
    books_after_delete: usize,
}

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let target = StoreTarget::parse(
        &args
            .next()
            .unwrap_or_else(|| MEMORY_DESIGNATOR.to_string()),
    );
    let log_dir = args.next();

    println!("bookshelf_core version={}", core_version());
    match run(&target, log_dir.as_deref()) {
        Ok(report) => {
            println!("books={}", report.books);
            if let Some(description) = &report.found_description {
                println!("find B description={description}");
            }
            println!("books_after_delete={}", report.books_after_delete);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(target: &StoreTarget, log_dir: Option<&str>) -> Result<ScenarioReport, CliError> {
    if let Some(dir) = log_dir {
        init_logging(&LogConfig::with_default_level(dir)?)?;
    }
    info!(
        "event=cli_start module=cli status=ok mode={} transient={}",
        target.mode(),
        target.is_transient()
    );
    run_scenario(target)
}

fn scenario_books() -> [Book; 3] {
    [
        Book::new("A", "genre1", "author1"),
        Book::new("B", "genre2", "author2"),
        Book::new("C", "genre1", "author3"),
    ]
}

fn run_scenario(target: &StoreTarget) -> Result<ScenarioReport, CliError> {
    BookStore::scoped(target.clone(), |store| {
        store.create_table()?;
        let existing = store.count_books()?;
        if existing > 0 {
            return Err(CliError::TargetNotEmpty {
                target: target.to_string(),
                rows: existing,
            });
        }

        let books = scenario_books();
        for book in &books {
            store.insert_book(book)?;
        }
        let total = store.count_books()?;

        let found = store.find_by_title("B")?;
        if let Some(book) = &found {
            store.delete_book(book)?;
        }
        let after_delete = store.count_books()?;

        for book in &books {
            store.delete_book(book)?;
        }

        Ok(ScenarioReport {
            books: total,
            found_description: found.map(|book| book.description),
            books_after_delete: after_delete,
        })
    })
}
