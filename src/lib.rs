//! Movie Collection Console Library
//!
//! An interactive, menu driven program for listing, selecting, adding,
//! updating and deleting movie records kept in a document store.
//!
//! # Modules
//!
//! - `cli` - Menu state machine and the flows behind each menu entry
//! - `config` - Configuration management and environment variables
//! - `console` - Line-oriented prompts and status output
//! - `store` - Document store contract and its adapters
//! - `text` - User-facing program text per language
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use moviecli::{cli, console::Console, store::MemoryStore, text::Language};
//!
//! #[tokio::main]
//! async fn main() -> moviecli::Res<()> {
//!     let input = tokio::io::BufReader::new(tokio::io::stdin());
//!     let mut console = Console::new(input, std::io::stdout(), Language::English.messages());
//!     cli::run(MemoryStore::new(), &mut console).await
//! }
//! ```

pub mod cli;
pub mod config;
pub mod console;
pub mod store;
pub mod text;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Flows mix console and store failures, so errors are boxed. The bounds keep
/// results usable across `.await` points.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Using an in-memory store, changes are discarded on exit.");
/// info!("Loaded {} movies", movies.len());
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// This macro will cause the program to exit immediately after printing
/// the error message. It should only be used for fatal errors where
/// recovery is not possible.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues that users should notice.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
