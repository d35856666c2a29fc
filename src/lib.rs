//! Moon Phase CLI Library
//!
//! This library reports the Moon's phase for a date. It fetches the dated
//! major phases (new moon, first quarter, full moon, last quarter) from the
//! USNO Astronomical Applications API, resolves which of the eight named
//! phases a date falls into, and keeps the last answer in a one-line cache.
//!
//! # Modules
//!
//! - `cli` - Command implementations used by the binary
//! - `config` - Configuration from environment variables and `.env`
//! - `management` - The single-entry phase cache file
//! - `phase` - Phase resolution and output formatting
//! - `types` - Data structures and type definitions
//! - `usno` - USNO phase API client
//! - `utils` - Date parsing and calendar helpers
//!
//! # Example
//!
//! ```
//! use moonphase::{cli, config, management::PhaseCacheManager, usno::UsnoClient};
//!
//! #[tokio::main]
//! async fn main() -> moonphase::Res<()> {
//!     config::load_env().await?;
//!     let request = cli::PhaseRequest {
//!         date: None,
//!         mode: Default::default(),
//!         count: config::phase_count(),
//!         lookback_days: config::lookback_days(),
//!     };
//!     let line = cli::phase(
//!         &request,
//!         &chrono::Local,
//!         &UsnoClient::from_env(),
//!         &PhaseCacheManager::from_config(),
//!     )
//!     .await?;
//!     println!("{}", line);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod management;
pub mod phase;
pub mod types;
pub mod usno;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
///
/// # Example
///
/// ```
/// use moonphase::Res;
///
/// async fn fetch_phase() -> Res<String> {
///     Ok("Full Moon".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// info!("Using phase API at {}", url);
/// info!("Found {} phase events", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations. Used to provide positive feedback
/// when operations complete successfully.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// success!("Cache written to {}", path.display());
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output on stderr with a red "!" indicator and immediately
/// terminates the program with exit code 1. Used for unrecoverable errors
/// that require immediate program termination.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Behavior
///
/// This macro will cause the program to exit immediately after printing
/// the error message. It should only be used for fatal errors where
/// recovery is not possible.
///
/// # Example
///
/// ```
/// error!("Cannot resolve moon phase: {}", err);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted stderr line with a yellow "!" indicator to highlight
/// potential issues or important notices that don't require program termination.
/// Used for recoverable issues or important information that users should notice.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// warning!("Ignoring configuration file: {}", err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
