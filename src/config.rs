//! Configuration management for moonphase.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory. Every setting has a default, so the tool
//! works without any configuration at all.
//!
//! Lookup order:
//! 1. Command-line flags (handled by the caller)
//! 2. Environment variables
//! 3. `.env` file in the local data directory
//! 4. Built-in defaults

use std::{env, path::PathBuf, str::FromStr};

pub const DEFAULT_API_URL: &str = "https://aa.usno.navy.mil/api/moon/phases/date";
pub const DEFAULT_PHASE_COUNT: u32 = 4;
pub const DEFAULT_LOOKBACK_DAYS: u32 = 9;
pub const DEFAULT_SAVE_FILE_NAME: &str = ".moonphase";

/// Loads environment variables from `moonphase/.env` in the local data directory.
///
/// The file is optional. Variables already present in the process
/// environment are not overridden.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/moonphase/.env`
/// - macOS: `~/Library/Application Support/moonphase/.env`
/// - Windows: `%LOCALAPPDATA%/moonphase/.env`
///
/// # Errors
///
/// Returns an error string if the file exists but cannot be read or parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if !async_fs::metadata(&path).await.is_ok_and(|m| m.is_file()) {
        return Ok(());
    }

    dotenv::from_path(&path)
        .map(|_| ())
        .map_err(|e| format!("{}: {}", path.display(), e))
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("moonphase/.env");
    path
}

/// Base URL of the phase endpoint (`MOONPHASE_API_URL`).
pub fn api_url() -> String {
    env::var("MOONPHASE_API_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Number of phase events requested per fetch (`MOONPHASE_PHASE_COUNT`).
pub fn phase_count() -> u32 {
    parse_var("MOONPHASE_PHASE_COUNT")
        .filter(|count| *count > 0)
        .unwrap_or(DEFAULT_PHASE_COUNT)
}

/// Days between the start of the fetched window and the target date
/// (`MOONPHASE_LOOKBACK_DAYS`).
///
/// Consecutive major phases are at most about 8.2 days apart, so nine days
/// always leaves at least one event before the target. Zero can never
/// bracket the target and falls back to the default.
pub fn lookback_days() -> u32 {
    parse_var("MOONPHASE_LOOKBACK_DAYS")
        .filter(|days| *days > 0)
        .unwrap_or(DEFAULT_LOOKBACK_DAYS)
}

/// Location of the single-entry phase cache (`MOONPHASE_SAVE_FILE`),
/// defaulting to `~/.moonphase`.
pub fn save_file() -> PathBuf {
    if let Some(path) = env::var_os("MOONPHASE_SAVE_FILE").filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }

    let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(DEFAULT_SAVE_FILE_NAME);
    path
}

fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|value| value.trim().parse().ok())
}
