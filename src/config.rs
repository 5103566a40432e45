//! Configuration management for moviecli.
//!
//! Values are resolved in this order:
//! 1. Command line flags (handled in `main.rs`)
//! 2. Environment variables
//! 3. `.env` file in the local data directory
//! 4. Application defaults

use std::{env, path::PathBuf};

use crate::text::Language;

pub const STORE_PATH_VAR: &str = "MOVIECLI_STORE_PATH";
pub const LANG_VAR: &str = "MOVIECLI_LANG";

/// Loads environment variables from `.env` in the local data directory.
///
/// The directory is created when missing. A missing `.env` file is not an
/// error, every setting has a default.
///
/// - Linux: `~/.local/share/moviecli/.env`
/// - macOS: `~/Library/Application Support/moviecli/.env`
/// - Windows: `%LOCALAPPDATA%/moviecli/.env`
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("moviecli");
    path
}

/// Location of the JSON document store.
///
/// Taken from `MOVIECLI_STORE_PATH`, defaulting to `store/movies.json` inside
/// the data directory.
pub fn store_path() -> PathBuf {
    match env::var(STORE_PATH_VAR) {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => data_dir().join("store/movies.json"),
    }
}

/// Display language from `MOVIECLI_LANG`, English when unset.
pub fn language() -> Result<Language, String> {
    match env::var(LANG_VAR) {
        Ok(lang) if !lang.trim().is_empty() => lang.parse(),
        _ => Ok(Language::default()),
    }
}
