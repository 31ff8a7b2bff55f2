//! Storage locations for the FOKUS server.

use std::path::PathBuf;

/// App data root: `~/Library/Application Support/fokus/` (macOS) or `~/.local/share/fokus/` (Linux).
pub fn app_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("fokus"))
}

/// SQLite database file: `<app_data_dir>/fokus.db`.
pub fn db_path() -> Option<PathBuf> {
    app_data_dir().map(|d| d.join("fokus.db"))
}
