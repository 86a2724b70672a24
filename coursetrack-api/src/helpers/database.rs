use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::database::Database;

/// Returns the default path of the tracker database
///
/// # Platform-specific paths
///
/// - **macOS**: `~/Library/Application Support/coursetrack/db.sqlite3`
/// - **Linux**: `~/.local/share/coursetrack/db.sqlite3`
/// - **Windows**: `%LOCALAPPDATA%\coursetrack\db.sqlite3`
pub fn get_db_path() -> anyhow::Result<PathBuf> {
    let data_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;

    Ok(data_dir.join("coursetrack").join("db.sqlite3"))
}

/// Open the database at `path`, or at the default location when none is configured
pub fn initialize_database(path: Option<&Path>) -> anyhow::Result<(Arc<Database>, PathBuf)> {
    let db_path = match path {
        Some(path) => path.to_path_buf(),
        None => get_db_path()?,
    };

    let db = Database::new(&db_path)?;
    Ok((Arc::new(db), db_path))
}
