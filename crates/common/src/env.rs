//! Environment/runtime helpers
//!
//! Sanity checks run before the store is opened.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

/// Resolve the on-disk file behind a SQLite connection string.
///
/// Returns `None` for non-SQLite URLs and in-memory databases.
pub fn sqlite_file_path(database_url: &str) -> Option<PathBuf> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(PathBuf::from(path))
}

/// Make sure the directory holding a file-backed store exists.
pub async fn ensure_store_dir(database_url: &str) -> anyhow::Result<()> {
    let Some(file) = sqlite_file_path(database_url) else {
        return Ok(());
    };
    match file.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(dir) => create_dir(dir).await?,
        None => info!(file = %file.display(), "sqlite store in working directory"),
    }
    if tokio::fs::metadata(&file).await.is_err() {
        warn!(file = %file.display(), "sqlite store not found; a new one will be created");
    }
    Ok(())
}

async fn create_dir(dir: &Path) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))
}
