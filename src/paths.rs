use anyhow::{Context, Result};
use std::path::PathBuf;

pub const APP_NAME: &str = "lyricx";

/// Get the application's data directory following XDG standards
/// On Linux: ~/.local/share/lyricx
pub fn get_data_dir() -> Result<PathBuf> {
    let base = dirs::data_local_dir().context("Failed to determine user data directory")?;
    ensure_dir(base.join(APP_NAME))
}

/// Get the application's log directory
pub fn get_log_dir() -> Result<PathBuf> {
    ensure_dir(get_data_dir()?.join("logs"))
}

/// Create `dir` (and parents) if missing
pub fn ensure_dir(dir: PathBuf) -> Result<PathBuf> {
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    tracing::debug!("Using directory: {}", dir.display());
    Ok(dir)
}
