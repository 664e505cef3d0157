//! File System Utilities
//!
//! Configuration and data directory management.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "cyenx", "catalog-scroll").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/catalog-scroll/` or `$XDG_CONFIG_HOME/catalog-scroll/`
/// - **macOS**: `~/Library/Application Support/com.cyenx.catalog-scroll/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\cyenx\catalog-scroll\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    let config_dir = dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}

/// Get the data directory, used for log files
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/catalog-scroll/`
/// - **macOS**: `~/Library/Application Support/com.cyenx.catalog-scroll/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\cyenx\catalog-scroll\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    let data_dir = dirs.data_dir();

    if !data_dir.exists() {
        fs::create_dir_all(data_dir)?;
    }

    Ok(data_dir.to_path_buf())
}
