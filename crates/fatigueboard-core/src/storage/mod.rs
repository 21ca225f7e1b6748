mod config;
pub mod snapshot;

pub use config::{Config, DisplayConfig};
pub use snapshot::{Snapshot, SnapshotError, SnapshotStore, SCHEMA_VERSION};

use std::path::PathBuf;

/// Returns the data directory, creating it if needed.
///
/// `FATIGUEBOARD_DATA_DIR` overrides the location. Otherwise this is
/// `~/.config/fatigueboard[-dev]/`, with the `-dev` suffix selected by
/// `FATIGUEBOARD_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = match std::env::var_os("FATIGUEBOARD_DATA_DIR") {
        Some(custom) if !custom.is_empty() => PathBuf::from(custom),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env =
                std::env::var("FATIGUEBOARD_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("fatigueboard-dev")
            } else {
                base_dir.join("fatigueboard")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
