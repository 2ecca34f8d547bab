// Linkfolio - platform/config.rs
//
// Platform data directory resolution.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance. The app exposes no configuration file, so
// the platform concern reduces to where the profile blob lives.

use crate::util::constants;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Resolved platform paths for Linkfolio data.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Data directory holding the persisted profile blob
    /// (e.g. ~/.local/share/linkfolio/ or %APPDATA%\Linkfolio\data\).
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be
    /// determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let data_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(data = %data_dir.display(), "Platform paths resolved");

            Self { data_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                data_dir: PathBuf::from("."),
            }
        }
    }
}
