// Linkfolio - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Linkfolio";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "Linkfolio";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Profile storage
// =============================================================================

/// Persisted my-profile file name (stored in the platform data directory).
pub const PROFILE_FILE_NAME: &str = "my_profile.json";

/// Maximum size of the persisted profile blob in bytes.  Anything larger is
/// treated as a read failure rather than loaded into memory.
pub const MAX_PROFILE_FILE_SIZE: u64 = 256 * 1024; // 256 KB

// =============================================================================
// Sharing
// =============================================================================

/// Base URL for public portfolio links; the profile id is appended as the
/// final path segment.
pub const SHARE_LINK_BASE: &str = "https://link-app.com/profile";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
