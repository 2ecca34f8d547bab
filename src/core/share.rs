// Linkfolio - core/share.rs
//
// Share payload construction for public portfolio links.
// Core layer: pure string building, no I/O.

use crate::core::model::ProfileRecord;
use crate::util::constants;

/// Public portfolio URL for a profile.
///
/// The id is appended as the final path segment, unescaped; ids are
/// URL-safe by construction.
pub fn profile_url(profile: &ProfileRecord) -> String {
    format!("{}/{}", constants::SHARE_LINK_BASE, profile.id)
}

/// Share-sheet message for a profile, wrapping its public URL.
pub fn share_message(profile: &ProfileRecord) -> String {
    format!("Check out my portfolio: {}", profile_url(profile))
}
