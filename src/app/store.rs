// Linkfolio - app/store.rs
//
// The profile store: single owner of the user's own profile record and
// the read-only provider directory. Constructed once at app start and
// passed down by the embedding shell.
//
// Storage failures never surface to the user: a failed load keeps the
// built-in default, a failed save keeps the in-memory update. Both are
// logged and the app keeps working.

use crate::app::persist;
use crate::core::catalog;
use crate::core::model::{ProfileRecord, ProfileUpdate};
use crate::platform::config::PlatformPaths;
use std::path::PathBuf;

/// Owns the mutable my-profile record and the fixed provider directory.
///
/// Readers get references and never block; the single mutation entry
/// point is [`ProfileStore::update_my_profile`]. Until
/// [`ProfileStore::load_on_startup`] completes, readers see the built-in
/// default; the brief window is accepted, matching the startup flow.
#[derive(Debug)]
pub struct ProfileStore {
    /// The user's own record. Starts as the built-in default.
    my_profile: ProfileRecord,

    /// The fixed directory, constructed once and never mutated.
    providers: Vec<ProfileRecord>,

    /// Where the my-profile blob is persisted.
    storage_path: PathBuf,
}

impl ProfileStore {
    /// Create a store persisting to an explicit file path.
    pub fn new(storage_path: PathBuf) -> Self {
        Self {
            my_profile: catalog::default_my_profile(),
            providers: catalog::provider_directory(),
            storage_path,
        }
    }

    /// Create a store persisting to the platform data directory.
    pub fn at_default_location() -> Self {
        let paths = PlatformPaths::resolve();
        Self::new(persist::profile_path(&paths.data_dir))
    }

    /// The current in-memory my-profile record. Never blocks, never fails.
    pub fn my_profile(&self) -> &ProfileRecord {
        &self.my_profile
    }

    /// The fixed provider directory, in display order. Never fails.
    pub fn providers(&self) -> &[ProfileRecord] {
        &self.providers
    }

    /// The combined discovery feed: my profile first, then the directory
    /// in order. This is the slice discovery queries run over.
    pub fn all_profiles(&self) -> Vec<ProfileRecord> {
        let mut feed = Vec::with_capacity(1 + self.providers.len());
        feed.push(self.my_profile.clone());
        feed.extend(self.providers.iter().cloned());
        feed
    }

    /// Look up a profile by id across the combined set, my profile first.
    pub fn find_profile(&self, id: &str) -> Option<&ProfileRecord> {
        if self.my_profile.id == id {
            return Some(&self.my_profile);
        }
        self.providers.iter().find(|p| p.id == id)
    }

    /// Replace the in-memory my-profile from storage, if a persisted copy
    /// exists.
    ///
    /// On absence the built-in default stays. On a read failure the
    /// default stays too; the error is logged and never surfaced. Called
    /// once by the shell during startup.
    pub async fn load_on_startup(&mut self) {
        match persist::load(&self.storage_path).await {
            Ok(Some(record)) => {
                tracing::info!(id = %record.id, "Restored persisted profile");
                self.my_profile = record;
            }
            Ok(None) => {
                tracing::debug!(
                    path = %self.storage_path.display(),
                    "No persisted profile — keeping built-in default"
                );
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.storage_path.display(),
                    error = %e,
                    "Cannot load persisted profile — keeping built-in default"
                );
            }
        }
    }

    /// Apply a partial edit to my profile and persist the merged record.
    ///
    /// The in-memory value is replaced first; the durable write is
    /// best-effort. A write failure is logged and the in-memory update
    /// stands — there is no retry and no rollback.
    pub async fn update_my_profile(&mut self, update: ProfileUpdate) {
        self.my_profile = self.my_profile.apply_update(update);

        if let Err(e) = persist::save(&self.my_profile, &self.storage_path).await {
            tracing::warn!(
                path = %self.storage_path.display(),
                error = %e,
                "Cannot persist profile update — in-memory value kept"
            );
        }
    }
}

// =============================================================================
// Unit tests
// =============================================================================
