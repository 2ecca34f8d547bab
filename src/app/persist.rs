// Linkfolio - app/persist.rs
//
// Durable storage for the user's own profile: one JSON document in the
// platform data directory, surviving application restarts.
//
// Design principles:
// - Saves are atomic (write→temp, rename→final) so a crash during save
//   never corrupts the previous good record.
// - The data directory is created on first save; no user action required.
// - There is no schema version and no migration. Absent fields in an
//   older blob load as their defaults; an unreadable blob is a typed
//   error the store recovers from.
// - Errors are returned, not logged; the store owns the logging and the
//   never-surface-to-the-user rule.

use crate::core::model::ProfileRecord;
use crate::util::constants::{MAX_PROFILE_FILE_SIZE, PROFILE_FILE_NAME};
use crate::util::error::{StorageReadError, StorageWriteError};
use std::path::{Path, PathBuf};

/// Resolve the profile file path from the platform data directory.
pub fn profile_path(data_dir: &Path) -> PathBuf {
    data_dir.join(PROFILE_FILE_NAME)
}

/// Save `record` to `path` atomically (write temp → rename).
///
/// Creates all parent directories as needed. A crash between write and
/// rename loses the new record but never corrupts the previous one
/// (rename is atomic on all supported platforms).
pub async fn save(record: &ProfileRecord, path: &Path) -> Result<(), StorageWriteError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| StorageWriteError::Io {
                path: parent.to_path_buf(),
                operation: "create data directory",
                source: e,
            })?;
    }

    let json = serde_json::to_string_pretty(record).map_err(|e| StorageWriteError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;

    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, json.as_bytes())
        .await
        .map_err(|e| StorageWriteError::Io {
            path: tmp.clone(),
            operation: "write temp file",
            source: e,
        })?;

    if let Err(e) = tokio::fs::rename(&tmp, path).await {
        // Clean up the temp file on failure; ignore any secondary error.
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(StorageWriteError::Io {
            path: path.to_path_buf(),
            operation: "rename temp file",
            source: e,
        });
    }

    tracing::debug!(path = %path.display(), "Profile saved");
    Ok(())
}

/// Load the persisted profile record from `path`.
///
/// Returns `Ok(None)` when no record has ever been saved (normal first
/// run). Any other failure — unreadable file, oversized blob, malformed
/// JSON — is a typed error; the caller keeps its in-memory value.
pub async fn load(path: &Path) -> Result<Option<ProfileRecord>, StorageReadError> {
    let metadata = match tokio::fs::metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(StorageReadError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    if metadata.len() > MAX_PROFILE_FILE_SIZE {
        return Err(StorageReadError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size: MAX_PROFILE_FILE_SIZE,
        });
    }

    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(StorageReadError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    let record: ProfileRecord =
        serde_json::from_str(&content).map_err(|e| StorageReadError::Malformed {
            path: path.to_path_buf(),
            source: e,
        })?;

    tracing::debug!(path = %path.display(), id = %record.id, "Profile loaded");
    Ok(Some(record))
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog;
    use tempfile::TempDir;

    fn sample_record() -> ProfileRecord {
        let mut record = catalog::default_my_profile();
        record.name = "Karthick Raja".to_string();
        record.color = Some("#7C93FF".to_string());
        record
    }

    /// Save and load must round-trip all fields accurately.
    #[tokio::test]
    async fn test_profile_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = profile_path(dir.path());
        let original = sample_record();

        save(&original, &path).await.expect("save should succeed");
        let loaded = load(&path)
            .await
            .expect("load should succeed")
            .expect("record should exist after save");

        assert_eq!(loaded, original);
    }

    /// Load must return Ok(None) when the file does not exist (first run).
    #[tokio::test]
    async fn test_load_missing_file_returns_none() {
        let dir = TempDir::new().unwrap();
        let path = profile_path(dir.path());
        assert!(load(&path).await.unwrap().is_none());
    }

    /// Malformed JSON is a typed read error, never a panic.
    #[tokio::test]
    async fn test_load_malformed_json_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let path = profile_path(dir.path());
        std::fs::write(&path, b"not valid json {{{{").unwrap();

        let err = load(&path).await.unwrap_err();
        assert!(matches!(err, StorageReadError::Malformed { .. }));
    }

    /// Blobs over the size limit are rejected before being read.
    #[tokio::test]
    async fn test_load_oversized_blob_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let path = profile_path(dir.path());
        let oversized = "x".repeat(MAX_PROFILE_FILE_SIZE as usize + 1);
        std::fs::write(&path, oversized).unwrap();

        let err = load(&path).await.unwrap_err();
        assert!(matches!(err, StorageReadError::FileTooLarge { .. }));
    }

    /// An older blob missing newer fields still loads, with defaults.
    #[tokio::test]
    async fn test_load_accepts_older_blob_shape() {
        let dir = TempDir::new().unwrap();
        let path = profile_path(dir.path());
        std::fs::write(&path, br#"{"id":"me-123","name":"Karthick"}"#).unwrap();

        let loaded = load(&path).await.unwrap().unwrap();
        assert_eq!(loaded.id, "me-123");
        assert_eq!(loaded.name, "Karthick");
        assert_eq!(loaded.bio, "");
        assert_eq!(loaded.links.github, "");
    }

    /// Save must create missing parent directories.
    #[tokio::test]
    async fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join(PROFILE_FILE_NAME);

        save(&sample_record(), &path).await.unwrap();
        assert!(load(&path).await.unwrap().is_some());
    }

    /// A leftover temp file (e.g. from a previous crash) must not break
    /// the next save or corrupt the record.
    #[tokio::test]
    async fn test_save_atomic_with_leftover_temp() {
        let dir = TempDir::new().unwrap();
        let path = profile_path(dir.path());

        save(&sample_record(), &path).await.unwrap();

        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, b"garbage").unwrap();

        let mut updated = sample_record();
        updated.bio = "Engineer & Educator".to_string();
        save(&updated, &path).await.unwrap();

        let loaded = load(&path).await.unwrap().unwrap();
        assert_eq!(loaded.bio, "Engineer & Educator");
    }

    /// A write failure reports context for the step that failed.
    #[tokio::test]
    async fn test_save_failure_is_a_typed_write_error() {
        let dir = TempDir::new().unwrap();

        // A regular file where the data directory should be makes
        // directory creation fail.
        let blocker = dir.path().join("blocked");
        std::fs::write(&blocker, b"in the way").unwrap();
        let path = blocker.join(PROFILE_FILE_NAME);

        let err = save(&sample_record(), &path).await.unwrap_err();
        assert!(matches!(
            err,
            StorageWriteError::Io {
                operation: "create data directory",
                ..
            }
        ));
    }
}
