// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Local staging copy of the mission file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::UploadError;

/// A renamed copy of the mission file, removed when dropped.
///
/// Call [`StagingFile::remove`] on the success path to surface removal
/// errors; on early returns the drop handler cleans up instead.
pub struct StagingFile {
    path: PathBuf,
    armed: bool,
}

impl StagingFile {
    /// Copy `source` to `path`, overwriting any previous copy.
    pub fn create(source: &Path, path: PathBuf) -> Result<Self, UploadError> {
        fs::copy(source, &path).map_err(|e| {
            UploadError::io(
                format!("Failed to copy {} to {}", source.display(), path.display()),
                e,
            )
        })?;
        Ok(Self { path, armed: true })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the staging copy now.
    pub fn remove(mut self) -> Result<(), UploadError> {
        self.armed = false;
        fs::remove_file(&self.path)
            .map_err(|e| UploadError::io(format!("Failed to remove {}", self.path.display()), e))
    }
}

impl Drop for StagingFile {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Err(e) = fs::remove_file(&self.path) {
            warn!(path = %self.path.display(), error = %e, "failed to remove staging file");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_copies_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("mission.kmz");
        fs::write(&source, b"PK\x03\x04kmz").unwrap();

        let staged = StagingFile::create(&source, dir.path().join("copy.kmz")).unwrap();
        assert_eq!(fs::read(staged.path()).unwrap(), b"PK\x03\x04kmz");
        assert!(source.exists());
    }

    #[test]
    fn remove_deletes_copy() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("mission.kmz");
        fs::write(&source, b"data").unwrap();

        let staged = StagingFile::create(&source, dir.path().join("copy.kmz")).unwrap();
        let path = staged.path().to_path_buf();
        staged.remove().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn drop_deletes_copy() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("mission.kmz");
        fs::write(&source, b"data").unwrap();

        let path = dir.path().join("copy.kmz");
        {
            let _staged = StagingFile::create(&source, path.clone()).unwrap();
            assert!(path.exists());
        }
        assert!(!path.exists());
    }

    #[test]
    fn drop_after_external_removal_does_not_panic() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("mission.kmz");
        fs::write(&source, b"data").unwrap();

        let staged = StagingFile::create(&source, dir.path().join("copy.kmz")).unwrap();
        fs::remove_file(staged.path()).unwrap();
        drop(staged);
    }

    #[test]
    fn missing_source_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = StagingFile::create(&dir.path().join("absent.kmz"), dir.path().join("c.kmz"));
        assert!(matches!(result, Err(UploadError::Io { .. })));
        assert!(!dir.path().join("c.kmz").exists());
    }
}
