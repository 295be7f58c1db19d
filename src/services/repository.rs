//! Filesystem profile repository
//!
//! One profile per pretty-printed JSON file inside a single storage
//! directory. Writes are plain overwrites: two saves to the same filename
//! leave whichever finished last, with no locking.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::domain::ProfileData;
use crate::error::ProfileError;

pub const FILENAME_PREFIX: &str = "portrait_profile_";
pub const EXTENSION: &str = ".json";

const INVALID_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

#[derive(Debug, Clone)]
pub struct ProfileRepository {
    dir: PathBuf,
}

impl ProfileRepository {
    /// Does not touch the filesystem; the directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Creates the storage directory if needed. Safe to call repeatedly.
    pub fn ensure_storage(&self) -> Result<(), ProfileError> {
        fs::create_dir_all(&self.dir).map_err(|e| ProfileError::persistence(&self.dir, e))
    }

    /// Writes `profile` and returns the full path written.
    ///
    /// Without a filename one is derived from the current local time. A
    /// `.json` extension is appended when missing. Existing files are
    /// overwritten.
    pub fn save(
        &self,
        profile: &ProfileData,
        filename: Option<&str>,
    ) -> Result<PathBuf, ProfileError> {
        let filename = match filename.map(sanitize_filename).filter(|f| !f.is_empty()) {
            Some(name) if name.ends_with(EXTENSION) => name,
            Some(name) => format!("{name}{EXTENSION}"),
            None => default_filename(Local::now()),
        };

        self.ensure_storage()?;

        let path = self.dir.join(&filename);
        let json = serde_json::to_string_pretty(profile)?;
        fs::write(&path, json).map_err(|e| ProfileError::persistence(&path, e))?;

        tracing::info!(path = %path.display(), "Saved profile");
        Ok(path)
    }

    /// `Ok(None)` when the file does not exist; `CorruptData` when it exists
    /// but cannot be read or parsed.
    pub fn load(&self, filename: &str) -> Result<Option<ProfileData>, ProfileError> {
        let Some(path) = self.resolve(filename) else {
            return Ok(None);
        };
        let filename = sanitize_filename(filename);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if is_absent(&e) => return Ok(None),
            Err(e) => return Err(corrupt(filename, e.to_string())),
        };

        match serde_json::from_str(&content) {
            Ok(profile) => Ok(Some(profile)),
            Err(e) => Err(corrupt(filename, e.to_string())),
        }
    }

    /// Like `load`, but a missing file is a `NotFound` error.
    pub fn get(&self, filename: &str) -> Result<ProfileData, ProfileError> {
        self.load(filename)?
            .ok_or_else(|| ProfileError::NotFound(sanitize_filename(filename)))
    }

    /// Filenames ending in `.json`, sorted. Empty when the directory is missing.
    pub fn list(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                if e.kind() != ErrorKind::NotFound {
                    tracing::warn!(dir = %self.dir.display(), error = %e, "Cannot list profiles");
                }
                return Vec::new();
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| name.ends_with(EXTENSION))
            .collect();
        names.sort();
        names
    }

    /// Returns whether a file was removed. A missing file is simply `false`;
    /// use [`remove`](Self::remove) to tell a missing file from a failed removal.
    pub fn delete(&self, filename: &str) -> bool {
        self.remove(filename).unwrap_or(false)
    }

    /// `Ok(false)` when there was nothing to remove, `Persistence` when the
    /// file exists but could not be removed.
    pub fn remove(&self, filename: &str) -> Result<bool, ProfileError> {
        let Some(path) = self.resolve(filename) else {
            return Ok(false);
        };

        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "Deleted profile");
                Ok(true)
            }
            Err(e) if is_absent(&e) => Ok(false),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to delete profile");
                Err(ProfileError::persistence(path, e))
            }
        }
    }

    /// Path of a stored profile, or `None` for names that cannot name a file
    /// inside the storage directory (blank, or containing NUL).
    fn resolve(&self, filename: &str) -> Option<PathBuf> {
        let filename = sanitize_filename(filename);
        if filename.is_empty() || filename.contains('\0') {
            return None;
        }
        Some(self.dir.join(filename))
    }
}

fn is_absent(err: &std::io::Error) -> bool {
    matches!(err.kind(), ErrorKind::NotFound | ErrorKind::InvalidInput)
}

/// `portrait_profile_YYYYMMDD_HHMMSS.json`; second resolution, so saves in
/// the same second share a name.
pub fn default_filename(instant: DateTime<Local>) -> String {
    format!(
        "{FILENAME_PREFIX}{}{EXTENSION}",
        instant.format("%Y%m%d_%H%M%S")
    )
}

/// Replaces path separators and other reserved characters with `_`.
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .trim()
        .chars()
        .map(|c| if INVALID_FILENAME_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

fn corrupt(filename: String, reason: String) -> ProfileError {
    tracing::warn!(filename = %filename, reason = %reason, "Unreadable profile file");
    ProfileError::CorruptData { filename, reason }
}
