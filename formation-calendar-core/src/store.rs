//! Saved business profile between runs.

use std::path::{Path, PathBuf};

use crate::error::{CalendarError, CalendarResult};
use crate::profile::BusinessProfile;

/// A TOML file holding one BusinessProfile
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ProfileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved profile. Nothing saved yet is `Ok(None)`.
    pub fn load(&self) -> CalendarResult<Option<BusinessProfile>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "No saved profile");
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let profile: BusinessProfile = toml::from_str(&content).map_err(|e| {
            CalendarError::Profile(format!("Could not parse {}: {e}", self.path.display()))
        })?;

        tracing::debug!(path = %self.path.display(), "Loaded saved profile");
        Ok(Some(profile))
    }

    /// Load the saved profile, or an empty one.
    pub fn load_or_default(&self) -> CalendarResult<BusinessProfile> {
        Ok(self.load()?.unwrap_or_default())
    }

    pub fn save(&self, profile: &BusinessProfile) -> CalendarResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(profile).map_err(|e| CalendarError::Profile(e.to_string()))?;

        std::fs::write(&self.path, content)?;
        Ok(())
    }

    /// Remove the saved profile. Returns false if there was nothing to remove.
    pub fn clear(&self) -> CalendarResult<bool> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
