//! Registry of job-profile templates.

mod builtin;
mod validation;

pub use builtin::builtin_profiles;
pub use validation::{TemplateViolation, WEIGHTAGE_SUM_TOLERANCE};

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use super::domain::{ProfileId, ProfileType};
use validation::validate_template;

/// Insertion-ordered set of templates keyed by id.
///
/// Readers share the lock; registration takes it exclusively. Intended to be filled at startup
/// and read afterwards, shared through an `Arc`.
#[derive(Debug)]
pub struct ProfileCatalog {
    profiles: RwLock<Vec<ProfileType>>,
}

impl Default for ProfileCatalog {
    fn default() -> Self {
        Self::with_builtin_profiles()
    }
}

impl ProfileCatalog {
    pub fn empty() -> Self {
        Self {
            profiles: RwLock::new(Vec::new()),
        }
    }

    pub fn with_builtin_profiles() -> Self {
        Self {
            profiles: RwLock::new(builtin_profiles()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<ProfileType>> {
        self.profiles.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<ProfileType>> {
        self.profiles.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get_profile_type(&self, profile_id: &ProfileId) -> Option<ProfileType> {
        self.read()
            .iter()
            .find(|profile| &profile.id == profile_id)
            .cloned()
    }

    /// Register a template, replacing any entry with the same id in place.
    ///
    /// Returns the replaced template, if any.
    pub fn add_profile_type(
        &self,
        profile: ProfileType,
    ) -> Result<Option<ProfileType>, CatalogError> {
        validate_template(&profile).map_err(|violation| CatalogError::InvalidProfile {
            profile_id: profile.id.clone(),
            violation,
        })?;

        let mut profiles = self.write();
        match profiles.iter_mut().find(|existing| existing.id == profile.id) {
            Some(existing) => {
                debug!(profile_id = %profile.id, "replacing profile template");
                Ok(Some(std::mem::replace(existing, profile)))
            }
            None => {
                debug!(profile_id = %profile.id, "registering profile template");
                profiles.push(profile);
                Ok(None)
            }
        }
    }

    /// Snapshot of every template in insertion order.
    pub fn get_all_profile_types(&self) -> Vec<ProfileType> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Register every template from a JSON array on disk.
    ///
    /// Stops at the first invalid template; earlier entries from the file stay registered.
    pub fn load_profiles_from_path(&self, path: impl AsRef<Path>) -> Result<usize, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let profiles: Vec<ProfileType> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let count = profiles.len();
        for profile in profiles {
            self.add_profile_type(profile)?;
        }

        info!(path = %path.display(), count, "loaded profile templates");
        Ok(count)
    }
}

/// Error raised while registering or loading templates.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("profile '{profile_id}' rejected: {violation}")]
    InvalidProfile {
        profile_id: ProfileId,
        #[source]
        violation: TemplateViolation,
    },
    #[error("unable to read profile catalog {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to parse profile catalog {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
