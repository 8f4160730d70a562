//! Model persistence: a checksummed bincode artifact on disk
//!
//! The artifact wraps the serialized classifier in an envelope carrying a
//! format version and a SHA256 checksum. Saves are atomic (temp file then
//! rename) so readers never observe a partial artifact. Loading never
//! fails: a missing or corrupt artifact just leaves the model absent.

use crate::classifier::LogisticClassifier;
use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Artifact format version; bumped on incompatible layout changes
const FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct Artifact {
    format_version: u32,
    checksum: String,
    payload: Vec<u8>,
}

/// Saves and loads the trained classifier at a fixed path
pub struct ModelStore {
    path: PathBuf,
}

impl ModelStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize the classifier to the artifact path, creating parent
    /// directories and overwriting any existing file
    pub fn save(&self, model: &LogisticClassifier) -> Result<(), ModelError> {
        let payload = bincode::serialize(model)?;
        let artifact = Artifact {
            format_version: FORMAT_VERSION,
            checksum: compute_checksum(&payload),
            payload,
        };
        let bytes = bincode::serialize(&artifact)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| ModelError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let temp_path = self.path.with_extension("tmp");
        let mut file = File::create(&temp_path).map_err(|source| ModelError::Io {
            path: temp_path.clone(),
            source,
        })?;
        file.write_all(&bytes).map_err(|source| ModelError::Io {
            path: temp_path.clone(),
            source,
        })?;
        file.sync_all().map_err(|source| ModelError::Io {
            path: temp_path.clone(),
            source,
        })?;
        fs::rename(&temp_path, &self.path).map_err(|source| ModelError::Io {
            path: self.path.clone(),
            source,
        })?;

        info!(
            path = %self.path.display(),
            size = bytes.len(),
            "Model artifact saved"
        );
        Ok(())
    }

    /// Deserialize the classifier from the artifact path.
    ///
    /// Returns `None` on a missing, truncated, corrupt, checksum-mismatched,
    /// or version-mismatched artifact; nothing here raises.
    pub fn load(&self) -> Option<LogisticClassifier> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No model artifact on disk");
                return None;
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read model artifact");
                return None;
            }
        };

        let artifact: Artifact = match bincode::deserialize(&bytes) {
            Ok(artifact) => artifact,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Model artifact is corrupt");
                return None;
            }
        };

        if artifact.format_version != FORMAT_VERSION {
            warn!(
                path = %self.path.display(),
                found = artifact.format_version,
                expected = FORMAT_VERSION,
                "Model artifact has an unsupported format version"
            );
            return None;
        }

        let computed = compute_checksum(&artifact.payload);
        if computed != artifact.checksum {
            warn!(
                path = %self.path.display(),
                expected = %artifact.checksum,
                computed = %computed,
                "Model artifact checksum mismatch"
            );
            return None;
        }

        match bincode::deserialize(&artifact.payload) {
            Ok(model) => {
                info!(path = %self.path.display(), "Model artifact loaded");
                Some(model)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Model payload failed to decode");
                None
            }
        }
    }
}

/// Compute SHA256 checksum of data
fn compute_checksum(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
