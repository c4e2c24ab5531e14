//! Exercise manifests: versioned YAML declaring a single exercise case.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::case::{Check, ExerciseCase};
use crate::model::{ExerciseId, IdError};

pub const SUPPORTED_MANIFEST_VERSION: u32 = 1;

/// Manifest errors.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("failed to read manifest {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("unsupported manifest version {found} (supported: {SUPPORTED_MANIFEST_VERSION})")]
    UnsupportedVersion { found: u32 },

    #[error(transparent)]
    InvalidId(#[from] IdError),
}

/// A parsed exercise manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseManifest {
    pub version: u32,
    pub exercise: String,
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub check: Check,
}

impl ExerciseManifest {
    /// Convert into a case definition, validating the identifier.
    pub fn into_case(self) -> Result<ExerciseCase, ManifestError> {
        let id = ExerciseId::parse(&self.exercise)?;
        Ok(ExerciseCase {
            id,
            check: self.check,
        })
    }
}

/// Parse a manifest from YAML text.
pub fn parse_manifest(raw: &str) -> Result<ExerciseManifest, ManifestError> {
    let manifest: ExerciseManifest = serde_yaml::from_str(raw)?;
    if manifest.version != SUPPORTED_MANIFEST_VERSION {
        return Err(ManifestError::UnsupportedVersion {
            found: manifest.version,
        });
    }
    Ok(manifest)
}

/// Read and parse a manifest file.
pub fn load_manifest(path: &Path) -> Result<ExerciseManifest, ManifestError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_manifest(&raw)
}
