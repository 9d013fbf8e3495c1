//! Where the resolver finds its datasheets and registries

use std::env;
use std::path::PathBuf;

use crate::error::{Result, SeclevelError};

/// Environment variable naming the liboqs docs checkout.
pub const DOCS_DIR_ENV: &str = "LIBOQS_DOCS_DIR";

/// Datasheets for KEMs removed from liboqs, relative to the working directory.
pub const DEFAULT_LEGACY_DATASHEET_DIR: &str = "oqs-template/oldalgdocs";

/// Registry of removed algorithms, relative to the working directory.
pub const DEFAULT_DEPRECATED_REGISTRY: &str = "oqs-template/oldalgs.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverSettings {
    /// Root of the liboqs docs; datasheets live under `algorithms/{kem,sig}`.
    pub docs_dir: PathBuf,
    pub legacy_datasheet_dir: PathBuf,
    pub deprecated_registry: PathBuf,
}

impl ResolverSettings {
    pub fn new(docs_dir: impl Into<PathBuf>) -> Self {
        Self {
            docs_dir: docs_dir.into(),
            legacy_datasheet_dir: PathBuf::from(DEFAULT_LEGACY_DATASHEET_DIR),
            deprecated_registry: PathBuf::from(DEFAULT_DEPRECATED_REGISTRY),
        }
    }

    /// Settings with the docs dir taken from `LIBOQS_DOCS_DIR`.
    pub fn from_env() -> Result<Self> {
        env::var_os(DOCS_DIR_ENV)
            .map(Self::new)
            .ok_or(SeclevelError::MissingDocsDir)
    }

    pub fn with_legacy_datasheet_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.legacy_datasheet_dir = dir.into();
        self
    }

    pub fn with_deprecated_registry(mut self, path: impl Into<PathBuf>) -> Self {
        self.deprecated_registry = path.into();
        self
    }
}
