//! YAML file loading shared by datasheets, the registry and the config

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{Result, SeclevelError};

/// Read and parse a YAML document from disk.
pub(crate) fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read(path).map_err(|source| SeclevelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_slice(&data).map_err(|source| SeclevelError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}
