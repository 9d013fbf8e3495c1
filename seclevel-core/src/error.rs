//! Resolution error types

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// An algorithm the completer could not assign a bit strength to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedAlgorithm {
    pub family: String,
    pub name: String,
}

impl fmt::Display for UnresolvedAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.name)
    }
}

#[derive(Debug, Error)]
pub enum SeclevelError {
    #[error("Must include LIBOQS_DOCS_DIR in environment")]
    MissingDocsDir,

    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed YAML in {}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Cannot find security level for {family} {name}")]
    Unresolved { family: String, name: String },

    #[error("Cannot find security level for {} algorithm(s): {}", .0.len(), join_unresolved(.0))]
    UnresolvedMany(Vec<UnresolvedAlgorithm>),
}

impl SeclevelError {
    pub(crate) fn unresolved(family: &str, name: &str) -> Self {
        SeclevelError::Unresolved {
            family: family.to_string(),
            name: name.to_string(),
        }
    }

    /// Process exit code for this failure. Every failure is fatal to a
    /// completion pass.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

fn join_unresolved(entries: &[UnresolvedAlgorithm]) -> String {
    entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, SeclevelError>;
