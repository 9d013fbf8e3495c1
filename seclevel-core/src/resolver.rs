//! The resolution chain: override table, then datasheet, then the
//! deprecated-algorithm registry.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use tracing::debug;

use crate::algorithm::{AlgorithmDescriptor, AlgorithmKind};
use crate::datasheet::{self, matcher, Datasheet, DatasheetStore, FsDatasheetStore};
use crate::deprecated::DeprecatedRegistry;
use crate::error::Result;
use crate::overrides::{self, OverrideOutcome};
use crate::settings::ResolverSettings;

/// Where a claimed level came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionSource {
    Override,
    Datasheet { id: String },
    Deprecated,
}

impl fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionSource::Override => f.write_str("override table"),
            ResolutionSource::Datasheet { id } => write!(f, "datasheet {id}"),
            ResolutionSource::Deprecated => f.write_str("deprecated registry"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Raw claimed NIST level; may fall outside 1..=5 if a datasheet says so.
    pub level: i64,
    pub source: ResolutionSource,
}

/// Resolves claimed NIST levels for one completion pass.
///
/// Datasheets are cached per (kind, id) and the deprecated registry is read
/// at most once, so a resolver should not outlive the pass it serves.
pub struct Resolver<S = FsDatasheetStore> {
    store: S,
    registry_path: PathBuf,
    registry: Option<DeprecatedRegistry>,
    cache: HashMap<(AlgorithmKind, String), Datasheet>,
    datasheets_loaded: usize,
}

impl Resolver<FsDatasheetStore> {
    pub fn from_settings(settings: &ResolverSettings) -> Self {
        let store = FsDatasheetStore::new(&settings.docs_dir, &settings.legacy_datasheet_dir);
        Self::with_store(store, &settings.deprecated_registry)
    }
}

impl<S: DatasheetStore> Resolver<S> {
    pub fn with_store(store: S, registry_path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            registry_path: registry_path.into(),
            registry: None,
            cache: HashMap::new(),
            datasheets_loaded: 0,
        }
    }

    /// Number of datasheets read from the store so far.
    pub fn datasheets_loaded(&self) -> usize {
        self.datasheets_loaded
    }

    /// Run the chain for one algorithm. `Ok(None)` means every stage missed.
    pub fn resolve(&mut self, alg: &AlgorithmDescriptor<'_>) -> Result<Option<Resolution>> {
        match overrides::lookup(alg) {
            OverrideOutcome::Level(level) => {
                debug!(%alg, level, "resolved from override table");
                return Ok(Some(Resolution {
                    level: i64::from(level),
                    source: ResolutionSource::Override,
                }));
            }
            OverrideOutcome::Unresolved => {
                debug!(%alg, "override family lacks variant, consulting datasheet");
            }
            OverrideOutcome::NotApplicable => {}
        }

        let id = datasheet::datasheet_id(alg.kind, alg.family);
        let matched = {
            let sheet = self.datasheet(alg.kind, &id)?;
            matcher::find_match(sheet, alg.kind, alg.variant).map(|set| set.claimed_nist_level)
        };
        if let Some(level) = matched {
            debug!(%alg, datasheet = %id, level, "resolved from datasheet");
            return Ok(Some(Resolution {
                level,
                source: ResolutionSource::Datasheet { id },
            }));
        }

        let level = self.registry()?.claimed_level(alg.variant);
        match level {
            Some(level) => {
                debug!(%alg, level, "resolved from deprecated registry");
                Ok(Some(Resolution {
                    level,
                    source: ResolutionSource::Deprecated,
                }))
            }
            None => {
                debug!(%alg, datasheet = %id, "no matching parameter set");
                Ok(None)
            }
        }
    }

    fn datasheet(&mut self, kind: AlgorithmKind, id: &str) -> Result<&Datasheet> {
        match self.cache.entry((kind, id.to_string())) {
            Entry::Occupied(e) => Ok(&*e.into_mut()),
            Entry::Vacant(e) => {
                let sheet = self.store.load(kind, id)?;
                self.datasheets_loaded += 1;
                Ok(&*e.insert(sheet))
            }
        }
    }

    fn registry(&mut self) -> Result<&DeprecatedRegistry> {
        let registry = match self.registry.take() {
            Some(registry) => registry,
            None => DeprecatedRegistry::load(&self.registry_path)?,
        };
        Ok(&*self.registry.insert(registry))
    }
}
