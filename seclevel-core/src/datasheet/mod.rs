//! liboqs algorithm datasheets and where to find them

pub mod matcher;

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::algorithm::AlgorithmKind;
use crate::error::Result;
use crate::yaml::read_yaml;

/// One parameter set as listed in a datasheet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ParameterSet {
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
    pub claimed_nist_level: i64,
}

/// The subset of a liboqs datasheet the resolver reads. Other keys are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Datasheet {
    pub parameter_sets: Vec<ParameterSet>,
}

/// Families whose datasheet file name is not derivable from the family.
static RENAMES: &[(AlgorithmKind, &str, &str)] = &[
    (AlgorithmKind::Kem, "CRYSTALS-Kyber", "kyber"),
    (AlgorithmKind::Kem, "SIDH", "sike"),
    (AlgorithmKind::Kem, "NTRU-Prime", "ntruprime"),
    (AlgorithmKind::Sig, "CRYSTALS-Dilithium", "dilithium"),
    (AlgorithmKind::Sig, "SPHINCS-Haraka", "sphincs"),
    (AlgorithmKind::Sig, "SPHINCS-SHA256", "sphincs"),
    (AlgorithmKind::Sig, "SPHINCS-SHAKE256", "sphincs"),
    (AlgorithmKind::Sig, "SPHINCS-SHA2", "sphincs"),
    (AlgorithmKind::Sig, "SPHINCS-SHAKE", "sphincs"),
];

/// Canonical datasheet id for a config family name.
pub fn datasheet_id(kind: AlgorithmKind, family: &str) -> String {
    RENAMES
        .iter()
        .find(|(k, f, _)| *k == kind && *f == family)
        .map(|(_, _, id)| (*id).to_string())
        .unwrap_or_else(|| family.to_lowercase().replace('-', "_"))
}

/// Source of parsed datasheets.
pub trait DatasheetStore {
    fn load(&self, kind: AlgorithmKind, id: &str) -> Result<Datasheet>;
}

/// Loads datasheets from a liboqs docs checkout, with a second directory
/// for datasheets of algorithms liboqs has since dropped.
#[derive(Debug, Clone)]
pub struct FsDatasheetStore {
    docs_dir: PathBuf,
    legacy_dir: PathBuf,
}

impl FsDatasheetStore {
    pub fn new(docs_dir: impl Into<PathBuf>, legacy_dir: impl Into<PathBuf>) -> Self {
        Self {
            docs_dir: docs_dir.into(),
            legacy_dir: legacy_dir.into(),
        }
    }

    /// `<docs>/algorithms/<kind>/<id>.yml`
    pub fn primary_path(&self, kind: AlgorithmKind, id: &str) -> PathBuf {
        sheet_path(&self.docs_dir.join("algorithms"), kind, id)
    }

    /// `<legacy>/<kind>/<id>.yml`
    pub fn legacy_path(&self, kind: AlgorithmKind, id: &str) -> PathBuf {
        sheet_path(&self.legacy_dir, kind, id)
    }
}

fn sheet_path(root: &Path, kind: AlgorithmKind, id: &str) -> PathBuf {
    root.join(kind.dir_name()).join(format!("{id}.yml"))
}

impl DatasheetStore for FsDatasheetStore {
    fn load(&self, kind: AlgorithmKind, id: &str) -> Result<Datasheet> {
        let primary = self.primary_path(kind, id);
        debug!(path = %primary.display(), "loading datasheet");
        match (kind, read_yaml(&primary)) {
            (_, Ok(sheet)) => Ok(sheet),
            // Only KEM datasheets have a retired-algorithm location.
            (AlgorithmKind::Kem, Err(err)) => {
                let legacy = self.legacy_path(kind, id);
                warn!(
                    error = %err,
                    fallback = %legacy.display(),
                    "primary KEM datasheet unavailable, trying legacy location"
                );
                read_yaml(&legacy)
            }
            (AlgorithmKind::Sig, Err(err)) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeclevelError;
    use std::fs;

    const KYBER_SHEET: &str = "\
name: CRYSTALS-Kyber
type: kem
parameter-sets:
  - name: Kyber512
    claimed-nist-level: 1
    claimed-security: IND-CCA2
  - name: Kyber512-90s
    claimed-nist-level: 1
  - name: ML-KEM-768
    alias: Kyber768
    claimed-nist-level: 3
";

    fn write(root: &Path, rel: &str, body: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }

    #[test]
    fn test_datasheet_id_renames() {
        assert_eq!(datasheet_id(AlgorithmKind::Kem, "CRYSTALS-Kyber"), "kyber");
        assert_eq!(datasheet_id(AlgorithmKind::Kem, "SIDH"), "sike");
        assert_eq!(datasheet_id(AlgorithmKind::Kem, "NTRU-Prime"), "ntruprime");
        assert_eq!(
            datasheet_id(AlgorithmKind::Sig, "CRYSTALS-Dilithium"),
            "dilithium"
        );
        assert_eq!(datasheet_id(AlgorithmKind::Sig, "SPHINCS-SHAKE"), "sphincs");
    }

    #[test]
    fn test_datasheet_id_default() {
        assert_eq!(datasheet_id(AlgorithmKind::Kem, "Classic-McEliece"), "classic_mceliece");
        assert_eq!(datasheet_id(AlgorithmKind::Sig, "Falcon"), "falcon");
        // renames are per kind
        assert_eq!(datasheet_id(AlgorithmKind::Sig, "SIDH"), "sidh");
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let sheet: Datasheet = serde_yaml::from_str(KYBER_SHEET).unwrap();
        assert_eq!(sheet.parameter_sets.len(), 3);
        assert_eq!(sheet.parameter_sets[2].alias.as_deref(), Some("Kyber768"));
        assert_eq!(sheet.parameter_sets[2].claimed_nist_level, 3);
    }

    #[test]
    fn test_parse_out_of_range_levels() {
        let sheet: Datasheet = serde_yaml::from_str(
            "parameter-sets:\n  - name: A\n    claimed-nist-level: -1\n  - name: B\n    claimed-nist-level: 300\n",
        )
        .unwrap();
        assert_eq!(sheet.parameter_sets[0].claimed_nist_level, -1);
        assert_eq!(sheet.parameter_sets[1].claimed_nist_level, 300);
    }

    #[test]
    fn test_kem_primary_location() {
        let docs = tempfile::tempdir().unwrap();
        let legacy = tempfile::tempdir().unwrap();
        write(docs.path(), "algorithms/kem/kyber.yml", KYBER_SHEET);

        let store = FsDatasheetStore::new(docs.path(), legacy.path());
        let sheet = store.load(AlgorithmKind::Kem, "kyber").unwrap();
        assert_eq!(sheet.parameter_sets[0].name, "Kyber512");
    }

    #[test]
    fn test_kem_falls_back_to_legacy_location() {
        let docs = tempfile::tempdir().unwrap();
        let legacy = tempfile::tempdir().unwrap();
        write(legacy.path(), "kem/sike.yml", "parameter-sets:\n  - name: SIKE-p434\n    claimed-nist-level: 1\n");

        let store = FsDatasheetStore::new(docs.path(), legacy.path());
        let sheet = store.load(AlgorithmKind::Kem, "sike").unwrap();
        assert_eq!(sheet.parameter_sets[0].name, "SIKE-p434");
    }

    #[test]
    fn test_kem_malformed_primary_falls_back() {
        let docs = tempfile::tempdir().unwrap();
        let legacy = tempfile::tempdir().unwrap();
        write(docs.path(), "algorithms/kem/bike.yml", "parameter-sets: [oops");
        write(legacy.path(), "kem/bike.yml", "parameter-sets:\n  - name: BIKE-L1\n    claimed-nist-level: 1\n");

        let store = FsDatasheetStore::new(docs.path(), legacy.path());
        assert!(store.load(AlgorithmKind::Kem, "bike").is_ok());
    }

    #[test]
    fn test_kem_both_locations_missing() {
        let docs = tempfile::tempdir().unwrap();
        let legacy = tempfile::tempdir().unwrap();
        let store = FsDatasheetStore::new(docs.path(), legacy.path());
        let err = store.load(AlgorithmKind::Kem, "nope").unwrap_err();
        match err {
            SeclevelError::Io { path, .. } => assert_eq!(path, legacy.path().join("kem/nope.yml")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_sig_has_no_legacy_fallback() {
        let docs = tempfile::tempdir().unwrap();
        let legacy = tempfile::tempdir().unwrap();
        write(legacy.path(), "sig/rainbow.yml", "parameter-sets: []\n");

        let store = FsDatasheetStore::new(docs.path(), legacy.path());
        let err = store.load(AlgorithmKind::Sig, "rainbow").unwrap_err();
        assert!(matches!(err, SeclevelError::Io { .. }));
    }

    #[test]
    fn test_malformed_sig_datasheet_is_yaml_error() {
        let docs = tempfile::tempdir().unwrap();
        write(docs.path(), "algorithms/sig/falcon.yml", "parameter-sets: 7\n");

        let store = FsDatasheetStore::new(docs.path(), docs.path().join("old"));
        let err = store.load(AlgorithmKind::Sig, "falcon").unwrap_err();
        assert!(matches!(err, SeclevelError::Yaml { .. }));
    }
}
