//! The generator configuration document.
//!
//! Only the fields the completer reads or writes are typed. Everything else
//! is carried through untouched so a completed document differs from its
//! input only by the added strength fields.
//!
//! A strength field counts as set whenever its key is present, whatever it
//! holds (`null` and strings included).

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::{Mapping, Value};

use crate::error::{Result, SeclevelError};
use crate::yaml::read_yaml;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub kems: Vec<KemEntry>,
    #[serde(default)]
    pub sigs: Vec<SigFamily>,
    #[serde(flatten)]
    pub extra: Mapping,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KemEntry {
    pub family: String,
    pub name_group: String,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub bit_security: Option<Value>,
    #[serde(flatten)]
    pub extra: Mapping,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SigFamily {
    pub family: String,
    #[serde(default)]
    pub variants: Vec<SigVariant>,
    #[serde(flatten)]
    pub extra: Mapping,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SigVariant {
    pub name: String,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub security: Option<Value>,
    #[serde(flatten)]
    pub extra: Mapping,
}

/// Keeps an explicit `null` as `Some(Value::Null)`; only a missing key is `None`.
fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl KemEntry {
    /// Numeric bit strength, if the field is present and holds an integer.
    pub fn strength(&self) -> Option<u64> {
        self.bit_security.as_ref().and_then(Value::as_u64)
    }
}

impl SigVariant {
    /// Numeric bit strength, if the field is present and holds an integer.
    pub fn strength(&self) -> Option<u64> {
        self.security.as_ref().and_then(Value::as_u64)
    }
}

impl GeneratorConfig {
    pub fn load(path: &Path) -> Result<Self> {
        read_yaml(path)
    }

    pub fn from_yaml_str(data: &str) -> Result<Self> {
        serde_yaml::from_str(data).map_err(|source| SeclevelError::Yaml {
            path: "<memory>".into(),
            source,
        })
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|source| SeclevelError::Yaml {
            path: "<memory>".into(),
            source,
        })
    }

    /// Whether every KEM and signature variant already has a strength key.
    pub fn is_complete(&self) -> bool {
        self.kems.iter().all(|k| k.bit_security.is_some())
            && self
                .sigs
                .iter()
                .flat_map(|f| &f.variants)
                .all(|v| v.security.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
kems:
  - family: CRYSTALS-Kyber
    name_group: kyber512
    nid: '0x023A'
    oqs_alg: OQS_KEM_alg_kyber_512
  - family: BIKE
    name_group: bikel1
    bit_security: 128
sigs:
  - family: Falcon
    variants:
      - name: falcon512
        oqs_meth: OQS_SIG_alg_falcon_512
        code_point: '0xfeae'
kem_nid_end: '0x0250'
";

    #[test]
    fn test_parse_sample() {
        let config = GeneratorConfig::from_yaml_str(SAMPLE).unwrap();
        assert_eq!(config.kems.len(), 2);
        assert_eq!(config.kems[0].bit_security, None);
        assert_eq!(config.kems[1].strength(), Some(128));
        assert_eq!(config.sigs[0].variants[0].name, "falcon512");
        assert!(config.extra.contains_key("kem_nid_end"));
        assert!(config.kems[0].extra.contains_key("oqs_alg"));
        assert!(!config.is_complete());
    }

    #[test]
    fn test_unknown_keys_survive_reserialization() {
        let config = GeneratorConfig::from_yaml_str(SAMPLE).unwrap();
        let text = config.to_yaml_string().unwrap();
        let reparsed = GeneratorConfig::from_yaml_str(&text).unwrap();
        assert_eq!(reparsed, config);
        assert!(text.contains("oqs_meth: OQS_SIG_alg_falcon_512"));
        // only BIKE had a strength to begin with
        assert_eq!(text.matches("security:").count(), 1);
    }

    #[test]
    fn test_missing_sections_default_empty() {
        let config = GeneratorConfig::from_yaml_str("openssl_version: 3.0\n").unwrap();
        assert!(config.kems.is_empty());
        assert!(config.sigs.is_empty());
        assert!(config.is_complete());
    }

    const PRESET: &str = "\
kems:
  - family: NTRU+
    name_group: ntru_plus_kem576
    bit_security: null
  - family: BIKE
    name_group: bikel1
    bit_security: '128'
sigs:
  - family: Falcon
    variants:
      - name: falcon512
        security: ~
";

    #[test]
    fn test_null_and_string_strengths_count_as_present() {
        let config = GeneratorConfig::from_yaml_str(PRESET).unwrap();
        assert_eq!(config.kems[0].bit_security, Some(Value::Null));
        assert_eq!(config.kems[1].bit_security, Some(Value::from("128")));
        assert_eq!(config.kems[1].strength(), None);
        assert_eq!(config.sigs[0].variants[0].security, Some(Value::Null));
        assert!(config.is_complete());

        let text = config.to_yaml_string().unwrap();
        let reparsed = GeneratorConfig::from_yaml_str(&text).unwrap();
        assert_eq!(reparsed, config);
    }

    #[test]
    fn test_missing_family_is_yaml_error() {
        let err = GeneratorConfig::from_yaml_str("kems:\n  - name_group: x\n").unwrap_err();
        assert!(matches!(err, SeclevelError::Yaml { .. }));
    }
}
