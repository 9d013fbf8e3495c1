//! Name matching between generator config variants and datasheet entries.
//!
//! Names are compared case-insensitively with separators removed. KEM
//! datasheet names are first rewritten to undo historical naming drift
//! between liboqs datasheets and the generator config.

use std::borrow::Cow;

use super::{Datasheet, ParameterSet};
use crate::algorithm::AlgorithmKind;

/// Lowercase and strip the separators that are insignificant for `kind`.
pub fn normalize(kind: AlgorithmKind, name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| match kind {
            AlgorithmKind::Kem => !matches!(c, '_' | '-'),
            AlgorithmKind::Sig => !matches!(c, '_' | '-' | '+'),
        })
        .collect()
}

/// Rewrite a KEM datasheet name into the generator's naming convention.
pub fn rewrite_kem_name(name: &str) -> Cow<'_, str> {
    let mut name = Cow::Borrowed(name);
    if name.contains("FrodoKEM") {
        name = Cow::Owned(name.replace("FrodoKEM", "Frodo"));
    }
    if name.contains("Saber-KEM") {
        name = Cow::Owned(name.replace("-KEM", ""));
    }
    if name.contains("-90s") {
        name = Cow::Owned(name.replace("-90s", "").replace("Kyber", "Kyber90s"));
    }
    name
}

fn matches(kind: AlgorithmKind, sheet_name: &str, query: &str) -> bool {
    let sheet_name = match kind {
        AlgorithmKind::Kem => rewrite_kem_name(sheet_name),
        AlgorithmKind::Sig => Cow::Borrowed(sheet_name),
    };
    normalize(kind, &sheet_name) == query
}

/// First parameter set, in datasheet order, whose name or alias matches
/// `variant`.
pub fn find_match<'a>(
    sheet: &'a Datasheet,
    kind: AlgorithmKind,
    variant: &str,
) -> Option<&'a ParameterSet> {
    let query = normalize(kind, variant);
    sheet.parameter_sets.iter().find(|set| {
        matches(kind, &set.name, &query)
            || set
                .alias
                .as_deref()
                .is_some_and(|alias| matches(kind, alias, &query))
    })
}
