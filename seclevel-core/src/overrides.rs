//! Hardcoded security levels for families that have no liboqs datasheet.

use crate::algorithm::{AlgorithmDescriptor, AlgorithmKind};

struct OverrideFamily {
    kind: AlgorithmKind,
    family: &'static str,
    variants: &'static [(&'static str, u8)],
}

static OVERRIDES: &[OverrideFamily] = &[
    OverrideFamily {
        kind: AlgorithmKind::Kem,
        family: "NTRU+",
        variants: &[
            ("ntru_plus_kem576", 1),
            ("ntru_plus_kem768", 3),
            ("ntru_plus_kem864", 3),
            ("ntru_plus_kem1152", 5),
        ],
    },
    OverrideFamily {
        kind: AlgorithmKind::Kem,
        family: "SMAUG-T",
        variants: &[("smaug-t1", 1), ("smaug-t3", 3), ("smaug-t5", 5)],
    },
    OverrideFamily {
        kind: AlgorithmKind::Sig,
        family: "HAETAE",
        variants: &[("haetae2", 1), ("haetae3", 3), ("haetae5", 5)],
    },
    OverrideFamily {
        kind: AlgorithmKind::Sig,
        family: "AIMer",
        variants: &[
            ("aimer128s", 1),
            ("aimer128f", 1),
            ("aimer192s", 3),
            ("aimer192f", 3),
            ("aimer256s", 5),
            ("aimer256f", 5),
        ],
    },
];

/// Outcome of consulting the override table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideOutcome {
    /// The family has no override table.
    NotApplicable,
    /// The family is overridden but this variant is not listed.
    Unresolved,
    /// Claimed NIST level taken straight from the table.
    Level(u8),
}

/// Look up `descriptor` in the override table. Family and variant must
/// match exactly.
pub fn lookup(descriptor: &AlgorithmDescriptor<'_>) -> OverrideOutcome {
    let Some(family) = OVERRIDES
        .iter()
        .find(|f| f.kind == descriptor.kind && f.family == descriptor.family)
    else {
        return OverrideOutcome::NotApplicable;
    };

    family
        .variants
        .iter()
        .find(|(name, _)| *name == descriptor.variant)
        .map_or(OverrideOutcome::Unresolved, |(_, level)| {
            OverrideOutcome::Level(*level)
        })
}
