//! NIST security categories and their bit-strength equivalents

use std::fmt;

/// Claimed NIST security category (1 through 5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SecurityLevel {
    L1,
    L2,
    L3,
    L4,
    L5,
}

impl SecurityLevel {
    /// Parse a raw claimed level as found in datasheets and registries.
    pub fn from_claimed(level: i64) -> Option<Self> {
        match level {
            1 => Some(SecurityLevel::L1),
            2 => Some(SecurityLevel::L2),
            3 => Some(SecurityLevel::L3),
            4 => Some(SecurityLevel::L4),
            5 => Some(SecurityLevel::L5),
            _ => None,
        }
    }

    /// Even categories fold onto the odd category below them.
    pub fn bit_strength(self) -> BitStrength {
        match self {
            SecurityLevel::L1 | SecurityLevel::L2 => BitStrength::Bits128,
            SecurityLevel::L3 | SecurityLevel::L4 => BitStrength::Bits192,
            SecurityLevel::L5 => BitStrength::Bits256,
        }
    }
}

/// Classical-equivalent security strength written back into the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BitStrength {
    Bits128,
    Bits192,
    Bits256,
}

impl BitStrength {
    pub fn bits(self) -> u16 {
        match self {
            BitStrength::Bits128 => 128,
            BitStrength::Bits192 => 192,
            BitStrength::Bits256 => 256,
        }
    }
}

impl fmt::Display for BitStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// Map a claimed NIST level to bits. `None` for anything outside 1..=5.
pub fn nist_to_bits(level: i64) -> Option<BitStrength> {
    SecurityLevel::from_claimed(level).map(SecurityLevel::bit_strength)
}
