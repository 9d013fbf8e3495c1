//! Algorithm descriptors handed to the resolver

use std::fmt;

/// Which liboqs datasheet tree an algorithm lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    Kem,
    Sig,
}

impl AlgorithmKind {
    /// Directory name under `<docs>/algorithms/`.
    pub fn dir_name(self) -> &'static str {
        match self {
            AlgorithmKind::Kem => "kem",
            AlgorithmKind::Sig => "sig",
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// One parameter set within a family, as named by the generator config.
///
/// For KEMs `variant` is the entry's `name_group`; for signatures it is the
/// variant's `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmDescriptor<'a> {
    pub kind: AlgorithmKind,
    pub family: &'a str,
    pub variant: &'a str,
}

impl<'a> AlgorithmDescriptor<'a> {
    pub fn kem(family: &'a str, name_group: &'a str) -> Self {
        Self {
            kind: AlgorithmKind::Kem,
            family,
            variant: name_group,
        }
    }

    pub fn sig(family: &'a str, name: &'a str) -> Self {
        Self {
            kind: AlgorithmKind::Sig,
            family,
            variant: name,
        }
    }
}

impl fmt::Display for AlgorithmDescriptor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.variant)
    }
}
