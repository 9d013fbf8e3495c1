//! Security-level resolution for liboqs algorithm variants.
//!
//! Given the `kems`/`sigs` sections of a generator configuration, fills in
//! every missing bit-security field from hardcoded overrides, the liboqs
//! algorithm datasheets, or the registry of removed algorithms.

pub mod algorithm;
pub mod complete;
pub mod config;
pub mod datasheet;
pub mod deprecated;
pub mod error;
pub mod level;
pub mod overrides;
pub mod resolver;
pub mod settings;
mod yaml;

// Re-exports
pub use algorithm::{AlgorithmDescriptor, AlgorithmKind};
pub use complete::{complete_config, complete_config_with, CompletionReport, FailureMode};
pub use config::GeneratorConfig;
pub use error::{Result, SeclevelError, UnresolvedAlgorithm};
pub use level::{nist_to_bits, BitStrength, SecurityLevel};
pub use resolver::{Resolution, ResolutionSource, Resolver};
pub use settings::ResolverSettings;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
