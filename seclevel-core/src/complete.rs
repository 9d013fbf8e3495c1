//! Filling in missing security strengths across a generator config.

use serde_yaml::Value;
use tracing::{debug, info};

use crate::algorithm::AlgorithmDescriptor;
use crate::config::GeneratorConfig;
use crate::datasheet::DatasheetStore;
use crate::error::{Result, SeclevelError, UnresolvedAlgorithm};
use crate::level::{nist_to_bits, BitStrength};
use crate::resolver::{ResolutionSource, Resolver};
use crate::settings::ResolverSettings;

/// Rainbow level-I variants predate the datasheets and default to 128 bits.
const LEGACY_RAINBOW_PREFIX: &str = "rainbowI";

/// What to do when an algorithm cannot be resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailureMode {
    /// Stop at the first unresolved algorithm.
    #[default]
    FailFast,
    /// Resolve everything, then report every unresolved algorithm at once.
    CollectAll,
}

/// Summary of a completion pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionReport {
    /// Entries that already carried a strength and were left alone.
    pub already_set: usize,
    pub from_override: usize,
    pub from_datasheet: usize,
    pub from_deprecated: usize,
    pub legacy_default: usize,
    pub datasheets_loaded: usize,
}

impl CompletionReport {
    pub fn filled(&self) -> usize {
        self.from_override + self.from_datasheet + self.from_deprecated + self.legacy_default
    }

    fn record(&mut self, source: &ResolutionSource) {
        match source {
            ResolutionSource::Override => self.from_override += 1,
            ResolutionSource::Datasheet { .. } => self.from_datasheet += 1,
            ResolutionSource::Deprecated => self.from_deprecated += 1,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Kem(usize),
    Sig(usize, usize),
}

/// Complete `config` in place using datasheets under `settings`, stopping at
/// the first unresolved algorithm.
pub fn complete_config(
    config: &mut GeneratorConfig,
    settings: &ResolverSettings,
) -> Result<CompletionReport> {
    let mut resolver = Resolver::from_settings(settings);
    complete_config_with(config, &mut resolver, FailureMode::FailFast)
}

/// Complete `config` in place with an explicit resolver.
///
/// Strengths are only written once every missing one has been resolved; on
/// error the config is left untouched.
pub fn complete_config_with<S: DatasheetStore>(
    config: &mut GeneratorConfig,
    resolver: &mut Resolver<S>,
    mode: FailureMode,
) -> Result<CompletionReport> {
    let mut report = CompletionReport::default();
    let mut pending: Vec<(Slot, BitStrength)> = Vec::new();
    let mut unresolved: Vec<UnresolvedAlgorithm> = Vec::new();

    let loaded_before = resolver.datasheets_loaded();

    for (i, kem) in config.kems.iter().enumerate() {
        if kem.bit_security.is_some() {
            report.already_set += 1;
            continue;
        }
        let alg = AlgorithmDescriptor::kem(&kem.family, &kem.name_group);
        match resolve_bits(resolver, &alg, &mut report)? {
            Some(bits) => pending.push((Slot::Kem(i), bits)),
            None => fail(mode, &alg, &mut unresolved)?,
        }
    }

    for (i, family) in config.sigs.iter().enumerate() {
        for (j, variant) in family.variants.iter().enumerate() {
            if variant.security.is_some() {
                report.already_set += 1;
                continue;
            }
            let alg = AlgorithmDescriptor::sig(&family.family, &variant.name);
            match resolve_bits(resolver, &alg, &mut report)? {
                Some(bits) => pending.push((Slot::Sig(i, j), bits)),
                None if variant.name.starts_with(LEGACY_RAINBOW_PREFIX) => {
                    debug!(%alg, "defaulting legacy rainbow variant to 128 bits");
                    report.legacy_default += 1;
                    pending.push((Slot::Sig(i, j), BitStrength::Bits128));
                }
                None => fail(mode, &alg, &mut unresolved)?,
            }
        }
    }

    match unresolved.len() {
        0 => {}
        1 => {
            let UnresolvedAlgorithm { family, name } = unresolved.remove(0);
            return Err(SeclevelError::Unresolved { family, name });
        }
        _ => return Err(SeclevelError::UnresolvedMany(unresolved)),
    }

    for (slot, bits) in pending {
        match slot {
            Slot::Kem(i) => config.kems[i].bit_security = Some(Value::from(bits.bits())),
            Slot::Sig(i, j) => {
                config.sigs[i].variants[j].security = Some(Value::from(bits.bits()))
            }
        }
    }

    report.datasheets_loaded = resolver.datasheets_loaded() - loaded_before;
    info!(
        filled = report.filled(),
        already_set = report.already_set,
        datasheets = report.datasheets_loaded,
        "completed security levels"
    );
    Ok(report)
}

/// Resolve one algorithm to bits. A claimed level outside 1..=5 counts as
/// unresolved.
fn resolve_bits<S: DatasheetStore>(
    resolver: &mut Resolver<S>,
    alg: &AlgorithmDescriptor<'_>,
    report: &mut CompletionReport,
) -> Result<Option<BitStrength>> {
    let Some(resolution) = resolver.resolve(alg)? else {
        return Ok(None);
    };
    let Some(bits) = nist_to_bits(resolution.level) else {
        debug!(%alg, level = resolution.level, source = %resolution.source, "claimed level has no bit strength");
        return Ok(None);
    };
    debug!(%alg, %bits, source = %resolution.source, "mapped to bit strength");
    report.record(&resolution.source);
    Ok(Some(bits))
}

fn fail(
    mode: FailureMode,
    alg: &AlgorithmDescriptor<'_>,
    unresolved: &mut Vec<UnresolvedAlgorithm>,
) -> Result<()> {
    match mode {
        FailureMode::FailFast => Err(SeclevelError::unresolved(alg.family, alg.variant)),
        FailureMode::CollectAll => {
            unresolved.push(UnresolvedAlgorithm {
                family: alg.family.to_string(),
                name: alg.variant.to_string(),
            });
            Ok(())
        }
    }
}
