use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use oqs_seclevel_core::{
    complete_config,
    datasheet::{matcher, Datasheet},
    AlgorithmKind, GeneratorConfig, ResolverSettings,
};

fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(relative)
}

fn bench_match(c: &mut Criterion) {
    let sheet: Datasheet = serde_yaml::from_str(
        &std::fs::read_to_string(fixture_path("docs/algorithms/kem/kyber.yml")).unwrap(),
    )
    .unwrap();

    c.bench_function("match_kyber90s_last_entry", |b| {
        b.iter(|| matcher::find_match(black_box(&sheet), AlgorithmKind::Kem, black_box("kyber90s512")))
    });
}

fn bench_complete(c: &mut Criterion) {
    let settings = ResolverSettings::new(fixture_path("docs"))
        .with_legacy_datasheet_dir(fixture_path("oldalgdocs"))
        .with_deprecated_registry(fixture_path("oldalgs.yml"));
    let config = GeneratorConfig::load(&fixture_path("generate.yml")).unwrap();

    c.bench_function("complete_fixture_config", |b| {
        b.iter(|| {
            let mut config = config.clone();
            complete_config(black_box(&mut config), &settings).unwrap()
        })
    });
}

criterion_group!(benches, bench_match, bench_complete);
criterion_main!(benches);
