//! Fill in missing security strengths in an oqs-provider generator config.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use oqs_seclevel_core::{
    complete_config_with, CompletionReport, FailureMode, GeneratorConfig, Resolver,
    ResolverSettings,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "oqs-seclevel", version, about = "Resolve claimed security levels for liboqs algorithms")]
struct Cli {
    /// Generator config (YAML) with `kems` and `sigs` sections.
    #[arg(long)]
    config: PathBuf,

    /// liboqs docs checkout. Falls back to LIBOQS_DOCS_DIR.
    #[arg(long)]
    docs_dir: Option<PathBuf>,

    /// Datasheets for KEMs no longer shipped by liboqs.
    #[arg(long)]
    legacy_datasheets: Option<PathBuf>,

    /// Registry of removed algorithms.
    #[arg(long)]
    deprecated_registry: Option<PathBuf>,

    /// Write the completed config here instead of stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Yaml)]
    format: Format,

    /// Report every unresolved algorithm instead of stopping at the first.
    #[arg(long)]
    report_all: bool,

    /// Log each resolution step.
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Yaml,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(report) => {
            tracing::info!(
                filled = report.filled(),
                already_set = report.already_set,
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::from(1)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn settings(cli: &Cli) -> Result<ResolverSettings> {
    let mut settings = match &cli.docs_dir {
        Some(dir) => ResolverSettings::new(dir),
        None => ResolverSettings::from_env()?,
    };
    if let Some(dir) = &cli.legacy_datasheets {
        settings = settings.with_legacy_datasheet_dir(dir);
    }
    if let Some(path) = &cli.deprecated_registry {
        settings = settings.with_deprecated_registry(path);
    }
    Ok(settings)
}

fn run(cli: &Cli) -> Result<CompletionReport> {
    let settings = settings(cli)?;
    let mut config = GeneratorConfig::load(&cli.config)?;

    let mode = if cli.report_all {
        FailureMode::CollectAll
    } else {
        FailureMode::FailFast
    };
    let mut resolver = Resolver::from_settings(&settings);
    let report = complete_config_with(&mut config, &mut resolver, mode)?;

    let rendered = render(&config, cli.format)?;
    match &cli.output {
        Some(path) => write_output(path, &rendered)?,
        None => io::stdout()
            .write_all(rendered.as_bytes())
            .context("writing completed config to stdout")?,
    }
    Ok(report)
}

fn render(config: &GeneratorConfig, format: Format) -> Result<String> {
    match format {
        Format::Yaml => Ok(config.to_yaml_string()?),
        Format::Json => {
            let mut text = serde_json::to_string_pretty(config).context("rendering JSON")?;
            text.push('\n');
            Ok(text)
        }
    }
}

fn write_output(path: &Path, rendered: &str) -> Result<()> {
    fs::write(path, rendered).with_context(|| format!("writing {}", path.display()))
}
