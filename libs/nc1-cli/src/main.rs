//! nc1 - DSTV/NC1 member processor
//!
//! Parses one or more NC1 files, cuts every feature out of the member solid
//! and prints a JSON report per file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use config::{PipelineConfig, PrecheckPolicy};
use nc1_engine::{BatchResult, CsgEngine, EngineError, MemberReport};
use nc1_parser::{parse, Diagnostic, ParseOutput};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "nc1")]
#[command(about = "Build cut steel members from DSTV/NC1 files", long_about = None)]
struct Cli {
    /// NC1 files to process
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Distance a feature may sit outside the member envelope (mm)
    #[arg(long, value_name = "N")]
    margin: Option<f64>,

    /// Skip invalid features instead of rejecting the whole batch
    #[arg(long)]
    lenient: bool,

    /// Leave mesh statistics out of the report
    #[arg(long)]
    no_solid: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    fn pipeline_config(&self) -> Result<PipelineConfig> {
        let mut config = PipelineConfig::default();
        if let Some(margin) = self.margin {
            config = config
                .with_bounds_margin(margin)
                .context("invalid --margin")?;
        }
        if self.lenient {
            config = config.with_precheck(PrecheckPolicy::Lenient);
        }
        Ok(config)
    }
}

/// Report for one input file.
#[derive(Debug, Serialize)]
struct FileReport {
    file: PathBuf,
    diagnostics: Vec<Diagnostic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    member: Option<MemberReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl FileReport {
    fn new(
        file: &Path,
        parsed: &ParseOutput,
        result: Result<BatchResult, EngineError>,
        with_mesh: bool,
    ) -> Self {
        let (member, error) = match result {
            Ok(batch) => (Some(MemberReport::new(&parsed.document, &batch, with_mesh)), None),
            Err(err) => (None, Some(err.to_string())),
        };
        Self {
            file: file.to_path_buf(),
            diagnostics: parsed.diagnostics.clone(),
            member,
            error,
        }
    }

    /// Report for a file that could not be read or parsed.
    fn unreadable(file: &Path, err: &anyhow::Error) -> Self {
        Self {
            file: file.to_path_buf(),
            diagnostics: Vec::new(),
            member: None,
            error: Some(format!("{err:#}")),
        }
    }
}

fn init_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn read_file(path: &Path) -> Result<ParseOutput> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let parsed = parse(&text).with_context(|| format!("failed to parse {}", path.display()))?;
    for diagnostic in &parsed.diagnostics {
        tracing::warn!(file = %path.display(), "{diagnostic}");
    }
    Ok(parsed)
}

fn run(cli: &Cli) -> Result<Vec<FileReport>> {
    let config = cli.pipeline_config()?;
    let parsed: Vec<Result<ParseOutput>> = cli.files.iter().map(|path| read_file(path)).collect();

    let documents: Vec<_> = parsed
        .iter()
        .filter_map(|p| p.as_ref().ok())
        .map(|p| p.document.clone())
        .collect();
    let engine = CsgEngine::new(config);
    let mut results = engine.process_members(&documents).into_iter();

    let mut reports = Vec::with_capacity(cli.files.len());
    for (file, parsed) in cli.files.iter().zip(&parsed) {
        let report = match parsed {
            Ok(parsed) => match results.next() {
                Some(result) => FileReport::new(file, parsed, result, !cli.no_solid),
                None => anyhow::bail!("no engine result for {}", file.display()),
            },
            Err(err) => {
                tracing::error!(file = %file.display(), "{err:#}");
                FileReport::unreadable(file, err)
            }
        };
        reports.push(report);
    }
    Ok(reports)
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let reports = run(&cli)?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&reports)
    } else {
        serde_json::to_string(&reports)
    }
    .context("failed to encode report")?;
    println!("{json}");
    Ok(())
}
