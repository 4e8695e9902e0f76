#![deny(warnings)]

//! Headless CLI that runs a scenario file through the impact engine and
//! prints the report as JSON on stdout.

use anyhow::{bail, Context, Result};
use scenario_core::{ConfiguredScenario, ScenarioKind};
use scenario_engine::{Engine, EngineConfig};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: scenario-cli --scenarios <file.json|file.yaml> [--config <engine.yaml>] \
                     [--strict] [--pretty] | --catalog | --version";

#[derive(Debug, Default)]
struct Args {
    scenarios: Option<PathBuf>,
    config: Option<PathBuf>,
    strict: bool,
    pretty: bool,
    catalog: bool,
    version: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--scenarios" => args.scenarios = it.next().map(PathBuf::from),
            "--config" => args.config = it.next().map(PathBuf::from),
            "--strict" => args.strict = true,
            "--pretty" => args.pretty = true,
            "--catalog" => args.catalog = true,
            "--version" => args.version = true,
            other => bail!("unknown argument {other:?}\n{USAGE}"),
        }
    }
    Ok(args)
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

fn load_scenarios(path: &Path) -> Result<Vec<ConfiguredScenario>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let scenarios = if is_yaml(path) {
        serde_yaml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
    } else {
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
    };
    Ok(scenarios)
}

#[derive(Serialize)]
struct CatalogEntry {
    kind: ScenarioKind,
    category: scenario_core::ScenarioCategory,
    tags: &'static [&'static str],
    parameters: &'static [scenario_core::ParameterSpec],
}

fn catalog() -> Vec<CatalogEntry> {
    ScenarioKind::ALL
        .into_iter()
        .map(|kind| CatalogEntry {
            kind,
            category: kind.category(),
            tags: kind.tags(),
            parameters: kind.parameters(),
        })
        .collect()
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

fn main() -> Result<()> {
    // Logging goes to stderr so stdout stays machine-readable
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args()?;
    if args.version {
        println!(
            "scenario-cli {} ({} {})",
            env!("CARGO_PKG_VERSION"),
            env!("GIT_SHA"),
            env!("BUILD_DATE")
        );
        return Ok(());
    }
    if args.catalog {
        return print_json(&catalog(), args.pretty);
    }

    let Some(path) = args.scenarios.as_deref() else {
        bail!("missing --scenarios\n{USAGE}");
    };
    let config = match args.config.as_deref() {
        Some(p) => EngineConfig::load(p).with_context(|| format!("loading {}", p.display()))?,
        None => EngineConfig::default(),
    };
    info!(scenarios = %path.display(), ?config, strict = args.strict, "starting CLI");

    let scenarios = load_scenarios(path)?;
    let engine = Engine::new(config)?;
    let results = if args.strict {
        engine.run_strict(&scenarios)?
    } else {
        engine.run(&scenarios)
    };

    info!(
        takeaway = %results.key_takeaway,
        additional_cost = ?results.additional_cost,
        "report ready"
    );
    print_json(&results, args.pretty)
}
