//! CLI entrypoint for diabetes-risk
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use risk_application::{
    ArtifactPaths, AssessRiskUseCase, LoadArtifactsInput, LoadArtifactsUseCase,
};
use risk_domain::{DriftPolicy, FeatureSchema, OutputFormat, Severity};
use risk_infrastructure::{ConfigLoader, FileConfig, JsonArtifactStore, SchemaLoader};
use risk_presentation::{Cli, ConsoleFormatter, FormRepl, RiskReport, collect_answers};
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match (cli.quiet, cli.verbose) {
        (true, _) => EnvFilter::new("error"),
        (false, 0) => EnvFilter::new("warn"),
        (false, 1) => EnvFilter::new("info"),
        (false, 2) => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    check_config(&config)?;

    let schema = resolve_schema(&cli, &config)?;

    let (drift, _) = config.encoder.parse_drift();
    let drift = if cli.strict_schema {
        DriftPolicy::Reject
    } else {
        drift
    };

    let config_paths = config.artifacts.to_paths();
    let paths = ArtifactPaths::new(
        cli.model.clone().unwrap_or(config_paths.model),
        cli.scaler.clone().unwrap_or(config_paths.scaler),
    );

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    if cli.list_fields {
        print!("{}", ConsoleFormatter::format_fields(&schema));
        return Ok(());
    }

    info!("Starting diabetes-risk with schema '{}'", schema.name);

    // === Dependency Injection ===
    let store = Arc::new(JsonArtifactStore::new());
    let context = LoadArtifactsUseCase::new(store)
        .execute(LoadArtifactsInput::new(paths, schema).with_drift_policy(drift))
        .context("Failed to load model artifacts")?;

    let use_case = AssessRiskUseCase::new(Arc::new(context));

    // Interactive form
    if cli.interactive {
        let mut repl = FormRepl::new(use_case)
            .with_history_path(config.form.history_path())
            .with_banner(!cli.quiet);
        repl.run()?;
        return Ok(());
    }

    // Single submission
    let json = match &cli.input {
        Some(path) => Some(read_input(path)?),
        None => None,
    };
    let input = collect_answers(use_case.context().schema(), json.as_deref(), &cli.set)
        .context("Invalid answers")?;

    let result = use_case.execute(&input)?;
    debug!("Predicted {} risk", result.label);

    let report = RiskReport::from_result(&result);
    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    let output = match format {
        OutputFormat::Full => ConsoleFormatter::format_full(&report),
        OutputFormat::Brief => ConsoleFormatter::format_brief(&report),
        OutputFormat::Json => ConsoleFormatter::format_json(&report) + "\n",
    };

    print!("{}", output);

    Ok(())
}

/// Log every configuration issue; abort if any is an error
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    let mut errors = 0;

    for issue in &issues {
        match issue.severity {
            Severity::Error => {
                error!("{}", issue.message);
                errors += 1;
            }
            Severity::Warning => warn!("{}", issue.message),
        }
    }

    if errors > 0 {
        bail!("Configuration has {} error(s)", errors);
    }
    Ok(())
}

/// Pick the form schema; any schema flag beats every config setting
fn resolve_schema(cli: &Cli, config: &FileConfig) -> Result<FeatureSchema> {
    let (config_variant, _) = config.encoder.parse_schema();

    let (variant, schema_file) = match (&cli.schema_file, cli.schema) {
        (Some(file), _) => (config_variant, Some(file.clone())),
        (None, Some(variant)) => {
            if let Some(file) = &config.encoder.schema_file {
                info!(
                    "--schema {} overrides encoder.schema_file {}",
                    variant,
                    file.display()
                );
            }
            (variant, None)
        }
        (None, None) => (config_variant, config.encoder.schema_file.clone()),
    };

    SchemaLoader::resolve(variant, schema_file.as_deref())
        .context("Failed to load the form schema")
}

/// Read answers from a file, or stdin for `-`
fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read answers from stdin")?;
        return Ok(buf);
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers from {}", path.display()))
}
