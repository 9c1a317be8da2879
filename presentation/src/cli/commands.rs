//! CLI command definitions

use clap::{Parser, ValueEnum};
use risk_domain::SchemaVariant;
use std::path::PathBuf;

/// Output format for the risk report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Headline plus the advice list
    Full,
    /// Only the headline
    Brief,
    /// JSON output
    Json,
}

impl From<OutputFormat> for risk_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => risk_domain::OutputFormat::Full,
            OutputFormat::Brief => risk_domain::OutputFormat::Brief,
            OutputFormat::Json => risk_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for diabetes-risk
#[derive(Parser, Debug)]
#[command(name = "diabetes-risk")]
#[command(
    author,
    version,
    about = "Estimate the risk of needing diabetes medication from a short health form"
)]
#[command(long_about = r#"
diabetes-risk answers a short health questionnaire with a pre-trained
classifier and prints whether you are at high or low risk of needing
diabetes medication, with some general advice.

Answers are given with --set, read from a JSON file with --input, or
entered in the interactive form (--interactive). Unanswered fields keep
their form defaults. Use --list-fields to see every question.

Configuration is loaded from (in priority order):
1. --config <path>     Explicit config file
2. DIABETES_RISK_<SECTION>__<KEY>        Environment, e.g. DIABETES_RISK_ENCODER__SCHEMA=extended
3. ./risk.toml         Project-level config
4. ~/.config/diabetes-risk/config.toml   Global config

Example:
  diabetes-risk --set age="[50-60)" --set A1Cresult=">8" --set num_medications=22
  diabetes-risk --schema extended --input answers.json -o json
  diabetes-risk --interactive
"#)]
pub struct Cli {
    /// Path to the classifier artifact
    #[arg(long, value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Path to the scaler artifact
    #[arg(long, value_name = "PATH")]
    pub scaler: Option<PathBuf>,

    /// Built-in form variant (medication, extended)
    #[arg(long, value_name = "NAME")]
    pub schema: Option<SchemaVariant>,

    /// Load the form from a TOML schema file instead of a built-in variant
    #[arg(long, value_name = "PATH")]
    pub schema_file: Option<PathBuf>,

    /// Fail at startup if the form produces columns the classifier does not know
    #[arg(long)]
    pub strict_schema: bool,

    /// Answer a question (can be specified multiple times)
    #[arg(short, long = "set", value_name = "FIELD=VALUE")]
    pub set: Vec<String>,

    /// Read answers from a JSON object file ("-" for stdin)
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Fill in the form interactively
    #[arg(short, long, conflicts_with_all = ["set", "input"])]
    pub interactive: bool,

    /// List the form fields and exit
    #[arg(long)]
    pub list_fields: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors and skip the form banner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_one_shot() {
        let cli = Cli::try_parse_from([
            "diabetes-risk",
            "--schema",
            "extended",
            "-s",
            "age=[50-60)",
            "--set",
            "pregnant=no",
            "-o",
            "json",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.schema, Some(SchemaVariant::Extended));
        assert_eq!(cli.set, vec!["age=[50-60)", "pregnant=no"]);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.interactive);
    }

    #[test]
    fn test_unknown_schema_rejected() {
        assert!(Cli::try_parse_from(["diabetes-risk", "--schema", "legacy"]).is_err());
    }

    #[test]
    fn test_interactive_conflicts_with_set() {
        assert!(Cli::try_parse_from(["diabetes-risk", "-i", "-s", "age=[0-10)"]).is_err());
    }

    #[test]
    fn test_long_help_lists_every_config_source() {
        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("--config <path>"));
        assert!(help.contains("DIABETES_RISK_<SECTION>__<KEY>"));
        assert!(help.contains("./risk.toml"));
        assert!(help.contains("diabetes-risk/config.toml"));
    }

    #[test]
    fn test_output_format_maps_to_domain() {
        assert_eq!(
            risk_domain::OutputFormat::from(OutputFormat::Brief),
            risk_domain::OutputFormat::Brief
        );
    }
}
