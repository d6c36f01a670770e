//! CLI Argument Parsing
//!
//! Global flags (--json, --color, --verbose, --config) are inherited by all
//! subcommands. Numeric inputs are taken as raw text and normalized the same
//! way form fields are, so `--amount 12k` means 12.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::DefaultsConfig;
use crate::input::FieldValues;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// growth - compound-interest investment projections
#[derive(Parser, Debug)]
#[command(name = "growth")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'growth' without arguments to project the configured defaults.")]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Config file (defaults to ./growth.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Calculator fields; anything omitted falls back to the configured defaults
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct InputArgs {
    /// Starting amount
    #[arg(short, long)]
    pub amount: Option<String>,

    /// Duration, in --unit
    #[arg(short, long)]
    pub duration: Option<String>,

    /// Duration unit (months or years)
    #[arg(short, long)]
    pub unit: Option<String>,

    /// Annual rate of return, in percent
    #[arg(short, long)]
    pub rate: Option<String>,

    /// Currency (ILS, USD or EUR)
    #[arg(short, long)]
    pub currency: Option<String>,

    /// Disable chart animations
    #[arg(long)]
    pub reduced_motion: bool,
}

impl InputArgs {
    /// Raw field values, filling gaps from `defaults`
    pub fn fields(&self, defaults: &DefaultsConfig) -> FieldValues {
        let base = defaults.fields();
        FieldValues {
            start_amount: self.amount.clone().unwrap_or(base.start_amount),
            duration: self.duration.clone().unwrap_or(base.duration),
            duration_unit: self.unit.clone().unwrap_or(base.duration_unit),
            rate: self.rate.clone().unwrap_or(base.rate),
            currency: self.currency.clone().unwrap_or(base.currency),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Project growth and print the summary, split and yearly values
    Project {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print the doughnut and line chart specifications as JSON
    Charts {
        #[command(flatten)]
        input: InputArgs,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Prompt for each field and recompute after every answer
    Interactive,

    /// Show version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_subcommand() {
        let cli = Cli::try_parse_from(["growth"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_project() {
        let cli = Cli::try_parse_from([
            "growth", "project", "--amount", "10000", "--duration", "12", "--unit", "months",
            "--rate", "12", "--currency", "USD",
        ])
        .unwrap();

        if let Some(Commands::Project { input }) = cli.command {
            assert_eq!(input.amount.as_deref(), Some("10000"));
            assert_eq!(input.unit.as_deref(), Some("months"));
            assert_eq!(input.currency.as_deref(), Some("USD"));
            assert!(!input.reduced_motion);
        } else {
            panic!("Expected Project command");
        }
    }

    #[test]
    fn test_cli_parse_charts_pretty() {
        let cli = Cli::try_parse_from(["growth", "charts", "--pretty", "-r", "5"]).unwrap();
        if let Some(Commands::Charts { input, pretty }) = cli.command {
            assert!(pretty);
            assert_eq!(input.rate.as_deref(), Some("5"));
        } else {
            panic!("Expected Charts command");
        }
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["growth", "project", "--json", "-vv", "--color", "never"])
            .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.color, Some(ColorWhen::Never));
    }

    #[test]
    fn test_input_args_fill_from_defaults() {
        let args = InputArgs {
            rate: Some("3".to_string()),
            ..InputArgs::default()
        };
        let fields = args.fields(&DefaultsConfig::default());
        assert_eq!(fields.rate, "3");
        assert_eq!(fields.start_amount, "100000");
        assert_eq!(fields.currency, "ILS");
    }
}
