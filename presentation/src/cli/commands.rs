//! CLI command definitions

use super::args::parse_key_value;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use toolforge_domain::OutputFormat;

/// CLI arguments for toolforge
#[derive(Parser, Debug)]
#[command(name = "toolforge")]
#[command(author, version, about = "Schema-driven tool registry - every XRPL model becomes a callable tool")]
#[command(long_about = r#"
Toolforge turns every model of the bundled XRPL catalog into a named tool.
Tools accept loosely-typed arguments (everything may be a string), coerce
them toward the declared field types, validate required fields and enum
values, and return the model's canonical JSON representation or a
structured failure that carries the tool's full schema.

Tool names follow create_<category>_<model>, e.g. create_transaction_payment.

Configuration files are loaded from (in priority order):
1. TOOLFORGE_* environment variables (e.g. TOOLFORGE_OUTPUT__FORMAT=json)
2. --config <path>     Explicit config file
3. ./toolforge.toml    Project-level config
4. ~/.config/toolforge/config.toml   Global config

Example:
  toolforge list --category Transaction
  toolforge describe create_transaction_payment
  toolforge invoke create_transaction_payment --arg account=rN7n7otQDd6FczFgLdSqtcsAUxDkw6fzRH \
      --arg destination=rPT1Sjq2YGrBMTttX4GZHjKu9dyfzbpAYe --arg amount=1000000
  toolforge invoke create_currency_issuedcurrency USD rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh
  toolforge -o json schema create_request_accountinfo
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (pretty or json); overrides the config file
    #[arg(short, long, global = true, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List registered tools grouped by category
    List {
        /// Only list tools of this category (case-insensitive)
        #[arg(short, long, value_name = "CATEGORY")]
        category: Option<String>,
    },

    /// Describe a tool's parameters and documentation
    Describe {
        /// Tool name (e.g. create_transaction_payment)
        #[arg(required_unless_present = "model", conflicts_with = "model")]
        tool: Option<String>,

        /// Look the tool up by the model it constructs (e.g. Payment)
        #[arg(short, long, value_name = "MODEL")]
        model: Option<String>,
    },

    /// Invoke a tool and print the canonical model or the failure
    #[command(allow_negative_numbers = true)]
    Invoke {
        /// Tool name
        tool: String,

        /// Positional values, bound to required then optional parameters
        positional: Vec<String>,

        /// Named argument; JSON objects and arrays are parsed, anything else stays a string
        #[arg(short = 'a', long = "arg", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        args: Vec<(String, String)>,
    },

    /// Print JSON Schema for one tool, or for every tool
    Schema {
        /// Tool name; omit for all tools
        tool: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_invoke() {
        let cli = Cli::parse_from([
            "toolforge",
            "-vv",
            "invoke",
            "create_transaction_offercancel",
            "rN7n7otQDd6FczFgLdSqtcsAUxDkw6fzRH",
            "-1",
            "--arg",
            "fee=12",
            "-o",
            "json",
        ]);

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(
            cli.command,
            Some(Command::Invoke {
                tool: "create_transaction_offercancel".to_string(),
                positional: vec!["rN7n7otQDd6FczFgLdSqtcsAUxDkw6fzRH".to_string(), "-1".to_string()],
                args: vec![("fee".to_string(), "12".to_string())],
            })
        );
    }

    #[test]
    fn test_parse_describe_by_model() {
        let cli = Cli::parse_from(["toolforge", "describe", "--model", "Payment"]);
        assert_eq!(
            cli.command,
            Some(Command::Describe {
                tool: None,
                model: Some("Payment".to_string()),
            })
        );
        assert!(Cli::try_parse_from(["toolforge", "describe"]).is_err());
    }

    #[test]
    fn test_show_config_without_command() {
        let cli = Cli::parse_from(["toolforge", "--show-config", "--no-config"]);
        assert!(cli.show_config);
        assert!(cli.no_config);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_rejects_unknown_output_format() {
        assert!(Cli::try_parse_from(["toolforge", "-o", "yaml", "list"]).is_err());
    }
}
