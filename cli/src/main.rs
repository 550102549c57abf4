//! CLI entrypoint for toolforge
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use toolforge_application::{
    BuildRegistryOutput, BuildRegistryUseCase, InspectToolsUseCase, InvokeToolUseCase,
};
use toolforge_infrastructure::{ConfigLoader, FileConfig, JsonSchemaToolConverter, XrplModelCatalog};
use toolforge_presentation::{Cli, Command, build_call, disable_color, formatter_for};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    init_logging(cli.verbose, &config)?;

    if cli.show_config {
        ConfigLoader::print_config_sources();
        println!();
        println!("Effective configuration:");
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        bail!("No command given. Run `toolforge --help` for usage.");
    };

    if cli.no_color || !config.output.color {
        disable_color();
    }
    let formatter = formatter_for(cli.output.unwrap_or(config.output.format));

    // === Dependency Injection ===
    let catalog = Arc::new(XrplModelCatalog::new());
    let BuildRegistryOutput { registry, stats } =
        BuildRegistryUseCase::new(catalog).execute(&config.to_registry_config())?;
    info!(
        tools = stats.total_tools,
        skipped = stats.skipped.len(),
        rejected = stats.rejected.len(),
        "Tool registry ready"
    );

    let registry = Arc::new(registry);
    let inspect = InspectToolsUseCase::new(registry.clone(), Arc::new(JsonSchemaToolConverter));

    match command {
        Command::List { category } => {
            let listing = inspect.list(category.as_deref())?;
            println!("{}", formatter.format_listing(&listing));
        }
        Command::Describe { tool, model } => {
            let schema = match (tool, model) {
                (Some(tool), _) => inspect.describe(&tool)?,
                (None, Some(model)) => inspect.describe_model(&model)?,
                (None, None) => bail!("Either a tool name or --model is required"),
            };
            println!("{}", formatter.format_schema(&schema));
        }
        Command::Invoke {
            tool,
            positional,
            args,
        } => {
            let call = build_call(&tool, &positional, &args);
            let result = InvokeToolUseCase::new(registry).execute(&call);
            println!("{}", formatter.format_result(&result));
            if !result.is_ok() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Schema { tool } => {
            let schemas = inspect.json_schema(tool.as_deref())?;
            println!("{}", formatter.format_json_schema(&schemas));
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Initialize logging to stderr: `-v` flags win, then `[logging] level`, then warn
fn init_logging(verbose: u8, config: &FileConfig) -> Result<()> {
    let filter = match (verbose, &config.logging.level) {
        (0, Some(level)) => EnvFilter::try_new(level)
            .with_context(|| format!("Invalid logging.level '{}'", level))?,
        (0, None) => EnvFilter::new("warn"),
        (1, _) => EnvFilter::new("info"),
        (2, _) => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
