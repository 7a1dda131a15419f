pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use intake_core::config::{AppConfig, ConfigOverrides, LoadOptions, LogFormat};
use intake_core::{ApplicationError, Cadence};
use tracing::{debug, Level};

use crate::commands::CommandResult;

#[derive(Debug, Parser)]
#[command(
    name = "intake",
    about = "Intake product catalog CLI",
    long_about = "Inspect the intake checkout product catalog: listings, popular products, categories, and per-cadence pricing.",
    after_help = "Examples:\n  intake list --category weight-loss --type injection\n  intake show mounjaro-injection --cadence three-monthly\n  intake categories --json"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to an intake.toml config file")]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "Override logging.level (trace|debug|info|warn|error)")]
    log_level: Option<String>,
    #[arg(long, global = true, help = "Override display.default_cadence")]
    default_cadence: Option<Cadence>,
    #[arg(long, global = true, help = "Override assets.base_url (http:// or https://)")]
    assets_base_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "List the full catalog in display order")]
    List {
        #[arg(long, help = "Only list products in this category (e.g. weight-loss)")]
        category: Option<String>,
        #[arg(long, help = "Only list products with this availability (in_stock|out_of_stock)")]
        availability: Option<String>,
        #[arg(
            long = "type",
            help = "Only list products of this delivery form (injection|tablet|topical)"
        )]
        product_type: Option<String>,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Show one product with pricing for a billing cadence")]
    Show {
        #[arg(help = "Product id, e.g. mounjaro-injection")]
        id: String,
        #[arg(long, help = "monthly|three-monthly|six-monthly (defaults to display.default_cadence)")]
        cadence: Option<String>,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "List products flagged as popular")]
    Popular {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "List categories that have at least one product, with display labels")]
    Categories {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::List { .. } => "list",
            Self::Show { .. } => "show",
            Self::Popular { .. } => "popular",
            Self::Categories { .. } => "categories",
            Self::Config => "config",
        }
    }
}

impl Cli {
    fn load_options(&self) -> LoadOptions {
        LoadOptions {
            config_path: self.config.clone(),
            require_file: self.config.is_some(),
            overrides: ConfigOverrides {
                log_level: self.log_level.clone(),
                default_cadence: self.default_cadence,
                assets_base_url: self.assets_base_url.clone(),
            },
        }
    }
}

pub fn run() -> ExitCode {
    let result = execute(Cli::parse());

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

pub fn execute(cli: Cli) -> CommandResult {
    let options = cli.load_options();
    let command_name = cli.command.name();

    let config = match AppConfig::load(options.clone()) {
        Ok(config) => config,
        Err(error) => {
            let error = ApplicationError::Configuration(error.to_string());
            return CommandResult::from_error(command_name, &error);
        }
    };
    init_logging(&config);

    let result = match cli.command {
        Command::List { category, availability, product_type, json } => {
            let args = commands::list::ListArgs {
                category: category.as_deref(),
                availability: availability.as_deref(),
                product_type: product_type.as_deref(),
            };
            commands::list::run(&config, &args, json)
        }
        Command::Show { id, cadence, json } => {
            commands::show::run(&config, &id, cadence.as_deref(), json)
        }
        Command::Popular { json } => commands::popular::run(&config, json),
        Command::Categories { json } => commands::categories::run(json),
        Command::Config => CommandResult::text(commands::config::run(&options)),
    };

    debug!(
        event_name = "cli.command.completed",
        command = command_name,
        exit_code = result.exit_code,
        "command finished"
    );
    result
}

fn init_logging(config: &AppConfig) {
    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(log_level)
        .with_writer(std::io::stderr);

    // A subscriber may already be installed when commands run in-process more than once.
    let _ = match config.logging.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
