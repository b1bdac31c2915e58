//! Input Validator CLI
//!
//! Runs a schema over a JSON document or query string and prints the
//! validated value.
//!
//! ```sh
//! input-validator id '{"id":"67e55044-10b1-426f-9247-bb680e5fe0c8"}'
//! input-validator pagination --query 'page=2&limit=10'
//! echo '{"limit": 101}' | input-validator pagination
//!
//! # Validate config without running a schema
//! input-validator --check
//! ```
//!
//! Exit codes: `0` valid, `1` config or input could not be read,
//! `2` input failed validation.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use tracing::{debug, error, info};

use input_validator::config::CONFIG_ENV;
use input_validator::shared::utils::query_params;
use input_validator::{
    default_config_path, init_tracing, AppConfig, IdInput, InputError, PaginationInput, Schema,
    ValidationError,
};

#[derive(Parser, Debug)]
#[command(
    name = "input-validator",
    version,
    about = "Validate identifier and pagination input"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = CONFIG_ENV, global = true)]
    config: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Validate the configuration file and exit.
    #[arg(long)]
    check: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate an identifier payload (`{"id": "<uuid>"}`).
    Id(InputArgs),
    /// Validate pagination parameters (`page`, `limit`).
    Pagination(InputArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// JSON document; read from stdin when omitted.
    input: Option<String>,

    /// Treat the input as a URL query string instead of JSON.
    #[arg(short, long, conflicts_with = "input")]
    query: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let explicit = cli.config.is_some();
    let config_path = cli.config.clone().unwrap_or_else(default_config_path);

    let loaded = if explicit || config_path.exists() {
        AppConfig::load(&config_path).map(Some)
    } else {
        Ok(None)
    };

    let mut config = match loaded {
        Ok(cfg) => cfg.unwrap_or_default(),
        Err(e) => {
            eprintln!("Failed to load config from {}: {}", config_path.display(), e);
            return ExitCode::from(1);
        }
    };

    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    init_tracing(&config.logging);
    debug!(path = %config_path.display(), "configuration resolved");

    if cli.check {
        println!("Configuration is valid");
        println!("   Config file   : {}", config_path.display());
        println!("   Log level     : {}", config.logging.level);
        println!("   Log format    : {}", config.logging.format);
        println!(
            "   Pagination    : page={} limit={} max_limit={}",
            config.pagination.default_page,
            config.pagination.default_limit,
            config.pagination.max_limit
        );
        return ExitCode::SUCCESS;
    }

    let Some(command) = cli.command else {
        error!("no schema given; run with --help");
        return ExitCode::from(1);
    };

    let result = match command {
        Command::Id(args) => read_input(&args).and_then(|value| {
            IdInput::check(&value)
                .map(|id| serde_json::json!(id))
                .map_err(InputError::from)
        }),
        Command::Pagination(args) => read_input(&args).and_then(|value| {
            PaginationInput::check_with(&value, &config.pagination)
                .map(|page| serde_json::json!(page))
                .map_err(InputError::from)
        }),
    };

    match result {
        Ok(value) => {
            info!("input is valid");
            println!("{value}");
            ExitCode::SUCCESS
        }
        Err(InputError::Invalid(err)) => {
            report(&err);
            ExitCode::from(2)
        }
        Err(e) => {
            error!("{e}");
            ExitCode::from(1)
        }
    }
}

fn read_input(args: &InputArgs) -> Result<Value, InputError> {
    if let Some(ref query) = args.query {
        return query_params(query);
    }

    let raw = match args.input {
        Some(ref input) => input.clone(),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    Ok(serde_json::from_str(&raw)?)
}

fn report(err: &ValidationError) {
    match serde_json::to_string_pretty(err) {
        Ok(json) => eprintln!("{json}"),
        Err(_) => eprintln!("{err}"),
    }
}
