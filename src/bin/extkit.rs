use clap::{Parser, Subcommand, ValueEnum};
use extkit::{
    args::{ArgumentParser, DuplicateKeyPolicy},
    config::{self, ExtConfig},
    reflect, strings, Error, InternalResult,
};
use serde_json::Value;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file
    #[arg(long, default_value = "extkit.json", global = true)]
    config: PathBuf,

    /// Enable debug mode
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse `-key=value` style tokens and print them as JSON
    #[command(disable_help_flag = true)]
    Args {
        /// Fail on repeated keys instead of keeping the last value
        #[arg(long)]
        reject_duplicates: bool,

        #[arg(num_args = 0.., allow_hyphen_values = true, trailing_var_arg = true)]
        tokens: Vec<String>,
    },

    /// Coerce a string to a richer type
    Coerce {
        #[arg(value_enum)]
        kind: CoerceKind,
        value: String,
    },

    /// Strip currency formatting from a number
    Clean { value: String },

    /// Read a dotted property path out of a JSON document
    Prop { json: String, path: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum CoerceKind {
    Bool,
    Int,
    Decimal,
    Date,
}

fn load_config(cli: &Cli) -> InternalResult<ExtConfig> {
    if cli.config.exists() {
        config::from_file(&cli.config)
    } else {
        Ok(ExtConfig::default())
    }
}

fn run(cli: &Cli) -> InternalResult<Value> {
    let config = load_config(cli)?;
    info!("config loaded.");
    debug!("config: {:?}", config);

    let output = match &cli.command {
        Commands::Args {
            reject_duplicates,
            tokens,
        } => {
            let mut parser_config = config.parser.clone();
            if *reject_duplicates {
                parser_config.duplicate_policy = DuplicateKeyPolicy::Reject;
            }
            let table = ArgumentParser::new(parser_config).parse(tokens)?;
            serde_json::to_value(table)
                .map_err(|e| Error::internal(format!("Failed to encode table: {}", e)))?
        }
        Commands::Coerce { kind, value } => match kind {
            CoerceKind::Bool => strings::to_boolean(value).map_or(Value::Null, Value::from),
            CoerceKind::Int => strings::to_integer(value).map_or(Value::Null, Value::from),
            CoerceKind::Decimal => strings::to_decimal(value)
                .map_or(Value::Null, |d| Value::String(d.to_string())),
            CoerceKind::Date => strings::to_date_time_with(value, &config.coercion)
                .map_or(Value::Null, |d| Value::String(d.to_string())),
        },
        Commands::Clean { value } => Value::String(strings::clean_number_string(value)),
        Commands::Prop { json, path } => {
            let document: Value = serde_json::from_str(json)
                .map_err(|e| Error::internal(format!("Failed to parse JSON: {}", e)))?;
            reflect::get_prop_value(Some(&document), path)?.unwrap_or(Value::Null)
        }
    };

    Ok(output)
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(value) => println!("{}", value),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
