use crate::demo::run_demo;
use crate::rate::{run_batch, run_rate, BatchCommand, RateCommand};
use clap::{Parser, Subcommand};
use ratings::config::{AppConfig, OutputFormat, TelemetryConfig};
use ratings::error::AppError;
use ratings::telemetry;
use tracing::{debug, warn};

#[derive(Parser, Debug)]
#[command(
    name = "ratings",
    about = "Rate restaurants and dishes with stateless reviewers",
    version
)]
struct Cli {
    /// Output format: text or json (overrides RATINGS_OUTPUT)
    #[arg(long, global = true, value_parser = parse_format)]
    format: Option<OutputFormat>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rate the seeded demo restaurant (default command)
    Demo,
    /// Rate a single entity described on the command line
    Rate {
        #[command(subcommand)]
        command: RateCommand,
    },
    /// Rate every entity in a CSV file
    Batch {
        #[command(subcommand)]
        command: BatchCommand,
    },
}

fn parse_format(raw: &str) -> Result<OutputFormat, String> {
    OutputFormat::parse(raw).map_err(|err| err.to_string())
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => {
            init_demo_telemetry();
            run_demo(&mut out, cli.format.unwrap_or(OutputFormat::Text))
        }
        Command::Rate { command } => {
            let format = configure(cli.format)?;
            run_rate(&mut out, command, format)
        }
        Command::Batch { command } => {
            let format = configure(cli.format)?;
            run_batch(&mut out, command, format)
        }
    }
}

fn configure(format: Option<OutputFormat>) -> Result<OutputFormat, AppError> {
    let mut config = AppConfig::load()?;

    if let Some(format) = format {
        config.output.format = format;
    }

    telemetry::init(&config.telemetry)?;
    debug!(?config.environment, format = ?config.output.format, "configuration loaded");

    Ok(config.output.format)
}

/// The demo never fails on configuration: bad settings fall back to defaults.
fn init_demo_telemetry() {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    let telemetry_error = telemetry::init(&config.telemetry).err();
    if telemetry_error.is_some() {
        telemetry::init(&TelemetryConfig::default()).ok();
    }

    if let Some(err) = config_error {
        warn!(%err, "ignoring invalid configuration for demo");
    }
    if let Some(err) = telemetry_error {
        warn!(%err, "falling back to default log level for demo");
    }
}
