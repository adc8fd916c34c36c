use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use engine::Role;
use settings::Settings;
use uuid::Uuid;

mod convert;
mod error;
mod report;
mod settings;
mod validate;

#[derive(Parser, Debug)]
#[command(name = "wipgauge")]
#[command(about = "WIP exposure and risk status for time logged on matters")]
struct Cli {
    /// Settings file (TOML). Defaults to `settings.toml` when present.
    #[arg(long, env = "WIPGAUGE_CONFIG")]
    config: Option<String>,

    /// Override the configured log level.
    #[arg(long)]
    level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report the WIP of a list of time entries (JSON array).
    Summary(SummaryArgs),
    /// Check a request body against the engine's rules.
    Validate(ValidateArgs),
    /// Print the reference report: 45 + 60 minutes at $150/h, $5,000 cap.
    Demo {
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Args, Debug)]
pub(crate) struct SummaryArgs {
    /// Entries file, `-` for standard input.
    #[arg(long, default_value = "-")]
    entries: String,
    /// Role whose rate applies.
    #[arg(long, value_parser = parse_role, default_value = "STAFF")]
    role: Role,
    /// Instant the rate is resolved at (RFC3339). Defaults to now.
    #[arg(long)]
    at: Option<String>,
    /// Matter dollar cap. Without it the percentage is 0.
    #[arg(long)]
    cap: Option<String>,
    /// Hourly rate in dollars, bypassing the configured rate card.
    #[arg(long)]
    rate: Option<String>,
    /// Only count entries logged on this matter.
    #[arg(long)]
    matter: Option<Uuid>,
    #[arg(long)]
    pretty: bool,
}

#[derive(Args, Debug)]
struct ValidateArgs {
    #[arg(value_enum)]
    kind: validate::RequestKind,
    /// Request body file, `-` for standard input.
    #[arg(default_value = "-")]
    input: String,
}

fn parse_role(raw: &str) -> Result<Role, String> {
    Role::try_from(raw).map_err(|err| err.to_string())
}

fn run(command: Command, settings: &Settings) -> error::Result<()> {
    match command {
        Command::Summary(args) => {
            let pretty = args.pretty;
            let summary = report::summary(args, settings)?;
            report::print_json(&convert::summary_response(&summary), pretty)
        }
        Command::Validate(args) => {
            let raw = report::read_input(&args.input)?;
            let normalized = validate::validate(args.kind, &raw)?;
            report::print_json(&normalized, false)
        }
        Command::Demo { pretty } => {
            report::print_json(&convert::summary_response(&report::demo()), pretty)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = match Settings::new(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("failed to load settings: {err}");
            return ExitCode::FAILURE;
        }
    };

    let level = cli.level.as_deref().unwrap_or(&settings.app.level);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(format!("wipgauge={level},engine={level}"))
        .init();
    tracing::info!("settings loaded, {} rates configured", settings.rates.len());

    match run(cli.command, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
