//! `lifejourney` command-line entry point.
//!
//! # Responsibility
//! - Load a journey document (bundled sample by default) into a store.
//! - Render read-only views of the journey to stdout.
//!
//! # Invariants
//! - The CLI never mutates the loaded journey.
//! - Logging is only started when `--log-dir` is given; `--log-level` requires it.

mod render;

use clap::{Args, Parser, Subcommand};
use lifejourney_core::{
    core_version, default_log_level, export_json, import_json, init_logging, EventCategory, Impact,
    JourneyStore, LifeEvent, Sentiment, SnapshotError,
};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::process::ExitCode;

const SAMPLE_JOURNEY: &str = include_str!("../data/sample_journey.json");

#[derive(Debug, Parser)]
#[command(name = "lifejourney", version, about = "Explore a journey of dated life events")]
struct Cli {
    /// Journey JSON document; the bundled sample is used when omitted.
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// trace|debug|info|warn|error; only meaningful together with `--log-dir`.
    #[arg(long, global = true, requires = "log_dir")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files.
    #[arg(long, global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Profile and aggregate statistics (default).
    Summary,
    /// Every event in date order.
    Timeline,
    /// Events and overall sentiment for one year.
    Year { year: i32 },
    /// Years that have at least one event.
    Years,
    /// Events matching every given predicate.
    Filter(FilterArgs),
    /// Lessons learned across all events.
    Lessons,
    /// Positives across all events.
    Positives,
    /// Negatives across all events.
    Negatives,
    /// One event by id.
    Show { id: String },
    /// Pretty JSON of the loaded journey.
    Export,
}

#[derive(Debug, Args)]
struct FilterArgs {
    #[arg(long)]
    category: Option<EventCategory>,
    #[arg(long)]
    sentiment: Option<Sentiment>,
    #[arg(long)]
    impact: Option<Impact>,
    #[arg(long)]
    year: Option<i32>,
}

#[derive(Debug)]
enum CliError {
    Io { path: PathBuf, source: std::io::Error },
    Snapshot(SnapshotError),
    Logging(String),
    EventNotFound(String),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Snapshot(err) => write!(f, "{err}"),
            Self::Logging(message) => write!(f, "logging setup failed: {message}"),
            Self::EventNotFound(id) => write!(f, "event not found: {id}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Snapshot(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SnapshotError> for CliError {
    fn from(value: SnapshotError) -> Self {
        Self::Snapshot(value)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String, CliError> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).map_err(CliError::Logging)?;
    }

    let store = load_store(cli.input.as_ref())?;
    let command = cli.command.unwrap_or(Command::Summary);
    info!(
        "event=cli_command module=cli status=start command={} core_version={}",
        command_name(&command),
        core_version()
    );
    execute(&store, command)
}

fn load_store(input: Option<&PathBuf>) -> Result<JourneyStore, CliError> {
    match input {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
                path: path.clone(),
                source,
            })?;
            Ok(import_json(&text)?)
        }
        None => Ok(import_json(SAMPLE_JOURNEY)?),
    }
}

fn execute(store: &JourneyStore, command: Command) -> Result<String, CliError> {
    let output = match command {
        Command::Summary => render::summary(store.journey(), &store.statistics()),
        Command::Timeline => render::event_list(store.events().iter()),
        Command::Year { year } => render::year(&store.year_summary(year)),
        Command::Years => render::years(&store.years_with_events()),
        Command::Filter(args) => render::event_list(filter_events(store, &args).into_iter()),
        Command::Lessons => render::bullets(&store.all_lessons()),
        Command::Positives => render::bullets(&store.all_positives()),
        Command::Negatives => render::bullets(&store.all_negatives()),
        Command::Show { id } => {
            let event = store
                .event_by_id(&id)
                .ok_or_else(|| CliError::EventNotFound(id.clone()))?;
            render::event_detail(event)
        }
        Command::Export => export_json(store)?,
    };
    Ok(output)
}

/// Intersects the store's single-field filters in stored order.
fn filter_events<'a>(store: &'a JourneyStore, args: &FilterArgs) -> Vec<&'a LifeEvent> {
    let mut events: Vec<&LifeEvent> = match args.category {
        Some(category) => store.events_by_category(category),
        None => store.events().iter().collect(),
    };
    if let Some(sentiment) = args.sentiment {
        events.retain(|event| event.sentiment == sentiment);
    }
    if let Some(impact) = args.impact {
        events.retain(|event| event.impact == impact);
    }
    if let Some(year) = args.year {
        events.retain(|event| event.year == year);
    }
    events
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Summary => "summary",
        Command::Timeline => "timeline",
        Command::Year { .. } => "year",
        Command::Years => "years",
        Command::Filter(_) => "filter",
        Command::Lessons => "lessons",
        Command::Positives => "positives",
        Command::Negatives => "negatives",
        Command::Show { .. } => "show",
        Command::Export => "export",
    }
}
