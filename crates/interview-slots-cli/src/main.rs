//! `slots` CLI — register people, submit availability, and resolve interview slots.
//!
//! All state lives in a JSON store file (`--store`, or `SLOTS_STORE`).
//!
//! ## Usage
//!
//! ```sh
//! # Register a candidate and an interviewer
//! slots add-person --role candidate "John Doe"
//! slots add-person --role interviewer "Jane Doe"
//!
//! # Submit free time (JSON array of days) from a file or stdin
//! slots submit --role candidate "John Doe" -i john.json
//! echo '[{"day":"2014-01-01","time_slots":[{"from":"10:00:00","to":"11:00:00"}]}]' \
//!   | slots submit --role interviewer "Jane Doe"
//!
//! # Find the windows everyone shares
//! slots resolve --candidate "John Doe" --interviewer "Jane Doe"
//!
//! # Inspect or drop a person's availability
//! slots show --role interviewer "Jane Doe"
//! slots delete --role interviewer "Jane Doe"
//!
//! # List everyone in a role, or all of their availability
//! slots list --role interviewer
//! slots list --role interviewer --availability
//!
//! # Unregister someone, availability included
//! slots remove-person --role candidate "John Doe"
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use interview_slots::{
    delete_availability, delete_person, get_availability, list_availability, list_people,
    register_person, resolve_interview_slots, submit_availability, AvailabilitySlot, DayFilter,
    MemoryStore, Role, SlotQuery,
};
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Interview availability and common slot resolution"
)]
struct Cli {
    /// JSON file holding people and their availability
    #[arg(long, global = true, env = "SLOTS_STORE", default_value = "slots-store.json")]
    store: String,

    /// Log resolution steps to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a candidate or interviewer
    AddPerson {
        #[arg(long, value_enum)]
        role: RoleArg,
        name: String,
    },
    /// Unregister a person and drop their availability
    RemovePerson {
        #[arg(long, value_enum)]
        role: RoleArg,
        name: String,
    },
    /// List registered names, or every availability record with --availability
    List {
        #[arg(long, value_enum)]
        role: RoleArg,
        #[arg(long)]
        availability: bool,
    },
    /// Validate and merge free time into a person's availability
    Submit {
        #[arg(long, value_enum)]
        role: RoleArg,
        name: String,
        /// JSON array of days (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print a person's availability
    Show {
        #[arg(long, value_enum)]
        role: RoleArg,
        name: String,
    },
    /// Remove a person's availability
    Delete {
        #[arg(long, value_enum)]
        role: RoleArg,
        name: String,
    },
    /// Compute the windows shared by a candidate and all interviewers
    Resolve {
        #[arg(long)]
        candidate: String,
        /// Interviewer name; repeat for several
        #[arg(long = "interviewer", required = true)]
        interviewers: Vec<String>,
        /// How days are narrowed before the overlap step
        #[arg(long, value_enum, default_value_t = DayFilterArg::Any)]
        day_filter: DayFilterArg,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RoleArg {
    Candidate,
    Interviewer,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Candidate => Role::Candidate,
            RoleArg::Interviewer => Role::Interviewer,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum DayFilterArg {
    /// Days the candidate shares with any interviewer
    Any,
    /// Days the candidate shares with every interviewer
    All,
}

impl From<DayFilterArg> for DayFilter {
    fn from(filter: DayFilterArg) -> Self {
        match filter {
            DayFilterArg::Any => DayFilter::AnyInterviewer,
            DayFilterArg::All => DayFilter::AllParties,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let store_path = Path::new(&cli.store);
    let mut store = load_store(store_path)?;

    match cli.command {
        Commands::AddPerson { role, name } => {
            let role = Role::from(role);
            if register_person(&mut store, role, &name).context("Registration rejected")? {
                save_store(store_path, &store)?;
                println!("Registered {role} {name}");
            } else {
                println!("{role} {name} is already registered");
            }
        }
        Commands::RemovePerson { role, name } => {
            let role = Role::from(role);
            delete_person(&mut store, role, &name)?;
            save_store(store_path, &store)?;
            println!("Removed {role} {name}");
        }
        Commands::List { role, availability } => {
            if availability {
                emit_json(&list_availability(&store, role.into()), None)?;
            } else {
                let names: Vec<String> = list_people(&store, role.into())
                    .into_iter()
                    .map(|person| person.name)
                    .collect();
                emit_json(&names, None)?;
            }
        }
        Commands::Submit { role, name, input } => {
            let slots = read_submission(input.as_deref())?;
            let saved = submit_availability(&mut store, role.into(), &name, slots)
                .context("Availability submission rejected")?;
            save_store(store_path, &store)?;
            emit_json(&saved, None)?;
        }
        Commands::Show { role, name } => {
            let availability = get_availability(&store, role.into(), &name)?;
            emit_json(&availability, None)?;
        }
        Commands::Delete { role, name } => {
            let removed = delete_availability(&mut store, role.into(), &name)?;
            save_store(store_path, &store)?;
            println!("Deleted {} day(s) of availability for {name}", removed.day_count());
        }
        Commands::Resolve {
            candidate,
            interviewers,
            day_filter,
            output,
        } => {
            let query = SlotQuery::new(candidate, interviewers);
            let result = resolve_interview_slots(&store, &query, day_filter.into())
                .context("Failed to resolve interview slots")?;
            emit_json(&result, output.as_deref())?;
        }
    }

    Ok(())
}

/// Install a stderr subscriber: `warn` by default, `debug` with `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Load the store, treating a missing file as an empty store.
fn load_store(path: &Path) -> Result<MemoryStore> {
    if !path.exists() {
        debug!(path = %path.display(), "store file not found, starting empty");
        return Ok(MemoryStore::new());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read store: {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Corrupt store file: {}", path.display()))
}

fn save_store(path: &Path, store: &MemoryStore) -> Result<()> {
    let json = serde_json::to_string_pretty(store)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write store: {}", path.display()))
}

/// Parse a submission (a JSON array of days) from `path`, or stdin if absent.
fn read_submission(path: Option<&str>) -> Result<Vec<AvailabilitySlot>> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read submission: {path}"))?,
        None => io::read_to_string(io::stdin()).context("Failed to read submission from stdin")?,
    };
    serde_json::from_str(&raw).context("Failed to parse availability JSON")
}

/// Pretty-print `value` as JSON to `path`, or to stdout if absent.
fn emit_json<T: Serialize>(value: &T, path: Option<&str>) -> Result<()> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    match path {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("Failed to write output: {path}"))
        }
        None => io::stdout()
            .lock()
            .write_all(json.as_bytes())
            .context("Failed to write to stdout"),
    }
}
