//! gradebook CLI — track courses and weighted marks from the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "gradebook", version, about = "Course and weighted mark tracker")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Catalog state file (overrides the config)
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter gradebook.toml
    Init,

    /// Add random demo courses
    Seed {
        /// Number of courses (default: from config)
        #[arg(long)]
        courses: Option<usize>,
    },

    /// Show every course and its marks
    Show {
        /// Output format: table, json, markdown
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Print a course's totals
    Total {
        /// Course id
        #[arg(long)]
        course: String,
    },

    /// Manage courses
    #[command(subcommand)]
    Course(CourseCommand),

    /// Manage marks within a course
    #[command(subcommand)]
    Mark(MarkCommand),
}

#[derive(Subcommand)]
pub enum CourseCommand {
    /// Add a random course
    Add,

    /// Change a course's code or name; empty values are ignored
    Update {
        /// Course id
        #[arg(long)]
        id: String,

        #[arg(long)]
        code: Option<String>,

        #[arg(long)]
        name: Option<String>,
    },

    /// Remove a course
    Remove {
        /// Course id
        #[arg(long)]
        id: String,
    },
}

#[derive(Subcommand)]
pub enum MarkCommand {
    /// Add a random mark to a course
    Add {
        /// Course id
        #[arg(long)]
        course: String,
    },

    /// Change a mark's fields; empty values are ignored
    Update {
        /// Course id
        #[arg(long)]
        course: String,

        /// Mark id
        #[arg(long)]
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        score: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        max_score: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        weightage: Option<String>,
    },

    /// Remove a mark from a course
    Remove {
        /// Course id
        #[arg(long)]
        course: String,

        /// Mark id
        #[arg(long)]
        id: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gradebook_core=info".parse().unwrap()),
        )
        .init();

    let Cli {
        config,
        state,
        command,
    } = Cli::parse();

    let open = || commands::Session::open(config.as_deref(), state.as_deref());

    let result = match command {
        Commands::Init => commands::init::execute(),
        Commands::Seed { courses } => {
            open().and_then(|mut session| commands::seed::execute(&mut session, courses))
        }
        Commands::Show { format } => {
            open().and_then(|session| commands::show::execute(&session, &format))
        }
        Commands::Total { course } => {
            open().and_then(|session| commands::show::total(&session, &course))
        }
        Commands::Course(cmd) => {
            open().and_then(|mut session| commands::course::execute(&mut session, cmd))
        }
        Commands::Mark(cmd) => {
            open().and_then(|mut session| commands::mark::execute(&mut session, cmd))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
