//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use crate::commands;
use seatfinder::output::OutputMode;

/// seatfinder - Find your table at the venue
#[derive(Parser, Debug)]
#[command(
    name = "seatfinder",
    version,
    about = "Find your table at the venue",
    long_about = "Look up which table a guest is seated at, pick a table and leave feedback.\n\n\
                  Guest names are matched ignoring case; close matches and suggestions\n\
                  are offered when the name is not typed exactly."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default .seatfinder.toml in the current directory
    Init {
        /// Overwrite an existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Find a guest's table by name
    Lookup {
        /// Guest name (full or partial)
        query: String,

        /// How the name was entered: direct, input (while typing), blur (done typing)
        #[arg(long, default_value = "direct")]
        on: String,
    },

    /// List all guests in seating-list order
    Guests {
        /// Print the list as a guest file (TOML)
        #[arg(long)]
        export: bool,
    },

    /// List tables and who sits at each
    Tables,

    /// Pick a table
    Pick {
        /// Table number
        table: String,

        /// Your name (defaults to the saved name draft)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Rate the evening and send feedback
    Feedback {
        /// Your name (defaults to the saved name draft)
        #[arg(short, long)]
        name: Option<String>,

        /// Stars, 1-5 (0 = no rating)
        #[arg(short, long, default_value_t = 0)]
        rating: u8,

        /// Your opinion (defaults to the saved opinion draft)
        #[arg(short, long)]
        opinion: Option<String>,
    },

    /// Manage saved form drafts
    Draft {
        #[command(subcommand)]
        action: DraftAction,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum DraftAction {
    /// Save a draft value for a form field
    Set {
        /// Field: name, opinion
        field: String,

        /// Value to save
        value: String,
    },

    /// Show saved drafts
    Show,

    /// Remove all saved drafts
    Clear,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Init { force }) => commands::init(force, output_mode),
        Some(Command::Lookup { query, on }) => commands::lookup(&query, &on, output_mode),
        Some(Command::Guests { export }) => commands::guests(export, output_mode),
        Some(Command::Tables) => commands::tables(output_mode),
        Some(Command::Pick { table, name }) => commands::pick(&table, name.as_deref(), output_mode),
        Some(Command::Feedback {
            name,
            rating,
            opinion,
        }) => commands::feedback(name.as_deref(), rating, opinion.as_deref(), output_mode),
        Some(Command::Draft { action }) => commands::draft(action, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("seatfinder v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("seatfinder v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'seatfinder --help' for usage");
                println!("Run 'seatfinder lookup <your name>' to find your table");
            }
            Ok(())
        },
    }
}
