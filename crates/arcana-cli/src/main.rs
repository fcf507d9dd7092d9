//! Command-line tarot reader.

mod commands;
mod console;

use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::RemoteArgs;

#[derive(Parser)]
#[command(
    name = "arcana",
    about = "Arcana: question-driven tarot readings",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log more detail to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show what kind of question this is
    Classify {
        /// The question
        question: String,
    },

    /// Show the spread a question would be read with
    Spread {
        /// The question
        question: String,
    },

    /// List all 78 cards
    Deck,

    /// Give a full reading for a question
    Read {
        /// The question
        question: String,

        /// Topic (love, career, health, finance, family, study, ...)
        #[arg(short, long)]
        category: Option<String>,

        /// Choose a card instead of drawing at random (repeat once per position)
        #[arg(short, long = "pick", value_name = "CARD")]
        picks: Vec<String>,

        /// RNG seed for reproducible draws
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the reading as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        remote: RemoteArgs,
    },

    /// Start an interactive reading session
    Session {
        /// Topic to start with
        #[arg(short, long)]
        category: Option<String>,

        /// RNG seed for reproducible draws
        #[arg(short, long)]
        seed: Option<u64>,

        #[command(flatten)]
        remote: RemoteArgs,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Classify { question } => commands::classify::run(&question),
        Commands::Spread { question } => commands::spread::run(&question),
        Commands::Deck => commands::deck::run(),
        Commands::Read {
            question,
            category,
            picks,
            seed,
            json,
            remote,
        } => commands::read::run(&question, category.as_deref(), &picks, seed, json, &remote),
        Commands::Session {
            category,
            seed,
            remote,
        } => commands::session::run(category.as_deref(), seed, &remote),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
