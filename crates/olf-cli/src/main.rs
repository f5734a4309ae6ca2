mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "olf",
    about = "Validate and report on Open Ledger Format files.",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a ledger file and print its aggregate totals.
    Validate {
        /// Path to a .yaml/.yml/.json ledger file
        file: PathBuf,
    },
    /// Render a monthly report table from a validated ledger file.
    Report {
        /// Path to a .yaml/.yml/.json ledger file
        file: PathBuf,
        /// Print only one expense figure per month
        #[arg(short, long)]
        short: bool,
    },
    /// Commands for the legacy list-based format.
    V1 {
        #[command(subcommand)]
        command: V1Commands,
    },
}

#[derive(Subcommand)]
enum V1Commands {
    /// Validate a legacy ledger file.
    Validate {
        /// Path to a legacy .yaml/.yml/.json ledger file
        file: PathBuf,
    },
    /// Render a monthly report table from a legacy ledger file.
    Report {
        /// Path to a legacy .yaml/.yml/.json ledger file
        file: PathBuf,
        /// Print only one expense figure per month
        #[arg(short, long)]
        short: bool,
    },
    /// Convert a legacy ledger file to the current format.
    Migrate {
        /// Legacy input file
        input: PathBuf,
        /// Destination for the converted ledger
        output: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Validate { file } => commands::validate::run(&file),
        Commands::Report { file, short } => commands::report::run(&file, short),
        Commands::V1 { command } => match command {
            V1Commands::Validate { file } => commands::v1::validate(&file),
            V1Commands::Report { file, short } => commands::v1::report(&file, short),
            V1Commands::Migrate { input, output } => commands::v1::migrate(&input, &output),
        },
    };

    if let Err(err) = result {
        eprintln!("{} {err}", "error:".red().bold());
        std::process::exit(1);
    }
}
