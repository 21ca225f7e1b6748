use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "fatigueboard", version, about = "Fatigueboard CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a workout session
    Log(commands::log::LogArgs),
    /// Show current fatigue per muscle group
    Status {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Session history
    History {
        #[command(subcommand)]
        action: commands::history::HistoryAction,
    },
    /// List muscle groups and their synergists
    Muscles {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Reset fatigue scores to zero
    Reset {
        /// Also clear the session history
        #[arg(long)]
        all: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Log(args) => commands::log::run(args),
        Commands::Status { json } => commands::status::run(json),
        Commands::History { action } => commands::history::run(action),
        Commands::Muscles { json } => commands::muscles::run(json),
        Commands::Reset { all } => commands::reset::run(all),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
