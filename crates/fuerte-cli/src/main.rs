//! Fuerte CLI - drive the volume boost capability from the command line.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fuerte")]
#[command(author, version, about = "Volume boost control CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical multiplier-to-gain mapping
    Curve(commands::curve::CurveArgs),

    /// Run a boost lifecycle against a backend
    Run(commands::run::RunArgs),

    /// Serve JSON-line boost requests over stdin/stdout
    Serve(commands::serve::ServeArgs),
}

fn main() -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    // Logs go to stderr; `serve` owns stdout for responses.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Curve(args) => commands::curve::run(args),
        Commands::Run(args) => commands::run::run(args),
        Commands::Serve(args) => commands::serve::run(args),
    }
}
