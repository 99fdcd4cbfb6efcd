//! `kraft` command-line entry point.

mod cloud;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cloud::CloudArgs;

#[derive(Parser, Debug)]
#[command(
    name = "kraft",
    version,
    about = "Build and manage unikernels on KraftCloud",
    propagate_version = true
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage resources on KraftCloud
    Cloud(CloudArgs),
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Cloud(args) => cloud::run(args).await,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
