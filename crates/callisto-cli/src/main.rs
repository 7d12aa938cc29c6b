mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "callisto", about = "Binary morphology and connected-component labeling")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show image dimensions and intensity statistics
    Info(commands::info::InfoArgs),
    /// Apply dilation, erosion, opening or closing
    Morph(commands::morph::MorphArgs),
    /// Extract object boundaries
    Boundary(commands::boundary::BoundaryArgs),
    /// Label 8-connected foreground regions
    Label(commands::label::LabelArgs),
    /// Run a task described by a TOML config
    Run(commands::pipeline::RunArgs),
    /// Print or save a default pipeline config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Morph(args) => commands::morph::run(args),
        Commands::Boundary(args) => commands::boundary::run(args),
        Commands::Label(args) => commands::label::run(args),
        Commands::Run(args) => commands::pipeline::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
