mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use cutter_core::config::CutterConfig;

#[derive(Parser)]
#[command(name = "cutter")]
#[command(about = "Split files into numbered chunks and join them back")]
#[command(version)]
struct Cli {
    /// Path to the cutter config directory (default: ~/.cutter)
    #[arg(long, global = true, env = "CUTTER_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a file into chunks
    Cut {
        /// File to split
        file: PathBuf,
        /// Number of chunks (at least 2)
        #[arg(short = 'n', long)]
        chunks: Option<u32>,
        /// Directory to write the chunks into
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Join chunks back into the original file
    Join {
        /// First chunk of the set (ends with .p0)
        chunk: PathBuf,
        /// Directory to write the joined file into
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the header of a chunk file
    Inspect {
        /// Chunk file to inspect
        chunk: PathBuf,
    },

    /// Write a default configuration file
    Init,

    /// Show current configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("cutter=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let base_dir = match cli.config_dir {
        Some(ref dir) => dir.clone(),
        None => CutterConfig::default_base_dir()?,
    };

    match cli.command {
        Commands::Cut {
            ref file,
            chunks,
            ref output,
        } => {
            let config = load_config(&base_dir)?;
            commands::cut::run(file, chunks, output.as_deref(), &config)
        }
        Commands::Join {
            ref chunk,
            ref output,
        } => {
            let config = load_config(&base_dir)?;
            commands::join::run(chunk, output.as_deref(), &config)
        }
        Commands::Inspect { ref chunk } => commands::inspect::run(chunk),
        Commands::Init => commands::init::run(&base_dir),
        Commands::Config => commands::config::run(&base_dir),
    }
}

fn load_config(base_dir: &std::path::Path) -> anyhow::Result<CutterConfig> {
    let config_path = CutterConfig::default_path(base_dir);
    tracing::debug!("Loading config from {}", config_path.display());
    Ok(CutterConfig::load_or_default(&config_path)?)
}
