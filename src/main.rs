use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use chunk_ferry::cli::{Cli, Commands};
use chunk_ferry::config::TransferConfig;
use chunk_ferry::manifest::Manifest;
use chunk_ferry::{merge, pipeline, split, transfer};

fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout stays a clean progress report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = TransferConfig::from_cli(&cli);

    match cli.command {
        Commands::Split { input, chunks_dir } => {
            split::split_file(&input, &chunks_dir, &config)?;
        }
        Commands::Upload { chunks_dir } => {
            transfer::upload_chunks(&chunks_dir, &config)?;
        }
        Commands::Download {
            output_dir,
            manifest,
        } => {
            let manifest = manifest.map(|p| Manifest::load(&p)).transpose()?;
            transfer::download_chunks(&output_dir, manifest, &config)?;
        }
        Commands::Merge {
            chunks_dir,
            output,
            manifest,
        } => {
            let manifest = manifest.map(|p| Manifest::load(&p)).transpose()?;
            merge::merge_chunks(&chunks_dir, &output, manifest, &config)?;
        }
        Commands::All { input, output } => {
            pipeline::run_all(&input, &output, &config)?;
        }
    }

    Ok(())
}
