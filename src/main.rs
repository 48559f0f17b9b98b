//! CLI entry point: load, snapshot, edit, snapshot, print.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use palette_forge::{customize, render, EditConfig, JsonEncoder, PaletteSet};

/// Customize a theme palette set with declarative color-space edits.
#[derive(Parser)]
#[command(name = "palette-forge", version)]
struct Cli {
    /// Input palette document.
    #[arg(default_value = "palette.json")]
    input: PathBuf,

    /// Base path for the output snapshots; `-original.json` and
    /// `-customized.json` are appended.
    #[arg(default_value = "output")]
    output: PathBuf,

    /// Edit configuration.
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Include working-space values in the snapshots instead of
    /// flattened hex strings.
    #[arg(long)]
    detailed: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = EditConfig::load(&cli.config)?;
    let mut palettes = PaletteSet::load(&cli.input)?;
    let encoder = JsonEncoder::new(cli.detailed);

    // The original snapshot must be written before any color is mutated.
    let path = encoder.write(&palettes, &cli.output, "original")?;
    info!(path = %path.display(), "wrote original snapshot");

    customize(&mut palettes, &config)?;

    let path = encoder.write(&palettes, &cli.output, "customized")?;
    info!(path = %path.display(), "wrote customized snapshot");

    print!("{}", render(&palettes));
    Ok(())
}
