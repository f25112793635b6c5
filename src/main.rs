//! planetgrid CLI - prints a Voronoi region partition of an x-wrapping grid.

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use planetgrid::partition::{build_region_partition, PartitionConfig};

/// Prints region labels for a `WIDTH x HEIGHT` grid, one row per line.
#[derive(Parser)]
#[command(name = "planetgrid")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Grid width in cells. The world wraps on this axis.
    width: usize,

    /// Grid height in cells.
    height: usize,

    /// Cells per seed point.
    density: usize,

    /// Random seed for reproducible output.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Sample seed points with replacement. Seeds sharing a cell leave their
    /// labels unused.
    #[arg(long)]
    with_replacement: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("planetgrid=info".parse()?))
        .init();

    let cli = Cli::parse();
    if cli.width == 0 || cli.height == 0 {
        bail!("width and height must be positive, got {}x{}", cli.width, cli.height);
    }

    let seed = match cli.seed {
        Some(seed) => seed,
        None => {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .context("system clock is before the Unix epoch")?
                .as_nanos() as u64
        }
    };

    let config = PartitionConfig::new(cli.width, cli.height, cli.density)
        .with_seed(seed)
        .with_distinct_points(!cli.with_replacement);
    info!(
        width = config.width,
        height = config.height,
        points = config.num_points(),
        seed,
        "building region partition"
    );

    let labels = build_region_partition(&config).with_context(|| {
        format!(
            "failed to partition a {}x{} grid at density {}",
            cli.width, cli.height, cli.density
        )
    })?;

    print!("{labels}");
    Ok(())
}
