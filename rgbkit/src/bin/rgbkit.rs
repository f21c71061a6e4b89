//! rgbkit - Apply image transformations from the command line
//!
//! Reads an image, applies the requested operations in order, and writes
//! the result.

use anyhow::{Context, Result, bail};
use clap::Parser;
use rgbkit::{Operation, Pipeline};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rgbkit")]
#[command(author, version, about = "Apply RGB image transformations")]
#[command(long_about = "
Applies point and neighborhood transforms to an image file.

Operations run left to right. Available operations:
  weighted-grayscale, grayscale, solarize[:T], three-band,
  extreme-contrast, sepia, negative, blur, edges[:T]

Examples:
  rgbkit photo.png -o gray.png --op weighted-grayscale
  rgbkit photo.png -o out.png --op solarize:100 --op blur
  rgbkit photo.png -o edges.png --pipeline blur,edges:12
")]
struct Cli {
    /// Input image
    #[arg(required_unless_present = "list")]
    input: Option<PathBuf>,

    /// Output image (format from extension)
    #[arg(short, long, required_unless_present = "list")]
    output: Option<PathBuf>,

    /// Operation to apply; repeat for several
    #[arg(long = "op", value_name = "OP")]
    ops: Vec<Operation>,

    /// Comma-separated operations, applied after any --op
    #[arg(short, long, value_name = "OPS")]
    pipeline: Option<Pipeline>,

    /// List available operations and exit
    #[arg(long)]
    list: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.list {
        for name in Operation::NAMES {
            println!("{name}");
        }
        return Ok(());
    }

    let (Some(input), Some(output)) = (cli.input, cli.output) else {
        bail!("both an input and an --output path are required");
    };

    let mut pipeline = Pipeline::new(cli.ops);
    if let Some(extra) = cli.pipeline {
        for op in extra.operations() {
            pipeline.push(*op);
        }
    }
    if pipeline.operations().is_empty() {
        bail!("no operations given; use --op or --pipeline (see --list)");
    }

    let grid = rgbkit::io::read_image(&input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    info!(
        input = %input.display(),
        width = grid.width(),
        height = grid.height(),
        pipeline = %pipeline,
        "Processing"
    );

    let result = pipeline.apply(grid);

    rgbkit::io::write_image(&result, &output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!(output = %output.display(), "Done");

    Ok(())
}
