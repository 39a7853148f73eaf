//! flowlayout-demo - lay out a JSON scene and print every frame.

mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use flowlayout::Scene;

use crate::cli::Args;
use crate::logging::setup_logging;

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let mut scene = Scene::load(&args.scene)
        .with_context(|| format!("Failed to load scene '{}'", args.scene.display()))?;
    if let Some(width) = args.width {
        scene = scene.with_max_width(width);
    }

    let frames = scene.layout().context("Failed to build scene")?;
    tracing::info!("Laid out {} nodes", frames.len());

    for (path, rect) in frames {
        println!(
            "{path:<40} x={:<8} y={:<8} w={:<8} h={}",
            rect.x, rect.y, rect.width, rect.height
        );
    }

    Ok(())
}
