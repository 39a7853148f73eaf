use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "flowlayout-demo", about = "Lay out a flow scene and print the frames")]
pub struct Args {
    /// Path to a JSON scene file
    pub scene: PathBuf,

    /// Override the root width with an at-most constraint
    #[arg(short, long)]
    pub width: Option<f32>,

    /// Enable debug logging (RUST_LOG still wins when set)
    #[arg(short, long)]
    pub verbose: bool,
}
