// cli.rs - Command-line interface configuration
use crate::scenes::SceneKind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "ray-scene")]
#[command(about = "Builds a demo scene and drives it through the commit/render lifecycle", long_about = None)]
pub struct Cli {
    /// Demo scene to build
    #[arg(long, value_enum, default_value = "pyramid")]
    pub scene: SceneKind,

    /// Renderer type (scivis, pathtracer, raycast)
    #[arg(long, default_value = "scivis")]
    pub renderer: String,

    /// Number of frames to render after the commit
    #[arg(long, default_value_t = 1)]
    pub frames: u32,

    /// Point lights to place around the scene
    #[arg(long, default_value_t = 4)]
    pub lights: usize,

    /// JSON build configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the summary as JSON
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Log build progress
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,
}
