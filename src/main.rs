use anyhow::{Context, Result};
use clap::Parser;
use ray_scene::cli::Cli;
use ray_scene::config::BuildConfig;
use ray_scene::core::device::Device;
use ray_scene::renderer::Renderer;
use ray_scene::scenes::{create_scene, populate_lights};
use ray_scene::session::{CommitReport, RenderSession};
use serde::Serialize;

#[derive(Serialize)]
struct Summary {
    scene: String,
    model: String,
    geometries: usize,
    volumes: usize,
    bounds_min: [f32; 3],
    bounds_max: [f32; 3],
    top_level_nodes: usize,
    lights: usize,
    renderer: String,
    commit: CommitReport,
    frames: u64,
    live_handles: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let config = match &cli.config {
        Some(path) => BuildConfig::load(path)
            .with_context(|| format!("loading build config {}", path.display()))?,
        None => BuildConfig::default(),
    };

    let device = Device::new(config);
    let model = create_scene(cli.scene, &device)?;
    let mut session = RenderSession::with_model(device, model, Renderer::new(cli.renderer.clone()));
    populate_lights(session.lights_mut(), cli.lights);

    session.init().context("initializing renderer")?;
    let commit = session.commit().context("committing scene")?;
    for _ in 0..cli.frames {
        session.render_frame()?;
    }

    let bounds = session.model().bounds()?;
    let structure = session.model().structure()?;
    let summary = Summary {
        scene: format!("{:?}", cli.scene).to_lowercase(),
        model: session.model().to_string(),
        geometries: structure.geometry_count(),
        volumes: structure.volume_count(),
        bounds_min: bounds.min.to_array(),
        bounds_max: bounds.max.to_array(),
        top_level_nodes: structure.committed().map_or(0, |c| c.top_level.nodes.len()),
        lights: session.lights().len(),
        renderer: session
            .renderer()
            .created_type()
            .map_or_else(|| "none".to_string(), |kind| kind.to_string()),
        commit,
        frames: session.frames_rendered(),
        live_handles: session.device().handles().live_count(),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{} [{}]", summary.model, structure.structure_handle());
        println!("  bounds: {:?} .. {:?}", summary.bounds_min, summary.bounds_max);
        println!("  top-level BVH nodes: {}", summary.top_level_nodes);
        println!("  renderer: {} with {} lights", summary.renderer, summary.lights);
        println!("  frames rendered: {}", summary.frames);
    }

    Ok(())
}
