extern crate rust_raycaster as root;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use structopt::StructOpt;
use tracing::{error, info, Level};

use root::parsing::config::{get_settings, Config, TOMLConfig};
use root::parsing::construct_world;
use root::renderer::{output_film, NaiveRenderer};

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long)]
    pub scene_file: Option<String>,
    #[structopt(long, default_value = "data/config.toml")]
    pub config_file: String,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "info")]
    pub log_level: String,
}

fn parse_log_level(level: &str, default: Level) -> Level {
    match level.to_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => default,
    }
}

fn main() -> anyhow::Result<()> {
    let opts = Opt::from_args();
    tracing_subscriber::fmt()
        .with_max_level(parse_log_level(&opts.log_level, Level::INFO))
        .init();

    let mut toml_config: TOMLConfig = get_settings(Path::new(&opts.config_file))?;
    // override the scene file based on the provided command line argument
    if let Some(scene_file) = opts.scene_file {
        toml_config.default_scene_file = scene_file;
    }
    let config = Config::from(toml_config);

    let threads = config
        .render_settings
        .iter()
        .fold(1u16, |a, settings| a.max(settings.threads));
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads as usize)
        .build_global()?;

    let world = match construct_world(PathBuf::from(config.scene_file.clone())) {
        Ok(world) => Arc::new(world),
        Err(error) => {
            error!("fatal error parsing scene, aborting: {:?}", error);
            return Err(error);
        }
    };
    info!(
        bodies = world.bodies.len(),
        lights = world.lights.len(),
        "loaded scene from {}",
        config.scene_file
    );

    if opts.dry_run {
        return Ok(());
    }

    std::fs::create_dir_all(&config.output_directory)?;
    let renderer = NaiveRenderer::new();
    for (render_id, settings) in config.render_settings.iter().enumerate() {
        let film = renderer.render(Arc::clone(&world), settings)?;
        let filename = settings
            .filename
            .clone()
            .unwrap_or_else(|| format!("render{}", render_id));
        let path = Path::new(&config.output_directory).join(format!("{}.png", filename));
        output_film(&film, &path)?;
    }
    Ok(())
}
