use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

#[derive(Deserialize, Copy, Clone, Debug)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TOMLRenderSettings {
    pub filename: Option<String>,
    pub resolution: Resolution,
    pub threads: Option<u16>,
}

/// Render settings with defaults resolved: an absent thread count becomes
/// the machine's logical CPU count.
#[derive(Clone, Debug)]
pub struct RenderSettings {
    pub filename: Option<String>,
    pub resolution: Resolution,
    pub threads: u16,
}

impl From<TOMLRenderSettings> for RenderSettings {
    fn from(data: TOMLRenderSettings) -> Self {
        RenderSettings {
            filename: data.filename,
            resolution: data.resolution,
            threads: data.threads.unwrap_or(num_cpus::get() as u16),
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct TOMLConfig {
    pub default_scene_file: String,
    pub output_directory: Option<String>,
    pub render_settings: Vec<TOMLRenderSettings>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub scene_file: String,
    pub output_directory: String,
    pub render_settings: Vec<RenderSettings>,
}

impl From<TOMLConfig> for Config {
    fn from(data: TOMLConfig) -> Self {
        Config {
            scene_file: data.default_scene_file,
            output_directory: data.output_directory.unwrap_or_else(|| "output".to_string()),
            render_settings: data
                .render_settings
                .into_iter()
                .map(RenderSettings::from)
                .collect(),
        }
    }
}

pub fn get_settings(filepath: &Path) -> anyhow::Result<TOMLConfig> {
    let mut input = String::new();
    File::open(filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("couldn't read config file {}", filepath.display()))?;
    let settings: TOMLConfig = toml::from_str(&input)
        .with_context(|| format!("couldn't parse config file {}", filepath.display()))?;
    Ok(settings)
}
