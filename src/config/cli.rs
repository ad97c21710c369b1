use super::GeneratorSettings;
use crate::config::toml_config::AppConfig;
use crate::utils::error::Result;
use clap::Parser;

pub const DEFAULT_SOURCE_PATH: &str = "public/hyprlax-icon.svg";
pub const DEFAULT_OUTPUT_DIR: &str = "public";
pub const DEFAULT_DENSITY: f32 = 300.0;

#[derive(Debug, Clone, Parser)]
#[command(name = "favicon-gen")]
#[command(about = "Generate favicons, touch icons, manifest.json and browserconfig.xml from one SVG")]
pub struct CliConfig {
    /// Source SVG
    #[arg(long, default_value = DEFAULT_SOURCE_PATH)]
    pub source: String,

    /// Directory all generated files are written to
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: String,

    /// Optional TOML file overriding the manifest and tile metadata
    #[arg(long)]
    pub config: Option<String>,

    /// Rendering density in DPI
    #[arg(long, default_value_t = DEFAULT_DENSITY)]
    pub density: f32,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the metadata file, if any, and produces the settings the pipeline runs with.
    pub fn resolve(&self) -> Result<GeneratorSettings> {
        let app = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading metadata from: {}", path);
                AppConfig::from_file(path)?
            }
            None => AppConfig::default(),
        };

        Ok(GeneratorSettings {
            source_path: self.source.clone(),
            output_dir: self.output_dir.clone(),
            density: self.density,
            app,
        })
    }
}
