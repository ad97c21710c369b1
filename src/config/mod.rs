#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::domain::model::ICON_TARGETS;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use toml_config::AppConfig;

pub const MIN_DENSITY: f32 = 72.0;
pub const MAX_DENSITY: f32 = 1200.0;

/// Resolved settings a generation run uses.
#[derive(Debug, Clone)]
pub struct GeneratorSettings {
    pub source_path: String,
    pub output_dir: String,
    pub density: f32,
    pub app: AppConfig,
}

impl ConfigProvider for GeneratorSettings {
    fn source_path(&self) -> &str {
        &self.source_path
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn density(&self) -> f32 {
        self.density
    }

    fn app(&self) -> &AppConfig {
        &self.app
    }
}

impl Validate for GeneratorSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("source", &self.source_path)?;
        validation::validate_path("output_dir", &self.output_dir)?;
        validation::validate_range("density", self.density, MIN_DENSITY, MAX_DENSITY)?;
        validation::validate_targets("targets", ICON_TARGETS)?;
        self.app.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> GeneratorSettings {
        GeneratorSettings {
            source_path: "public/hyprlax-icon.svg".to_string(),
            output_dir: "public".to_string(),
            density: 300.0,
            app: AppConfig::default(),
        }
    }

    #[test]
    fn test_default_settings_validate() {
        assert!(settings().validate().is_ok());
    }

    #[test]
    fn test_density_out_of_range() {
        let mut s = settings();
        s.density = 5000.0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_empty_output_dir() {
        let mut s = settings();
        s.output_dir = String::new();
        assert!(s.validate().is_err());
    }
}
