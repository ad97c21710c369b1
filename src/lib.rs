pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::{toml_config::AppConfig, GeneratorSettings};
pub use core::{engine::GeneratorEngine, pipeline::FaviconPipeline};
pub use domain::model::{GenerationSummary, IconTarget, ICON_TARGETS};
pub use utils::error::{FaviconError, Result};
