pub mod descriptors;
pub mod engine;
pub mod pipeline;
pub mod raster;

pub use crate::domain::model::{Artifact, GenerationSummary, RenderResult, SourceImage};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
