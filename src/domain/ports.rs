use crate::config::toml_config::AppConfig;
use crate::domain::model::{GenerationSummary, RenderResult, SourceImage};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn source_path(&self) -> &str;
    fn output_dir(&self) -> &str;
    /// Rendering density in DPI; 72 maps one SVG user unit to one pixel.
    fn density(&self) -> f32;
    fn app(&self) -> &AppConfig;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<SourceImage>;
    async fn transform(&self, source: SourceImage) -> Result<RenderResult>;
    async fn load(&self, result: RenderResult) -> Result<GenerationSummary>;
}
