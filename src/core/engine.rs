use crate::core::Pipeline;
use crate::domain::model::GenerationSummary;
use crate::utils::error::Result;

/// Runs a pipeline start to finish; the first error aborts the run.
pub struct GeneratorEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> GeneratorEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<GenerationSummary> {
        // Extract
        let source = self.pipeline.extract().await?;
        tracing::info!("🎨 Generating favicons from {}", source.path);

        // Transform
        let rendered = self.pipeline.transform(source).await?;
        tracing::debug!("Rendered {} artifacts", rendered.artifacts.len());

        // Load
        let summary = self.pipeline.load(rendered).await?;
        tracing::info!(
            "Wrote {} files to {}",
            summary.files_written.len(),
            summary.output_dir
        );

        Ok(summary)
    }
}
