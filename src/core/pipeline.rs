use crate::core::descriptors;
use crate::core::raster::{self, SvgRasterizer};
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{
    Artifact, ArtifactKind, GenerationSummary, IconTarget, RenderResult, SourceImage,
    ICON_TARGETS, LEGACY_ICON_NAME, LEGACY_ICON_SIZE, MANIFEST_NAME, TILE_CONFIG_NAME,
};
use crate::utils::error::{FaviconError, Result};
use std::path::Path;

pub struct FaviconPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
    pub(crate) targets: &'static [IconTarget],
}

impl<S: Storage, C: ConfigProvider> FaviconPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            targets: ICON_TARGETS,
        }
    }

    fn output_path(&self, name: &str) -> String {
        Path::new(self.config.output_dir())
            .join(name)
            .to_string_lossy()
            .into_owned()
    }
}

/// One line of per-file progress, e.g. `✓ favicon-32x32.png (32x32)`.
pub fn progress_line(artifact: &Artifact) -> String {
    match artifact.kind {
        ArtifactKind::Raster { size } => format!("✓ {} ({}x{})", artifact.name, size, size),
        ArtifactKind::LegacyIcon { size } => {
            format!("✓ {} ({}x{} ICO)", artifact.name, size, size)
        }
        ArtifactKind::Manifest | ArtifactKind::TileConfig => format!("✓ {}", artifact.name),
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for FaviconPipeline<S, C> {
    async fn extract(&self) -> Result<SourceImage> {
        let path = self.config.source_path();
        tracing::debug!("Reading source image: {}", path);

        let data = self
            .storage
            .read_file(path)
            .await
            .map_err(|e| FaviconError::SourceError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!("Source image is {} bytes", data.len());
        Ok(SourceImage {
            path: path.to_string(),
            data,
        })
    }

    async fn transform(&self, source: SourceImage) -> Result<RenderResult> {
        let rasterizer = SvgRasterizer::from_svg(&source.data, self.config.density())?;

        let largest = self
            .targets
            .iter()
            .map(|t| t.size)
            .max()
            .unwrap_or(LEGACY_ICON_SIZE)
            .max(LEGACY_ICON_SIZE);
        let master = rasterizer.render_master(largest)?;

        let mut artifacts = Vec::with_capacity(self.targets.len() + 3);

        for target in self.targets {
            let icon = raster::fit_square(&master, target.size);
            let data = raster::encode_png(&icon)?;
            tracing::debug!("Encoded {} ({} bytes)", target.name, data.len());

            artifacts.push(Artifact {
                name: target.name.to_string(),
                kind: ArtifactKind::Raster { size: target.size },
                data,
            });
        }

        let legacy = raster::fit_square(&master, LEGACY_ICON_SIZE);
        artifacts.push(Artifact {
            name: LEGACY_ICON_NAME.to_string(),
            kind: ArtifactKind::LegacyIcon {
                size: LEGACY_ICON_SIZE,
            },
            data: raster::encode_ico(&legacy)?,
        });

        let manifest = descriptors::build_manifest(self.config.app(), self.targets)?;
        artifacts.push(Artifact {
            name: MANIFEST_NAME.to_string(),
            kind: ArtifactKind::Manifest,
            data: descriptors::manifest_json(&manifest)?,
        });

        let tile = descriptors::build_tile_config(self.config.app(), self.targets)?;
        artifacts.push(Artifact {
            name: TILE_CONFIG_NAME.to_string(),
            kind: ArtifactKind::TileConfig,
            data: descriptors::tile_config_xml(&tile)?,
        });

        Ok(RenderResult { artifacts })
    }

    async fn load(&self, result: RenderResult) -> Result<GenerationSummary> {
        let mut files_written = Vec::with_capacity(result.artifacts.len());
        let mut largest_raster: Option<(String, u32)> = None;

        for artifact in &result.artifacts {
            let path = self.output_path(&artifact.name);
            self.storage.write_file(&path, &artifact.data).await?;

            // 進度直接寫到 stdout，不受 RUST_LOG 影響
            println!("{}", progress_line(artifact));
            tracing::debug!("Wrote {} ({} bytes)", path, artifact.data.len());

            if let ArtifactKind::Raster { size } = artifact.kind {
                if largest_raster.as_ref().map_or(true, |(_, s)| size > *s) {
                    largest_raster = Some((artifact.name.clone(), size));
                }
            }

            files_written.push(artifact.name.clone());
        }

        Ok(GenerationSummary {
            output_dir: self.config.output_dir().to_string(),
            files_written,
            largest_raster,
        })
    }
}
