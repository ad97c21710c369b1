use serde::Serialize;

/// Platform convention a raster target belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetGroup {
    Favicon,
    AppleTouch,
    AndroidChrome,
    MsTile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconTarget {
    pub size: u32,
    pub name: &'static str,
    pub group: TargetGroup,
}

impl IconTarget {
    pub const fn new(size: u32, name: &'static str, group: TargetGroup) -> Self {
        Self { size, name, group }
    }

    /// `"NxN"`, the form used by manifest `sizes`.
    pub fn dimensions(&self) -> String {
        format!("{0}x{0}", self.size)
    }
}

// 256 出現兩次 (favicon 與 android-chrome)，兩者都要保留
pub const ICON_TARGETS: &[IconTarget] = &[
    IconTarget::new(16, "favicon-16x16.png", TargetGroup::Favicon),
    IconTarget::new(32, "favicon-32x32.png", TargetGroup::Favicon),
    IconTarget::new(48, "favicon-48x48.png", TargetGroup::Favicon),
    IconTarget::new(64, "favicon-64x64.png", TargetGroup::Favicon),
    IconTarget::new(96, "favicon-96x96.png", TargetGroup::Favicon),
    IconTarget::new(128, "favicon-128x128.png", TargetGroup::Favicon),
    IconTarget::new(256, "favicon-256x256.png", TargetGroup::Favicon),
    IconTarget::new(180, "apple-touch-icon.png", TargetGroup::AppleTouch),
    IconTarget::new(152, "apple-touch-icon-152x152.png", TargetGroup::AppleTouch),
    IconTarget::new(144, "apple-touch-icon-144x144.png", TargetGroup::AppleTouch),
    IconTarget::new(120, "apple-touch-icon-120x120.png", TargetGroup::AppleTouch),
    IconTarget::new(114, "apple-touch-icon-114x114.png", TargetGroup::AppleTouch),
    IconTarget::new(76, "apple-touch-icon-76x76.png", TargetGroup::AppleTouch),
    IconTarget::new(72, "apple-touch-icon-72x72.png", TargetGroup::AppleTouch),
    IconTarget::new(60, "apple-touch-icon-60x60.png", TargetGroup::AppleTouch),
    IconTarget::new(57, "apple-touch-icon-57x57.png", TargetGroup::AppleTouch),
    IconTarget::new(512, "android-chrome-512x512.png", TargetGroup::AndroidChrome),
    IconTarget::new(384, "android-chrome-384x384.png", TargetGroup::AndroidChrome),
    IconTarget::new(256, "android-chrome-256x256.png", TargetGroup::AndroidChrome),
    IconTarget::new(192, "android-chrome-192x192.png", TargetGroup::AndroidChrome),
    IconTarget::new(144, "mstile-144x144.png", TargetGroup::MsTile),
    IconTarget::new(150, "mstile-150x150.png", TargetGroup::MsTile),
];

pub const LEGACY_ICON_NAME: &str = "favicon.ico";
pub const LEGACY_ICON_SIZE: u32 = 32;
pub const MANIFEST_NAME: &str = "manifest.json";
pub const TILE_CONFIG_NAME: &str = "browserconfig.xml";
pub const TILE_ICON_NAME: &str = "mstile-150x150.png";
pub const MASKABLE_PURPOSE: &str = "any maskable";
pub const PNG_MIME_TYPE: &str = "image/png";

/// The source SVG, read once and never mutated.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub path: String,
    pub data: Vec<u8>,
}

/// Web app manifest (`manifest.json`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebManifest {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub theme_color: String,
    pub background_color: String,
    pub display: String,
    pub scope: String,
    pub start_url: String,
    pub icons: Vec<ManifestIcon>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

/// Pinned tile description written as `browserconfig.xml`.
#[derive(Debug, Clone, PartialEq)]
pub struct TileConfig {
    pub logo_src: String,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Raster { size: u32 },
    LegacyIcon { size: u32 },
    Manifest,
    TileConfig,
}

/// One encoded output file, held in memory until it is written.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub name: String,
    pub kind: ArtifactKind,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct RenderResult {
    pub artifacts: Vec<Artifact>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSummary {
    pub output_dir: String,
    pub files_written: Vec<String>,
    pub largest_raster: Option<(String, u32)>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_target_table_shape() {
        assert_eq!(ICON_TARGETS.len(), 22);
        assert!(ICON_TARGETS.iter().all(|t| t.size > 0));

        let names: HashSet<_> = ICON_TARGETS.iter().map(|t| t.name).collect();
        assert_eq!(names.len(), ICON_TARGETS.len());
    }

    #[test]
    fn test_size_256_kept_under_both_names() {
        let names: Vec<_> = ICON_TARGETS
            .iter()
            .filter(|t| t.size == 256)
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["favicon-256x256.png", "android-chrome-256x256.png"]);
    }

    #[test]
    fn test_tile_icon_is_a_target() {
        assert!(ICON_TARGETS.iter().any(|t| t.name == TILE_ICON_NAME));
    }

    #[test]
    fn test_manifest_icon_omits_missing_purpose() {
        let icon = ManifestIcon {
            src: "/android-chrome-192x192.png".to_string(),
            sizes: "192x192".to_string(),
            mime_type: PNG_MIME_TYPE.to_string(),
            purpose: None,
        };
        let value = serde_json::to_value(&icon).unwrap();
        assert_eq!(value["type"], "image/png");
        assert!(value.get("purpose").is_none());
    }

    #[test]
    fn test_dimensions_string() {
        assert_eq!(IconTarget::new(192, "x.png", TargetGroup::AndroidChrome).dimensions(), "192x192");
    }
}
