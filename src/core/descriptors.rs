use crate::config::toml_config::AppConfig;
use crate::domain::model::{
    IconTarget, ManifestIcon, TargetGroup, TileConfig, WebManifest, MASKABLE_PURPOSE,
    PNG_MIME_TYPE, TILE_ICON_NAME,
};
use crate::utils::error::{FaviconError, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

fn public_src(name: &str) -> String {
    format!("/{}", name)
}

/// Manifest icons are the android-chrome targets, smallest first; the
/// largest one is also offered as maskable.
pub fn build_manifest(app: &AppConfig, targets: &[IconTarget]) -> Result<WebManifest> {
    let mut android: Vec<&IconTarget> = targets
        .iter()
        .filter(|t| t.group == TargetGroup::AndroidChrome)
        .collect();
    android.sort_by_key(|t| t.size);

    let largest = android.last().map(|t| t.name).ok_or_else(|| FaviconError::ConfigError {
        message: "No android-chrome targets available for manifest.json".to_string(),
    })?;

    let icons = android
        .iter()
        .map(|t| ManifestIcon {
            src: public_src(t.name),
            sizes: t.dimensions(),
            mime_type: PNG_MIME_TYPE.to_string(),
            purpose: (t.name == largest).then(|| MASKABLE_PURPOSE.to_string()),
        })
        .collect();

    let app = &app.app;
    Ok(WebManifest {
        name: app.name.clone(),
        short_name: app.short_name.clone(),
        description: app.description.clone(),
        theme_color: app.theme_color.clone(),
        background_color: app.background_color.clone(),
        display: app.display.clone(),
        scope: app.scope.clone(),
        start_url: app.start_url.clone(),
        icons,
    })
}

/// Pretty-printed with two-space indentation.
pub fn manifest_json(manifest: &WebManifest) -> Result<Vec<u8>> {
    let json = serde_json::to_string_pretty(manifest)?;
    Ok(json.into_bytes())
}

pub fn build_tile_config(app: &AppConfig, targets: &[IconTarget]) -> Result<TileConfig> {
    if !targets.iter().any(|t| t.name == TILE_ICON_NAME) {
        return Err(FaviconError::ConfigError {
            message: format!("Tile icon '{}' is not a generated target", TILE_ICON_NAME),
        });
    }

    Ok(TileConfig {
        logo_src: public_src(TILE_ICON_NAME),
        color: app.tile.color.clone(),
    })
}

fn xml_error(e: impl std::fmt::Display) -> FaviconError {
    FaviconError::XmlError {
        message: e.to_string(),
    }
}

pub fn tile_config_xml(tile: &TileConfig) -> Result<Vec<u8>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(xml_error)?;
    for tag in ["browserconfig", "msapplication", "tile"] {
        writer
            .write_event(Event::Start(BytesStart::new(tag)))
            .map_err(xml_error)?;
    }

    writer
        .write_event(Event::Empty(
            BytesStart::new("square150x150logo").with_attributes([("src", tile.logo_src.as_str())]),
        ))
        .map_err(xml_error)?;
    writer
        .write_event(Event::Start(BytesStart::new("TileColor")))
        .map_err(xml_error)?;
    writer
        .write_event(Event::Text(BytesText::new(&tile.color)))
        .map_err(xml_error)?;
    writer
        .write_event(Event::End(BytesEnd::new("TileColor")))
        .map_err(xml_error)?;

    for tag in ["tile", "msapplication", "browserconfig"] {
        writer
            .write_event(Event::End(BytesEnd::new(tag)))
            .map_err(xml_error)?;
    }

    Ok(writer.into_inner())
}
