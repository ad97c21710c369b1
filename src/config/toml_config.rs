use crate::utils::error::{FaviconError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Site metadata written into the manifest and tile descriptors.
///
/// Every key is optional in the TOML file; anything left out keeps the
/// built-in hyprlax value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app: ManifestSettings,
    pub tile: TileSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestSettings {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub theme_color: String,
    pub background_color: String,
    pub display: String,
    pub scope: String,
    pub start_url: String,
}

impl Default for ManifestSettings {
    fn default() -> Self {
        Self {
            name: "hyprlax".to_string(),
            short_name: "hyprlax".to_string(),
            description: "Smooth parallax wallpaper animations for Hyprland".to_string(),
            theme_color: "#050810".to_string(),
            background_color: "#050810".to_string(),
            display: "standalone".to_string(),
            scope: "/".to_string(),
            start_url: "/".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileSettings {
    pub color: String,
}

impl Default for TileSettings {
    fn default() -> Self {
        Self {
            color: "#050810".to_string(),
        }
    }
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| FaviconError::ConfigError {
            message: format!("Cannot read '{}': {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FaviconError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SITE_NAME})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FaviconError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("app.name", &self.app.name)?;
        validation::validate_non_empty_string("app.short_name", &self.app.short_name)?;
        validation::validate_hex_color("app.theme_color", &self.app.theme_color)?;
        validation::validate_hex_color("app.background_color", &self.app.background_color)?;
        validation::validate_display_mode("app.display", &self.app.display)?;
        validation::validate_non_empty_string("app.scope", &self.app.scope)?;
        validation::validate_non_empty_string("app.start_url", &self.app.start_url)?;
        validation::validate_hex_color("tile.color", &self.tile.color)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_are_hyprlax() {
        let config = AppConfig::default();
        assert_eq!(config.app.short_name, "hyprlax");
        assert_eq!(config.app.theme_color, "#050810");
        assert_eq!(config.tile.color, "#050810");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let toml_content = r##"
[app]
name = "Example Site"
theme_color = "#112233"
"##;

        let config = AppConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.app.name, "Example Site");
        assert_eq!(config.app.theme_color, "#112233");
        assert_eq!(config.app.short_name, "hyprlax");
        assert_eq!(config.app.display, "standalone");
        assert_eq!(config.tile.color, "#050810");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("FAVICON_GEN_TEST_SHORT_NAME", "envsite");

        let toml_content = r#"
[app]
short_name = "${FAVICON_GEN_TEST_SHORT_NAME}"
description = "${FAVICON_GEN_TEST_UNSET_VAR}"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.app.short_name, "envsite");
        assert_eq!(config.app.description, "${FAVICON_GEN_TEST_UNSET_VAR}");

        std::env::remove_var("FAVICON_GEN_TEST_SHORT_NAME");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[tile]
color = "navy"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("tile.color"));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = AppConfig::from_toml_str("[app\nname = ");
        assert!(matches!(result, Err(FaviconError::ConfigError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[app]
short_name = "file-test"
display = "minimal-ui"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = AppConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.app.short_name, "file-test");
        assert_eq!(config.app.display, "minimal-ui");
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = AppConfig::from_file("/definitely/not/here/favicon.toml");
        assert!(matches!(result, Err(FaviconError::ConfigError { .. })));
    }
}
