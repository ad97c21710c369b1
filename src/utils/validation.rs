use crate::domain::model::IconTarget;
use crate::utils::error::{FaviconError, Result};
use std::collections::HashSet;

pub const DISPLAY_MODES: &[&str] = &["fullscreen", "standalone", "minimal-ui", "browser"];

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: impl Into<String>) -> FaviconError {
    FaviconError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(invalid(
            field_name,
            &value.to_string(),
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

/// Accepts `#rgb` and `#rrggbb`.
pub fn validate_hex_color(field_name: &str, value: &str) -> Result<()> {
    let digits = match value.strip_prefix('#') {
        Some(digits) => digits,
        None => return Err(invalid(field_name, value, "Color must start with '#'")),
    };

    if !matches!(digits.len(), 3 | 6) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid(
            field_name,
            value,
            "Color must be written as #rgb or #rrggbb",
        ));
    }
    Ok(())
}

pub fn validate_display_mode(field_name: &str, value: &str) -> Result<()> {
    if !DISPLAY_MODES.contains(&value) {
        return Err(invalid(
            field_name,
            value,
            format!("Unsupported display mode. Valid modes: {}", DISPLAY_MODES.join(", ")),
        ));
    }
    Ok(())
}

/// Sizes must be positive and file names unique. Sizes may repeat.
pub fn validate_targets(field_name: &str, targets: &[IconTarget]) -> Result<()> {
    let mut seen = HashSet::new();

    for target in targets {
        if target.size == 0 {
            return Err(invalid(field_name, target.name, "Icon size must be positive"));
        }
        if !seen.insert(target.name) {
            return Err(invalid(field_name, target.name, "Duplicate output file name"));
        }
    }

    Ok(())
}
