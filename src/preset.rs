//! Paper presets
//!
//! A preset bundles font size and line spacing overrides for a particular
//! paper style. Built-in presets are resolved by name through an explicit
//! table; custom presets can be loaded from TOML files.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::layout::LayoutConfig;

/// Errors that can occur when resolving or loading presets
#[derive(Error, Debug)]
pub enum PresetError {
    #[error("unknown preset '{0}'")]
    UnknownPreset(String),
    #[error("failed to read preset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse preset TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A bundle of layout overrides for one paper style.
///
/// Fields left as `None` keep the configuration's existing value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Preset {
    /// Optional name for the preset
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Font size override
    pub font_size: Option<f64>,
    /// Line spacing override
    pub line_spacing: Option<f64>,
}

/// TOML structure for deserializing preset files
#[derive(Deserialize)]
struct TomlPreset {
    metadata: Option<TomlMetadata>,
    paper: TomlPaper,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize)]
struct TomlPaper {
    font_size: Option<f64>,
    line_spacing: Option<f64>,
}

/// Names accepted by [`Preset::named`]
pub const BUILTIN_NAMES: &[&str] = &["none", "sundaram"];

impl Preset {
    /// Resolve a built-in preset by name.
    ///
    /// Lookup is case-insensitive and ignores surrounding whitespace. An
    /// unrecognized name fails with [`PresetError::UnknownPreset`].
    pub fn named(name: &str) -> Result<Self, PresetError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::default()),
            "sundaram" => Ok(Self {
                name: Some("sundaram".to_string()),
                description: Some("compact handwriting".to_string()),
                font_size: Some(24.0),
                line_spacing: Some(26.0),
            }),
            _ => Err(PresetError::UnknownPreset(name.to_string())),
        }
    }

    /// Load a preset from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, PresetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a preset from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, PresetError> {
        let parsed: TomlPreset = toml::from_str(content)?;

        Ok(Preset {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            font_size: parsed.paper.font_size,
            line_spacing: parsed.paper.line_spacing,
        })
    }

    /// Overlay this preset's overrides onto a layout configuration
    pub fn apply(&self, mut config: LayoutConfig) -> LayoutConfig {
        if let Some(font_size) = self.font_size {
            config.font_size = font_size;
        }
        if let Some(line_spacing) = self.line_spacing {
            config.line_spacing = line_spacing;
        }
        config
    }
}
