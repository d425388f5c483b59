// src/config.rs

//! Render configuration.
//!
//! These structs can be deserialized from a JSON document to pick a font and
//! set layout options without writing code. Every field has a default, so a
//! partial (or empty) document is valid.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::font::{FontSystem, FontVersion, SpecialFont};
use crate::layout::{LayoutOptions, TextAlign};
use crate::rasterizer::{RenderResult, Rgba, SoftwareRenderer};
use crate::text::FormattedText;
use anyhow::{Context, Result};
use log::debug;

// --- Top-Level Configuration Structure ---

/// Complete configuration for rendering formatted text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)] // Apply default values for the entire struct if a field is missing.
pub struct RenderConfig {
    /// Font selection.
    pub font: FontConfig,
    /// Layout settings.
    pub layout: LayoutConfig,
    /// Background painted before drawing, as `[r, g, b, a]`. Transparent when absent.
    pub background: Option<[u8; 4]>,
}

/// Font configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FontConfig {
    /// Primary font version.
    pub version: FontVersion,
    /// Optional overlay, e.g. `"enchanting"`.
    pub special: Option<SpecialFont>,
}

/// Layout configuration; mirrors `LayoutOptions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Pixel size of the text (8 is the font's native size).
    pub size: f32,
    /// Wrap width in pixels; no wrapping when absent.
    pub max_width: Option<f32>,
    /// Draw the darkened drop shadow.
    pub shadow: bool,
    pub align: TextAlign,
    /// Extra pixels between lines.
    pub line_spacing: f32,
    pub obfuscation_seed: u64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            size: 16.0,
            max_width: None,
            shadow: true, // The game draws chat with shadows
            align: TextAlign::Left,
            line_spacing: 0.0,
            obfuscation_seed: 0,
        }
    }
}

impl RenderConfig {
    /// Parses a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: RenderConfig =
            serde_json::from_str(json).context("Failed to parse render configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        let config = Self::from_json_str(&json)
            .with_context(|| format!("Invalid config file '{}'", path.display()))?;
        debug!("Loaded render config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let size = self.layout.size;
        anyhow::ensure!(
            size.is_finite() && size > 0.0,
            "layout.size must be a positive number, got {}",
            size
        );
        if let Some(max_width) = self.layout.max_width {
            anyhow::ensure!(
                max_width.is_finite() && max_width > 0.0,
                "layout.max_width must be a positive number, got {}",
                max_width
            );
        }
        Ok(())
    }

    /// Builds the configured font system.
    pub fn font_system(&self) -> FontSystem {
        let fonts = FontSystem::new(self.font.version);
        match self.font.special {
            Some(special) => fonts.with_special(special),
            None => fonts,
        }
    }

    pub fn layout_options(&self) -> LayoutOptions {
        let layout = &self.layout;
        let mut options = LayoutOptions::new(layout.size)
            .with_shadow(layout.shadow)
            .with_align(layout.align)
            .with_line_spacing(layout.line_spacing)
            .with_seed(layout.obfuscation_seed);
        options.max_width = layout.max_width;
        options
    }

    /// Renders `text` into a `width` x `height` buffer painted with the
    /// configured background.
    pub fn render(&self, text: &FormattedText, width: u32, height: u32) -> Result<RenderResult> {
        let mut renderer = SoftwareRenderer::new(width, height)
            .with_context(|| format!("Failed to create {}x{} renderer", width, height))?;
        if let Some(background) = self.background {
            renderer.fill(Rgba::from_bytes(background));
        }
        let fonts = self.font_system();
        renderer.render_text(&fonts, text, 0.0, 0.0, &self.layout_options());
        Ok(renderer.into_result())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = RenderConfig::from_json_str("{}").unwrap();
        assert_eq!(config, RenderConfig::default());
        assert_eq!(config.layout.size, 16.0);
        assert!(config.layout.shadow);
        assert_eq!(config.font.version, FontVersion::Modern);
        assert_eq!(config.background, None);
    }

    #[test]
    fn test_partial_document() {
        let config = RenderConfig::from_json_str(
            r#"{
                "font": {"version": "legacy", "special": "enchanting"},
                "layout": {"size": 24, "max_width": 120, "align": "center"},
                "background": [0, 0, 0, 255]
            }"#,
        )
        .unwrap();
        assert_eq!(config.font.version, FontVersion::Legacy);
        assert_eq!(config.font.special, Some(SpecialFont::Enchanting));
        assert!(config.layout.shadow);

        let options = config.layout_options();
        assert_eq!(options.size, 24.0);
        assert_eq!(options.max_width, Some(120.0));
        assert_eq!(options.align, TextAlign::Center);

        let fonts = config.font_system();
        assert_eq!(fonts.primary(), FontVersion::Legacy);
        assert_eq!(fonts.special(), Some(SpecialFont::Enchanting));
    }

    #[test]
    fn test_invalid_documents_are_rejected() {
        assert!(RenderConfig::from_json_str("{").is_err());
        assert!(RenderConfig::from_json_str(r#"{"font": {"version": "beta"}}"#).is_err());
        let err = RenderConfig::from_json_str(r#"{"layout": {"size": 0}}"#).unwrap_err();
        assert!(err.to_string().contains("layout.size"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = RenderConfig::from_path("/nonexistent/mcformat.json").unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/mcformat.json"));
    }

    #[test]
    fn test_render_paints_background() {
        let config = RenderConfig {
            background: Some([10, 20, 30, 255]),
            ..RenderConfig::default()
        };
        let result = config.render(&FormattedText::new(), 4, 4).unwrap();
        assert!(result
            .data()
            .chunks_exact(4)
            .all(|p| p == [10, 20, 30, 255]));
        assert!(config.render(&FormattedText::new(), 0, 4).is_err());
    }
}
