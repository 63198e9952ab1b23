//! Configuration types for building and rendering Vignette scenes.
//!
//! All types implement [`serde::Deserialize`] and every field has a default,
//! so a configuration file only needs to mention what it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining builder and style settings.
//! - [`BuilderConfig`] - Parse mode, pending triangle policy and shape family.
//! - [`StyleConfig`] - Document size and colors of the SVG export.
//!
//! # Example
//!
//! ```
//! # use vignette::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().svg_style().is_ok());
//! ```

use serde::Deserialize;

use vignette_core::{color::Color, shape::Appearance, style::SvgStyle};
use vignette_parser::ParseMode;

use crate::builder::PendingTrianglePolicy;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Scene builder section.
    #[serde(default)]
    builder: BuilderConfig,

    /// Style section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(builder: BuilderConfig, style: StyleConfig) -> Self {
        Self { builder, style }
    }

    /// Returns the builder configuration.
    pub fn builder(&self) -> &BuilderConfig {
        &self.builder
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns a copy with the parse mode replaced.
    pub fn with_mode(mut self, mode: ParseMode) -> Self {
        self.builder.mode = mode;
        self
    }
}

/// How command strings are turned into scenes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct BuilderConfig {
    /// Lenient or strict parsing.
    #[serde(default)]
    mode: ParseMode,

    /// What happens to an unfilled triangle when another one is built.
    #[serde(default)]
    pending_triangle: PendingTrianglePolicy,

    /// Shape family produced by the factory for `P` and `C`.
    #[serde(default)]
    appearance: Appearance,
}

impl BuilderConfig {
    /// Creates a new [`BuilderConfig`].
    pub fn new(
        mode: ParseMode,
        pending_triangle: PendingTrianglePolicy,
        appearance: Appearance,
    ) -> Self {
        Self {
            mode,
            pending_triangle,
            appearance,
        }
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    pub fn pending_triangle(&self) -> PendingTrianglePolicy {
        self.pending_triangle
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }
}

/// Visual styling of the SVG export.
///
/// Colors are CSS color strings and are validated when the style is used.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    width: f64,
    height: f64,
    background_color: Option<String>,
    color_stroke: String,
    mono_stroke: String,
    fill_color: String,
    stroke_width: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            background_color: Some("white".to_string()),
            color_stroke: "steelblue".to_string(),
            mono_stroke: "black".to_string(),
            fill_color: "orange".to_string(),
            stroke_width: 2.0,
        }
    }
}

impl StyleConfig {
    /// Document width in user units.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Document height in user units.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Builds the [`SvgStyle`] used to render shapes.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first color that cannot be parsed, or if
    /// the stroke width is negative.
    pub fn svg_style(&self) -> Result<SvgStyle, String> {
        let parse = |key: &str, value: &str| {
            Color::new(value).map_err(|err| format!("Invalid {key} in config: {err}"))
        };

        if self.stroke_width.is_nan() || self.stroke_width < 0.0 {
            return Err(format!(
                "Invalid stroke_width in config: {} is not a non-negative number",
                self.stroke_width
            ));
        }

        Ok(SvgStyle::new(
            parse("color_stroke", &self.color_stroke)?,
            parse("mono_stroke", &self.mono_stroke)?,
            parse("fill_color", &self.fill_color)?,
            self.stroke_width,
        ))
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.builder().mode(), ParseMode::Lenient);
        assert_eq!(
            config.builder().pending_triangle(),
            PendingTrianglePolicy::LastWins
        );
        assert_eq!(config.builder().appearance(), Appearance::Color);
        assert_approx_eq!(f64, config.style().width(), 800.0);
        assert_approx_eq!(f64, config.style().height(), 600.0);
        assert_eq!(config.style().svg_style().unwrap(), SvgStyle::default());
    }

    #[test]
    fn test_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [builder]
            mode = "strict"
            pending_triangle = "keep_all"

            [style]
            width = 320
            "#,
        )
        .unwrap();

        assert_eq!(config.builder().mode(), ParseMode::Strict);
        assert_eq!(
            config.builder().pending_triangle(),
            PendingTrianglePolicy::KeepAll
        );
        assert_eq!(config.builder().appearance(), Appearance::Color);
        assert_approx_eq!(f64, config.style().width(), 320.0);
        assert_approx_eq!(f64, config.style().height(), 600.0);
    }

    #[test]
    fn test_monochrome_appearance() {
        let config: AppConfig = toml::from_str("[builder]\nappearance = \"monochrome\"").unwrap();
        assert_eq!(config.builder().appearance(), Appearance::Monochrome);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[builder]\nmode = \"sloppy\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_colors() {
        let config: AppConfig = toml::from_str(
            r#"
            [style]
            background_color = "nope"
            fill_color = "also-nope"
            "#,
        )
        .unwrap();

        assert!(config.style().background_color().is_err());
        let err = config.style().svg_style().unwrap_err();
        assert!(err.contains("fill_color"));
    }

    #[test]
    fn test_negative_stroke_width() {
        let config: AppConfig = toml::from_str("[style]\nstroke_width = -1.0").unwrap();
        assert!(config.style().svg_style().is_err());
    }

    #[test]
    fn test_with_mode() {
        let config = AppConfig::default().with_mode(ParseMode::Strict);
        assert_eq!(config.builder().mode(), ParseMode::Strict);
    }
}
