//! Vignette - build scenes of composable shapes from a compact command language.
//!
//! A command string such as `"P 10,20; C 50,50,25; T 0,0,100,0,50,80; F"` is
//! parsed, turned into shapes through a shape factory and registered in a
//! [`Scene`](scene::Scene). Scenes render to text or to SVG.

pub mod config;
pub mod export;

mod builder;
mod error;

pub use vignette_core::{color, factory, scene, shape, style};
pub use vignette_parser::{Diagnostic, ParseError, ParseMode, Span};

pub use builder::{BuildReport, PendingTrianglePolicy};
pub use error::VignetteError;

use log::{info, trace};

use config::AppConfig;
use export::{Exporter, svg::SvgExporter};
use factory::ShapeFactory;
use scene::Scene;

/// Builder for turning command strings into scenes and rendering them.
///
/// # Examples
///
/// ```
/// use vignette::{SceneBuilder, config::AppConfig, scene::Scene};
///
/// let builder = SceneBuilder::new(AppConfig::default());
/// let mut scene = Scene::default();
///
/// let report = builder
///     .build(&mut scene, "P 10,20; C 50,50,25; T 0,0,100,0,50,80; F")
///     .expect("lenient builds never fail");
///
/// assert_eq!(report.objects(), 3);
/// assert!(builder.render_text(&scene).starts_with("=== What the scene contains ==="));
/// ```
#[derive(Debug)]
pub struct SceneBuilder {
    config: AppConfig,
    factory: Box<dyn ShapeFactory>,
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl SceneBuilder {
    /// Create a new scene builder with the given configuration.
    ///
    /// The shape factory follows `builder.appearance` of the configuration.
    pub fn new(config: AppConfig) -> Self {
        let factory = factory::factory_for(config.builder().appearance());
        Self { config, factory }
    }

    /// Replace the shape factory used for points and circles.
    pub fn with_factory(mut self, factory: Box<dyn ShapeFactory>) -> Self {
        self.factory = factory;
        self
    }

    /// Returns the configuration of this builder.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Rebuild `scene` from a command string.
    ///
    /// The scene is cleared first, so building the same command twice gives
    /// the same scene as building it once.
    ///
    /// # Errors
    ///
    /// In strict mode returns [`VignetteError::Parse`] with every diagnostic
    /// of the command string; `scene` is left untouched in that case.
    /// Lenient builds never fail and report irregularities as warnings in
    /// the returned [`BuildReport`].
    pub fn build(&self, scene: &mut Scene, source: &str) -> Result<BuildReport, VignetteError> {
        let mode = self.config.builder().mode();
        info!(mode:? = mode, bytes = source.len(); "Building scene");

        let output = vignette_parser::parse(source, mode)
            .map_err(|err| VignetteError::new_parse_error(err, source))?;
        let (commands, warnings) = output.into_parts();

        scene.clear();
        let report = builder::assemble(
            self.factory.as_ref(),
            self.config.builder().pending_triangle(),
            scene,
            commands,
            warnings,
        );

        info!(
            objects = report.objects(),
            shapes = scene.total_shapes(),
            warnings = report.warnings().len();
            "Scene built"
        );
        trace!(scene:? = scene; "Built scene");

        Ok(report)
    }

    /// Render the textual description of `scene`.
    pub fn render_text(&self, scene: &Scene) -> String {
        scene.to_text()
    }

    /// Render `scene` to an SVG string using the configured style.
    ///
    /// # Errors
    ///
    /// Returns [`VignetteError::Export`] if a configured color is invalid.
    pub fn render_svg(&self, scene: &Scene) -> Result<String, VignetteError> {
        info!(objects = scene.len(); "Rendering scene to SVG");

        let svg = export::svg::Svg::new(self.config.style())?;
        let mut exporter = SvgExporter::new(svg, Vec::new());
        exporter.export_scene(scene)?;

        String::from_utf8(exporter.into_inner())
            .map_err(|err| VignetteError::Export(Box::new(err)))
    }
}
