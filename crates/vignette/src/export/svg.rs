//! SVG rendering of scenes.

use std::io;

use log::debug;
use svg::{Document, node::element as svg_element};

use vignette_core::{color::Color, scene::Scene, style::SvgStyle};

use super::{Error, Exporter};
use crate::config::StyleConfig;

/// Renders scenes to SVG documents of a fixed size.
#[derive(Debug, Clone)]
pub struct Svg {
    style: SvgStyle,
    width: f64,
    height: f64,
    background: Option<Color>,
}

impl Svg {
    /// Creates a renderer from a style configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if a configured color is invalid.
    pub fn new(config: &StyleConfig) -> Result<Self, Error> {
        Ok(Self {
            style: config.svg_style().map_err(Error::Render)?,
            width: config.width(),
            height: config.height(),
            background: config.background_color().map_err(Error::Render)?,
        })
    }

    /// Renders every top-level shape of `scene`, in order, into a document.
    ///
    /// Shapes are drawn inside a root group with `fill="none"`, so only
    /// filled shapes are painted.
    pub fn render_scene(&self, scene: &Scene) -> Document {
        let doc = Document::new()
            .set("viewBox", format!("0 0 {} {}", self.width, self.height))
            .set("width", self.width)
            .set("height", self.height);

        let doc = self.add_background(doc);

        let root = scene.iter().fold(
            svg_element::Group::new().set("fill", "none"),
            |group, shape| group.add(shape.render_to_svg(&self.style)),
        );

        debug!(shapes = scene.len(); "Rendered scene to SVG");
        doc.add(root)
    }

    fn add_background(&self, doc: Document) -> Document {
        let Some(color) = &self.background else {
            return doc;
        };

        let bg = svg_element::Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", self.width)
            .set("height", self.height)
            .set("fill", color)
            .set("fill-opacity", color.alpha());
        doc.add(bg)
    }
}

/// Writes rendered scenes to any [`io::Write`] target.
#[derive(Debug)]
pub struct SvgExporter<W> {
    svg: Svg,
    writer: W,
}

impl<W: io::Write> SvgExporter<W> {
    pub fn new(svg: Svg, writer: W) -> Self {
        Self { svg, writer }
    }

    /// Returns the writer, with everything exported so far.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: io::Write> Exporter for SvgExporter<W> {
    fn export_scene(&mut self, scene: &Scene) -> Result<(), Error> {
        let doc = self.svg.render_scene(scene);
        svg::write(&mut self.writer, &doc).map_err(Error::Io)
    }
}

/// Renders `scene` with the given style into a document.
///
/// # Errors
///
/// Returns [`Error::Render`] if a configured color is invalid.
pub fn render_scene(scene: &Scene, config: &StyleConfig) -> Result<Document, Error> {
    Ok(Svg::new(config)?.render_scene(scene))
}
