//! Triangle support through an adapter.
//!
//! [`ThirdPartyTriangle`] stands for a triangle type owned by a foreign
//! library: it can render itself as text and nothing else. It is neither a
//! [`Shape`] nor [`Clone`]. [`TriangleAdapter`] owns one such triangle and
//! bridges it into the [`Shape`] contract.

use std::{fmt, mem};

use svg::node::element as svg_element;

use crate::{
    shape::{Appearance, Shape, ShapeKind},
    style::{SvgNode, SvgStyle},
};

/// A triangle from a foreign library with a render-only interface.
#[derive(Debug, Default, PartialEq)]
pub struct ThirdPartyTriangle {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
}

impl ThirdPartyTriangle {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            x3,
            y3,
        }
    }

    /// Returns the three vertices as `(x, y)` pairs.
    pub fn vertices(&self) -> [(f64, f64); 3] {
        [(self.x1, self.y1), (self.x2, self.y2), (self.x3, self.y3)]
    }

    /// Writes the triangle description.
    pub fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(
            out,
            "Third-Party Triangle ({},{}) ({},{}) ({},{})",
            self.x1, self.y1, self.x2, self.y2, self.x3, self.y3
        )
    }
}

/// A [`Shape`] that owns a [`ThirdPartyTriangle`].
///
/// The triangle is allocated when the adapter is created and dropped with it.
#[derive(Debug, PartialEq)]
pub struct TriangleAdapter {
    triangle: Box<ThirdPartyTriangle>,
    appearance: Appearance,
}

impl TriangleAdapter {
    pub fn new(
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x3: f64,
        y3: f64,
        appearance: Appearance,
    ) -> Self {
        Self {
            triangle: Box::new(ThirdPartyTriangle::new(x1, y1, x2, y2, x3, y3)),
            appearance,
        }
    }

    /// Creates an adapter from the six coordinates `x1, y1, x2, y2, x3, y3`.
    pub fn from_coords(coords: [f64; 6], appearance: Appearance) -> Self {
        let [x1, y1, x2, y2, x3, y3] = coords;
        Self::new(x1, y1, x2, y2, x3, y3, appearance)
    }

    /// Returns the adapted foreign triangle.
    pub fn triangle(&self) -> &ThirdPartyTriangle {
        &self.triangle
    }
}

impl Default for TriangleAdapter {
    fn default() -> Self {
        Self::from_coords([0.0; 6], Appearance::default())
    }
}

impl Clone for TriangleAdapter {
    /// Builds a new foreign triangle from the vertices of this one.
    fn clone(&self) -> Self {
        let [(x1, y1), (x2, y2), (x3, y3)] = self.triangle.vertices();
        Self::new(x1, y1, x2, y2, x3, y3, self.appearance)
    }
}

impl Shape for TriangleAdapter {
    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn draw(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{} ", self.appearance)?;
        self.triangle.render(out)
    }

    fn memory_size(&self) -> usize {
        mem::size_of::<Self>()
    }

    fn appearance(&self) -> Appearance {
        self.appearance
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Triangle
    }

    fn render_to_svg(&self, style: &SvgStyle) -> SvgNode {
        let points = self
            .triangle
            .vertices()
            .iter()
            .map(|(x, y)| format!("{x},{y}"))
            .collect::<Vec<_>>()
            .join(" ");

        let polygon = svg_element::Polygon::new().set("points", points);

        Box::new(crate::apply_stroke!(polygon, style, self.appearance))
    }
}
