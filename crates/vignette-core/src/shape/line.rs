//! Line segment shape definition.

use std::{fmt, mem};

use svg::node::element as svg_element;

use crate::{
    shape::{Appearance, Shape, ShapeKind},
    style::{SvgNode, SvgStyle},
};

/// A straight segment between two endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Line {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    appearance: Appearance,
}

impl Line {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, appearance: Appearance) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            appearance,
        }
    }

    /// Returns the starting endpoint as `(x, y)`.
    pub fn start(&self) -> (f64, f64) {
        (self.x1, self.y1)
    }

    /// Returns the ending endpoint as `(x, y)`.
    pub fn end(&self) -> (f64, f64) {
        (self.x2, self.y2)
    }
}

impl Shape for Line {
    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(*self)
    }

    fn draw(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(
            out,
            "{} Line ({},{})-({},{})",
            self.appearance, self.x1, self.y1, self.x2, self.y2
        )
    }

    fn memory_size(&self) -> usize {
        mem::size_of::<Self>()
    }

    fn appearance(&self) -> Appearance {
        self.appearance
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Line
    }

    fn render_to_svg(&self, style: &SvgStyle) -> SvgNode {
        let line = svg_element::Line::new()
            .set("x1", self.x1)
            .set("y1", self.y1)
            .set("x2", self.x2)
            .set("y2", self.y2);

        Box::new(crate::apply_stroke!(line, style, self.appearance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_draw() {
        let line = Line::new(0.0, 0.0, 3.0, 4.5, Appearance::Color);
        assert_eq!(line.to_text(), "Color Line (0,0)-(3,4.5)\n");
    }

    #[test]
    fn test_line_endpoints() {
        let line = Line::new(1.0, 2.0, 3.0, 4.0, Appearance::Monochrome);

        assert_eq!(line.start(), (1.0, 2.0));
        assert_eq!(line.end(), (3.0, 4.0));
        assert!(!line.is_colored());
    }

    #[test]
    fn test_line_default_is_degenerate() {
        assert_eq!(Line::default().to_text(), "Color Line (0,0)-(0,0)\n");
    }

    #[test]
    fn test_line_svg() {
        let svg = Line::new(1.0, 2.0, 3.0, 4.0, Appearance::Color)
            .render_to_svg(&SvgStyle::default())
            .to_string();

        assert!(svg.starts_with("<line"));
        assert!(svg.contains("x2=\"3\""));
    }
}
