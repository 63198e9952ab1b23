//! Circle shape definition.

use std::{fmt, mem};

use svg::node::element as svg_element;

use crate::{
    shape::{Appearance, Shape, ShapeKind},
    style::{SvgNode, SvgStyle},
};

/// A circle given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    cx: f64,
    cy: f64,
    r: f64,
    appearance: Appearance,
}

impl Circle {
    /// Radius used when none is given.
    pub const DEFAULT_RADIUS: f64 = 1.0;

    pub fn new(cx: f64, cy: f64, r: f64, appearance: Appearance) -> Self {
        Self {
            cx,
            cy,
            r,
            appearance,
        }
    }

    /// Returns the center as `(x, y)`.
    pub fn center(&self) -> (f64, f64) {
        (self.cx, self.cy)
    }

    pub fn radius(&self) -> f64 {
        self.r
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new(0.0, 0.0, Self::DEFAULT_RADIUS, Appearance::default())
    }
}

impl Shape for Circle {
    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(*self)
    }

    fn draw(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(
            out,
            "{} Circle ({},{}) r={}",
            self.appearance, self.cx, self.cy, self.r
        )
    }

    fn memory_size(&self) -> usize {
        mem::size_of::<Self>()
    }

    fn appearance(&self) -> Appearance {
        self.appearance
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn render_to_svg(&self, style: &SvgStyle) -> SvgNode {
        let circle = svg_element::Circle::new()
            .set("cx", self.cx)
            .set("cy", self.cy)
            .set("r", self.r.max(0.0));

        Box::new(crate::apply_stroke!(circle, style, self.appearance))
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_circle_default_radius() {
        let circle = Circle::default();

        assert_approx_eq!(f64, circle.radius(), 1.0);
        assert_eq!(circle.center(), (0.0, 0.0));
        assert_eq!(circle.to_text(), "Color Circle (0,0) r=1\n");
    }

    #[test]
    fn test_circle_draw() {
        let circle = Circle::new(50.0, 50.0, 25.0, Appearance::Color);
        assert_eq!(circle.to_text(), "Color Circle (50,50) r=25\n");

        let circle = Circle::new(1.0, 2.0, 0.5, Appearance::Monochrome);
        assert_eq!(circle.to_text(), "B/W Circle (1,2) r=0.5\n");
    }

    #[test]
    fn test_circle_memory_size() {
        assert_eq!(Circle::default().memory_size(), mem::size_of::<Circle>());
        assert!(Circle::default().memory_size() >= 3 * mem::size_of::<f64>());
    }

    #[test]
    fn test_circle_svg_has_no_fill() {
        let svg = Circle::new(5.0, 5.0, 10.0, Appearance::Monochrome)
            .render_to_svg(&SvgStyle::default())
            .to_string();

        assert!(svg.contains("r=\"10\""));
        assert!(!svg.contains("fill="));
    }

    #[test]
    fn test_negative_radius_exports_as_zero() {
        let circle = Circle::new(1.0, 2.0, -5.0, Appearance::Color);
        let svg = circle.render_to_svg(&SvgStyle::default()).to_string();

        assert!(svg.contains("r=\"0\""));
        assert!(circle.to_text().contains("r=-5"));
    }
}
