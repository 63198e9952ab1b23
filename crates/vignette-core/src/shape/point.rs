//! Point shape definition.

use std::{fmt, mem};

use svg::node::element as svg_element;

use crate::{
    shape::{Appearance, Shape, ShapeKind},
    style::{SvgNode, SvgStyle},
};

/// Radius of the dot a point is exported as.
const DOT_RADIUS: f64 = 2.0;

/// A single position in the scene.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
    appearance: Appearance,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64, appearance: Appearance) -> Self {
        Self { x, y, appearance }
    }

    /// Returns the x-coordinate of the point
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(&self) -> f64 {
        self.y
    }
}

impl Shape for Point {
    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(*self)
    }

    fn draw(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "{} Point ({}, {})", self.appearance, self.x, self.y)
    }

    fn memory_size(&self) -> usize {
        mem::size_of::<Self>()
    }

    fn appearance(&self) -> Appearance {
        self.appearance
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Point
    }

    fn render_to_svg(&self, style: &SvgStyle) -> SvgNode {
        // A point has no area, so the dot is filled with its stroke color.
        let dot = svg_element::Circle::new()
            .set("cx", self.x)
            .set("cy", self.y)
            .set("r", DOT_RADIUS)
            .set("fill", style.stroke_for(self.appearance));

        Box::new(crate::apply_stroke!(dot, style, self.appearance))
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_default() {
        let point = Point::default();

        assert_approx_eq!(f64, point.x(), 0.0);
        assert_approx_eq!(f64, point.y(), 0.0);
        assert!(point.is_colored());
    }

    #[test]
    fn test_point_draw() {
        let point = Point::new(10.0, 20.0, Appearance::Color);
        assert_eq!(point.to_text(), "Color Point (10, 20)\n");

        let point = Point::new(-1.5, 0.25, Appearance::Monochrome);
        assert_eq!(point.to_text(), "B/W Point (-1.5, 0.25)\n");
    }

    #[test]
    fn test_point_clone_box() {
        let point = Point::new(7.0, 8.0, Appearance::Monochrome);
        let copy = point.clone_box();

        assert_eq!(copy.kind(), ShapeKind::Point);
        assert_eq!(copy.appearance(), Appearance::Monochrome);
        assert_eq!(copy.to_text(), point.to_text());
    }

    #[test]
    fn test_point_memory_size() {
        assert_eq!(Point::default().memory_size(), mem::size_of::<Point>());
    }

    #[test]
    fn test_point_svg() {
        let svg = Point::new(3.0, 4.0, Appearance::Color)
            .render_to_svg(&SvgStyle::default())
            .to_string();

        assert!(svg.starts_with("<circle"));
        assert!(svg.contains("cx=\"3\""));
        assert!(svg.contains("cy=\"4\""));
    }
}
