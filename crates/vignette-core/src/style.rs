//! Styling applied when shapes are exported to SVG.
//!
//! [`SvgStyle`] picks the stroke color from a shape's
//! [`Appearance`](crate::shape::Appearance) and supplies the fill used by the
//! [`Filled`](crate::shape::Filled) decorator. Use
//! [`apply_stroke!`](crate::apply_stroke!) to set all stroke attributes on an
//! SVG element at once.

use crate::{color::Color, shape::Appearance};

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Colors and widths used while rendering shapes to SVG.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgStyle {
    color_stroke: Color,
    mono_stroke: Color,
    fill: Color,
    stroke_width: f64,
}

impl SvgStyle {
    /// Creates a style from explicit colors and stroke width.
    pub fn new(color_stroke: Color, mono_stroke: Color, fill: Color, stroke_width: f64) -> Self {
        Self {
            color_stroke,
            mono_stroke,
            fill,
            stroke_width,
        }
    }

    /// Returns the stroke color for shapes with the given appearance.
    pub fn stroke_for(&self, appearance: Appearance) -> &Color {
        match appearance {
            Appearance::Color => &self.color_stroke,
            Appearance::Monochrome => &self.mono_stroke,
        }
    }

    /// Returns the fill color used by filled shapes.
    pub fn fill(&self) -> &Color {
        &self.fill
    }

    /// Returns the stroke width.
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            color_stroke: Color::new("steelblue").expect("'steelblue' is a valid CSS color"),
            mono_stroke: Color::default(),
            fill: Color::new("orange").expect("'orange' is a valid CSS color"),
            stroke_width: 2.0,
        }
    }
}

/// Applies the stroke attributes for an appearance to an SVG element.
///
/// ```
/// use vignette_core::{shape::Appearance, style::SvgStyle};
/// use svg::node::element as svg_element;
///
/// let style = SvgStyle::default();
/// let line = svg_element::Line::new().set("x1", 0).set("y1", 0);
/// let line = vignette_core::apply_stroke!(line, &style, Appearance::Monochrome);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $style:expr, $appearance:expr) => {{
        let stroke = $style.stroke_for($appearance);
        $element
            .set("stroke", stroke.to_string())
            .set("stroke-opacity", stroke.alpha())
            .set("stroke-width", $style.stroke_width())
    }};
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_stroke_follows_appearance() {
        let style = SvgStyle::new(
            Color::new("red").unwrap(),
            Color::new("gray").unwrap(),
            Color::new("yellow").unwrap(),
            3.0,
        );

        assert_eq!(style.stroke_for(Appearance::Color), &Color::new("red").unwrap());
        assert_eq!(
            style.stroke_for(Appearance::Monochrome),
            &Color::new("gray").unwrap()
        );
        assert_eq!(style.fill(), &Color::new("yellow").unwrap());
        assert_approx_eq!(f64, style.stroke_width(), 3.0);
    }

    #[test]
    fn test_apply_stroke_sets_attributes() {
        let style = SvgStyle::default();
        let circle = svg::node::element::Circle::new().set("r", 1);
        let circle = crate::apply_stroke!(circle, &style, Appearance::Color);

        let rendered = circle.to_string();
        assert!(rendered.contains("stroke="));
        assert!(rendered.contains("stroke-width=\"2\""));
    }
}
