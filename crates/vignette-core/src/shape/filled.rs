//! The "filled" decorator.

use std::{fmt, mem};

use svg::node::element as svg_element;

use crate::{
    shape::{Appearance, Shape, ShapeKind},
    style::{SvgNode, SvgStyle},
};

/// Marker line appended after the wrapped shape's output.
pub const FILLED_MARKER: &str = "   >>> This graphic object is filled! <<<";

/// A decorator marking the wrapped [`Shape`] as filled.
///
/// The decorator owns exactly one shape and is itself a shape, so decorators
/// can wrap composites, other decorators, or anything else.
#[derive(Debug, Clone)]
pub struct Filled {
    inner: Box<dyn Shape>,
    appearance: Appearance,
}

impl Filled {
    /// Wraps `inner`, taking its appearance at construction time.
    pub fn new(inner: Box<dyn Shape>) -> Self {
        let appearance = inner.appearance();
        Self { inner, appearance }
    }

    /// Returns the wrapped shape.
    pub fn inner(&self) -> &dyn Shape {
        self.inner.as_ref()
    }

    /// Unwraps the decorator, returning the wrapped shape.
    pub fn into_inner(self) -> Box<dyn Shape> {
        self.inner
    }
}

impl Shape for Filled {
    /// Clones the wrapped shape first, then wraps the copy.
    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(Self::new(self.inner.clone_box()))
    }

    fn draw(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.inner.draw(out)?;
        writeln!(out, "{FILLED_MARKER}")
    }

    fn memory_size(&self) -> usize {
        mem::size_of::<Self>()
    }

    fn appearance(&self) -> Appearance {
        self.appearance
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Filled
    }

    fn render_to_svg(&self, style: &SvgStyle) -> SvgNode {
        let group = svg_element::Group::new()
            .set("fill", style.fill())
            .add(self.inner.render_to_svg(style));

        Box::new(group)
    }

    fn wrapped(&self) -> Option<&dyn Shape> {
        Some(self.inner.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Circle, Composite, Point, TriangleAdapter};

    #[test]
    fn test_filled_output_extends_inner() {
        let triangle = TriangleAdapter::from_coords([0.0, 0.0, 100.0, 0.0, 50.0, 80.0], Appearance::Color);
        let inner_text = triangle.to_text();
        let filled = Filled::new(Box::new(triangle));

        let text = filled.to_text();
        assert!(text.starts_with(&inner_text));
        assert_eq!(&text[inner_text.len()..], format!("{FILLED_MARKER}\n"));
    }

    #[test]
    fn test_filled_mirrors_wrapped_appearance() {
        let mono = Filled::new(Box::new(Point::new(0.0, 0.0, Appearance::Monochrome)));
        let color = Filled::new(Box::new(Circle::default()));

        assert_eq!(mono.appearance(), Appearance::Monochrome);
        assert_eq!(color.appearance(), Appearance::Color);
    }

    #[test]
    fn test_stacked_decorators() {
        let once = Filled::new(Box::new(Point::new(2.0, 3.0, Appearance::Color)));
        let twice = Filled::new(Box::new(once));

        let expected = format!("Color Point (2, 3)\n{FILLED_MARKER}\n{FILLED_MARKER}\n");
        assert_eq!(twice.to_text(), expected);
        assert_eq!(twice.inner().kind(), ShapeKind::Filled);
        assert_eq!(twice.shape_count(), 3);
    }

    #[test]
    fn test_filled_composite() {
        let group = Composite::new(Appearance::Color)
            .with_child(Point::default())
            .with_child(Circle::default());
        let filled = Filled::new(Box::new(group));

        let text = filled.to_text();
        assert!(text.starts_with("Composite (contains 2 elements):\n"));
        assert!(text.ends_with(&format!("{FILLED_MARKER}\n")));
    }

    #[test]
    fn test_clone_wraps_a_fresh_copy() {
        let filled = Filled::new(Box::new(TriangleAdapter::default()));
        let copy = filled.clone_box();

        assert_eq!(copy.kind(), ShapeKind::Filled);
        assert_eq!(copy.to_text(), filled.to_text());

        let copied_inner = copy.wrapped().expect("decorator wraps a shape");
        assert!(!std::ptr::addr_eq(copied_inner, filled.inner()));
    }

    #[test]
    fn test_into_inner_returns_wrapped_shape() {
        let filled = Filled::new(Box::new(Circle::new(1.0, 2.0, 3.0, Appearance::Color)));
        let inner = filled.into_inner();

        assert_eq!(inner.kind(), ShapeKind::Circle);
        assert_eq!(inner.to_text(), "Color Circle (1,2) r=3\n");
    }

    #[test]
    fn test_svg_group_sets_fill() {
        let style = SvgStyle::default();
        let svg = Filled::new(Box::new(Circle::default()))
            .render_to_svg(&style)
            .to_string();

        assert!(svg.starts_with("<g fill="));
        assert!(svg.contains("<circle"));
    }
}
