//! Shape contract and the concrete shapes of a scene.
//!
//! This module provides the [`Shape`] trait every drawable entity implements,
//! together with the leaf shapes ([`Point`], [`Line`], [`Circle`]), the
//! [`TriangleAdapter`] bridging the foreign [`ThirdPartyTriangle`], the
//! [`Composite`] container and the [`Filled`] decorator.
//!
//! Shapes are handled as `Box<dyn Shape>` and always have exactly one owner:
//! a [`Scene`](crate::scene::Scene), a [`Composite`] or a [`Filled`]
//! decorator. Cloning a boxed shape is always a deep copy.
//!
//! # Example
//!
//! ```
//! use vignette_core::shape::{Appearance, Circle, Composite, Filled, Point, Shape};
//!
//! let group = Composite::new(Appearance::Color)
//!     .with_child(Point::new(1.0, 1.0, Appearance::Color))
//!     .with_child(Circle::new(5.0, 5.0, 10.0, Appearance::Color));
//!
//! let filled: Box<dyn Shape> = Box::new(Filled::new(Box::new(group)));
//! let copy = filled.clone();
//!
//! assert_eq!(filled.to_text(), copy.to_text());
//! ```

use std::fmt;

use serde::Deserialize;

use crate::style::{SvgNode, SvgStyle};

mod circle;
mod composite;
mod filled;
mod line;
mod point;
mod triangle;

pub use circle::Circle;
pub use composite::Composite;
pub use filled::{FILLED_MARKER, Filled};
pub use line::Line;
pub use point::Point;
pub use triangle::{ThirdPartyTriangle, TriangleAdapter};

/// Appearance mode of a shape, the "colored" flag of the scene model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Appearance {
    /// Rendered in color. This is the default for every constructor.
    #[default]
    Color,
    /// Rendered in black and white.
    Monochrome,
}

impl Appearance {
    /// Returns `true` for [`Appearance::Color`].
    pub fn is_colored(self) -> bool {
        matches!(self, Self::Color)
    }

    /// Returns the prefix leaf shapes write before their description.
    pub fn label(self) -> &'static str {
        match self {
            Self::Color => "Color",
            Self::Monochrome => "B/W",
        }
    }
}

impl From<bool> for Appearance {
    fn from(colored: bool) -> Self {
        if colored {
            Self::Color
        } else {
            Self::Monochrome
        }
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The concrete variant behind a `dyn Shape`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Point,
    Line,
    Circle,
    Triangle,
    Composite,
    Filled,
}

/// The polymorphic contract every drawable entity satisfies.
pub trait Shape: fmt::Debug {
    /// Creates an independent deep copy of this shape.
    ///
    /// The copy shares no ownership with the original: dropping or mutating
    /// one never affects the other.
    fn clone_box(&self) -> Box<dyn Shape>;

    /// Writes the textual representation of this shape.
    ///
    /// Leaf shapes start their line with the [`Appearance`] label. Writing
    /// into a `String` never fails.
    fn draw(&self, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Returns the size in bytes of the concrete variant.
    ///
    /// Owned sub-objects (children, wrapped shapes, foreign triangles) are not
    /// included.
    fn memory_size(&self) -> usize;

    /// Returns the appearance mode of this shape.
    fn appearance(&self) -> Appearance;

    /// Returns the concrete variant of this shape.
    fn kind(&self) -> ShapeKind;

    /// Renders this shape to an SVG node.
    fn render_to_svg(&self, style: &SvgStyle) -> SvgNode;

    /// Returns the children of a container shape.
    /// Default implementation returns an empty slice
    fn children(&self) -> &[Box<dyn Shape>] {
        &[]
    }

    /// Returns the shape wrapped by a decorator.
    /// Default implementation returns `None`
    fn wrapped(&self) -> Option<&dyn Shape> {
        None
    }

    /// Returns `true` if the shape renders in color.
    fn is_colored(&self) -> bool {
        self.appearance().is_colored()
    }

    /// Renders the textual representation into a new string.
    fn to_text(&self) -> String {
        let mut out = String::new();
        self.draw(&mut out)
            .expect("Writing to String buffer is infallible");
        out
    }

    /// Counts this shape and every shape it owns, recursively.
    fn shape_count(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(|child| child.shape_count())
            .sum::<usize>()
            + self.wrapped().map_or(0, |inner| inner.shape_count())
    }
}

/// Enable cloning of `Box<dyn Shape>` by delegating to the clone_box method.
impl Clone for Box<dyn Shape> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
