//! Composite shape: a group of shapes treated as one.

use std::{fmt, mem};

use svg::node::element as svg_element;

use crate::{
    shape::{Appearance, Shape, ShapeKind},
    style::{SvgNode, SvgStyle},
};

/// A [`Shape`] owning an ordered sequence of child shapes.
///
/// Children are drawn in insertion order. Cloning a composite clones every
/// child, so the copy never aliases the original.
#[derive(Debug, Clone, Default)]
pub struct Composite {
    children: Vec<Box<dyn Shape>>,
    appearance: Appearance,
}

impl Composite {
    pub fn new(appearance: Appearance) -> Self {
        Self {
            children: Vec::new(),
            appearance,
        }
    }

    /// Transfers ownership of `shape` to this composite, after the existing children.
    pub fn add(&mut self, shape: Box<dyn Shape>) {
        self.children.push(shape);
    }

    /// Adds a child and returns the composite, for building groups inline.
    pub fn with_child(mut self, shape: impl Shape + 'static) -> Self {
        self.add(Box::new(shape));
        self
    }

    /// Returns the number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the composite has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Extend<Box<dyn Shape>> for Composite {
    fn extend<I: IntoIterator<Item = Box<dyn Shape>>>(&mut self, iter: I) {
        self.children.extend(iter);
    }
}

impl FromIterator<Box<dyn Shape>> for Composite {
    fn from_iter<I: IntoIterator<Item = Box<dyn Shape>>>(iter: I) -> Self {
        let mut composite = Self::default();
        composite.extend(iter);
        composite
    }
}

impl Shape for Composite {
    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn draw(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "Composite (contains {} elements):", self.children.len())?;
        for child in &self.children {
            child.draw(out)?;
        }
        Ok(())
    }

    /// Only the composite itself is measured, children are not summed.
    fn memory_size(&self) -> usize {
        mem::size_of::<Self>()
    }

    fn appearance(&self) -> Appearance {
        self.appearance
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Composite
    }

    fn render_to_svg(&self, style: &SvgStyle) -> SvgNode {
        let group = self
            .children
            .iter()
            .fold(svg_element::Group::new(), |group, child| {
                group.add(child.render_to_svg(style))
            });

        Box::new(group)
    }

    fn children(&self) -> &[Box<dyn Shape>] {
        &self.children
    }
}
