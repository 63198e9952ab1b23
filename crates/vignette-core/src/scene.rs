//! The scene: the ordered collection of top-level shapes.
//!
//! A [`Scene`] is created once by the application and handed to whatever
//! builds or renders it. It owns every shape registered into it; clearing the
//! scene or dropping it drops all of them.

use std::{fmt, slice};

use log::{debug, trace};

use crate::shape::Shape;

/// Header line written before the scene contents.
pub const SCENE_HEADER: &str = "=== What the scene contains ===";

/// Footer line written after the scene contents.
pub const SCENE_FOOTER: &str = "========================";

/// An ordered collection of top-level shapes.
#[derive(Debug, Default, Clone)]
pub struct Scene {
    objects: Vec<Box<dyn Shape>>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `shape` at the end of the scene, taking ownership of it.
    pub fn add_object(&mut self, shape: Box<dyn Shape>) {
        debug!(kind:? = shape.kind(), position = self.objects.len(); "Adding shape to scene");
        self.objects.push(shape);
    }

    /// Drops every shape in the scene.
    pub fn clear(&mut self) {
        trace!(removed = self.objects.len(); "Clearing scene");
        self.objects.clear();
    }

    /// Writes every top-level shape in insertion order between the header
    /// and footer lines, followed by a blank line.
    pub fn draw_all(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "{SCENE_HEADER}")?;
        for object in &self.objects {
            object.draw(out)?;
        }
        writeln!(out, "{SCENE_FOOTER}")?;
        writeln!(out)
    }

    /// Renders [`draw_all`](Self::draw_all) into a new string.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        self.draw_all(&mut out)
            .expect("Writing to String buffer is infallible");
        out
    }

    /// Returns the top-level shapes in insertion order.
    pub fn objects(&self) -> &[Box<dyn Shape>] {
        &self.objects
    }

    pub fn iter(&self) -> slice::Iter<'_, Box<dyn Shape>> {
        self.objects.iter()
    }

    /// Returns the number of top-level shapes.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Counts every shape in the scene, including those nested in composites
    /// and decorators.
    pub fn total_shapes(&self) -> usize {
        self.objects.iter().map(|shape| shape.shape_count()).sum()
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a Box<dyn Shape>;
    type IntoIter = slice::Iter<'a, Box<dyn Shape>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Appearance, Circle, Composite, Filled, Point, ShapeKind, TriangleAdapter};

    #[test]
    fn test_empty_scene_draw() {
        let scene = Scene::new();

        assert!(scene.is_empty());
        assert_eq!(
            scene.to_text(),
            "=== What the scene contains ===\n========================\n\n"
        );
    }

    #[test]
    fn test_draw_all_in_insertion_order() {
        let mut scene = Scene::new();
        scene.add_object(Box::new(Point::new(10.0, 20.0, Appearance::Color)));
        scene.add_object(Box::new(Circle::new(50.0, 50.0, 25.0, Appearance::Color)));

        assert_eq!(
            scene.to_text(),
            "=== What the scene contains ===\n\
             Color Point (10, 20)\n\
             Color Circle (50,50) r=25\n\
             ========================\n\n"
        );
    }

    #[test]
    fn test_clear_removes_everything() {
        let mut scene = Scene::new();
        scene.add_object(Box::new(Point::default()));
        scene.add_object(Box::new(Filled::new(Box::new(TriangleAdapter::default()))));
        assert_eq!(scene.len(), 2);

        scene.clear();

        assert!(scene.is_empty());
        assert_eq!(scene.total_shapes(), 0);
    }

    #[test]
    fn test_total_shapes_counts_nested() {
        let mut scene = Scene::new();
        let group = Composite::new(Appearance::Color)
            .with_child(Point::default())
            .with_child(Circle::default());
        scene.add_object(Box::new(group));
        scene.add_object(Box::new(Filled::new(Box::new(TriangleAdapter::default()))));

        assert_eq!(scene.len(), 2);
        assert_eq!(scene.total_shapes(), 5);
    }

    #[test]
    fn test_iterate_scene() {
        let mut scene = Scene::new();
        scene.add_object(Box::new(Point::default()));
        scene.add_object(Box::new(Circle::default()));

        let mut kinds = Vec::new();
        for shape in &scene {
            kinds.push(shape.kind());
        }
        assert_eq!(kinds, vec![ShapeKind::Point, ShapeKind::Circle]);
    }
}
