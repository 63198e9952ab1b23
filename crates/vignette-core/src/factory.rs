//! Shape factories.
//!
//! A [`ShapeFactory`] builds a concrete shape and registers it in a
//! [`Scene`] in a single call. Each factory produces one family of shapes:
//! [`ColorShapeFactory`] builds colored shapes, [`MonochromeShapeFactory`]
//! builds black-and-white ones.

use std::fmt;

use crate::{
    scene::Scene,
    shape::{Appearance, Circle, Line, Point},
};

/// Creates leaf shapes and registers them in a scene.
pub trait ShapeFactory: fmt::Debug {
    /// Returns the appearance of the shapes this factory builds.
    fn appearance(&self) -> Appearance;

    /// Builds a [`Point`] and registers it in `scene`.
    fn create_point(&self, scene: &mut Scene, x: f64, y: f64) {
        scene.add_object(Box::new(Point::new(x, y, self.appearance())));
    }

    /// Builds a [`Line`] and registers it in `scene`.
    fn create_line(&self, scene: &mut Scene, x1: f64, y1: f64, x2: f64, y2: f64) {
        scene.add_object(Box::new(Line::new(x1, y1, x2, y2, self.appearance())));
    }

    /// Builds a [`Circle`] and registers it in `scene`.
    fn create_circle(&self, scene: &mut Scene, cx: f64, cy: f64, r: f64) {
        scene.add_object(Box::new(Circle::new(cx, cy, r, self.appearance())));
    }
}

/// Factory for colored shapes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorShapeFactory;

impl ShapeFactory for ColorShapeFactory {
    fn appearance(&self) -> Appearance {
        Appearance::Color
    }
}

/// Factory for black-and-white shapes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonochromeShapeFactory;

impl ShapeFactory for MonochromeShapeFactory {
    fn appearance(&self) -> Appearance {
        Appearance::Monochrome
    }
}

/// Returns the factory producing shapes of the given appearance.
pub fn factory_for(appearance: Appearance) -> Box<dyn ShapeFactory> {
    match appearance {
        Appearance::Color => Box::new(ColorShapeFactory),
        Appearance::Monochrome => Box::new(MonochromeShapeFactory),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeKind;

    #[test]
    fn test_color_factory_registers_shapes() {
        let mut scene = Scene::new();
        let factory = ColorShapeFactory;

        factory.create_point(&mut scene, 10.0, 20.0);
        factory.create_line(&mut scene, 0.0, 0.0, 1.0, 1.0);
        factory.create_circle(&mut scene, 50.0, 50.0, 25.0);

        let kinds: Vec<_> = scene.iter().map(|shape| shape.kind()).collect();
        assert_eq!(
            kinds,
            vec![ShapeKind::Point, ShapeKind::Line, ShapeKind::Circle]
        );
        assert!(scene.iter().all(|shape| shape.is_colored()));
        assert_eq!(scene.objects()[0].to_text(), "Color Point (10, 20)\n");
    }

    #[test]
    fn test_monochrome_factory() {
        let mut scene = Scene::new();
        MonochromeShapeFactory.create_circle(&mut scene, 1.0, 2.0, 3.0);

        assert_eq!(scene.objects()[0].to_text(), "B/W Circle (1,2) r=3\n");
    }

    #[test]
    fn test_factory_for_appearance() {
        assert_eq!(factory_for(Appearance::Color).appearance(), Appearance::Color);
        assert_eq!(
            factory_for(Appearance::Monochrome).appearance(),
            Appearance::Monochrome
        );
    }
}
