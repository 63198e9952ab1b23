//! Example: Building a scene directly from shapes
//!
//! This example assembles a scene without a command string, using a
//! composite, the fill decorator and deep cloning, then renders it.

use vignette::{
    SceneBuilder,
    scene::Scene,
    shape::{Appearance, Circle, Composite, Filled, Line, Point, Shape, TriangleAdapter},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let face = Composite::new(Appearance::Color)
        .with_child(Circle::new(50.0, 50.0, 40.0, Appearance::Color))
        .with_child(Point::new(35.0, 40.0, Appearance::Color))
        .with_child(Point::new(65.0, 40.0, Appearance::Color))
        .with_child(Line::new(35.0, 65.0, 65.0, 65.0, Appearance::Monochrome));

    let hat = Filled::new(Box::new(TriangleAdapter::from_coords(
        [20.0, 15.0, 80.0, 15.0, 50.0, -20.0],
        Appearance::Color,
    )));

    let mut scene = Scene::default();
    let face: Box<dyn Shape> = Box::new(face);
    scene.add_object(face.clone());
    scene.add_object(Box::new(hat));
    scene.add_object(Box::new(Filled::new(face)));

    let builder = SceneBuilder::default();
    print!("{}", builder.render_text(&scene));

    let svg = builder.render_svg(&scene)?;
    println!("SVG output: {} bytes", svg.len());

    Ok(())
}
