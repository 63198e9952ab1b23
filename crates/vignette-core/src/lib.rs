//! Vignette Core Types and Definitions
//!
//! This crate provides the scene model of Vignette. It includes:
//!
//! - **Shapes**: the [`shape::Shape`] contract, leaf shapes, the triangle
//!   adapter, the [`shape::Composite`] container and the [`shape::Filled`]
//!   decorator ([`shape`] module)
//! - **Scene**: the ordered collection of top-level shapes ([`scene::Scene`])
//! - **Factories**: shape families that build and register shapes ([`factory`] module)
//! - **Colors and styles**: CSS colors ([`color::Color`]) and SVG styling ([`style`] module)

pub mod color;
pub mod factory;
pub mod scene;
pub mod shape;
pub mod style;
