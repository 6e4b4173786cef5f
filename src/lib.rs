// src/lib.rs
//! Shape Sphere
//!
//! Coordinates for the shape of a planar three-body configuration: projection
//! of a mass-weighted triangle onto the unit shape sphere, gauge-fixed
//! reconstruction of a triangle from a sphere point, and the four-sheeted
//! uniformizing coordinate of the shape plane.

pub mod config;
pub mod error;
pub mod geometry;
pub mod guard;
pub mod mass;
pub mod prelude;
pub mod sync;
pub mod trajectory;
pub mod transform;

// Re-export main types for convenience
pub use error::{ShapeError, ShapeResult};
pub use transform::{ShapeSphereMap, UniformizingMap};
