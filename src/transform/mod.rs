// src/transform/mod.rs
//! Shape sphere transforms
//!
//! Two maps make up the computational core:
//!
//! - [`ShapeSphereMap`] projects a mass-weighted triangle onto the unit shape
//!   sphere and reconstructs a triangle from a sphere point.
//! - [`UniformizingMap`] relates the shape coordinate ζ to the uniformizing
//!   coordinate z, whose inverse has four branches.
//!
//! The free functions below accept dynamically sized point and mass lists,
//! as handed over by a UI layer, and check their cardinality before running
//! the canonical maps.

pub mod sphere;
pub mod uniformizing;

pub use sphere::ShapeSphereMap;
pub use uniformizing::{principal_sqrt, Branch, ComplexSolution, UniformizingMap};

use num_complex::Complex64;

use crate::error::ShapeResult;
use crate::geometry::{PlanarPoint, ShapeCoordinates, SpherePoint, Triangle};
use crate::mass::MassTriple;

/// Project three points with three masses onto the unit shape sphere
pub fn to_sphere(points: &[PlanarPoint], masses: &[f64]) -> ShapeResult<SpherePoint> {
    let triangle = Triangle::from_points(points)?;
    let masses = MassTriple::from_slice(masses)?;
    ShapeSphereMap::new().to_sphere(&triangle, &masses)
}

/// Unnormalized shape coordinates of three points with three masses
pub fn raw_coordinates(points: &[PlanarPoint], masses: &[f64]) -> ShapeResult<ShapeCoordinates> {
    let triangle = Triangle::from_points(points)?;
    let masses = MassTriple::from_slice(masses)?;
    ShapeSphereMap::new().raw_coordinates(&triangle, &masses)
}

/// Reconstruct a triangle with longest side `scale` from a sphere point
pub fn from_sphere(point: &SpherePoint, masses: &[f64], scale: f64) -> ShapeResult<Triangle> {
    let masses = MassTriple::from_slice(masses)?;
    ShapeSphereMap::new().from_sphere(point, &masses, scale)
}

/// All admissible z for a shape coordinate ζ, with default limits
pub fn zeta_to_z(zeta: Complex64) -> Vec<ComplexSolution> {
    UniformizingMap::new().zeta_to_z(zeta)
}

/// The shape coordinate ζ of a uniformizing coordinate z, with default limits
pub fn z_to_zeta(z: Complex64) -> Complex64 {
    UniformizingMap::new().z_to_zeta(z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShapeError;
    use cgmath::Vector2;

    fn points() -> Vec<PlanarPoint> {
        vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn test_slices_checked_for_cardinality() {
        assert!(matches!(
            to_sphere(&[], &[]),
            Err(ShapeError::InputCardinality { what: "points", .. })
        ));
        assert!(matches!(
            to_sphere(&points()[..2], &[1.0, 1.0]),
            Err(ShapeError::InputCardinality { found: 2, .. })
        ));
        assert!(matches!(
            raw_coordinates(&points(), &[1.0, 1.0]),
            Err(ShapeError::InputCardinality { what: "masses", .. })
        ));
        assert!(matches!(
            from_sphere(&SpherePoint::new(1.0, 0.0, 0.0), &[1.0; 4], 100.0),
            Err(ShapeError::InputCardinality { what: "masses", .. })
        ));
    }

    #[test]
    fn test_slices_checked_for_mass_validity() {
        for bad in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let masses = [1.0, 1.0, bad];
            assert!(matches!(
                to_sphere(&points(), &masses),
                Err(ShapeError::InvalidMass { index: 2, .. })
            ));
            assert!(raw_coordinates(&points(), &masses).is_err());
            assert!(from_sphere(&SpherePoint::new(1.0, 0.0, 0.0), &masses, 100.0).is_err());
        }
    }

    #[test]
    fn test_valid_slices() {
        let point = to_sphere(&points(), &[1.0, 1.0, 1.0]).unwrap();
        assert!((point.length() - 1.0).abs() < 1e-12);
        let triangle = from_sphere(&point, &[1.0, 1.0, 1.0], 100.0).unwrap();
        assert!((triangle.longest_side() - 100.0).abs() < 1e-9);
    }
}
