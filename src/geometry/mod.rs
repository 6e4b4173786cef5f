//! # Shape Geometry
//!
//! Value types shared by the transforms:
//!
//! - **Triangle**: three labeled planar positions, one per body
//! - **JacobiVectors**: the mass-weighted relative vectors Q1, Q2
//! - **ShapeCoordinates**: the unnormalized (ξ1, ξ2, ξ3)
//! - **SpherePoint**: a point in display order (ξ2, ξ3, ξ1) on the unit sphere
//!
//! All of them are `Copy`; operations return new values instead of mutating.

use std::fmt;

use cgmath::{InnerSpace, MetricSpace, Vector2, Vector3};
use num_complex::Complex64;

use crate::error::{DegenerateKind, ShapeError, ShapeResult};
use crate::guard::{ensure_finite, ensure_positive_length};
use crate::mass::{MassTriple, ReducedMasses};

/// A body position in the plane
pub type PlanarPoint = Vector2<f64>;

fn to_complex(point: PlanarPoint) -> Complex64 {
    Complex64::new(point.x, point.y)
}

fn to_point(value: Complex64) -> PlanarPoint {
    Vector2::new(value.re, value.im)
}

fn largest_component(v: Vector3<f64>) -> f64 {
    v.x.abs().max(v.y.abs()).max(v.z.abs())
}

/// Positions of bodies 1, 2 and 3, in that order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    points: [PlanarPoint; 3],
}

impl Triangle {
    pub fn new(r1: PlanarPoint, r2: PlanarPoint, r3: PlanarPoint) -> Self {
        Self { points: [r1, r2, r3] }
    }

    /// Build from a dynamically sized list of positions
    pub fn from_points(points: &[PlanarPoint]) -> ShapeResult<Self> {
        match *points {
            [r1, r2, r3] => Ok(Self::new(r1, r2, r3)),
            _ => {
                log::warn!("Invalid points size: {}", points.len());
                Err(ShapeError::InputCardinality {
                    what: "points",
                    expected: 3,
                    found: points.len(),
                })
            }
        }
    }

    pub fn points(&self) -> &[PlanarPoint; 3] {
        &self.points
    }

    pub fn r1(&self) -> PlanarPoint {
        self.points[0]
    }

    pub fn r2(&self) -> PlanarPoint {
        self.points[1]
    }

    pub fn r3(&self) -> PlanarPoint {
        self.points[2]
    }

    /// Unweighted centroid of the three positions
    pub fn centroid(&self) -> PlanarPoint {
        (self.points[0] + self.points[1] + self.points[2]) / 3.0
    }

    /// Lengths of sides r1r2, r2r3 and r3r1
    pub fn side_lengths(&self) -> [f64; 3] {
        let [r1, r2, r3] = self.points;
        [r1.distance(r2), r2.distance(r3), r3.distance(r1)]
    }

    pub fn longest_side(&self) -> f64 {
        self.side_lengths().into_iter().fold(0.0, f64::max)
    }

    pub fn translated(&self, offset: PlanarPoint) -> Self {
        self.map(|p| p + offset)
    }

    /// Scale every position about the origin
    pub fn scaled(&self, factor: f64) -> Self {
        self.map(|p| p * factor)
    }

    fn map(&self, f: impl Fn(PlanarPoint) -> PlanarPoint) -> Self {
        Self {
            points: self.points.map(f),
        }
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, point) in self.points.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "P{}-> x: {:.1} y: {:.1}", index + 1, point.x, point.y)?;
        }
        Ok(())
    }
}

/// Jacobi vectors of a labeled triangle, as complex numbers
///
/// `q1` points from body 1 to body 2; `q2` points from the centre of mass of
/// the pair to body 3.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JacobiVectors {
    pub q1: Complex64,
    pub q2: Complex64,
}

impl JacobiVectors {
    pub fn from_triangle(triangle: &Triangle, masses: &MassTriple) -> Self {
        let [r1, r2, r3] = triangle.points.map(to_complex);
        let pair_center = (r1 * masses.m1() + r2 * masses.m2()) / masses.pair_total();
        Self {
            q1: r2 - r1,
            q2: r3 - pair_center,
        }
    }

    /// Positions with the centre of mass at the origin
    pub fn to_triangle(&self, masses: &MassTriple) -> Triangle {
        let pair = masses.pair_total();
        let total = masses.total();
        let r1 = -self.q1 * (masses.m2() / pair) - self.q2 * (masses.m3() / total);
        let r2 = self.q1 * (masses.m1() / pair) - self.q2 * (masses.m3() / total);
        let r3 = self.q2 * (pair / total);
        Triangle::new(to_point(r1), to_point(r2), to_point(r3))
    }

    /// Rotate both vectors by `lambda` radians
    ///
    /// Shape coordinates do not change under a common rotation.
    pub fn rotated(&self, lambda: f64) -> Self {
        let phase = Complex64::from_polar(1.0, lambda);
        Self {
            q1: self.q1 * phase,
            q2: self.q2 * phase,
        }
    }

    /// Larger of |Q1| and |Q2|, zero only when all three bodies coincide
    pub fn size(&self) -> f64 {
        self.q1.norm().max(self.q2.norm())
    }

    /// Both vectors divided by `factor`
    pub fn shrunk(&self, factor: f64) -> Self {
        Self {
            q1: self.q1 / factor,
            q2: self.q2 / factor,
        }
    }

    pub fn shape_coordinates(&self, reduced: &ReducedMasses) -> ShapeCoordinates {
        let xi1 = reduced.mu1 * self.q1.norm_sqr() - reduced.mu2 * self.q2.norm_sqr();
        let xi23 = self.q1 * self.q2.conj() * (2.0 * reduced.mu1.sqrt() * reduced.mu2.sqrt());
        ShapeCoordinates {
            xi1,
            xi2: xi23.re,
            xi3: xi23.im,
        }
    }
}

/// Unnormalized shape coordinates (ξ1, ξ2, ξ3)
///
/// Their length equals μ1|Q1|² + μ2|Q2|², the size of the configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeCoordinates {
    pub xi1: f64,
    pub xi2: f64,
    pub xi3: f64,
}

impl ShapeCoordinates {
    pub fn new(xi1: f64, xi2: f64, xi3: f64) -> Self {
        Self { xi1, xi2, xi3 }
    }

    /// Euclidean length, reported to the user as the radius
    pub fn radius(&self) -> f64 {
        let v = self.display_order();
        let largest = largest_component(v);
        if largest == 0.0 || !largest.is_finite() {
            return largest;
        }
        largest * (v / largest).magnitude()
    }

    /// Every component multiplied by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.xi1 * factor, self.xi2 * factor, self.xi3 * factor)
    }

    /// (ξ2, ξ3, ξ1), the axis order used on the sphere
    pub fn display_order(&self) -> Vector3<f64> {
        Vector3::new(self.xi2, self.xi3, self.xi1)
    }

    /// Project onto the unit sphere
    pub fn to_sphere(&self) -> ShapeResult<SpherePoint> {
        let v = ensure_finite(self.display_order(), "shape coordinates")?;
        // dividing by the largest component first keeps the squares in range
        let largest = ensure_positive_length(
            largest_component(v),
            DegenerateKind::ZeroNormalization,
            "sphere normalization",
        )?;
        let v = v / largest;
        let unit = ensure_finite(v / v.magnitude(), "sphere point")?;
        Ok(SpherePoint(unit))
    }
}

/// A point on the shape sphere in display order (x, y, z) = (ξ2, ξ3, ξ1)
///
/// Points picked interactively are not guaranteed to be unit length; the
/// transforms read their components as given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpherePoint(Vector3<f64>);

impl SpherePoint {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Vector3::new(x, y, z))
    }

    /// Scale an arbitrary nonzero vector onto the unit sphere
    pub fn normalized(v: Vector3<f64>) -> ShapeResult<Self> {
        ShapeCoordinates::new(v.z, v.x, v.y).to_sphere()
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn z(&self) -> f64 {
        self.0.z
    }

    pub fn as_vector(&self) -> Vector3<f64> {
        self.0
    }

    pub fn length(&self) -> f64 {
        self.0.magnitude()
    }

    pub fn distance(&self, other: &SpherePoint) -> f64 {
        self.0.distance(other.0)
    }

    /// Undo the display permutation
    pub fn shape_coordinates(&self) -> ShapeCoordinates {
        ShapeCoordinates::new(self.0.z, self.0.x, self.0.y)
    }

    /// ζ = ξ2 + iξ3, the non-radial part fed to the uniformizing map
    pub fn zeta(&self) -> Complex64 {
        Complex64::new(self.0.x, self.0.y)
    }
}

impl From<Vector3<f64>> for SpherePoint {
    fn from(v: Vector3<f64>) -> Self {
        Self(v)
    }
}

impl fmt::Display for SpherePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.0.x, self.0.y, self.0.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn right_triangle() -> Triangle {
        Triangle::new(
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(0.0, 1.0),
        )
    }

    #[test]
    fn test_triangle_cardinality() {
        let points = [Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0)];
        assert_eq!(
            Triangle::from_points(&points),
            Err(ShapeError::InputCardinality {
                what: "points",
                expected: 3,
                found: 2
            })
        );
        assert!(Triangle::from_points(&[]).is_err());
    }

    #[test]
    fn test_triangle_measurements() {
        let triangle = right_triangle();
        let sides = triangle.side_lengths();
        assert_eq!(sides[0], 1.0);
        assert!((sides[1] - 2f64.sqrt()).abs() < 1e-15);
        assert_eq!(sides[2], 1.0);
        assert!((triangle.longest_side() - 2f64.sqrt()).abs() < 1e-15);
        let centroid = triangle.centroid();
        assert!((centroid.x - 1.0 / 3.0).abs() < 1e-15);
        assert!((centroid.y - 1.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn test_jacobi_vectors() {
        let jacobi = JacobiVectors::from_triangle(&right_triangle(), &MassTriple::equal());
        assert_eq!(jacobi.q1, Complex64::new(1.0, 0.0));
        assert_eq!(jacobi.q2, Complex64::new(-0.5, 1.0));
    }

    #[test]
    fn test_jacobi_round_trip_keeps_relative_positions() {
        let masses = MassTriple::new(1.0, 2.0, 3.0).unwrap();
        let triangle = right_triangle();
        let jacobi = JacobiVectors::from_triangle(&triangle, &masses);
        let rebuilt = jacobi.to_triangle(&masses);
        let again = JacobiVectors::from_triangle(&rebuilt, &masses);
        assert!((again.q1 - jacobi.q1).norm() < 1e-12);
        assert!((again.q2 - jacobi.q2).norm() < 1e-12);

        // centre of mass of the rebuilt triangle is the origin
        let com = (rebuilt.r1() * 1.0 + rebuilt.r2() * 2.0 + rebuilt.r3() * 3.0) / 6.0;
        assert!(com.magnitude() < 1e-12);
    }

    #[test]
    fn test_radius_is_moment_of_inertia() {
        let masses = MassTriple::new(2.0, 1.0, 0.5).unwrap();
        let triangle = Triangle::new(
            Vector2::new(-1.0, 0.5),
            Vector2::new(2.0, 0.25),
            Vector2::new(0.3, -1.7),
        );
        let jacobi = JacobiVectors::from_triangle(&triangle, &masses);
        let reduced = masses.reduced();
        let xi = jacobi.shape_coordinates(&reduced);
        let inertia = reduced.mu1 * jacobi.q1.norm_sqr() + reduced.mu2 * jacobi.q2.norm_sqr();
        assert!((xi.radius() - inertia).abs() < 1e-12);
    }

    #[test]
    fn test_rotation_preserves_shape() {
        let masses = MassTriple::equal();
        let jacobi = JacobiVectors::from_triangle(&right_triangle(), &masses);
        let reduced = masses.reduced();
        let before = jacobi.shape_coordinates(&reduced);
        let after = jacobi.rotated(1.234).shape_coordinates(&reduced);
        assert!((before.xi1 - after.xi1).abs() < 1e-12);
        assert!((before.xi2 - after.xi2).abs() < 1e-12);
        assert!((before.xi3 - after.xi3).abs() < 1e-12);
    }

    #[test]
    fn test_sphere_point_permutation() {
        let point = SpherePoint::new(0.6, 0.0, 0.8);
        let xi = point.shape_coordinates();
        assert_eq!((xi.xi1, xi.xi2, xi.xi3), (0.8, 0.6, 0.0));
        assert_eq!(point.zeta(), Complex64::new(0.6, 0.0));
    }

    #[test]
    fn test_zero_coordinates_do_not_normalize() {
        assert_eq!(
            ShapeCoordinates::new(0.0, 0.0, 0.0).to_sphere(),
            Err(ShapeError::Degenerate(DegenerateKind::ZeroNormalization))
        );
        assert!(SpherePoint::normalized(Vector3::new(0.0, 0.0, f64::NAN)).is_err());
    }

    #[test]
    fn test_extreme_coordinates_normalize() {
        for factor in [1e-300, 1e-160, 1e160, 1e300] {
            let xi = ShapeCoordinates::new(0.8, 0.0, 0.6).scaled(factor);
            let point = xi.to_sphere().unwrap();
            assert!((point.length() - 1.0).abs() < 1e-15);
            assert!((point.z() - 0.8).abs() < 1e-15);
            assert!((xi.radius() / factor - 1.0).abs() < 1e-15);
        }
        assert_eq!(ShapeCoordinates::new(0.0, 0.0, 0.0).radius(), 0.0);
    }

    #[test]
    fn test_jacobi_size_and_shrink() {
        let jacobi = JacobiVectors::from_triangle(&right_triangle(), &MassTriple::equal());
        assert!((jacobi.size() - 1.25f64.sqrt()).abs() < 1e-15);
        let unit = jacobi.shrunk(jacobi.size());
        assert!((unit.size() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(SpherePoint::new(0.12345, -1.0, 0.0).to_string(), "(0.123, -1.000, 0.000)");
        assert_eq!(
            right_triangle().to_string(),
            "P1-> x: 0.0 y: 0.0\nP2-> x: 1.0 y: 0.0\nP3-> x: 0.0 y: 1.0"
        );
    }
}
