//! Triangle to shape sphere projection and its gauge-fixed inverse
//!
//! Forward map: Jacobi vectors Q1, Q2 give
//!
//! ```text
//! ξ1       = μ1|Q1|² − μ2|Q2|²
//! ξ2 + iξ3 = 2√(μ1μ2) · Q1 · conj(Q2)
//! ```
//!
//! and the sphere point is (ξ2, ξ3, ξ1) / ‖ξ‖.
//!
//! Inverse map: for a unit ξ with 1 + ξ1 > 0,
//!
//! ```text
//! Q1 = √(1+ξ1) / √(2μ1)
//! Q2 = (ξ2 − iξ3) / (√(2μ2) √(1+ξ1))
//! ```
//!
//! satisfies the forward equations exactly: μ1|Q1|² = (1+ξ1)/2,
//! μ2|Q2|² = (ξ2²+ξ3²)/(2(1+ξ1)) = (1−ξ1)/2 and
//! Q1·conj(Q2) = (ξ2 + iξ3)/(2√(μ1μ2)). Any common rotation e^{iλ} of
//! Q1, Q2 is an equally valid answer; the configured [`Gauge`] picks λ.

use cgmath::Vector2;
use num_complex::Complex64;

use crate::config::{Gauge, TransformConfig};
use crate::error::{DegenerateKind, ShapeError, ShapeResult};
use crate::geometry::{JacobiVectors, ShapeCoordinates, SpherePoint, Triangle};
use crate::guard::{ensure_finite, ensure_positive_length};
use crate::mass::MassTriple;

/// Forward and inverse shape sphere transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeSphereMap {
    gauge: Gauge,
    target_scale: f64,
}

impl ShapeSphereMap {
    /// Map with the canonical gauge and default target scale
    pub fn new() -> Self {
        Self::with_config(&TransformConfig::default())
    }

    pub fn with_config(config: &TransformConfig) -> Self {
        Self {
            gauge: config.gauge,
            target_scale: config.target_scale,
        }
    }

    pub fn gauge(&self) -> Gauge {
        self.gauge
    }

    pub fn target_scale(&self) -> f64 {
        self.target_scale
    }

    /// Shape coordinates before normalization
    ///
    /// Their length is the radius shown next to the sphere. Fails with
    /// `NumericOverflow` when that length is not representable even though
    /// the shape itself is.
    pub fn raw_coordinates(
        &self,
        triangle: &Triangle,
        masses: &MassTriple,
    ) -> ShapeResult<ShapeCoordinates> {
        let (unit, size) = self.unit_coordinates(triangle, masses)?;
        // ξ is linear in the masses and quadratic in the Jacobi vectors
        let xi = unit.scaled(size).scaled(size).scaled(masses.largest());
        ensure_finite(xi.display_order(), "shape coordinates")?;

        log::trace!(
            "Shape coordinates xi = ({}, {}, {})",
            xi.xi1,
            xi.xi2,
            xi.xi3
        );
        Ok(xi)
    }

    /// Project a triangle onto the unit shape sphere
    pub fn to_sphere(&self, triangle: &Triangle, masses: &MassTriple) -> ShapeResult<SpherePoint> {
        let (unit, _) = self.unit_coordinates(triangle, masses)?;
        let point = unit.to_sphere()?;
        log::debug!("Triangle projected to sphere point {}", point);
        Ok(point)
    }

    /// Reconstruct a triangle from a sphere point
    ///
    /// The result is centred at `(target_scale / 2, target_scale / 2)` with its
    /// longest side equal to `target_scale`. Only the shape is determined by
    /// the sphere point; the orientation comes from the gauge.
    pub fn from_sphere(
        &self,
        point: &SpherePoint,
        masses: &MassTriple,
        target_scale: f64,
    ) -> ShapeResult<Triangle> {
        if !target_scale.is_finite() || target_scale <= 0.0 {
            log::warn!("Invalid target scale: {}", target_scale);
            return Err(ShapeError::Degenerate(DegenerateKind::InvalidScale));
        }
        ensure_finite(point.as_vector(), "sphere point")?;

        let xi = point.shape_coordinates();
        let lift = 1.0 + xi.xi1;
        if lift <= 0.0 {
            log::warn!("Invalid 1+xi1 value: {}", lift);
            return Err(ShapeError::Degenerate(DegenerateKind::SouthPole));
        }

        // the triangle's shape depends only on mass ratios
        let unit_masses = masses.normalized();
        let jacobi = self.jacobi_in_gauge(&xi, &unit_masses, lift)?;
        let bodies = jacobi.to_triangle(&unit_masses);
        let centered = bodies.translated(-bodies.centroid());
        ensure_finite(*centered.points(), "reconstructed triangle")?;

        let extent = ensure_positive_length(
            centered.longest_side(),
            DegenerateKind::ZeroExtent,
            "longest side",
        )?;
        let half = target_scale / 2.0;
        let placed = centered
            .scaled(target_scale / extent)
            .translated(Vector2::new(half, half));
        ensure_finite(*placed.points(), "placed triangle")?;

        log::debug!("Sphere point {} reconstructed as triangle {:?}", point, placed.points());
        Ok(placed)
    }

    /// [`from_sphere`](Self::from_sphere) at the configured target scale
    pub fn from_sphere_default(
        &self,
        point: &SpherePoint,
        masses: &MassTriple,
    ) -> ShapeResult<Triangle> {
        self.from_sphere(point, masses, self.target_scale)
    }

    /// Shape coordinates of the triangle rescaled so that the largest mass
    /// and the longer Jacobi vector are both 1, plus that Jacobi length
    fn unit_coordinates(
        &self,
        triangle: &Triangle,
        masses: &MassTriple,
    ) -> ShapeResult<(ShapeCoordinates, f64)> {
        ensure_finite(*triangle.points(), "triangle")?;

        let unit_masses = masses.normalized();
        let jacobi = JacobiVectors::from_triangle(triangle, &unit_masses);
        ensure_finite(jacobi.q1, "jacobi vector q1")?;
        ensure_finite(jacobi.q2, "jacobi vector q2")?;

        let size = ensure_positive_length(
            jacobi.size(),
            DegenerateKind::ZeroNormalization,
            "jacobi size",
        )?;
        let xi = jacobi.shrunk(size).shape_coordinates(&unit_masses.reduced());
        ensure_finite(xi.display_order(), "shape coordinates")?;
        Ok((xi, size))
    }

    fn jacobi_in_gauge(
        &self,
        xi: &ShapeCoordinates,
        masses: &MassTriple,
        lift: f64,
    ) -> ShapeResult<JacobiVectors> {
        let reduced = masses.reduced();
        let root = lift.sqrt();
        let denominator = (2.0 * reduced.mu2).sqrt() * root;

        let aligned = JacobiVectors {
            q1: Complex64::new(root / (2.0 * reduced.mu1).sqrt(), 0.0),
            q2: Complex64::new(xi.xi2 / denominator, -xi.xi3 / denominator),
        };
        let jacobi = aligned.rotated(self.gauge.lambda());
        ensure_finite(jacobi.q1, "jacobi vector q1")?;
        ensure_finite(jacobi.q2, "jacobi vector q2")?;
        Ok(jacobi)
    }
}

impl Default for ShapeSphereMap {
    fn default() -> Self {
        Self::new()
    }
}
