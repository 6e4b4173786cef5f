//! # Projection Synchroniser
//!
//! Keeps a triangle view and a sphere view consistent for a caller that
//! displays both. Edits on either side run the matching transform; the
//! synchroniser remembers the last accepted sphere point and
//!
//! - ignores moves shorter than the configured update threshold,
//! - keeps its previous state whenever a transform fails, so a failure never
//!   replaces a good displayed value with a partial one.
//!
//! ## Usage
//!
//! ```rust
//! use shape_sphere::prelude::*;
//! use cgmath::Vector2;
//!
//! let mut sync = ProjectionSync::new(MassTriple::equal(), TransformConfig::default());
//! let triangle = Triangle::new(
//!     Vector2::new(0.0, 0.0),
//!     Vector2::new(1.0, 0.0),
//!     Vector2::new(0.0, 1.0),
//! );
//! let moved = sync.on_triangle_changed(&triangle).unwrap();
//! assert!(moved.is_some());
//! assert_eq!(sync.branch_points().len(), 4);
//! ```

use crate::config::TransformConfig;
use crate::error::ShapeResult;
use crate::geometry::{SpherePoint, Triangle};
use crate::guard::ensure_finite;
use crate::mass::MassTriple;
use crate::transform::{ComplexSolution, ShapeSphereMap, UniformizingMap};

/// Two-way link between a triangle and its point on the shape sphere
#[derive(Debug, Clone)]
pub struct ProjectionSync {
    sphere: ShapeSphereMap,
    uniformizing: UniformizingMap,
    masses: MassTriple,
    update_threshold: f64,
    pick_scale: f64,
    last_triangle: Option<Triangle>,
    last_point: Option<SpherePoint>,
    last_radius: Option<f64>,
}

impl ProjectionSync {
    pub fn new(masses: MassTriple, config: TransformConfig) -> Self {
        Self {
            sphere: ShapeSphereMap::with_config(&config),
            uniformizing: UniformizingMap::with_config(&config),
            masses,
            update_threshold: config.update_threshold,
            pick_scale: config.pick_scale,
            last_triangle: None,
            last_point: None,
            last_radius: None,
        }
    }

    pub fn masses(&self) -> &MassTriple {
        &self.masses
    }

    /// Replace the masses and re-project the current triangle with them
    ///
    /// The update threshold does not apply: the new point is always taken.
    /// Returns `Ok(None)` when there is no triangle yet. On error the old
    /// masses and point are kept.
    pub fn set_masses(&mut self, masses: MassTriple) -> ShapeResult<Option<SpherePoint>> {
        let Some(triangle) = self.last_triangle else {
            self.masses = masses;
            return Ok(None);
        };
        let (point, radius) = self.project(&triangle, &masses)?;
        self.masses = masses;
        self.last_point = Some(point);
        self.last_radius = radius;
        Ok(Some(point))
    }

    /// Triangle currently shown, edited or rebuilt from a pick
    pub fn last_triangle(&self) -> Option<Triangle> {
        self.last_triangle
    }

    /// Last accepted sphere point
    pub fn last_point(&self) -> Option<SpherePoint> {
        self.last_point
    }

    /// Radius of the last triangle that was projected
    ///
    /// `None` also when the radius is too large to represent.
    pub fn last_radius(&self) -> Option<f64> {
        self.last_radius
    }

    /// Project an edited triangle
    ///
    /// Returns `Ok(None)` when the new point is closer than the update
    /// threshold to the current one. On error nothing is updated.
    pub fn on_triangle_changed(&mut self, triangle: &Triangle) -> ShapeResult<Option<SpherePoint>> {
        let (point, radius) = self.project(triangle, &self.masses)?;
        self.last_triangle = Some(*triangle);
        self.last_radius = radius;

        if self.is_small_move(&point) {
            return Ok(None);
        }
        self.last_point = Some(point);
        Ok(Some(point))
    }

    /// Rebuild the triangle for a point picked on the sphere
    ///
    /// The triangle's longest side is the configured pick scale. Returns
    /// `Ok(None)` when the pick is closer than the update threshold to the
    /// current point. On error nothing is updated.
    pub fn on_sphere_picked(&mut self, point: &SpherePoint) -> ShapeResult<Option<Triangle>> {
        ensure_finite(point.as_vector(), "picked sphere point")?;
        if self.is_small_move(point) {
            return Ok(None);
        }

        let triangle = self.sphere.from_sphere(point, &self.masses, self.pick_scale)?;
        self.last_triangle = Some(triangle);
        self.last_point = Some(*point);
        self.last_radius = self.radius_of(&triangle, &self.masses);
        Ok(Some(triangle))
    }

    /// Uniformizing preimages of the current point's ζ = ξ2 + iξ3
    pub fn branch_points(&self) -> Vec<ComplexSolution> {
        match self.last_point {
            Some(point) => self.uniformizing.zeta_to_z(point.zeta()),
            None => Vec::new(),
        }
    }

    fn project(
        &self,
        triangle: &Triangle,
        masses: &MassTriple,
    ) -> ShapeResult<(SpherePoint, Option<f64>)> {
        let point = self.sphere.to_sphere(triangle, masses)?;
        Ok((point, self.radius_of(triangle, masses)))
    }

    fn radius_of(&self, triangle: &Triangle, masses: &MassTriple) -> Option<f64> {
        self.sphere
            .raw_coordinates(triangle, masses)
            .ok()
            .map(|xi| xi.radius())
    }

    fn is_small_move(&self, point: &SpherePoint) -> bool {
        self.last_point
            .is_some_and(|last| last.distance(point) < self.update_threshold)
    }
}
