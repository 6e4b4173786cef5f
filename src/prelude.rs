//! # Shape Sphere Prelude
//!
//! Brings the commonly used types into scope with one import.
//!
//! ```rust
//! use shape_sphere::prelude::*;
//!
//! let masses = MassTriple::new(1.0, 2.0, 3.0).unwrap();
//! let triangle = Triangle::new(
//!     Vector2::new(0.0, 0.0),
//!     Vector2::new(1.0, 0.0),
//!     Vector2::new(0.0, 1.0),
//! );
//!
//! let map = ShapeSphereMap::new();
//! let point = map.to_sphere(&triangle, &masses).unwrap();
//! let rebuilt = map.from_sphere(&point, &masses, 100.0).unwrap();
//!
//! for solution in UniformizingMap::new().zeta_to_z(point.zeta()) {
//!     println!("branch {}: {}", solution.branch.index(), solution.point);
//! }
//! # let _ = rebuilt;
//! ```

// Re-export configuration and errors
pub use crate::config::{Gauge, TransformConfig};
pub use crate::error::{DegenerateKind, ShapeError, ShapeResult};

// Re-export value types
pub use crate::geometry::{JacobiVectors, PlanarPoint, ShapeCoordinates, SpherePoint, Triangle};
pub use crate::mass::{MassTriple, ReducedMasses};

// Re-export the transforms
pub use crate::transform::{
    Branch, ComplexSolution, ShapeSphereMap, UniformizingMap,
};

// Re-export caller-side helpers
pub use crate::sync::ProjectionSync;
pub use crate::trajectory::{BranchTrajectories, Trajectory};

// Re-export common external dependencies
pub use cgmath::{InnerSpace, Vector2, Vector3};
pub use num_complex::Complex64;
