//! # Numeric Guard
//!
//! Shared validation applied at every transform boundary. Values that are
//! NaN or infinite are turned into [`ShapeError::NumericOverflow`] before
//! they can leak out of a computation, and lengths used as divisors are
//! checked for being strictly positive.
//!
//! ## Usage
//!
//! ```rust
//! use shape_sphere::guard::ensure_finite;
//! use cgmath::Vector2;
//!
//! let point = ensure_finite(Vector2::new(1.0_f64, 2.0), "centroid").unwrap();
//! assert!(ensure_finite(f64::NAN, "radius").is_err());
//! # let _ = point;
//! ```

use cgmath::{Vector2, Vector3};
use num_complex::Complex64;

use crate::error::{DegenerateKind, ShapeError, ShapeResult};

/// Values whose every component can be checked for finiteness
pub trait Finite {
    fn all_finite(&self) -> bool;
}

impl Finite for f64 {
    fn all_finite(&self) -> bool {
        self.is_finite()
    }
}

impl Finite for Vector2<f64> {
    fn all_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Finite for Vector3<f64> {
    fn all_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Finite for Complex64 {
    fn all_finite(&self) -> bool {
        self.is_finite()
    }
}

impl<T: Finite> Finite for [T; 3] {
    fn all_finite(&self) -> bool {
        self.iter().all(Finite::all_finite)
    }
}

/// Pass `value` through if it is finite, otherwise report the failing stage
pub fn ensure_finite<T: Finite>(value: T, stage: &'static str) -> ShapeResult<T> {
    if value.all_finite() {
        Ok(value)
    } else {
        log::warn!("Non-finite value while computing {}", stage);
        Err(ShapeError::NumericOverflow { stage })
    }
}

/// Accept a length that is strictly positive and finite
///
/// Zero, negative and NaN lengths map to `kind`; infinite lengths are
/// overflow at `stage`.
pub fn ensure_positive_length(
    length: f64,
    kind: DegenerateKind,
    stage: &'static str,
) -> ShapeResult<f64> {
    if length.is_infinite() {
        log::warn!("Infinite length while computing {}", stage);
        return Err(ShapeError::NumericOverflow { stage });
    }
    if length.is_nan() || length <= 0.0 {
        log::warn!("Invalid length {} while computing {}: {}", length, stage, kind);
        return Err(ShapeError::Degenerate(kind));
    }
    Ok(length)
}

/// Clamp the real and imaginary parts independently to `[-bound, bound]`
pub fn clamp_components(value: Complex64, bound: f64) -> Complex64 {
    Complex64::new(value.re.clamp(-bound, bound), value.im.clamp(-bound, bound))
}
