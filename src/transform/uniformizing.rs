//! Uniformizing coordinate z of the shape plane
//!
//! The forward map is rational,
//!
//! ```text
//! ζ = z (√8 + z³) / (1 − √8 z³)
//! ```
//!
//! and its inverse is written in closed form with two nested square roots.
//! The sign of each root selects one of four branches:
//!
//! ```text
//! w     = √(ζ² − ζ + 1)
//! inner = s1 · 2(ζ + 1) w + 2ζ² + ζ − 1
//! z     = (s1 √inner + s2 w − ζ) / √2
//! ```
//!
//! All square roots are principal (cut along the negative real axis, a
//! signed-zero imaginary part picks the side), see [`principal_sqrt`].

use std::f64::consts::SQRT_2;

use num_complex::Complex64;

use crate::config::TransformConfig;
use crate::guard::clamp_components;

/// √8
const SQRT_8: f64 = 2.0 * SQRT_2;

/// One of the four sheets of the inverse map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Branch {
    /// (+√inner, −w)
    Zero,
    /// (+√inner, +w)
    One,
    /// (−√inner, −w)
    Two,
    /// (−√inner, +w)
    Three,
}

impl Branch {
    pub const ALL: [Branch; 4] = [Branch::Zero, Branch::One, Branch::Two, Branch::Three];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Branch> {
        Self::ALL.get(index).copied()
    }

    /// Signs applied to √inner and to w
    pub fn signs(self) -> (f64, f64) {
        match self {
            Branch::Zero => (1.0, -1.0),
            Branch::One => (1.0, 1.0),
            Branch::Two => (-1.0, -1.0),
            Branch::Three => (-1.0, 1.0),
        }
    }

    /// RGB colour used to tell the branches apart on screen
    pub fn color(self) -> [u8; 3] {
        match self {
            Branch::Zero => [255, 0, 0],
            Branch::One => [0, 255, 0],
            Branch::Two => [0, 0, 255],
            Branch::Three => [255, 165, 0],
        }
    }
}

/// A preimage z of ζ together with the branch it lies on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexSolution {
    pub point: Complex64,
    pub branch: Branch,
}

/// Principal square root
///
/// The cut runs along the negative real axis. On the cut the sign of the
/// imaginary zero decides: `√(−4 + 0i) = 2i`, `√(−4 − 0i) = −2i`.
pub fn principal_sqrt(value: Complex64) -> Complex64 {
    value.sqrt()
}

/// Forward and inverse uniformizing transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformizingMap {
    z_clamp: f64,
    zeta_clamp: f64,
    inner_limit: f64,
    singular_epsilon: f64,
}

impl UniformizingMap {
    pub fn new() -> Self {
        Self::with_config(&TransformConfig::default())
    }

    pub fn with_config(config: &TransformConfig) -> Self {
        Self {
            z_clamp: config.z_clamp,
            zeta_clamp: config.zeta_clamp,
            inner_limit: config.inner_limit,
            singular_epsilon: config.singular_epsilon,
        }
    }

    /// All admissible preimages z of `zeta`, in branch order
    ///
    /// A branch is dropped when its radicand is too large or its z is not
    /// finite, so between zero and four solutions come back. Components of
    /// each z are clamped to the configured window.
    pub fn zeta_to_z(&self, zeta: Complex64) -> Vec<ComplexSolution> {
        let w = principal_sqrt(zeta * zeta - zeta + 1.0);
        let mut solutions = Vec::with_capacity(Branch::ALL.len());

        for branch in Branch::ALL {
            let (outer, inner_sign) = branch.signs();
            let inner = (zeta + 1.0) * w * (2.0 * outer) + zeta * zeta * 2.0 + zeta - 1.0;
            let magnitude = inner.norm();
            if magnitude.is_nan() || magnitude >= self.inner_limit {
                log::trace!("Branch {} rejected, |inner| = {}", branch.index(), magnitude);
                continue;
            }

            let z = principal_sqrt(inner) * (outer / SQRT_2) + w * (inner_sign / SQRT_2)
                - zeta / SQRT_2;
            if !z.is_finite() {
                log::trace!("Branch {} rejected, z = {}", branch.index(), z);
                continue;
            }

            solutions.push(ComplexSolution {
                point: clamp_components(z, self.z_clamp),
                branch,
            });
        }

        solutions
    }

    /// The shape coordinate ζ of `z`
    ///
    /// Total: on the removable singularity |1 − √8 z³| < ε the result is 0,
    /// and so is the result for a non-finite `z`. Components are clamped to
    /// the configured window.
    pub fn z_to_zeta(&self, z: Complex64) -> Complex64 {
        if !z.is_finite() {
            log::trace!("Non-finite z = {}, using zeta = 0", z);
            return Complex64::new(0.0, 0.0);
        }

        let cube = z * z * z;
        let denominator = 1.0 - cube * SQRT_8;
        if denominator.norm() < self.singular_epsilon {
            return Complex64::new(0.0, 0.0);
        }

        let mut zeta = z * (cube + SQRT_8) / denominator;
        if !zeta.is_finite() {
            // |z| so large that z³ overflowed; ζ → −z/√8 there
            zeta = -z / SQRT_8;
        }
        clamp_components(zeta, self.zeta_clamp)
    }
}

impl Default for UniformizingMap {
    fn default() -> Self {
        Self::new()
    }
}
