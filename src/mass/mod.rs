//! # Mass Model
//!
//! Validated body masses and the reduced masses derived from them.
//!
//! A [`MassTriple`] can only be built through validation, so every transform
//! that takes one may assume three positive finite masses.

use crate::error::{ShapeError, ShapeResult};

/// Masses of the three bodies, all positive and finite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassTriple {
    masses: [f64; 3],
}

impl MassTriple {
    /// Validate three masses
    pub fn new(m1: f64, m2: f64, m3: f64) -> ShapeResult<Self> {
        let masses = [m1, m2, m3];
        for (index, &value) in masses.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                log::warn!("Invalid mass at index {}: {}", index, value);
                return Err(ShapeError::InvalidMass { index, value });
            }
        }
        Ok(Self { masses })
    }

    /// Three equal unit masses
    pub fn equal() -> Self {
        Self { masses: [1.0; 3] }
    }

    /// Validate a dynamically sized list of masses
    pub fn from_slice(masses: &[f64]) -> ShapeResult<Self> {
        match *masses {
            [m1, m2, m3] => Self::new(m1, m2, m3),
            _ => {
                log::warn!("Invalid masses size: {}", masses.len());
                Err(ShapeError::InputCardinality {
                    what: "masses",
                    expected: 3,
                    found: masses.len(),
                })
            }
        }
    }

    /// Parse masses typed into text fields
    ///
    /// A comma is accepted as the decimal separator, so `"1,5"` reads as 1.5.
    pub fn parse(m1: &str, m2: &str, m3: &str) -> ShapeResult<Self> {
        let mut values = [0.0; 3];
        for (index, text) in [m1, m2, m3].into_iter().enumerate() {
            values[index] = text
                .trim()
                .replace(',', ".")
                .parse::<f64>()
                .map_err(|_| {
                    log::warn!("Unparsable mass at index {}: {:?}", index, text);
                    ShapeError::UnparsableMass { index }
                })?;
        }
        Self::new(values[0], values[1], values[2])
    }

    pub fn m1(&self) -> f64 {
        self.masses[0]
    }

    pub fn m2(&self) -> f64 {
        self.masses[1]
    }

    pub fn m3(&self) -> f64 {
        self.masses[2]
    }

    pub fn as_array(&self) -> [f64; 3] {
        self.masses
    }

    /// m1 + m2, the mass of the inner pair
    pub fn pair_total(&self) -> f64 {
        self.masses[0] + self.masses[1]
    }

    /// m1 + m2 + m3
    pub fn total(&self) -> f64 {
        self.masses.iter().sum()
    }

    /// The heaviest of the three masses
    pub fn largest(&self) -> f64 {
        self.masses.into_iter().fold(0.0, f64::max)
    }

    /// Masses divided by the largest one
    ///
    /// Shapes depend only on mass ratios, so the transforms work with these.
    /// A ratio too small for an `f64` is held at `f64::MIN_POSITIVE`; the
    /// body it belongs to is then negligible either way.
    pub fn normalized(&self) -> Self {
        let largest = self.largest();
        Self {
            masses: self.masses.map(|m| (m / largest).max(f64::MIN_POSITIVE)),
        }
    }

    /// Reduced masses of the inner pair and of the third body against it
    pub fn reduced(&self) -> ReducedMasses {
        let pair = self.pair_total();
        ReducedMasses {
            mu1: self.m1() * (self.m2() / pair),
            mu2: self.m3() * (pair / self.total()),
        }
    }
}

impl Default for MassTriple {
    fn default() -> Self {
        Self::equal()
    }
}

impl TryFrom<[f64; 3]> for MassTriple {
    type Error = ShapeError;

    fn try_from(masses: [f64; 3]) -> ShapeResult<Self> {
        Self::new(masses[0], masses[1], masses[2])
    }
}

/// Reduced masses weighting the two Jacobi vectors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReducedMasses {
    /// m1·m2 / (m1 + m2)
    pub mu1: f64,
    /// m3·(m1 + m2) / (m1 + m2 + m3)
    pub mu2: f64,
}
