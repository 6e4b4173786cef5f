//! Transform configuration
//!
//! Collects the gauge choice and every numeric threshold used by the
//! transforms in one value. `TransformConfig::default()` reproduces the
//! canonical behaviour; the `with_*` methods override individual settings.

/// Default longest side of a reconstructed triangle
pub const DEFAULT_TARGET_SCALE: f64 = 300.0;

/// Longest side of a triangle rebuilt from a point picked on the sphere
pub const DEFAULT_PICK_SCALE: f64 = 100.0;

/// Components of a uniformizing coordinate z are clamped to `[-Z_CLAMP, Z_CLAMP]`
pub const Z_CLAMP: f64 = 5.0;

/// Components of a shape coordinate ζ are clamped to `[-ZETA_CLAMP, ZETA_CLAMP]`
pub const ZETA_CLAMP: f64 = 2.0;

/// Branches whose radicand reaches this magnitude are discarded
pub const INNER_MAGNITUDE_LIMIT: f64 = 1e10;

/// Denominators smaller than this are treated as the removable singularity
pub const SINGULAR_EPSILON: f64 = 1e-10;

/// Sphere moves shorter than this are not worth re-projecting
pub const UPDATE_THRESHOLD: f64 = 0.01;

/// Rotation gauge used to invert the sphere projection
///
/// Projecting a triangle onto the shape sphere forgets its overall rotation
/// angle λ. Reconstruction must pick one; the gauge names that choice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gauge {
    /// Rotate both Jacobi vectors by a fixed angle λ (radians).
    ///
    /// λ = 0 places the first Jacobi vector on the positive real axis.
    Fixed { lambda: f64 },
}

impl Gauge {
    /// The canonical gauge, λ = 0
    pub const CANONICAL: Gauge = Gauge::Fixed { lambda: 0.0 };

    /// Rotation angle applied to the reconstructed Jacobi vectors
    pub fn lambda(&self) -> f64 {
        match *self {
            Gauge::Fixed { lambda } => lambda,
        }
    }
}

impl Default for Gauge {
    fn default() -> Self {
        Gauge::CANONICAL
    }
}

/// Settings shared by the sphere and uniformizing maps
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformConfig {
    pub gauge: Gauge,
    pub target_scale: f64,
    pub pick_scale: f64,
    pub z_clamp: f64,
    pub zeta_clamp: f64,
    pub inner_limit: f64,
    pub singular_epsilon: f64,
    pub update_threshold: f64,
}

impl TransformConfig {
    pub fn new() -> Self {
        Self {
            gauge: Gauge::CANONICAL,
            target_scale: DEFAULT_TARGET_SCALE,
            pick_scale: DEFAULT_PICK_SCALE,
            z_clamp: Z_CLAMP,
            zeta_clamp: ZETA_CLAMP,
            inner_limit: INNER_MAGNITUDE_LIMIT,
            singular_epsilon: SINGULAR_EPSILON,
            update_threshold: UPDATE_THRESHOLD,
        }
    }

    pub fn with_gauge(mut self, gauge: Gauge) -> Self {
        self.gauge = gauge;
        self
    }

    pub fn with_target_scale(mut self, scale: f64) -> Self {
        self.target_scale = scale;
        self
    }

    pub fn with_pick_scale(mut self, scale: f64) -> Self {
        self.pick_scale = scale;
        self
    }

    pub fn with_z_clamp(mut self, bound: f64) -> Self {
        self.z_clamp = bound;
        self
    }

    pub fn with_zeta_clamp(mut self, bound: f64) -> Self {
        self.zeta_clamp = bound;
        self
    }

    pub fn with_update_threshold(mut self, threshold: f64) -> Self {
        self.update_threshold = threshold;
        self
    }
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TransformConfig::default();
        assert_eq!(config.gauge, Gauge::Fixed { lambda: 0.0 });
        assert_eq!(config.target_scale, 300.0);
        assert_eq!(config.pick_scale, 100.0);
        assert_eq!(config.z_clamp, 5.0);
        assert_eq!(config.zeta_clamp, 2.0);
        assert_eq!(config.inner_limit, 1e10);
        assert_eq!(config.singular_epsilon, 1e-10);
    }

    #[test]
    fn test_builder_overrides() {
        let config = TransformConfig::new()
            .with_gauge(Gauge::Fixed { lambda: 1.0 })
            .with_target_scale(100.0)
            .with_pick_scale(40.0)
            .with_update_threshold(0.5);
        assert_eq!(config.gauge.lambda(), 1.0);
        assert_eq!(config.target_scale, 100.0);
        assert_eq!(config.pick_scale, 40.0);
        assert_eq!(config.update_threshold, 0.5);
        assert_eq!(config.z_clamp, Z_CLAMP);
    }
}
