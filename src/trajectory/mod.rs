//! # Trajectories
//!
//! Bounded history of points traced in the ζ plane and in the z plane while
//! a triangle is dragged or animated.
//!
//! A [`Trajectory`] is a list of segments. New points extend the last
//! segment; [`Trajectory::break_segment`] starts a new one so that a jump
//! (for example after picking a point on the sphere) is not drawn as a
//! line. Each segment keeps only its most recent points.
//!
//! ## Usage
//!
//! ```rust
//! use shape_sphere::trajectory::BranchTrajectories;
//! use shape_sphere::transform::zeta_to_z;
//! use num_complex::Complex64;
//!
//! let mut traces = BranchTrajectories::new();
//! traces.record(&zeta_to_z(Complex64::new(0.1, 0.2)));
//! traces.record(&zeta_to_z(Complex64::new(0.15, 0.2)));
//! assert_eq!(traces.total_points(), 8);
//! ```

use std::collections::VecDeque;

use num_complex::Complex64;

use crate::transform::{Branch, ComplexSolution};

/// Points kept per segment of a branch trace in the z plane
pub const MAX_BRANCH_TRAIL_POINTS: usize = 500;

/// Points kept per segment of the ζ trace
pub const MAX_ZETA_TRAIL_POINTS: usize = 1000;

/// A polyline history split into segments
#[derive(Debug, Clone)]
pub struct Trajectory {
    segments: Vec<VecDeque<Complex64>>,
    max_segment_points: usize,
}

impl Trajectory {
    pub fn new(max_segment_points: usize) -> Self {
        Self {
            segments: vec![VecDeque::new()],
            max_segment_points,
        }
    }

    /// Trajectory sized for the ζ plane
    pub fn for_zeta() -> Self {
        Self::new(MAX_ZETA_TRAIL_POINTS)
    }

    /// Append to the current segment, dropping its oldest point when full
    pub fn push(&mut self, point: Complex64) {
        if self.segments.is_empty() {
            self.segments.push(VecDeque::new());
        }
        let max = self.max_segment_points;
        if let Some(segment) = self.segments.last_mut() {
            segment.push_back(point);
            while segment.len() > max {
                segment.pop_front();
            }
        }
    }

    /// Start a new segment unless the current one is still empty
    pub fn break_segment(&mut self) {
        if self.segments.last().is_some_and(|segment| !segment.is_empty()) {
            self.segments.push(VecDeque::new());
        }
    }

    pub fn clear(&mut self) {
        self.segments.clear();
        self.segments.push(VecDeque::new());
    }

    pub fn segments(&self) -> &[VecDeque<Complex64>] {
        &self.segments
    }

    /// Segments with at least two points, the ones that draw as a line
    pub fn drawable_segments(&self) -> impl Iterator<Item = &VecDeque<Complex64>> {
        self.segments.iter().filter(|segment| segment.len() >= 2)
    }

    pub fn point_count(&self) -> usize {
        self.segments.iter().map(VecDeque::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }

    pub fn last_point(&self) -> Option<Complex64> {
        self.segments.last().and_then(|segment| segment.back().copied())
    }
}

impl Default for Trajectory {
    fn default() -> Self {
        Self::new(MAX_BRANCH_TRAIL_POINTS)
    }
}

/// One trajectory per branch of the uniformizing inverse
#[derive(Debug, Clone, Default)]
pub struct BranchTrajectories {
    branches: [Trajectory; 4],
}

impl BranchTrajectories {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append each solution to the trajectory of its branch
    pub fn record(&mut self, solutions: &[ComplexSolution]) {
        for solution in solutions {
            self.branches[solution.branch.index()].push(solution.point);
        }
    }

    pub fn break_segments(&mut self) {
        self.branches.iter_mut().for_each(Trajectory::break_segment);
    }

    pub fn clear(&mut self) {
        self.branches.iter_mut().for_each(Trajectory::clear);
    }

    pub fn branch(&self, branch: Branch) -> &Trajectory {
        &self.branches[branch.index()]
    }

    pub fn total_points(&self) -> usize {
        self.branches.iter().map(Trajectory::point_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_push_caps_segment_length() {
        let mut trail = Trajectory::new(3);
        for i in 0..5 {
            trail.push(c(i as f64, 0.0));
        }
        assert_eq!(trail.point_count(), 3);
        let kept: Vec<f64> = trail.segments()[0].iter().map(|p| p.re).collect();
        assert_eq!(kept, vec![2.0, 3.0, 4.0]);
        assert_eq!(trail.last_point(), Some(c(4.0, 0.0)));
    }

    #[test]
    fn test_break_only_after_points() {
        let mut trail = Trajectory::default();
        trail.break_segment();
        assert_eq!(trail.segments().len(), 1);

        trail.push(c(0.0, 0.0));
        trail.push(c(1.0, 0.0));
        trail.break_segment();
        trail.break_segment();
        assert_eq!(trail.segments().len(), 2);

        trail.push(c(5.0, 5.0));
        assert_eq!(trail.drawable_segments().count(), 1);
        assert_eq!(trail.point_count(), 3);
    }

    #[test]
    fn test_clear_leaves_one_empty_segment() {
        let mut trail = Trajectory::for_zeta();
        trail.push(c(1.0, 1.0));
        trail.break_segment();
        trail.push(c(2.0, 2.0));
        trail.clear();
        assert_eq!(trail.segments().len(), 1);
        assert!(trail.is_empty());
        assert_eq!(trail.last_point(), None);
    }

    #[test]
    fn test_branch_trajectories_route_by_branch() {
        let mut traces = BranchTrajectories::new();
        traces.record(&[
            ComplexSolution { point: c(1.0, 0.0), branch: Branch::Zero },
            ComplexSolution { point: c(2.0, 0.0), branch: Branch::Three },
            ComplexSolution { point: c(3.0, 0.0), branch: Branch::Three },
        ]);
        assert_eq!(traces.branch(Branch::Zero).point_count(), 1);
        assert_eq!(traces.branch(Branch::One).point_count(), 0);
        assert_eq!(traces.branch(Branch::Three).last_point(), Some(c(3.0, 0.0)));

        traces.break_segments();
        assert_eq!(traces.branch(Branch::Three).segments().len(), 2);
        assert_eq!(traces.branch(Branch::One).segments().len(), 1);

        traces.clear();
        assert_eq!(traces.total_points(), 0);
    }

    #[test]
    fn test_branch_trail_cap() {
        let mut traces = BranchTrajectories::new();
        for i in 0..(MAX_BRANCH_TRAIL_POINTS + 20) {
            traces.record(&[ComplexSolution {
                point: c(i as f64, 0.0),
                branch: Branch::Two,
            }]);
        }
        assert_eq!(traces.branch(Branch::Two).point_count(), MAX_BRANCH_TRAIL_POINTS);
    }
}
