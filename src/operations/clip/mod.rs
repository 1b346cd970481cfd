mod sutherland_hodgman;

pub use sutherland_hodgman::{clip_polygon, SutherlandHodgmanClip};

use crate::math::TOLERANCE;

/// What to do when a crossing subject edge is numerically parallel to the
/// clip edge it crosses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParallelPolicy {
    /// Stop and return `GeometryError::ParallelLines`.
    #[default]
    Abort,
    /// Drop the intersection point for that edge pair and keep clipping.
    Skip,
}

/// Parameters controlling polygon clipping.
#[derive(Debug, Clone, Copy)]
pub struct ClipParams {
    /// Minimum sine of the angle between two edges for them to be considered crossing.
    pub tolerance: f64,
    /// Handling of numerically parallel crossings.
    pub parallel_policy: ParallelPolicy,
}

impl Default for ClipParams {
    fn default() -> Self {
        Self {
            tolerance: TOLERANCE,
            parallel_policy: ParallelPolicy::Abort,
        }
    }
}
