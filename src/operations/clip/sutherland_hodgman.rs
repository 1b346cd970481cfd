use tracing::{debug, warn};

use super::{ClipParams, ParallelPolicy};
use crate::error::{ClipGeomError, GeometryError, OperationError, Result};
use crate::math::intersect_2d::line_line_intersection_with_tolerance;
use crate::math::orientation::is_left_or_on;
use crate::math::Point2;

/// Clips a subject polygon against a convex clip window (Sutherland–Hodgman).
///
/// Both polygons are implicitly closed. The window must be wound
/// counter-clockwise: the left side of each directed window edge is kept.
/// Points lying exactly on a window edge count as inside.
///
/// # Algorithm
///
/// For every window edge `(e1, e2)` the current output is walked pairwise
/// `(s, s_next)` with wraparound:
///
/// 1. If `s` is inside, emit `s`
/// 2. If exactly one of `s`, `s_next` is inside, emit the intersection of the
///    line `s s_next` with the line `e1 e2`
///
/// The result of one edge feeds the next. Non-convex windows give undefined
/// results; no convexity check is performed.
#[derive(Debug)]
pub struct SutherlandHodgmanClip<'a> {
    subject: &'a [Point2],
    window: &'a [Point2],
    params: ClipParams,
}

impl<'a> SutherlandHodgmanClip<'a> {
    /// Creates a new clip operation with default [`ClipParams`].
    #[must_use]
    pub fn new(subject: &'a [Point2], window: &'a [Point2]) -> Self {
        Self {
            subject,
            window,
            params: ClipParams::default(),
        }
    }

    /// Replaces the clip parameters.
    #[must_use]
    pub fn with_params(mut self, params: ClipParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the clip.
    ///
    /// Returns an empty polygon when the subject lies entirely outside the
    /// window.
    ///
    /// # Errors
    ///
    /// - `OperationError::EmptyPolygon` if the subject or the window has no vertices
    /// - `GeometryError::ParallelLines` if a crossing is numerically parallel and
    ///   the policy is [`ParallelPolicy::Abort`]
    pub fn execute(&self) -> Result<Vec<Point2>> {
        if self.subject.is_empty() {
            return Err(OperationError::EmptyPolygon("subject polygon").into());
        }
        if self.window.is_empty() {
            return Err(OperationError::EmptyPolygon("clip window").into());
        }

        let n = self.window.len();
        let mut output = self.subject.to_vec();
        for i in 0..n {
            let e1 = &self.window[i];
            let e2 = &self.window[(i + 1) % n];
            output = self.clip_against_edge(&output, e1, e2)?;
            if output.is_empty() {
                debug!(edge = i, "clip output emptied, subject outside window");
                break;
            }
        }

        debug!(
            subject = self.subject.len(),
            window = n,
            clipped = output.len(),
            "sutherland-hodgman clip finished"
        );
        Ok(output)
    }

    /// Clips `input` against the half-plane left of `e1 -> e2`.
    fn clip_against_edge(
        &self,
        input: &[Point2],
        e1: &Point2,
        e2: &Point2,
    ) -> Result<Vec<Point2>> {
        let m = input.len();
        let mut output = Vec::with_capacity(m + 1);
        for j in 0..m {
            let s = &input[j];
            let s_next = &input[(j + 1) % m];
            let s_in = is_left_or_on(e1, e2, s);
            let s_next_in = is_left_or_on(e1, e2, s_next);

            if s_in {
                output.push(*s);
            }
            if s_in != s_next_in {
                let crossing =
                    line_line_intersection_with_tolerance(s, s_next, e1, e2, self.params.tolerance);
                match crossing {
                    Ok(pt) => output.push(pt),
                    Err(ClipGeomError::Geometry(GeometryError::ParallelLines { denominator }))
                        if self.params.parallel_policy == ParallelPolicy::Skip =>
                    {
                        warn!(
                            denominator,
                            "skipping intersection of near-parallel subject and clip edges"
                        );
                    }
                    Err(err) => return Err(err),
                }
            }
        }
        Ok(output)
    }
}

/// Clips `subject` against `window` with default parameters.
///
/// # Errors
///
/// See [`SutherlandHodgmanClip::execute`].
pub fn clip_polygon(subject: &[Point2], window: &[Point2]) -> Result<Vec<Point2>> {
    SutherlandHodgmanClip::new(subject, window).execute()
}
