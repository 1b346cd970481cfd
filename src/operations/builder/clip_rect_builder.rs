use crate::math::polygon_2d::rect_from_corners;
use crate::math::Point2;

/// Collects the two opposite corners of an axis-aligned clip rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClipRectBuilder {
    first: Option<Point2>,
}

/// State after pushing a corner into a [`ClipRectBuilder`].
#[derive(Debug, Clone, PartialEq)]
pub enum ClipRectState {
    /// One corner recorded, waiting for the opposite one.
    Pending(ClipRectBuilder),
    /// Counter-clockwise rectangle, ready to use as a clip window.
    Complete(Vec<Point2>),
}

impl ClipRectBuilder {
    /// Creates a builder with no corner recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a corner. The second corner completes the rectangle.
    #[must_use]
    pub fn push(self, corner: Point2) -> ClipRectState {
        match self.first {
            None => ClipRectState::Pending(Self {
                first: Some(corner),
            }),
            Some(first) => ClipRectState::Complete(rect_from_corners(&first, &corner)),
        }
    }

    /// The first corner, if already recorded.
    #[must_use]
    pub fn first_corner(&self) -> Option<Point2> {
        self.first
    }
}
