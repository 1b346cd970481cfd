use tracing::debug;

use crate::error::{OperationError, Result};
use crate::math::Point2;

/// Default vertex limit for interactively built polygons.
pub const DEFAULT_POLYGON_CAPACITY: usize = 100;

/// Accumulates polygon vertices one at a time, up to a fixed capacity.
///
/// Each [`push`](Self::push) consumes the builder and returns the next state,
/// so a builder can be threaded through an event loop without shared state.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonBuilder {
    vertices: Vec<Point2>,
    capacity: usize,
}

impl Default for PolygonBuilder {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_POLYGON_CAPACITY)
    }
}

impl PolygonBuilder {
    /// Creates an empty builder with [`DEFAULT_POLYGON_CAPACITY`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder that accepts at most `capacity` vertices.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a vertex.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::CapacityExceeded` if the builder is already full.
    pub fn push(mut self, point: Point2) -> Result<Self> {
        if self.is_full() {
            return Err(OperationError::CapacityExceeded {
                capacity: self.capacity,
            }
            .into());
        }
        self.vertices.push(point);
        Ok(self)
    }

    /// Number of vertices pushed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether no vertex has been pushed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether another [`push`](Self::push) would fail.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.vertices.len() >= self.capacity
    }

    /// The vertices pushed so far, in order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Finalizes the polygon.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::EmptyPolygon` if no vertex was pushed.
    pub fn finish(self) -> Result<Vec<Point2>> {
        if self.vertices.is_empty() {
            return Err(OperationError::EmptyPolygon("built polygon").into());
        }
        debug!(vertices = self.vertices.len(), "polygon finished");
        Ok(self.vertices)
    }
}
