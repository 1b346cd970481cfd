//! Planar clipping and computational geometry.
//!
//! Vector algebra, point-to-line distance, half-plane orientation tests,
//! line intersection, Sutherland–Hodgman polygon clipping and midpoint circle
//! rasterization. Every operation is a pure function over value inputs;
//! precondition violations are reported through [`ClipGeomError`] instead of
//! propagating NaN or infinity.

pub mod error;
pub mod math;
pub mod operations;
pub mod raster;

pub use error::{ClipGeomError, Result};
