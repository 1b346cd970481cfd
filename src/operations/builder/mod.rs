mod clip_rect_builder;
mod polygon_builder;

pub use clip_rect_builder::{ClipRectBuilder, ClipRectState};
pub use polygon_builder::{PolygonBuilder, DEFAULT_POLYGON_CAPACITY};
