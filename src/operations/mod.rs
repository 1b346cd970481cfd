pub mod builder;
pub mod clip;
pub mod viewport;

pub use builder::{ClipRectBuilder, ClipRectState, PolygonBuilder};
pub use clip::{clip_polygon, ClipParams, ParallelPolicy, SutherlandHodgmanClip};
pub use viewport::window_to_ndc;
