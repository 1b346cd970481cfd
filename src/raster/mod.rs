mod midpoint_circle;

pub use midpoint_circle::midpoint_circle;
