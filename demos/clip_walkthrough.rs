//! Headless walkthrough of the interactive clipping flow.
//!
//! Simulated mouse clicks (window pixels) become a clip rectangle and a
//! polygon, the polygon is clipped, and a circle is rasterized.
//!
//! Usage:
//! ```text
//! cargo run --example clip_walkthrough
//! RUST_LOG=clipgeom=trace cargo run --example clip_walkthrough
//! ```

use clipgeom::math::PixelPoint;
use clipgeom::operations::{
    clip_polygon, window_to_ndc, ClipRectBuilder, ClipRectState, PolygonBuilder,
};
use clipgeom::raster::midpoint_circle;
use clipgeom::Result;
use tracing::info;

const WIN_WIDTH: u32 = 800;
const WIN_HEIGHT: u32 = 600;

fn main() -> Result<()> {
    // Default: WARN for everything, DEBUG for clipgeom.
    // Override with RUST_LOG env var (e.g. RUST_LOG=clipgeom=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("clip_walkthrough=info".parse().unwrap_or_default())
        .add_directive("clipgeom=debug".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let corner_clicks = [(200.0, 150.0), (600.0, 450.0)];
    let polygon_clicks = [(100.0, 300.0), (400.0, 50.0), (700.0, 300.0), (400.0, 550.0)];

    let mut rect = ClipRectBuilder::new();
    let mut window = Vec::new();
    for (x, y) in corner_clicks {
        match rect.push(window_to_ndc(x, y, WIN_WIDTH, WIN_HEIGHT)?) {
            ClipRectState::Pending(next) => rect = next,
            ClipRectState::Complete(done) => window = done,
        }
    }
    info!(?window, "clip rectangle");

    let mut builder = PolygonBuilder::new();
    for (x, y) in polygon_clicks {
        builder = builder.push(window_to_ndc(x, y, WIN_WIDTH, WIN_HEIGHT)?)?;
    }
    let polygon = builder.finish()?;
    info!(?polygon, "polygon");

    let clipped = clip_polygon(&polygon, &window)?;
    info!(vertices = clipped.len(), ?clipped, "clipped polygon");

    let circle = midpoint_circle(PixelPoint::new(5, -3), 50)?;
    info!(points = circle.len(), "rasterized circle");

    Ok(())
}
