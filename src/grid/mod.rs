//! Grid geometry: positions, compaction, move/resize and pixel metrics.

mod compact;
mod engine;
mod metrics;
mod position;

pub use compact::{compact, grid_height, has_overlap, push_down_collisions};
pub use engine::GridEngine;
pub use metrics::{GridMetrics, PixelRect};
pub use position::GridPosition;
