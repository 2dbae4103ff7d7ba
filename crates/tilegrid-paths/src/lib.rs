//! Pathfinding and movement-range algorithms for tile-based games.
//!
//! Every algorithm is a plain function over a [`GridTopology`] and a
//! caller-supplied capability:
//!
//! - **A\*** shortest paths over 8-directional movement ([`astar_path`])
//! - **Flood fill** movement ranges from one or more sources, layered by
//!   distance, with optional per-cell penalties ([`flood_fill`],
//!   [`flood_fill_filtered`])
//! - **Curved paths**: the cells under a cubic Bézier curve ([`curved_path`])
//!
//! Each call builds and owns its working state, so calls are independent of
//! one another and may run concurrently against the same topology.
//!
//! # Capabilities
//!
//! | Trait | Used by | Implemented for |
//! |---|---|---|
//! | [`AstarNavigable`] | A* | `Fn(usize, &str) -> bool`, `[T: AstarCell]` |
//! | [`FloodFillNavigable`] | flood fill | `Fn(usize, &str) -> i32`, `[T: FloodFillCell]` |
//! | [`ResultFilter`] | [`flood_fill_filtered`] | `Fn(FloodFillResult) -> FloodFillResult` |
//!
//! [`GridTopology`]: tilegrid_core::GridTopology

mod astar;
mod curve;
mod distance;
mod floodfill;
mod node;
mod result;
mod traits;

pub use astar::{PathRequest, astar_path};
pub use curve::{CurvePath, curved_path};
pub use distance::{DIAGONAL_COST, STRAIGHT_COST, chebyshev, manhattan, octile};
pub use floodfill::{FloodFillRequest, flood_fill, flood_fill_filtered};
pub use result::{FloodFillResult, PathResult};
pub use traits::{AstarCell, AstarNavigable, FloodFillCell, FloodFillNavigable, ResultFilter};
