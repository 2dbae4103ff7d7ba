//! **tilegrid-core** — grid topology for tile-based games.
//!
//! This crate provides the addressing layer shared by the *tilegrid*
//! algorithms: integer geometry, compass directions, and [`GridTopology`],
//! which maps `(x, y)` coordinates to flattened cell indices and resolves
//! neighbors without wrapping across grid edges.

pub mod direction;
pub mod error;
pub mod geom;
pub mod topology;

pub use direction::{Adjacency, Direction};
pub use error::TopologyError;
pub use geom::{Point, Range, RangeIter};
pub use topology::GridTopology;
