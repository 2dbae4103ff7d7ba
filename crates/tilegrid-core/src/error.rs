//! Errors raised while building a [`GridTopology`](crate::GridTopology).

use thiserror::Error;

/// Errors that can occur when constructing a grid topology.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    /// One or both dimensions are zero or negative.
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: i32, height: i32 },
}
