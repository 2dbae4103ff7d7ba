//! Values returned by the search engines.

/// A shortest path found by [`astar_path`](crate::astar_path).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    /// Cell indices from source to destination, both included. Empty if the
    /// destination is unreachable.
    pub path: Vec<usize>,
    /// Total movement cost of `path`, `None` when there is no path.
    pub cost: Option<i32>,
}

impl PathResult {
    /// The "no path" result.
    pub fn unreachable() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Number of cells on the path, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Number of moves, one less than the number of cells.
    #[inline]
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    #[inline]
    pub fn source(&self) -> Option<usize> {
        self.path.first().copied()
    }

    #[inline]
    pub fn destination(&self) -> Option<usize> {
        self.path.last().copied()
    }
}

/// Cells reachable by a [`flood_fill`](crate::flood_fill), grouped by distance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloodFillResult {
    /// The request key, echoed back.
    pub key: String,
    /// `layers[k]` holds the cells first reached after `k + 1` steps from the
    /// nearest source. Each cell appears in at most one layer.
    pub layers: Vec<Vec<usize>>,
    /// Reached cells from which the fill could not expand any further.
    pub outer: Vec<usize>,
}

impl FloodFillResult {
    /// An empty result carrying `key`.
    pub fn empty(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Whether no cell was reached.
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(Vec::is_empty)
    }

    /// Whether `index` is in any layer.
    pub fn contains(&self, index: usize) -> bool {
        self.layers.iter().any(|layer| layer.contains(&index))
    }

    /// The layer holding `index`, i.e. its distance minus one.
    pub fn distance_of(&self, index: usize) -> Option<usize> {
        self.layers.iter().position(|layer| layer.contains(&index))
    }

    /// The cells of layer `k`, if it exists.
    pub fn layer(&self, k: usize) -> Option<&[usize]> {
        self.layers.get(k).map(Vec::as_slice)
    }

    /// Every reached cell, layer by layer.
    pub fn all_cells(&self) -> Vec<usize> {
        self.layers.concat()
    }

    /// Total number of reached cells.
    pub fn cell_count(&self) -> usize {
        self.layers.iter().map(Vec::len).sum()
    }

    /// Look the reached cells up in a view indexed by flattened index.
    /// Indices outside `view` are skipped.
    pub fn cells_in<'a, T>(&self, view: &'a [T]) -> Vec<&'a T> {
        self.layers
            .iter()
            .flatten()
            .filter_map(|&i| view.get(i))
            .collect()
    }
}
