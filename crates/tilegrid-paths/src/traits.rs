use crate::result::FloodFillResult;

/// Passability source for A* searches.
///
/// `tag` is an opaque request token passed through unchanged, e.g. to let
/// different unit types see different obstacles.
pub trait AstarNavigable {
    /// Whether the cell at `index` may be entered for this request.
    fn is_navigable(&self, index: usize, tag: &str) -> bool;
}

/// Movement-penalty source for flood fills.
pub trait FloodFillNavigable {
    /// Extra movement spent leaving the cell at `index`. A negative value
    /// makes the cell impassable for this `key`.
    fn move_penalty(&self, index: usize, key: &str) -> i32;
}

/// Post-processing applied once to a finished flood fill.
pub trait ResultFilter {
    fn filter(&self, result: FloodFillResult) -> FloodFillResult;
}

/// Per-cell view of A* passability. The default accepts every request.
pub trait AstarCell {
    fn is_astar_navigable(&self, _tag: &str) -> bool {
        true
    }
}

/// Per-cell view of flood-fill penalties. The default costs nothing extra.
pub trait FloodFillCell {
    fn flood_fill_move_penalty(&self, _key: &str) -> i32 {
        0
    }
}

// ---------------------------------------------------------------------------
// Closures
// ---------------------------------------------------------------------------

impl<F> AstarNavigable for F
where
    F: Fn(usize, &str) -> bool,
{
    #[inline]
    fn is_navigable(&self, index: usize, tag: &str) -> bool {
        self(index, tag)
    }
}

impl<F> FloodFillNavigable for F
where
    F: Fn(usize, &str) -> i32,
{
    #[inline]
    fn move_penalty(&self, index: usize, key: &str) -> i32 {
        self(index, key)
    }
}

impl<F> ResultFilter for F
where
    F: Fn(FloodFillResult) -> FloodFillResult,
{
    #[inline]
    fn filter(&self, result: FloodFillResult) -> FloodFillResult {
        self(result)
    }
}

// ---------------------------------------------------------------------------
// Cell views: a slice indexed by flattened index. Indices past the end are
// treated as blocked.
// ---------------------------------------------------------------------------

impl<T: AstarCell> AstarNavigable for [T] {
    #[inline]
    fn is_navigable(&self, index: usize, tag: &str) -> bool {
        self.get(index).is_some_and(|c| c.is_astar_navigable(tag))
    }
}

impl<T: FloodFillCell> FloodFillNavigable for [T] {
    #[inline]
    fn move_penalty(&self, index: usize, key: &str) -> i32 {
        self.get(index).map_or(-1, |c| c.flood_fill_move_penalty(key))
    }
}
