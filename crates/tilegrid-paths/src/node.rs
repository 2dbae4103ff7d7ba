//! Per-search bookkeeping for A*.

/// g-cost of a node the search has not reached yet.
pub(crate) const UNREACHED: i32 = i32::MAX;

/// Search state of one grid cell. A fresh table of these is built for every
/// search and dropped when it returns.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    /// Cost of the best known path from the source.
    pub(crate) g: i32,
    /// Estimated cost from here to the destination.
    pub(crate) h: i32,
    pub(crate) parent: Option<usize>,
    /// Position of the node's first insertion into the open set.
    pub(crate) order: usize,
    pub(crate) open: bool,
    pub(crate) closed: bool,
}

impl Node {
    #[inline]
    pub(crate) fn f(&self) -> i32 {
        self.g.saturating_add(self.h)
    }
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHED,
            h: 0,
            parent: None,
            order: usize::MAX,
            open: false,
            closed: false,
        }
    }
}

/// Open-set entry, ordered so that `BinaryHeap` pops the lowest `f` first and,
/// among equal `f`, the node that entered the open set earliest.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) order: usize,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
