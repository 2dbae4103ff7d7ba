//! Movement-range flood fill.
//!
//! The fill advances in rounds. Every round expands the whole current open
//! set, most remaining movement first, over cardinal neighbors; the cells it
//! discovers form the next layer. A cell is settled the first round it is
//! reached and is never revisited, even if a later round would have reached
//! it with more movement left.

use tilegrid_core::{Adjacency, GridTopology};

use crate::result::FloodFillResult;
use crate::traits::{FloodFillNavigable, ResultFilter};

/// Parameters of a flood fill.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloodFillRequest {
    /// Opaque key passed to the penalty function and echoed in the result.
    pub key: String,
    /// Cells the fill starts from, all at once.
    pub sources: Vec<usize>,
    /// Movement available at every source.
    pub range: u32,
    /// Whether leaving a cell costs its penalty on top of the base step.
    pub apply_move_penalty: bool,
}

impl FloodFillRequest {
    pub fn new(key: impl Into<String>, sources: Vec<usize>, range: u32) -> Self {
        Self {
            key: key.into(),
            sources,
            range,
            apply_move_penalty: false,
        }
    }

    pub fn with_move_penalty(mut self, apply: bool) -> Self {
        self.apply_move_penalty = apply;
        self
    }
}

/// A reached cell and the movement left on arriving there.
#[derive(Clone, Copy, Debug)]
struct CellState {
    index: usize,
    movement: i64,
}

/// Compute every cell reachable from `request.sources` within
/// `request.range`, grouped into distance layers.
///
/// A neighbor is passable when `navigable` gives it a non-negative penalty.
/// Cells next to a source are reached with the source's full range; every
/// further step costs 1, plus the penalty of the cell being left when
/// `apply_move_penalty` is set. A step that would leave zero or less movement
/// is not taken.
///
/// Out-of-range and duplicate sources are ignored; with no usable source the
/// result is empty.
pub fn flood_fill<N>(
    topology: &GridTopology,
    navigable: &N,
    request: &FloodFillRequest,
) -> FloodFillResult
where
    N: FloodFillNavigable + ?Sized,
{
    let key = request.key.as_str();
    let range = i64::from(request.range);
    let cell_count = topology.cell_count();

    let mut closed = vec![false; cell_count];
    let mut is_source = vec![false; cell_count];
    let mut open = Vec::with_capacity(request.sources.len());
    for &src in &request.sources {
        if !topology.contains_index(src) {
            log::warn!(
                "flood fill {key:?}: source {src} outside a {}x{} grid",
                topology.width(),
                topology.height()
            );
            continue;
        }
        if closed[src] {
            continue;
        }
        closed[src] = true;
        is_source[src] = true;
        open.push(CellState {
            index: src,
            movement: range,
        });
    }

    let mut result = FloodFillResult::empty(key);
    if open.is_empty() {
        log::debug!("flood fill {key:?}: no sources");
        return result;
    }

    // Position in `next` of each cell discovered during the current round.
    let mut slot: Vec<Option<usize>> = vec![None; cell_count];

    loop {
        let mut next: Vec<CellState> = Vec::new();

        while !open.is_empty() {
            let cell = open.remove(most_movement(&open));
            let step = if is_source[cell.index] {
                0
            } else if request.apply_move_penalty {
                1 + i64::from(navigable.move_penalty(cell.index, key))
            } else {
                1
            };
            let movement = cell.movement - step;

            let mut discovered = 0;
            for n in topology.neighbors(cell.index, Adjacency::Four) {
                if closed[n] || navigable.move_penalty(n, key) < 0 || movement <= 0 {
                    continue;
                }
                discovered += 1;
                match slot[n] {
                    Some(pos) => next[pos].movement = next[pos].movement.max(movement),
                    None => {
                        slot[n] = Some(next.len());
                        next.push(CellState { index: n, movement });
                    }
                }
            }

            log::trace!(
                "flood fill {key:?}: expand {} with {} left, {discovered} discovered",
                cell.index,
                cell.movement
            );
            if discovered == 0 {
                result.outer.push(cell.index);
            }
        }

        if next.is_empty() {
            break;
        }

        for cell in &next {
            closed[cell.index] = true;
            slot[cell.index] = None;
        }
        result.layers.push(next.iter().map(|c| c.index).collect());
        open = next;
    }

    log::debug!(
        "flood fill {key:?}: {} layers, {} cells, {} outer",
        result.layers.len(),
        result.cell_count(),
        result.outer.len()
    );
    result
}

/// [`flood_fill`], then hand the result to `filter` and return its output.
pub fn flood_fill_filtered<N, F>(
    topology: &GridTopology,
    navigable: &N,
    request: &FloodFillRequest,
    filter: &F,
) -> FloodFillResult
where
    N: FloodFillNavigable + ?Sized,
    F: ResultFilter + ?Sized,
{
    filter.filter(flood_fill(topology, navigable, request))
}

/// Index of the open cell with the most movement left; the earliest wins ties.
fn most_movement(open: &[CellState]) -> usize {
    let mut best = 0;
    for (i, cell) in open.iter().enumerate().skip(1) {
        if cell.movement > open[best].movement {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::manhattan;
    use tilegrid_core::Point;

    fn grid(w: i32, h: i32) -> GridTopology {
        GridTopology::new(w, h).unwrap()
    }

    fn no_penalty(_: usize, _: &str) -> i32 {
        0
    }

    fn assert_unique(r: &FloodFillResult) {
        let mut all = r.all_cells();
        let n = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), n, "a cell appears twice in {:?}", r.layers);
    }

    #[test]
    fn single_source_center_range_two() {
        let g = grid(5, 5);
        let center = g.index_of(Point::new(2, 2));
        let r = flood_fill(&g, &no_penalty, &FloodFillRequest::new("move", vec![center], 2));

        assert_eq!(r.key, "move");
        assert_eq!(r.layers.len(), 2);
        // Top, right, bottom, left.
        assert_eq!(r.layers[0], vec![17, 13, 7, 11]);
        assert_eq!(r.layers[1].len(), 8);
        assert_unique(&r);
        assert!(!r.contains(center));

        for &c in &r.layers[1] {
            assert!(
                r.layers[0].iter().any(|&p| manhattan(g.coords_of(p), g.coords_of(c)) == 1),
                "{c} has no neighbor in layer 0"
            );
        }
        // Nothing beyond range 2 has room to grow.
        let mut outer = r.outer.clone();
        outer.sort_unstable();
        let mut ring = r.layers[1].clone();
        ring.sort_unstable();
        assert_eq!(outer, ring);
    }

    #[test]
    fn edge_clipping_at_corner() {
        let g = grid(5, 5);
        let r = flood_fill(&g, &no_penalty, &FloodFillRequest::new("", vec![0], 2));
        assert_eq!(r.layers, vec![vec![5, 1], vec![10, 6, 2]]);
    }

    #[test]
    fn zero_range_reaches_nothing() {
        let g = grid(3, 3);
        let r = flood_fill(&g, &no_penalty, &FloodFillRequest::new("k", vec![4], 0));
        assert!(r.layers.is_empty());
        assert!(r.is_empty());
        assert_eq!(r.outer, vec![4]);
        assert_eq!(r.key, "k");
    }

    #[test]
    fn no_sources_gives_empty_result() {
        let g = grid(3, 3);
        let r = flood_fill(&g, &no_penalty, &FloodFillRequest::new("k", vec![], 4));
        assert_eq!(r, FloodFillResult::empty("k"));
    }

    #[test]
    fn invalid_and_duplicate_sources_are_ignored() {
        let g = grid(3, 3);
        let plain = flood_fill(&g, &no_penalty, &FloodFillRequest::new("", vec![4], 1));
        let noisy = flood_fill(&g, &no_penalty, &FloodFillRequest::new("", vec![4, 99, 4], 1));
        assert_eq!(plain, noisy);
    }

    #[test]
    fn impassable_cells_block_expansion() {
        let g = grid(5, 1);
        let wall = |i: usize, _: &str| if i == 2 { -1 } else { 0 };
        let r = flood_fill(&g, &wall, &FloodFillRequest::new("", vec![0], 5));
        assert_eq!(r.layers, vec![vec![1]]);
        assert_eq!(r.outer, vec![1]);
    }

    #[test]
    fn fully_enclosed_source() {
        let g = grid(3, 3);
        let walls = |i: usize, _: &str| if i == 4 { 0 } else { -1 };
        let r = flood_fill(&g, &walls, &FloodFillRequest::new("", vec![4], 3));
        assert!(r.is_empty());
        assert_eq!(r.outer, vec![4]);
    }

    #[test]
    fn penalties_ignored_unless_requested() {
        let g = grid(9, 1);
        let mud = |_: usize, _: &str| 1;
        let req = FloodFillRequest::new("", vec![0], 4);
        assert_eq!(flood_fill(&g, &mud, &req).layers.len(), 4);
        assert_eq!(flood_fill(&g, &mud, &req.with_move_penalty(true)).layers.len(), 2);
    }

    #[test]
    fn constant_penalty_scales_step_cost() {
        let g = grid(9, 9);
        let center = g.index_of(Point::new(4, 4));
        for (range, penalty) in [(4u32, 1), (6, 2), (6, 1), (3, 2)] {
            let pen = move |_: usize, _: &str| penalty;
            let req = FloodFillRequest::new("", vec![center], range).with_move_penalty(true);
            let r = flood_fill(&g, &pen, &req);
            let max_steps = (range as i32 / (1 + penalty)) as usize;
            assert_eq!(r.layers.len(), max_steps, "range {range} penalty {penalty}");
            for c in r.all_cells() {
                assert!(manhattan(g.coords_of(c), g.coords_of(center)) as usize <= max_steps);
            }
        }
    }

    #[test]
    fn first_step_is_free_of_penalty() {
        // Only the source's neighbors skip the charge, so the reach is
        // 1 + (R - 1) / (1 + P) steps even when 1 + P does not divide R.
        let g = grid(9, 9);
        let center = g.index_of(Point::new(4, 4));
        for (range, penalty, steps) in [(3u32, 1, 2), (5, 2, 2), (7, 2, 3), (2, 3, 1), (1, 5, 1)] {
            let pen = move |_: usize, _: &str| penalty;
            let req = FloodFillRequest::new("", vec![center], range).with_move_penalty(true);
            let r = flood_fill(&g, &pen, &req);
            assert_eq!(steps, 1 + (range as usize - 1) / (1 + penalty as usize));
            assert_eq!(r.layers.len(), steps, "range {range} penalty {penalty}");
            for c in r.all_cells() {
                assert!(manhattan(g.coords_of(c), g.coords_of(center)) as usize <= steps);
            }
        }
    }

    #[test]
    fn penalty_is_charged_when_leaving_a_cell() {
        // Leaving cell 1 costs 1 + 3; entering it costs nothing extra.
        let g = grid(6, 1);
        let pen = |i: usize, _: &str| if i == 1 { 3 } else { 0 };
        let req = FloodFillRequest::new("", vec![0], 5).with_move_penalty(true);
        let r = flood_fill(&g, &pen, &req);
        assert_eq!(r.layers, vec![vec![1], vec![2]]);
    }

    #[test]
    fn penalty_depends_on_key() {
        let g = grid(5, 1);
        let pen = |i: usize, key: &str| if key == "boat" && i == 2 { -1 } else { 0 };
        let walk = flood_fill(&g, &pen, &FloodFillRequest::new("walk", vec![0], 4));
        let boat = flood_fill(&g, &pen, &FloodFillRequest::new("boat", vec![0], 4));
        assert_eq!(walk.cell_count(), 4);
        assert_eq!(boat.cell_count(), 1);
        assert_eq!(boat.key, "boat");
    }

    #[test]
    fn first_reach_is_final() {
        // y=1:  S  A* X  Y
        // y=0:  B  C  D  #
        // A costs 3 extra to leave. X is first reached through A with 1
        // movement left, so Y stays out of range even though the longer way
        // round through B, C and D would have arrived with more to spare.
        let g = grid(4, 2);
        let pen = |i: usize, _: &str| match i {
            5 => 3,
            3 => -1,
            _ => 0,
        };
        let req = FloodFillRequest::new("", vec![4], 5).with_move_penalty(true);
        let r = flood_fill(&g, &pen, &req);
        assert_eq!(r.layers, vec![vec![5, 0], vec![6, 1], vec![2]]);
        assert_eq!(r.outer, vec![6, 2]);
        assert!(!r.contains(7));
    }

    #[test]
    fn rediscovery_keeps_most_movement() {
        // C (1) is reached in the same round from A (muddy) and B (clear);
        // keeping B's movement lets the fill continue past C.
        let g = grid(3, 2);
        let pen = |i: usize, _: &str| if i == 4 { 1 } else { 0 };
        let req = FloodFillRequest::new("", vec![3], 3).with_move_penalty(true);
        let r = flood_fill(&g, &pen, &req);
        assert_eq!(r.layers, vec![vec![4, 0], vec![5, 1], vec![2]]);
    }

    #[test]
    fn two_sources_layer_by_nearest_source() {
        let g = grid(5, 5);
        let a = g.index_of(Point::new(0, 0));
        let b = g.index_of(Point::new(4, 4));
        let r = flood_fill(&g, &no_penalty, &FloodFillRequest::new("", vec![a, b], 10));

        assert_unique(&r);
        assert_eq!(r.cell_count(), 23);
        for c in r.all_cells() {
            let p = g.coords_of(c);
            let nearest = manhattan(p, g.coords_of(a)).min(manhattan(p, g.coords_of(b)));
            assert_eq!(r.distance_of(c), Some(nearest as usize - 1), "cell {p}");
        }
        // (4,0) is 4 steps from both corners.
        assert_eq!(r.distance_of(4), Some(3));
    }

    #[test]
    fn adjacent_sources_do_not_reach_each_other() {
        let g = grid(4, 1);
        let r = flood_fill(&g, &no_penalty, &FloodFillRequest::new("", vec![1, 2], 1));
        assert_eq!(r.layers, vec![vec![0, 3]]);
        assert!(!r.contains(1) && !r.contains(2));
    }

    #[test]
    fn filter_runs_on_the_raw_result() {
        let g = grid(5, 5);
        let req = FloodFillRequest::new("aoe", vec![12], 3);
        let first_layer_only = |mut r: FloodFillResult| {
            r.layers.truncate(1);
            r.outer.clear();
            r
        };
        let r = flood_fill_filtered(&g, &no_penalty, &req, &first_layer_only);
        assert_eq!(r.key, "aoe");
        assert_eq!(r.layers.len(), 1);
        assert!(r.outer.is_empty());
    }

    #[test]
    fn cell_view_supplies_penalties() {
        struct Terrain(i32);
        impl crate::traits::FloodFillCell for Terrain {
            fn flood_fill_move_penalty(&self, _key: &str) -> i32 {
                self.0
            }
        }
        let g = grid(4, 1);
        let cells = [Terrain(0), Terrain(0), Terrain(-1), Terrain(0)];
        let r = flood_fill(&g, &cells[..], &FloodFillRequest::new("", vec![0], 9));
        assert_eq!(r.all_cells(), vec![1]);
        assert_eq!(r.cells_in(&cells).len(), 1);
    }

    #[test]
    fn repeated_fills_agree() {
        let g = grid(7, 7);
        let pen = |i: usize, _: &str| match i % 5 {
            0 => 1,
            3 => -1,
            _ => 0,
        };
        let req = FloodFillRequest::new("", vec![0, 24, 48], 5).with_move_penalty(true);
        let first = flood_fill(&g, &pen, &req);
        assert_unique(&first);
        for _ in 0..3 {
            assert_eq!(flood_fill(&g, &pen, &req), first);
        }
    }
}
