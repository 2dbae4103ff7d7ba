use std::collections::BinaryHeap;

use tilegrid_core::GridTopology;

use crate::distance::octile;
use crate::node::{Node, NodeRef};
use crate::result::PathResult;
use crate::traits::AstarNavigable;

/// What to search for: endpoints and the opaque tag handed to the
/// passability check.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathRequest {
    pub source: usize,
    pub destination: usize,
    pub tag: String,
}

impl PathRequest {
    pub fn new(source: usize, destination: usize, tag: impl Into<String>) -> Self {
        Self {
            source,
            destination,
            tag: tag.into(),
        }
    }
}

/// Compute the cheapest 8-directional path for `request` using A*.
///
/// Straight steps cost 10 and diagonal steps 14; the same octile formula is
/// the heuristic. Every cell entered after the source, the destination
/// included, must pass `navigable` for the request tag. Among open nodes of
/// equal f-cost, the one that entered the open set first is expanded first.
///
/// Returns an empty [`PathResult`] when the destination cannot be reached,
/// and a single-cell path when source and destination coincide.
pub fn astar_path<N>(topology: &GridTopology, navigable: &N, request: &PathRequest) -> PathResult
where
    N: AstarNavigable + ?Sized,
{
    let start_idx = request.source;
    let goal_idx = request.destination;
    if !topology.contains_index(start_idx) || !topology.contains_index(goal_idx) {
        log::warn!(
            "astar: endpoints {start_idx} -> {goal_idx} outside a {}x{} grid",
            topology.width(),
            topology.height()
        );
        return PathResult::unreachable();
    }

    let goal = topology.coords_of(goal_idx);
    let mut nodes = vec![Node::default(); topology.cell_count()];
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    let mut next_order = 0;

    {
        let start = &mut nodes[start_idx];
        start.g = 0;
        start.h = octile(topology.coords_of(start_idx), goal);
        start.open = true;
        start.order = next_order;
        next_order += 1;
        open.push(NodeRef {
            idx: start_idx,
            f: start.f(),
            order: start.order,
        });
    }

    while let Some(current) = open.pop() {
        let ci = current.idx;

        // Skip entries superseded by a cheaper relaxation.
        if !nodes[ci].open || nodes[ci].f() != current.f {
            continue;
        }

        if ci == goal_idx {
            let result = reconstruct(&nodes, goal_idx);
            log::debug!(
                "astar: {start_idx} -> {goal_idx} found {} cells, cost {}",
                result.len(),
                nodes[goal_idx].g
            );
            return result;
        }

        nodes[ci].open = false;
        nodes[ci].closed = true;
        let current_g = nodes[ci].g;
        let cp = topology.coords_of(ci);
        log::trace!("astar: expand {ci} at {cp} g={current_g} f={}", current.f);

        for ni in topology.neighbors8(ci).into_iter().flatten() {
            if !navigable.is_navigable(ni, &request.tag) || nodes[ni].closed {
                continue;
            }

            let np = topology.coords_of(ni);
            let tentative_g = current_g + octile(cp, np);
            let n = &mut nodes[ni];
            if tentative_g >= n.g {
                continue;
            }

            n.parent = Some(ci);
            n.g = tentative_g;
            n.h = octile(np, goal);
            if !n.open {
                n.open = true;
                n.order = next_order;
                next_order += 1;
            }
            open.push(NodeRef {
                idx: ni,
                f: n.f(),
                order: n.order,
            });
        }
    }

    log::debug!("astar: {start_idx} -> {goal_idx} unreachable");
    PathResult::unreachable()
}

fn reconstruct(nodes: &[Node], goal_idx: usize) -> PathResult {
    let mut path = Vec::new();
    let mut cursor = Some(goal_idx);
    while let Some(ci) = cursor {
        path.push(ci);
        cursor = nodes[ci].parent;
    }
    path.reverse();
    PathResult {
        path,
        cost: Some(nodes[goal_idx].g),
    }
}
