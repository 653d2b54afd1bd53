//! Grid A* used by hostile actors to chase their target.
//! Step cost is uniform across all eight directions; the estimate is the
//! squared straight-line distance, so paths are greedy rather than optimal
//! around obstacles.

use std::collections::BTreeSet;

use crate::state::Map;
use crate::types::Pos;

/// Expansion order of the eight neighbors as `(dx, dy)`.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] =
    [(0, -1), (0, 1), (-1, 0), (1, 0), (-1, -1), (-1, 1), (1, -1), (1, 1)];

#[derive(Clone, Copy, Debug)]
struct Node {
    pos: Pos,
    g: u32,
    f: i64,
    parent: Option<usize>,
}

/// Returns the cells from `start` (exclusive) to `goal` (inclusive).
/// `Some(vec![])` when both are the same cell, `None` when `goal` cannot be reached.
pub fn find_path(map: &Map, start: Pos, goal: Pos) -> Option<Vec<Pos>> {
    if start == goal {
        return Some(Vec::new());
    }

    let mut nodes = vec![Node { pos: start, g: 0, f: 0, parent: None }];
    let mut open: Vec<usize> = vec![0];
    let mut closed: BTreeSet<Pos> = BTreeSet::new();

    while let Some(slot) = select_next(&nodes, &open, goal) {
        let current_index = open.remove(slot);
        let current = nodes[current_index];
        closed.insert(current.pos);

        if current.pos == goal {
            return Some(reconstruct(&nodes, current_index));
        }

        for (dx, dy) in NEIGHBOR_OFFSETS {
            let pos = current.pos.offset(dx, dy);
            if !map.in_bounds(pos) || !map.is_walkable(pos) || closed.contains(&pos) {
                continue;
            }
            let g = current.g + 1;
            let f = i64::from(g) + i64::from(pos.distance_squared(goal));
            if open.iter().any(|&index| nodes[index].pos == pos && nodes[index].g <= g) {
                continue;
            }
            nodes.push(Node { pos, g, f, parent: Some(current_index) });
            open.push(nodes.len() - 1);
        }
    }

    None
}

/// Slot in `open` to expand next: a node on the goal wins outright,
/// otherwise the first node with the lowest `f`.
fn select_next(nodes: &[Node], open: &[usize], goal: Pos) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (slot, &index) in open.iter().enumerate() {
        if nodes[index].pos == goal {
            return Some(slot);
        }
        if best.is_none_or(|current| nodes[index].f < nodes[open[current]].f) {
            best = Some(slot);
        }
    }
    best
}

fn reconstruct(nodes: &[Node], terminal: usize) -> Vec<Pos> {
    let mut path = Vec::new();
    let mut cursor = Some(terminal);
    while let Some(index) = cursor {
        path.push(nodes[index].pos);
        cursor = nodes[index].parent;
    }
    path.reverse();
    path.remove(0);
    path
}
