use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

/// Whether the hat can be reached from [`START`] with orthogonal steps that never enter a hole.
///
/// Depth-first search on an explicit stack. Each cell is pushed at most once and the search stops at the first hat it
/// pops, so it is bounded by the cell count regardless of the field layout.
pub fn is_solvable(field: &Field) -> bool {
    if field[START].is_hole() {
        return false;
    }

    let mut visited: Array2<bool> = Array2::default((field.size(), field.size()).to_nd_index());
    let mut to_visit = Vec::from([START]);
    visited[START.to_nd_index()] = true;

    while let Some(coords) = to_visit.pop() {
        if field[coords] == Cell::Hat {
            return true;
        }

        for neighbor in field.iter_neighbors(coords) {
            if visited[neighbor.to_nd_index()] || field[neighbor].is_hole() {
                continue;
            }
            visited[neighbor.to_nd_index()] = true;
            to_visit.push(neighbor);
        }
    }

    false
}
