//! Breadth-first search for the closest occupied cell
//!
//! Works on flat cell indices: a `Vec<bool>` visited map and a FIFO queue of
//! indices, both allocated per call.

use std::collections::VecDeque;

use crate::arena::board::Board;
use crate::core::types::Position;

/// Nearest occupied cell by orthogonal steps from `myself`
///
/// Occupied cells do not block the search. Ties go to whichever cell is
/// dequeued first, given north/south/west/east expansion order. Returns
/// `None` when the board holds no occupant or `myself` is off the board.
pub fn find_nearest_enemy(board: &Board<'_>, myself: Position) -> Option<Position> {
    let start = board.index_of(myself)?;

    let mut visited = vec![false; board.cell_count()];
    let mut queue = VecDeque::with_capacity(board.cell_count());
    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if board.occupant_at(current).is_some() {
            return Some(board.position_at(current));
        }

        for neighbor in board.position_at(current).neighbors() {
            if let Some(next) = board.index_of(neighbor) {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }
    }

    None
}
