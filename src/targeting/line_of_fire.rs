//! Short-range scan along my row and column
//!
//! Answers "can I hit someone from here after at most one turn".

use crate::arena::board::Board;
use crate::core::types::Position;

/// Closest enemy sharing my row or column within `radius` cells
///
/// Radii are tried in increasing order; within one radius the lookup order is
/// north, south, west, east. The radius never runs past the board's longer side.
pub fn find_in_line_of_fire<'a>(board: &Board<'a>, myself: Position, radius: i32) -> Option<&'a str> {
    let radius = radius.min(board.width().max(board.height()));
    for i in 1..=radius {
        let cells = [
            myself.offset(0, -i),
            myself.offset(0, i),
            myself.offset(-i, 0),
            myself.offset(i, 0),
        ];
        if let Some(id) = cells.into_iter().find_map(|p| board.occupant(p)) {
            return Some(id);
        }
    }
    None
}
