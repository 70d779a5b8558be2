//! Occupancy grid rebuilt from the snapshot every turn

use crate::arena::snapshot::Snapshot;
use crate::core::config::MAX_ARENA_CELLS;
use crate::core::types::Position;

/// Row-major grid of occupant identifiers
///
/// Borrows identifiers from the snapshot it was built from. The caller's own
/// entry is never placed on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<'a> {
    width: i32,
    height: i32,
    cells: Vec<Option<&'a str>>,
}

impl<'a> Board<'a> {
    /// Empty board
    ///
    /// Non-positive dimensions, or more than `MAX_ARENA_CELLS` cells, give a
    /// zero-sized board.
    pub fn new(width: i32, height: i32) -> Self {
        if width <= 0 || height <= 0 {
            return Self::zero();
        }
        let Some(cells) = (width as usize)
            .checked_mul(height as usize)
            .filter(|&n| n <= MAX_ARENA_CELLS)
        else {
            return Self::zero();
        };
        Self {
            width,
            height,
            cells: vec![None; cells],
        }
    }

    fn zero() -> Self {
        Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
        }
    }

    /// Place every player except `me`, returning the board and my position
    pub fn build(snapshot: &'a Snapshot, me: &str) -> (Self, Option<Position>) {
        let mut board = Self::new(snapshot.width, snapshot.height);
        let mut myself = None;

        if board.is_empty() {
            tracing::warn!(
                "Arena dimensions {}x{} are unusable, board left empty",
                snapshot.width,
                snapshot.height
            );
        }

        for (id, state) in &snapshot.players {
            let position = state.position();
            if id == me {
                myself = Some(position);
                continue;
            }
            if !board.place(position, id) {
                tracing::warn!("Player {} at {:?} lies outside the arena, skipped", id, position);
            }
        }

        (board, myself)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0 && position.x < self.width && position.y >= 0 && position.y < self.height
    }

    /// Flat index of an in-bounds cell
    #[inline]
    pub fn index_of(&self, position: Position) -> Option<usize> {
        if self.contains(position) {
            Some(position.y as usize * self.width as usize + position.x as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn position_at(&self, index: usize) -> Position {
        let width = self.width as usize;
        Position::new((index % width) as i32, (index / width) as i32)
    }

    /// Occupant of the cell, `None` when empty or out of bounds
    #[inline]
    pub fn occupant(&self, position: Position) -> Option<&'a str> {
        self.index_of(position).and_then(|i| self.cells[i])
    }

    #[inline]
    pub fn occupant_at(&self, index: usize) -> Option<&'a str> {
        self.cells.get(index).copied().flatten()
    }

    /// Put `id` on a cell; false if the cell is outside the board
    pub fn place(&mut self, position: Position, id: &'a str) -> bool {
        match self.index_of(position) {
            Some(i) => {
                self.cells[i] = Some(id);
                true
            }
            None => false,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}
