//! Geometry lookup: where the target sits relative to me, and which way I
//! face, decide the action
//!
//! `y` grows downward, so "below" means a larger `y`. Ties on one axis fall
//! into the "above" / "left" groups and that grouping is observable in the
//! output, so the rows are spelled out rather than derived by rotation.

use serde::Serialize;

use crate::core::types::{Action, Facing, Position};
use crate::core::types::Action::{MoveForward, Throw, TurnLeft, TurnRight};

/// Target placement relative to the attacker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Bearing {
    /// Same column, attacker below the target
    Below,
    /// Same column, attacker level with or above the target
    Above,
    /// Same row, attacker right of the target
    RightOf,
    /// Same row, attacker left of the target
    LeftOf,
    BottomRight,
    TopRight,
    BottomLeft,
    TopLeft,
}

impl Bearing {
    /// Classify the attacker's position against the target's
    ///
    /// `None` when both occupy the same cell.
    pub fn classify(attacker: Position, target: Position) -> Option<Self> {
        let dx = attacker.x - target.x;
        let dy = attacker.y - target.y;

        let bearing = match (dx, dy) {
            (0, 0) => return None,
            (0, dy) if dy > 0 => Bearing::Below,
            (0, _) => Bearing::Above,
            (dx, 0) if dx > 0 => Bearing::RightOf,
            (_, 0) => Bearing::LeftOf,
            (dx, dy) if dx > 0 && dy > 0 => Bearing::BottomRight,
            (dx, _) if dx > 0 => Bearing::TopRight,
            (_, dy) if dy > 0 => Bearing::BottomLeft,
            _ => Bearing::TopLeft,
        };
        Some(bearing)
    }

    /// Actions indexed by facing (N, E, S, W)
    pub fn actions(self) -> &'static [Action; 4] {
        match self {
            Bearing::Below => &[Throw, TurnLeft, TurnRight, TurnRight],
            Bearing::Above => &[TurnRight, TurnRight, Throw, TurnLeft],
            Bearing::RightOf => &[TurnLeft, TurnLeft, TurnRight, Throw],
            Bearing::LeftOf => &[TurnRight, Throw, TurnLeft, TurnLeft],
            Bearing::BottomRight => &[MoveForward, TurnLeft, TurnRight, MoveForward],
            Bearing::TopRight => &[TurnLeft, TurnRight, MoveForward, MoveForward],
            Bearing::BottomLeft => &[MoveForward, MoveForward, TurnLeft, TurnRight],
            Bearing::TopLeft => &[TurnRight, MoveForward, MoveForward, TurnLeft],
        }
    }
}

/// Table action for an attacker at `attacker` facing `facing`
///
/// `None` when attacker and target coincide; the caller falls back to a
/// random action.
pub fn choose_action(attacker: Position, facing: Facing, target: Position) -> Option<Action> {
    Bearing::classify(attacker, target).map(|bearing| bearing.actions()[facing.index()])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn act(ax: i32, ay: i32, facing: Facing, tx: i32, ty: i32) -> Option<Action> {
        choose_action(Position::new(ax, ay), facing, Position::new(tx, ty))
    }

    #[test]
    fn test_classify() {
        let me = Position::new(2, 2);
        let cases = [
            ((2, 0), Bearing::Below),
            ((2, 4), Bearing::Above),
            ((0, 2), Bearing::RightOf),
            ((4, 2), Bearing::LeftOf),
            ((0, 0), Bearing::BottomRight),
            ((0, 4), Bearing::TopRight),
            ((4, 0), Bearing::BottomLeft),
            ((4, 4), Bearing::TopLeft),
        ];
        for ((tx, ty), expected) in cases {
            assert_eq!(
                Bearing::classify(me, Position::new(tx, ty)),
                Some(expected),
                "target ({}, {})",
                tx,
                ty
            );
        }
        assert_eq!(Bearing::classify(me, me), None);
    }

    #[test]
    fn test_same_column_below_target() {
        assert_eq!(act(2, 2, Facing::North, 2, 0), Some(Throw));
        assert_eq!(act(2, 2, Facing::East, 2, 0), Some(TurnLeft));
        assert_eq!(act(2, 2, Facing::South, 2, 0), Some(TurnRight));
        assert_eq!(act(2, 2, Facing::West, 2, 0), Some(TurnRight));
    }

    #[test]
    fn test_same_column_above_target() {
        assert_eq!(act(2, 0, Facing::North, 2, 2), Some(TurnRight));
        assert_eq!(act(2, 0, Facing::East, 2, 2), Some(TurnRight));
        assert_eq!(act(2, 0, Facing::South, 2, 2), Some(Throw));
        assert_eq!(act(2, 0, Facing::West, 2, 2), Some(TurnLeft));
    }

    #[test]
    fn test_same_row() {
        // attacker to the right
        assert_eq!(act(3, 1, Facing::North, 0, 1), Some(TurnLeft));
        assert_eq!(act(3, 1, Facing::East, 0, 1), Some(TurnLeft));
        assert_eq!(act(3, 1, Facing::South, 0, 1), Some(TurnRight));
        assert_eq!(act(3, 1, Facing::West, 0, 1), Some(Throw));
        // attacker to the left
        assert_eq!(act(0, 0, Facing::North, 3, 0), Some(TurnRight));
        assert_eq!(act(0, 0, Facing::East, 3, 0), Some(Throw));
        assert_eq!(act(0, 0, Facing::South, 3, 0), Some(TurnLeft));
        assert_eq!(act(0, 0, Facing::West, 3, 0), Some(TurnLeft));
    }

    #[test]
    fn test_diagonal_quadrants() {
        let rows = [
            ((4, 4), [MoveForward, TurnLeft, TurnRight, MoveForward]),
            ((4, 0), [TurnLeft, TurnRight, MoveForward, MoveForward]),
            ((0, 4), [MoveForward, MoveForward, TurnLeft, TurnRight]),
            ((0, 0), [TurnRight, MoveForward, MoveForward, TurnLeft]),
        ];
        for ((ax, ay), expected) in rows {
            for facing in Facing::ALL {
                assert_eq!(
                    act(ax, ay, facing, 2, 2),
                    Some(expected[facing.index()]),
                    "attacker ({}, {}) facing {:?}",
                    ax,
                    ay,
                    facing
                );
            }
        }
    }

    #[test]
    fn test_coincident_has_no_entry() {
        for facing in Facing::ALL {
            assert_eq!(act(1, 1, facing, 1, 1), None);
        }
    }

    #[test]
    fn test_throw_only_when_aligned() {
        let me = Position::new(3, 3);
        for tx in 0..7 {
            for ty in 0..7 {
                let target = Position::new(tx, ty);
                let Some(bearing) = Bearing::classify(me, target) else {
                    continue;
                };
                let aligned = target.x == me.x || target.y == me.y;
                if !aligned {
                    assert!(!bearing.actions().contains(&Throw), "{:?}", bearing);
                }
            }
        }
    }
}
