//! Per-turn arena snapshot and its JSON wire form
//!
//! The game POSTs an `ArenaUpdate` every turn. Unknown fields are rejected at
//! every level so that a changed payload shape fails loudly instead of being
//! half-read.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::core::config::DEFAULT_MAX_CELLS;
use crate::core::error::{BrawlError, Result};
use crate::core::types::{Facing, PlayerId, Position};

/// State of one player as reported by the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PlayerState {
    pub x: i32,
    pub y: i32,
    pub direction: Facing,
    #[serde(default)]
    pub was_hit: bool,
    #[serde(default)]
    pub score: i32,
}

impl PlayerState {
    pub fn new(x: i32, y: i32, direction: Facing) -> Self {
        Self {
            x,
            y,
            direction,
            was_hit: false,
            score: 0,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Link {
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: Link,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Arena {
    /// `[width, height]`
    pub dims: Vec<i32>,
    pub state: BTreeMap<PlayerId, PlayerState>,
}

/// Turn notification body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArenaUpdate {
    #[serde(rename = "_links")]
    pub links: Links,
    pub arena: Arena,
}

impl ArenaUpdate {
    pub fn from_json(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Identifier the game knows this bot by
    pub fn self_href(&self) -> &str {
        &self.links.self_link.href
    }

    /// Core snapshot; fails only when `dims` is not a pair
    pub fn snapshot(&self) -> Result<Snapshot> {
        match self.arena.dims.as_slice() {
            &[width, height] => Ok(Snapshot {
                width,
                height,
                players: self.arena.state.clone(),
            }),
            other => Err(BrawlError::InvalidDimensions(other.to_vec())),
        }
    }
}

/// Everything the engine needs for one decision
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    pub width: i32,
    pub height: i32,
    pub players: BTreeMap<PlayerId, PlayerState>,
}

impl Snapshot {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            players: BTreeMap::new(),
        }
    }

    /// Builder used by tests and the CLI
    pub fn with_player(mut self, id: impl Into<PlayerId>, x: i32, y: i32, facing: Facing) -> Self {
        self.players.insert(id.into(), PlayerState::new(x, y, facing));
        self
    }

    pub fn player(&self, id: &str) -> Option<&PlayerState> {
        self.players.get(id)
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0 && position.x < self.width && position.y >= 0 && position.y < self.height
    }

    /// Check the preconditions the engine relies on, with the default
    /// arena size limit
    pub fn validate(&self, me: &str) -> Result<()> {
        self.validate_within(me, DEFAULT_MAX_CELLS)
    }

    /// Positive dimensions covering at most `max_cells` cells, `me` present,
    /// every player inside the arena and at most one player per cell.
    pub fn validate_within(&self, me: &str, max_cells: usize) -> Result<()> {
        let cells = self.width as i64 * self.height as i64;
        if self.width <= 0 || self.height <= 0 || cells > max_cells as i64 {
            return Err(BrawlError::InvalidDimensions(vec![self.width, self.height]));
        }

        if !self.players.contains_key(me) {
            return Err(BrawlError::PlayerNotFound(me.to_string()));
        }

        let mut occupied: HashMap<Position, &str> = HashMap::with_capacity(self.players.len());
        for (id, state) in &self.players {
            let position = state.position();
            if !self.contains(position) {
                return Err(BrawlError::OutOfBounds {
                    id: id.clone(),
                    position,
                    width: self.width,
                    height: self.height,
                });
            }
            if let Some(first) = occupied.insert(position, id.as_str()) {
                return Err(BrawlError::CellConflict {
                    position,
                    first: first.to_string(),
                    second: id.clone(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "_links": { "self": { "href": "https://me.example" } },
        "arena": {
            "dims": [4, 3],
            "state": {
                "https://me.example": { "x": 0, "y": 0, "direction": "N", "wasHit": false, "score": 0 },
                "https://other.example": { "x": 3, "y": 2, "direction": "W", "wasHit": true, "score": 12 }
            }
        }
    }"#;

    #[test]
    fn test_decode_sample() {
        let update = ArenaUpdate::from_json(SAMPLE.as_bytes()).unwrap();
        assert_eq!(update.self_href(), "https://me.example");
        assert_eq!(update.arena.dims, vec![4, 3]);

        let other = &update.arena.state["https://other.example"];
        assert_eq!(other.position(), Position::new(3, 2));
        assert_eq!(other.direction, Facing::West);
        assert!(other.was_hit);
        assert_eq!(other.score, 12);
    }

    #[test]
    fn test_snapshot_from_update() {
        let update = ArenaUpdate::from_json(SAMPLE.as_bytes()).unwrap();
        let snapshot = update.snapshot().unwrap();
        assert_eq!((snapshot.width, snapshot.height), (4, 3));
        assert_eq!(snapshot.players.len(), 2);
        assert!(snapshot.validate(update.self_href()).is_ok());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let body = SAMPLE.replace("\"score\": 12", "\"score\": 12, \"color\": \"red\"");
        assert!(matches!(
            ArenaUpdate::from_json(body.as_bytes()),
            Err(BrawlError::SerdeError(_))
        ));

        let body = SAMPLE.replace("\"arena\":", "\"extra\": 1, \"arena\":");
        assert!(ArenaUpdate::from_json(body.as_bytes()).is_err());
    }

    #[test]
    fn test_unknown_direction_rejected() {
        let body = SAMPLE.replace("\"direction\": \"W\"", "\"direction\": \"NE\"");
        assert!(ArenaUpdate::from_json(body.as_bytes()).is_err());
    }

    #[test]
    fn test_optional_fields_default() {
        let body = r#"{
            "_links": { "self": { "href": "me" } },
            "arena": { "dims": [2, 2], "state": { "me": { "x": 1, "y": 1, "direction": "S" } } }
        }"#;
        let update = ArenaUpdate::from_json(body.as_bytes()).unwrap();
        let me = &update.arena.state["me"];
        assert!(!me.was_hit);
        assert_eq!(me.score, 0);
    }

    #[test]
    fn test_dims_must_be_pair() {
        let body = SAMPLE.replace("[4, 3]", "[4]");
        let update = ArenaUpdate::from_json(body.as_bytes()).unwrap();
        assert!(matches!(
            update.snapshot(),
            Err(BrawlError::InvalidDimensions(dims)) if dims == vec![4]
        ));
    }

    #[test]
    fn test_validate_rejects_bad_dimensions() {
        let snapshot = Snapshot::new(0, 5).with_player("me", 0, 0, Facing::North);
        assert!(matches!(
            snapshot.validate("me"),
            Err(BrawlError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn test_validate_rejects_oversized_arena() {
        let snapshot = Snapshot::new(i32::MAX, i32::MAX)
            .with_player("me", 0, 0, Facing::North)
            .with_player("foe", 5, 5, Facing::South);
        assert!(matches!(
            snapshot.validate("me"),
            Err(BrawlError::InvalidDimensions(dims)) if dims == vec![i32::MAX, i32::MAX]
        ));

        let snapshot = Snapshot::new(10, 10).with_player("me", 0, 0, Facing::North);
        assert!(snapshot.validate_within("me", 100).is_ok());
        assert!(matches!(
            snapshot.validate_within("me", 99),
            Err(BrawlError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn test_validate_requires_self() {
        let snapshot = Snapshot::new(3, 3).with_player("other", 0, 0, Facing::North);
        assert!(matches!(
            snapshot.validate("me"),
            Err(BrawlError::PlayerNotFound(id)) if id == "me"
        ));
    }

    #[test]
    fn test_validate_rejects_out_of_bounds() {
        let snapshot = Snapshot::new(3, 3)
            .with_player("me", 0, 0, Facing::North)
            .with_player("far", 3, 1, Facing::North);
        assert!(matches!(
            snapshot.validate("me"),
            Err(BrawlError::OutOfBounds { id, .. }) if id == "far"
        ));
    }

    #[test]
    fn test_validate_rejects_shared_cell() {
        let snapshot = Snapshot::new(3, 3)
            .with_player("a", 1, 1, Facing::North)
            .with_player("b", 1, 1, Facing::South);
        assert!(matches!(
            snapshot.validate("a"),
            Err(BrawlError::CellConflict { .. })
        ));
    }
}
