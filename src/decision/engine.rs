//! Per-turn decision pipeline
//!
//! snapshot -> board -> target (line of fire, else nearest) -> table -> action.
//! Nothing is kept between calls.

use rand::Rng;
use serde::Serialize;

use crate::arena::board::Board;
use crate::arena::snapshot::Snapshot;
use crate::core::config::EngineConfig;
use crate::core::types::{Action, PlayerId, Position};
use crate::decision::fallback::random_action;
use crate::decision::table::choose_action;
use crate::targeting::{find_in_line_of_fire, find_nearest_enemy};

/// How the target was picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetSource {
    LineOfFire,
    NearestSearch,
    NoTarget,
}

/// Outcome of one turn with the reasoning behind it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub action: Action,
    pub target: Option<PlayerId>,
    pub target_position: Option<Position>,
    pub source: TargetSource,
    /// The random fallback picked the action
    pub fallback: bool,
}

impl Decision {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            action: random_action(rng),
            target: None,
            target_position: None,
            source: TargetSource::NoTarget,
            fallback: true,
        }
    }
}

/// Stateless decision engine
#[derive(Debug, Clone, Default)]
pub struct DecisionEngine {
    config: EngineConfig,
}

impl DecisionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Action for `me` this turn, using the thread-local RNG for fallbacks
    pub fn decide(&self, snapshot: &Snapshot, me: &str) -> Action {
        self.evaluate(snapshot, me, &mut rand::thread_rng()).action
    }

    /// Full decision trace; `rng` is only touched when the table has no entry
    pub fn evaluate<R: Rng + ?Sized>(&self, snapshot: &Snapshot, me: &str, rng: &mut R) -> Decision {
        let Some(attacker) = snapshot.player(me) else {
            tracing::warn!("Player {} missing from arena state, acting at random", me);
            return Decision::random(rng);
        };

        let (board, myself) = Board::build(snapshot, me);
        let myself = myself.unwrap_or_else(|| attacker.position());

        let (target, source) = match find_in_line_of_fire(&board, myself, self.config.scan_radius) {
            Some(id) => (Some(id), TargetSource::LineOfFire),
            None => match find_nearest_enemy(&board, myself).and_then(|p| board.occupant(p)) {
                Some(id) => (Some(id), TargetSource::NearestSearch),
                None => (None, TargetSource::NoTarget),
            },
        };

        let target_position = target
            .and_then(|id| snapshot.player(id))
            .map(|state| state.position());

        let table_action =
            target_position.and_then(|pos| choose_action(myself, attacker.direction, pos));

        let decision = match table_action {
            Some(action) => Decision {
                action,
                target: target.map(str::to_string),
                target_position,
                source,
                fallback: false,
            },
            None => Decision {
                target: target.map(str::to_string),
                target_position,
                source,
                ..Decision::random(rng)
            },
        };

        tracing::debug!(
            "{} at {:?} facing {:?}: target {:?} via {:?} -> {}",
            me,
            myself,
            attacker.direction,
            decision.target,
            decision.source,
            decision.action
        );

        decision
    }
}

/// Action for `me` with the default engine configuration
pub fn decide(snapshot: &Snapshot, me: &str) -> Action {
    DecisionEngine::default().decide(snapshot, me)
}
