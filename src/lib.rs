//! Arena Brawler - turn-based grid battle bot

pub mod arena;
pub mod core;
pub mod decision;
pub mod server;
pub mod targeting;

pub use crate::arena::{ArenaUpdate, Board, Snapshot};
pub use crate::core::types::{Action, Facing, Position};
pub use crate::decision::{decide, Decision, DecisionEngine};
