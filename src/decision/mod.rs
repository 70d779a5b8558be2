//! Turning a chosen target into this turn's action

pub mod engine;
pub mod fallback;
pub mod table;

pub use engine::{decide, Decision, DecisionEngine, TargetSource};
pub use fallback::random_action;
pub use table::{choose_action, Bearing};
