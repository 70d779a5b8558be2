//! Arena state: the wire snapshot and the occupancy board built from it

pub mod board;
pub mod snapshot;

pub use board::Board;
pub use snapshot::{Arena, ArenaUpdate, Link, Links, PlayerState, Snapshot};
