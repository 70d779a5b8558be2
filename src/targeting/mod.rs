//! Target selection: the line-of-fire shortcut, then full search

pub mod line_of_fire;
pub mod nearest;

pub use line_of_fire::find_in_line_of_fire;
pub use nearest::find_nearest_enemy;
