pub mod config;
pub mod error;
pub mod types;

pub use config::{EngineConfig, ServerConfig};
pub use error::{BrawlError, Result};
pub use types::{Action, Facing, PlayerId, Position};
