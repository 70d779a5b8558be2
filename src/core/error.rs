use thiserror::Error;

use crate::core::types::Position;

#[derive(Error, Debug)]
pub enum BrawlError {
    #[error("Invalid arena dimensions: {0:?}")]
    InvalidDimensions(Vec<i32>),

    #[error("Player not in arena state: {0}")]
    PlayerNotFound(String),

    #[error("Player {id} at {position:?} is outside a {width}x{height} arena")]
    OutOfBounds {
        id: String,
        position: Position,
        width: i32,
        height: i32,
    },

    #[error("Cell {position:?} occupied by both {first} and {second}")]
    CellConflict {
        position: Position,
        first: String,
        second: String,
    },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BrawlError>;
