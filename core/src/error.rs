use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Requested {requested} items but only {available} are available")]
    InsufficientItems { requested: usize, available: usize },
    #[error("Data source failure: {0}")]
    DataSource(String),
    #[error("Invalid clue coordinates")]
    InvalidCoords,
    #[error("Invalid cell id")]
    InvalidCellId,
    #[error("A board is already being built")]
    BuildInProgress,
}

pub type Result<T> = core::result::Result<T, GameError>;
