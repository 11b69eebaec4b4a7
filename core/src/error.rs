use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid board configuration: {size}x{size} board with {mines} mines")]
    InvalidConfiguration { size: Coord, mines: CellCount },
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Game already started")]
    AlreadyStarted,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
