use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Field size {0} is not supported, it must be at least 2")]
    InvalidSize(Coord),
    #[error("Field is not a square grid")]
    InvalidBoardShape,
    #[error("Unknown field symbol {0:?}")]
    InvalidSymbol(char),
    #[error("Not a valid direction!")]
    InvalidDirection,
    #[error("Not a valid move!")]
    OutOfBounds,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
