use thiserror::Error;

use crate::{CellCount, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Board must be at least 1x1")]
    EmptyBoard,
    #[error("Too many mines for board size, requested {mines} but only {tiles} tiles")]
    TooManyMines { mines: CellCount, tiles: CellCount },
    #[error("Invalid coordinates {coords:?} for board of size {size:?}")]
    InvalidCoords { coords: Coord2, size: Coord2 },
    #[error("Snapshot shape does not match declared size")]
    InvalidBoardShape,
    /// Reveal bookkeeping went past the goal, the board state can no longer be trusted.
    #[error("Opened {opened} safe tiles but the goal is only {goal}")]
    InternalConsistency { opened: CellCount, goal: CellCount },
}

pub type Result<T> = core::result::Result<T, BoardError>;
