//! Board and tile state for a Minesweeper-style game.
//!
//! A [`Board`] owns a grid of [`Tile`]s, places its mines once at construction and then only
//! changes through [`Board::reveal`], which opens a tile and flood-fills connected regions of
//! tiles without adjacent mines. Rendering and input handling are left to the caller.

use core::ops::Index;
use core::time::Duration;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use error::*;
pub use generator::*;
pub use layout::*;
pub use snapshot::*;
pub use tile::*;
pub use types::*;

mod board;
mod error;
mod generator;
mod layout;
mod snapshot;
mod tile;
mod types;

/// Parameters a board is built from.
///
/// With `seed` unset the mines are placed from a fresh random seed on every build.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: Coord2,
    pub mines: CellCount,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl BoardConfig {
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let config = Self {
            size,
            mines,
            seed: None,
        };
        config.validate()?;
        Ok(config)
    }

    pub const fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// Checks the board is not empty and leaves at least one safe tile.
    pub fn validate(&self) -> Result<()> {
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(BoardError::EmptyBoard);
        }
        let tiles = self.total_tiles();
        if self.mines >= tiles {
            return Err(BoardError::TooManyMines {
                mines: self.mines,
                tiles,
            });
        }
        Ok(())
    }

    pub const fn total_tiles(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// Number of safe tiles that have to be opened to win.
    pub const fn goal(&self) -> CellCount {
        self.total_tiles().saturating_sub(self.mines)
    }
}

/// Where the mines are, before any tile state is attached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (size_x, size_y) = mine_mask.dim();
        if size_x == 0 || size_y == 0 {
            return Err(BoardError::EmptyBoard);
        }
        if size_x > Coord::MAX.into() || size_y > Coord::MAX.into() {
            return Err(BoardError::InvalidBoardShape);
        }

        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count();
        Ok(Self {
            mine_mask,
            // bounded by the 255x255 check above
            mine_count: mine_count as CellCount,
        })
    }

    /// Builds a layout with mines exactly at `mine_coords`, duplicates are counted once.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(BoardError::EmptyBoard);
        }
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(BoardError::InvalidCoords { coords, size });
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    pub fn size(&self) -> Coord2 {
        grid_size(&self.mine_mask)
    }

    pub fn total_tiles(&self) -> CellCount {
        mult(self.size().0, self.size().1)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.mine_mask
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or(false)
    }

    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((x, y), _)| (x as Coord, y as Coord))
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

/// Outcome of a single [`Board::reveal`] call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    /// The tile was already open, nothing changed.
    NoOp,
    /// The tile held a mine.
    MineHit,
    /// `count` safe tiles were opened, the game goes on.
    Opened { count: CellCount },
    /// The last safe tile was opened, `elapsed` is measured from the first reveal.
    Won { elapsed: Duration },
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoOp => false,
            MineHit => true,
            Opened { .. } => true,
            Won { .. } => true,
        }
    }

    /// Whether the game is over after this outcome
    pub const fn is_final(self) -> bool {
        matches!(self, Self::MineHit | Self::Won { .. })
    }
}
