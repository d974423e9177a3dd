use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Positions of the tiles around a tile, at most 8.
pub type Neighbors = SmallVec<[Coord2; 8]>;

/// A single cell of the board.
///
/// Everything but `opened` is fixed when the board is built. Adjacency is stored as positions
/// into the owning board's grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    coords: Coord2,
    is_mine: bool,
    neighbor_mines: u8,
    opened: bool,
    neighbors: Neighbors,
}

impl Tile {
    pub(crate) fn new(coords: Coord2, is_mine: bool, neighbors: Neighbors) -> Self {
        Self {
            coords,
            is_mine,
            neighbor_mines: 0,
            opened: false,
            neighbors,
        }
    }

    pub const fn coords(&self) -> Coord2 {
        self.coords
    }

    pub const fn x(&self) -> Coord {
        self.coords.0
    }

    pub const fn y(&self) -> Coord {
        self.coords.1
    }

    /// Whether a mine sits on this tile. Presentation layers should only show this once the tile
    /// is opened, see [`Tile::view`].
    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub const fn neighbor_mine_count(&self) -> u8 {
        self.neighbor_mines
    }

    pub const fn is_opened(&self) -> bool {
        self.opened
    }

    pub fn neighbors(&self) -> &[Coord2] {
        &self.neighbors
    }

    /// Player-visible state of this tile.
    pub const fn view(&self) -> TileView {
        match (self.opened, self.is_mine) {
            (false, _) => TileView::Hidden,
            (true, true) => TileView::Mine,
            (true, false) => TileView::Open(self.neighbor_mines),
        }
    }

    pub(crate) fn add_neighbor_mine(&mut self) {
        self.neighbor_mines += 1;
    }

    /// Marks the tile opened, returns `false` when it already was.
    pub(crate) fn open(&mut self) -> bool {
        !core::mem::replace(&mut self.opened, true)
    }
}

/// What a player is allowed to see of a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileView {
    Hidden,
    Open(u8),
    Mine,
}

impl TileView {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    /// Character used by the diagnostic grid dump.
    pub fn symbol(self) -> char {
        match self {
            Self::Hidden => '-',
            Self::Mine => 'x',
            Self::Open(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
        }
    }
}

impl Default for TileView {
    fn default() -> Self {
        Self::Hidden
    }
}
