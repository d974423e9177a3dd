use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Player-visible read model of a board, for handing to a renderer or over the wire.
///
/// Mines stay hidden unless opened, so a snapshot is safe to expose to the player. It is not a
/// save format, a board cannot be rebuilt from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub size: Coord2,
    pub mine_count: CellCount,
    pub goal: CellCount,
    pub total_opened: CellCount,
    pub completed: bool,
    pub tiles: Array2<TileView>,
}

impl BoardSnapshot {
    pub fn from_board(board: &Board) -> Self {
        let size = board.size();
        let tiles = Array2::from_shape_fn(size.to_nd_index(), |(x, y)| {
            board[(x as Coord, y as Coord)].view()
        });

        Self {
            size,
            mine_count: board.mine_count(),
            goal: board.goal(),
            total_opened: board.total_opened(),
            completed: board.is_completed(),
            tiles,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let expected = (self.size.0 as usize, self.size.1 as usize);
        if self.tiles.dim() != expected {
            return Err(BoardError::InvalidBoardShape);
        }

        let tiles = mult(self.size.0, self.size.1);
        if self.mine_count >= tiles {
            return Err(BoardError::TooManyMines {
                mines: self.mine_count,
                tiles,
            });
        }

        Ok(())
    }

    pub fn view_at(&self, coords: Coord2) -> Option<TileView> {
        self.tiles.get(coords.to_nd_index()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_board_maps_visible_state() {
        let layout = MineLayout::from_mine_coords((2, 2), &[(0, 0)]).unwrap();
        let mut board = Board::from_layout(layout).unwrap();

        board.reveal((1, 1)).unwrap();
        let snapshot = BoardSnapshot::from_board(&board);

        assert_eq!(snapshot.mine_count, 1);
        assert_eq!(snapshot.goal, 3);
        assert_eq!(snapshot.total_opened, 1);
        assert!(!snapshot.completed);
        assert_eq!(snapshot.view_at((1, 1)), Some(TileView::Open(1)));
        assert_eq!(snapshot.view_at((0, 0)), Some(TileView::Hidden));
        assert_eq!(snapshot.view_at((2, 0)), None);
        assert_eq!(snapshot.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_shape_mismatch() {
        let snapshot = BoardSnapshot {
            size: (2, 2),
            mine_count: 1,
            goal: 3,
            total_opened: 0,
            completed: false,
            tiles: Array2::from_elem([1, 2], TileView::Hidden),
        };

        assert_eq!(snapshot.validate(), Err(BoardError::InvalidBoardShape));
    }

    #[test]
    fn survives_json() {
        let layout = MineLayout::from_mine_coords((3, 3), &[(2, 2)]).unwrap();
        let mut board = Board::from_layout(layout).unwrap();
        board.reveal((2, 2)).unwrap();
        let snapshot = BoardSnapshot::from_board(&board);

        let json = serde_json::to_string(&snapshot).unwrap();
        let decoded: BoardSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, snapshot);
        assert_eq!(decoded.view_at((2, 2)), Some(TileView::Mine));
    }
}
