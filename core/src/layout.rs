use core::fmt;

use crate::*;

/// Diagnostic text dump of a board, see [`Board::layout`].
///
/// The first line holds the column indices, every following line starts with its row index.
/// Unopened tiles show as `-`, opened mines as `x` and opened safe tiles as their count.
#[derive(Copy, Clone, Debug)]
pub struct Layout<'a> {
    board: &'a Board,
    reveal_all: bool,
}

impl Board {
    /// Text dump of the board, with `reveal_all` every tile is shown as if opened.
    pub fn layout(&self, reveal_all: bool) -> Layout<'_> {
        Layout {
            board: self,
            reveal_all,
        }
    }
}

impl Layout<'_> {
    fn symbol(&self, tile: &Tile) -> char {
        match (self.reveal_all, tile.is_mine()) {
            (false, _) => tile.view().symbol(),
            (true, true) => TileView::Mine.symbol(),
            (true, false) => TileView::Open(tile.neighbor_mine_count()).symbol(),
        }
    }
}

impl fmt::Display for Layout<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x_end, y_end) = self.board.size();

        write!(f, "  ")?;
        for x in 0..x_end {
            write!(f, "{}|", x)?;
        }
        writeln!(f)?;

        for y in 0..y_end {
            write!(f, "{}|", y)?;
            for x in 0..x_end {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.symbol(&self.board[(x, y)]))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: Coord2, mines: &[Coord2]) -> Board {
        Board::from_layout(MineLayout::from_mine_coords(size, mines).unwrap()).unwrap()
    }

    #[test]
    fn hidden_board() {
        let board = board((3, 2), &[(0, 0)]);

        assert_eq!(board.layout(false).to_string(), "  0|1|2|\n0|- - -\n1|- - -\n");
    }

    #[test]
    fn opened_tiles_and_mines() {
        let mut board = board((3, 2), &[(0, 0)]);
        board.reveal((2, 1)).unwrap();
        board.reveal((0, 0)).unwrap();

        assert_eq!(board.layout(false).to_string(), "  0|1|2|\n0|x 1 0\n1|- 1 0\n");
    }

    #[test]
    fn reveal_all_shows_every_tile() {
        let board = board((3, 2), &[(0, 0)]);

        assert_eq!(board.layout(true).to_string(), "  0|1|2|\n0|x 1 0\n1|1 1 0\n");
        assert!(board.tiles().all(|tile| !tile.is_opened()));
    }
}
