use core::cmp::Ordering;
use core::ops::Index;
use core::time::Duration;
use std::collections::VecDeque;

use ndarray::Array2;
use web_time::Instant;

use crate::*;

/// A game board from construction to completion.
///
/// Mines and neighbor counts are fixed when the board is built, afterwards the only mutation is
/// [`Board::reveal`]. The board does no locking of its own, concurrent callers have to
/// serialize reveals themselves.
#[derive(Clone, Debug)]
pub struct Board {
    tiles: Array2<Tile>,
    mine_count: CellCount,
    goal: CellCount,
    total_opened: CellCount,
    completed: bool,
    started_at: Option<Instant>,
    final_elapsed: Option<Duration>,
    triggered_mine: Option<Coord2>,
    last_batch: Vec<Coord2>,
}

impl Board {
    /// Builds a `width` x `height` board with `mines` randomly placed mines.
    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        Self::from_config(BoardConfig::new((width, height), mines)?)
    }

    /// Builds a board with random placement, reproducible when the config carries a seed.
    pub fn from_config(config: BoardConfig) -> Result<Self> {
        Self::generate(config, RandomMineGenerator::from_config(&config))
    }

    pub fn generate(config: BoardConfig, generator: impl MineGenerator) -> Result<Self> {
        Self::from_layout(generator.generate(config)?)
    }

    /// Builds a board with mines exactly where `layout` has them.
    pub fn from_layout(layout: MineLayout) -> Result<Self> {
        let size = layout.size();
        let total_tiles = layout.total_tiles();
        let mine_count = layout.mine_count();
        if mine_count >= total_tiles {
            return Err(BoardError::TooManyMines {
                mines: mine_count,
                tiles: total_tiles,
            });
        }

        let mut tiles = Array2::from_shape_fn(size.to_nd_index(), |(x, y)| {
            let coords = (x as Coord, y as Coord);
            Tile::new(
                coords,
                layout[coords],
                NeighborIter::new(coords, size).collect(),
            )
        });

        for mine in layout.iter_mines() {
            for pos in tiles.iter_neighbors(mine) {
                tiles[pos.to_nd_index()].add_neighbor_mine();
            }
        }

        log::debug!(
            "Built {}x{} board with {} mines",
            size.0,
            size.1,
            mine_count
        );

        Ok(Self {
            tiles,
            mine_count,
            goal: total_tiles - mine_count,
            total_opened: 0,
            completed: false,
            started_at: None,
            final_elapsed: None,
            triggered_mine: None,
            last_batch: Vec::new(),
        })
    }

    pub fn size(&self) -> Coord2 {
        grid_size(&self.tiles)
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    /// Number of safe tiles that have to be opened to win.
    pub fn goal(&self) -> CellCount {
        self.goal
    }

    /// Safe tiles opened so far, mines never count.
    pub fn total_opened(&self) -> CellCount {
        self.total_opened
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Time since the first reveal, frozen once the board is completed. `None` before the first
    /// reveal.
    pub fn elapsed(&self) -> Option<Duration> {
        self.final_elapsed
            .or_else(|| self.started_at.map(|started_at| started_at.elapsed()))
    }

    /// The mine opened by the most recent mine hit, if any.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Positions opened by the most recent reveal, in the order they were opened.
    pub fn last_reveal_batch(&self) -> &[Coord2] {
        &self.last_batch
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(BoardError::InvalidCoords { coords, size })
        }
    }

    pub fn tile(&self, coords: Coord2) -> Option<&Tile> {
        self.tiles.get(coords.to_nd_index())
    }

    pub fn view_at(&self, coords: Coord2) -> Option<TileView> {
        self.tile(coords).map(Tile::view)
    }

    /// All tiles, x-major.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Opens the tile at `coords`, flood-filling when it has no adjacent mines.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        self.last_batch.clear();
        let coords = self.validate_coords(coords)?;

        if self.completed {
            log::warn!("Reveal at {:?} on an already completed board", coords);
        }
        self.mark_started();

        let tile = &mut self.tiles[coords.to_nd_index()];
        if !tile.open() {
            log::trace!("Tile at {:?} already open", coords);
            return Ok(RevealOutcome::NoOp);
        }
        let is_mine = tile.is_mine();
        let count = tile.neighbor_mine_count();
        self.last_batch.push(coords);

        if is_mine {
            log::debug!("Mine hit at {:?}", coords);
            self.triggered_mine = Some(coords);
            return Ok(RevealOutcome::MineHit);
        }

        log::debug!("Open tile at {:?}, mine count: {}", coords, count);
        if count == 0 {
            self.flood_fill(coords);
        }

        let newly_opened = CellCount::try_from(self.last_batch.len()).unwrap_or(CellCount::MAX);
        self.total_opened = self.total_opened.saturating_add(newly_opened);

        match self.total_opened.cmp(&self.goal) {
            Ordering::Less => Ok(RevealOutcome::Opened {
                count: newly_opened,
            }),
            Ordering::Equal => Ok(RevealOutcome::Won {
                elapsed: self.mark_completed(),
            }),
            Ordering::Greater => {
                log::error!(
                    "Opened {} safe tiles, more than the goal of {}",
                    self.total_opened,
                    self.goal
                );
                Err(BoardError::InternalConsistency {
                    opened: self.total_opened,
                    goal: self.goal,
                })
            }
        }
    }

    /// Opens the zero region around `origin` and its numbered border.
    ///
    /// A tile is pushed to the batch the moment it is marked opened, so being opened is what
    /// keeps it from being visited twice.
    fn flood_fill(&mut self, origin: Coord2) {
        let mut to_visit = VecDeque::from([origin]);
        log::trace!("Starting flood-fill from {:?}", origin);

        while let Some(visit_coords) = to_visit.pop_front() {
            let neighbors: Neighbors = self.tiles[visit_coords.to_nd_index()].neighbors().into();

            for pos in neighbors {
                let tile = &mut self.tiles[pos.to_nd_index()];
                if !tile.open() {
                    continue;
                }
                self.last_batch.push(pos);
                log::trace!(
                    "Flood opened tile at {:?}, mine count: {}",
                    pos,
                    tile.neighbor_mine_count()
                );

                // if this is also zero we visit the neighbors
                if tile.neighbor_mine_count() == 0 {
                    to_visit.push_back(pos);
                }
            }
        }
    }

    /// Starts the clock on the first reveal
    fn mark_started(&mut self) {
        if self.started_at.is_none() {
            log::debug!("Board started");
            self.started_at = Some(Instant::now());
        }
    }

    fn mark_completed(&mut self) -> Duration {
        let elapsed = self
            .started_at
            .map(|started_at| started_at.elapsed())
            .unwrap_or_default();
        self.completed = true;
        self.final_elapsed = Some(elapsed);
        log::debug!("Board completed in {:?}", elapsed);
        elapsed
    }
}

impl Index<Coord2> for Board {
    type Output = Tile;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.tiles[coords.to_nd_index()]
    }
}
