use super::*;

/// Purely random placement: `mines` distinct tiles drawn without replacement from a seeded
/// generator, so a seed fully determines the layout.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Uses the configured seed, or draws a fresh one when there is none.
    pub fn from_config(config: &BoardConfig) -> Self {
        config.seed.map_or_else(Self::from_entropy, Self::new)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: BoardConfig) -> Result<MineLayout> {
        use rand::prelude::*;
        use rand::seq::index;

        config.validate()?;
        log::debug!(
            "Placing {} mines on {:?} with seed {}",
            config.mines,
            config.size,
            self.seed
        );

        let total_tiles = usize::from(config.total_tiles());
        let size_y = usize::from(config.size.1);
        let mut mine_mask: Array2<bool> = Array2::default(config.size.to_nd_index());

        let mut rng = SmallRng::seed_from_u64(self.seed);
        for place in index::sample(&mut rng, total_tiles, config.mines.into()) {
            // standard layout, x is the outer axis
            mine_mask[[place / size_y, place % size_y]] = true;
        }

        let layout = MineLayout::from_mine_mask(mine_mask)?;
        if layout.mine_count() != config.mines {
            log::warn!(
                "Generated mine count mismatch, actual: {}, requested: {}",
                layout.mine_count(),
                config.mines
            );
        }
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(size: Coord2, mines: CellCount, seed: u64) -> MineLayout {
        let config = BoardConfig::new(size, mines).unwrap();
        RandomMineGenerator::new(seed).generate(config).unwrap()
    }

    #[test]
    fn places_exactly_the_requested_mines() {
        for seed in 0..20 {
            let layout = generate((9, 10), 10, seed);

            assert_eq!(layout.size(), (9, 10));
            assert_eq!(layout.mine_count(), 10);
            assert_eq!(layout.iter_mines().count(), 10);
        }
    }

    #[test]
    fn same_seed_same_layout() {
        assert_eq!(generate((16, 16), 40, 1234), generate((16, 16), 40, 1234));
    }

    #[test]
    fn nearly_full_board_leaves_one_safe_tile() {
        let layout = generate((4, 3), 11, 99);

        assert_eq!(layout.mine_count(), 11);
        assert_eq!(layout.total_tiles() - layout.mine_count(), 1);
    }

    #[test]
    fn no_mines() {
        assert_eq!(generate((5, 5), 0, 3).mine_count(), 0);
    }

    #[test]
    fn rejects_invalid_config() {
        let config = BoardConfig {
            size: (2, 2),
            mines: 4,
            seed: None,
        };

        assert_eq!(
            RandomMineGenerator::new(0).generate(config),
            Err(BoardError::TooManyMines { mines: 4, tiles: 4 })
        );
    }

    #[test]
    fn from_config_uses_seed() {
        let config = BoardConfig::new((3, 3), 1).unwrap().with_seed(42);

        assert_eq!(RandomMineGenerator::from_config(&config).seed(), 42);
    }

    #[test]
    fn fixed_layout_must_match_config() {
        let layout = MineLayout::from_mine_coords((3, 3), &[(1, 1)]).unwrap();

        assert_eq!(
            layout.clone().generate(BoardConfig::new((3, 3), 2).unwrap()),
            Err(BoardError::InvalidBoardShape)
        );
        assert_eq!(
            layout.clone().generate(BoardConfig::new((3, 3), 1).unwrap()),
            Ok(layout)
        );
    }
}
