use crate::*;
pub use random::*;

mod random;

/// Strategy deciding where the mines of a new board go.
pub trait MineGenerator {
    fn generate(self, config: BoardConfig) -> Result<MineLayout>;
}

/// A fixed layout generates itself, as long as it agrees with the requested config.
impl MineGenerator for MineLayout {
    fn generate(self, config: BoardConfig) -> Result<MineLayout> {
        config.validate()?;
        if self.size() != config.size || self.mine_count() != config.mines {
            return Err(BoardError::InvalidBoardShape);
        }
        Ok(self)
    }
}
