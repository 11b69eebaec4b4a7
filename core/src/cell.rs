use serde::{Deserialize, Serialize};

/// One square of the board.
///
/// `neighbor_mine_count` is fixed at generation time and only meaningful when
/// `mine` is false.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub mine: bool,
    pub revealed: bool,
    pub flagged: bool,
    pub neighbor_mine_count: u8,
}

impl Cell {
    /// Whether a move may still target this cell.
    pub const fn is_revealable(self) -> bool {
        !self.revealed && !self.flagged
    }

    /// Whether a flag may be placed on or removed from this cell.
    pub const fn is_flaggable(self) -> bool {
        !self.revealed
    }
}
