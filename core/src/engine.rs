use serde::{Deserialize, Serialize};

use crate::*;

/// Seat at the table; player one always moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            _ => None,
        }
    }

    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }

    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuelState {
    AwaitingOpponent,
    InProgress,
    Finished,
}

impl DuelState {
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::InProgress)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Finished)
    }
}

impl Default for DuelState {
    fn default() -> Self {
        Self::AwaitingOpponent
    }
}

/// Why a move or flag was dropped without touching the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The claimed seat is held by someone else.
    NotAParticipant,
    NotInProgress,
    NotYourTurn,
    OutOfBounds,
    AlreadyRevealed,
    Flagged,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Ignored(IgnoreReason),
    /// Safe cell opened, the turn passed to `next`.
    Revealed { cell: Cell, next: Player },
    /// The mover opened a mine and lost.
    HitMine { cell: Cell, loser: Player, winner: Player },
}

impl TurnOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored(_))
    }
}

/// Two-player game over a single board: strict alternation, one cell per move,
/// first player to open a mine loses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DuelEngine {
    board: Board,
    state: DuelState,
    active: Player,
    loser: Option<Player>,
}

impl DuelEngine {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            state: Default::default(),
            active: Player::One,
            loser: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> DuelState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn active_player(&self) -> Player {
        self.active
    }

    pub fn loser(&self) -> Option<Player> {
        self.loser
    }

    pub fn winner(&self) -> Option<Player> {
        self.loser.map(Player::other)
    }

    /// Opens play once the second seat is taken.
    pub fn start(&mut self) -> Result<()> {
        match self.state {
            DuelState::AwaitingOpponent => {
                self.state = DuelState::InProgress;
                Ok(())
            }
            DuelState::InProgress => Err(GameError::AlreadyStarted),
            DuelState::Finished => Err(GameError::AlreadyEnded),
        }
    }

    pub fn reveal(&mut self, player: Player, coords: Coord2) -> TurnOutcome {
        use TurnOutcome::*;

        if let Err(reason) = self.check_turn(player) {
            return Ignored(reason);
        }
        let Ok(coords) = self.board.validate_coords(coords) else {
            return Ignored(IgnoreReason::OutOfBounds);
        };
        let target = self.board[coords];
        if target.revealed {
            return Ignored(IgnoreReason::AlreadyRevealed);
        }
        if target.flagged {
            return Ignored(IgnoreReason::Flagged);
        }

        match self.board.reveal(coords) {
            Ok(RevealOutcome::HitMine) => {
                self.state = DuelState::Finished;
                self.loser = Some(player);
                log::debug!("player {} hit a mine at {:?}", player.number(), coords);
                HitMine {
                    cell: self.board[coords],
                    loser: player,
                    winner: player.other(),
                }
            }
            Ok(RevealOutcome::Revealed) => {
                self.active = player.other();
                Revealed {
                    cell: self.board[coords],
                    next: self.active,
                }
            }
            // coordinates and cell state were checked above
            Ok(RevealOutcome::NoChange) | Err(_) => Ignored(IgnoreReason::AlreadyRevealed),
        }
    }

    /// Places or removes a flag. Flags never consume the turn.
    pub fn set_flag(
        &mut self,
        player: Player,
        coords: Coord2,
        flagged: bool,
    ) -> core::result::Result<MarkOutcome, IgnoreReason> {
        self.check_turn(player)?;
        let coords = self
            .board
            .validate_coords(coords)
            .map_err(|_| IgnoreReason::OutOfBounds)?;
        if self.board[coords].revealed {
            return Err(IgnoreReason::AlreadyRevealed);
        }

        self.board
            .set_flag(coords, flagged)
            .map_err(|_| IgnoreReason::OutOfBounds)
    }

    fn check_turn(&self, player: Player) -> core::result::Result<(), IgnoreReason> {
        if !self.state.is_in_progress() {
            Err(IgnoreReason::NotInProgress)
        } else if self.active != player {
            Err(IgnoreReason::NotYourTurn)
        } else {
            Ok(())
        }
    }
}
