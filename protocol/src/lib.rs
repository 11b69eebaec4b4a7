//! Wire messages exchanged between the session manager and its transport.
//!
//! Every message is JSON, internally tagged by `type` with camelCase names, so a
//! browser client can consume it without a schema.

use core::fmt;

use duelsweep_core::{Board, Cell};
use serde::{Deserialize, Serialize};

/// Opaque session token handed to the creator and typed in by the opponent.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Transport-assigned handle of one connected participant.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ClientMessage {
    CreateSession,
    JoinSession {
        session_id: SessionId,
    },
    Move {
        session_id: SessionId,
        row: u8,
        col: u8,
        player: u8,
    },
    SetFlag {
        session_id: SessionId,
        row: u8,
        col: u8,
        player: u8,
        flagged: bool,
    },
    /// Sent by the transport when the participant's connection drops.
    Leave,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ServerMessage {
    SessionCreated {
        session_id: SessionId,
    },
    GameStarted {
        board: BoardView,
        /// Seat of the recipient.
        player: u8,
    },
    MoveApplied {
        row: u8,
        col: u8,
        player: u8,
        cell: CellView,
    },
    TurnSwitched {
        active_player: u8,
    },
    FlagToggled {
        row: u8,
        col: u8,
        player: u8,
        flagged: bool,
    },
    GameOver {
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        winner: Option<u8>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        loser: Option<u8>,
    },
    Error {
        message: String,
    },
}

impl ServerMessage {
    pub fn error(message: impl fmt::Display) -> Self {
        Self::Error {
            message: message.to_string(),
        }
    }
}

/// A cell as sent to clients.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellView {
    pub mine: bool,
    pub revealed: bool,
    pub flagged: bool,
    pub neighbor_mine_count: u8,
}

impl CellView {
    /// Hides what lies under an unrevealed cell, keeping only its flag.
    pub fn redacted(cell: Cell) -> Self {
        if cell.revealed {
            cell.into()
        } else {
            Self {
                flagged: cell.flagged,
                ..Self::default()
            }
        }
    }
}

impl From<Cell> for CellView {
    fn from(cell: Cell) -> Self {
        Self {
            mine: cell.mine,
            revealed: cell.revealed,
            flagged: cell.flagged,
            neighbor_mine_count: cell.neighbor_mine_count,
        }
    }
}

/// How much of the hidden layout goes out with a board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    /// Unrevealed cells carry no mine or count information.
    #[default]
    Redacted,
    /// Every cell is sent as stored; the client is trusted not to show mines.
    Full,
}

impl Visibility {
    pub fn view(self, cell: Cell) -> CellView {
        match self {
            Self::Redacted => CellView::redacted(cell),
            Self::Full => cell.into(),
        }
    }
}

/// Row-major grid of cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardView(pub Vec<Vec<CellView>>);

impl BoardView {
    pub fn from_board(board: &Board, visibility: Visibility) -> Self {
        Self(
            board
                .iter_rows()
                .map(|row| row.map(|cell| visibility.view(cell)).collect())
                .collect(),
        )
    }

    pub fn size(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&CellView> {
        self.0.get(row)?.get(col)
    }
}

/// A message addressed to a single participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub to: ParticipantId,
    pub message: ServerMessage,
}

impl Envelope {
    pub fn new(to: ParticipantId, message: ServerMessage) -> Self {
        Self { to, message }
    }
}

/// A client message tagged with the participant it came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inbound {
    pub from: ParticipantId,
    pub message: ClientMessage,
}
