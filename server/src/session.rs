use duelsweep_core::{DuelEngine, DuelState, Player};
use duelsweep_protocol::{ParticipantId, SessionId};

use crate::{Result, SessionError};

pub const MAX_PARTICIPANTS: usize = 2;

/// One game between two participants. Seat order is join order.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    id: SessionId,
    participants: Vec<ParticipantId>,
    engine: DuelEngine,
}

impl Session {
    pub fn new(id: SessionId, creator: ParticipantId, engine: DuelEngine) -> Self {
        Self {
            id,
            participants: vec![creator],
            engine,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn participants(&self) -> &[ParticipantId] {
        &self.participants
    }

    pub fn engine(&self) -> &DuelEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut DuelEngine {
        &mut self.engine
    }

    pub fn state(&self) -> DuelState {
        self.engine.state()
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= MAX_PARTICIPANTS
    }

    pub fn has_participant(&self, participant: &ParticipantId) -> bool {
        self.participants.contains(participant)
    }

    /// Participant holding `player`'s seat, if taken.
    pub fn participant(&self, player: Player) -> Option<&ParticipantId> {
        self.participants.get(player.index())
    }

    pub fn seat_of(&self, participant: &ParticipantId) -> Option<Player> {
        [Player::One, Player::Two]
            .into_iter()
            .find(|&player| self.participant(player) == Some(participant))
    }

    /// Seats the second participant and starts play.
    pub fn join(&mut self, participant: ParticipantId) -> Result<Player> {
        if self.is_full() {
            return Err(SessionError::Full);
        }
        if self.has_participant(&participant) {
            return Err(SessionError::AlreadyParticipant);
        }

        self.engine.start()?;
        self.participants.push(participant);
        Ok(Player::Two)
    }

    pub fn others<'a>(
        &'a self,
        participant: &'a ParticipantId,
    ) -> impl Iterator<Item = &'a ParticipantId> + 'a {
        self.participants.iter().filter(move |&p| p != participant)
    }
}
