use duelsweep_protocol::{ParticipantId, SessionId};
use hashbrown::HashMap;
use rand::Rng;

use crate::Session;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 8;

/// All live sessions, keyed by id. Owned by the session manager for the
/// lifetime of the process.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<SessionId, Session>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn contains(&self, id: &SessionId) -> bool {
        self.sessions.contains_key(id)
    }

    pub fn get(&self, id: &SessionId) -> Option<&Session> {
        self.sessions.get(id)
    }

    pub fn get_mut(&mut self, id: &SessionId) -> Option<&mut Session> {
        self.sessions.get_mut(id)
    }

    pub fn insert(&mut self, session: Session) {
        let previous = self.sessions.insert(session.id().clone(), session);
        debug_assert!(previous.is_none(), "session id reused");
    }

    pub fn remove(&mut self, id: &SessionId) -> Option<Session> {
        self.sessions.remove(id)
    }

    /// Ids of every session `participant` sits in, sorted.
    pub fn sessions_of(&self, participant: &ParticipantId) -> Vec<SessionId> {
        let mut ids: Vec<_> = self
            .sessions
            .values()
            .filter(|session| session.has_participant(participant))
            .map(|session| session.id().clone())
            .collect();
        ids.sort();
        ids
    }

    /// Draws fresh 8-character base-36 ids until one is unused.
    pub fn allocate_id(&self, rng: &mut impl Rng) -> SessionId {
        loop {
            let id: String = (0..ID_LEN)
                .map(|_| char::from(ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())]))
                .collect();
            let id = SessionId::new(id);
            if !self.contains(&id) {
                return id;
            }
            log::debug!("session id {id} already taken, drawing again");
        }
    }
}
