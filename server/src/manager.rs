use duelsweep_core::{
    BoardConfig, BoardGenerator, Coord2, DuelEngine, IgnoreReason, MarkOutcome, Player,
    RandomBoardGenerator, TurnOutcome,
};
use duelsweep_protocol::{
    BoardView, ClientMessage, Envelope, Inbound, ParticipantId, ServerMessage, SessionId,
    Visibility,
};
use rand::prelude::*;
use rand::rngs::SmallRng;

use crate::*;

pub const DISCONNECT_MESSAGE: &str = "Player disconnected. Game over.";

/// What became of a move or flag request on an existing session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Dropped without any effect or notification.
    Ignored(IgnoreReason),
    /// Accepted, but the game already looked like that.
    Unchanged,
    /// Accepted; the events must be delivered in order.
    Applied(Vec<Envelope>),
}

impl MoveOutcome {
    pub fn into_events(self) -> Vec<Envelope> {
        match self {
            Self::Applied(events) => events,
            Self::Ignored(_) | Self::Unchanged => Vec::new(),
        }
    }
}

/// Owns every session and applies participant intents to them one at a time.
///
/// Each call runs to completion before the next one starts, which serializes all
/// transitions of a session. The returned envelopes are in delivery order.
#[derive(Debug)]
pub struct SessionManager<G = RandomBoardGenerator> {
    registry: SessionRegistry,
    generator: G,
    board_config: BoardConfig,
    visibility: Visibility,
    rng: SmallRng,
}

impl SessionManager<RandomBoardGenerator> {
    pub fn from_config(config: &ServerConfig) -> duelsweep_core::Result<Self> {
        config.board.validate()?;

        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        log::info!("Session manager seeded with {seed}");
        let mut rng = SmallRng::seed_from_u64(seed);
        let generator = RandomBoardGenerator::new(rng.random());

        Ok(Self {
            registry: SessionRegistry::new(),
            generator,
            board_config: config.board,
            visibility: config.visibility(),
            rng,
        })
    }
}

impl<G: BoardGenerator> SessionManager<G> {
    pub fn with_generator(
        board_config: BoardConfig,
        visibility: Visibility,
        generator: G,
        seed: u64,
    ) -> Self {
        Self {
            registry: SessionRegistry::new(),
            generator,
            board_config,
            visibility,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    pub fn session(&self, id: &SessionId) -> Option<&Session> {
        self.registry.get(id)
    }

    /// Applies one intent and returns what must be sent out. Failures come back
    /// as an error message to the sender only.
    pub fn handle(&mut self, inbound: Inbound) -> Vec<Envelope> {
        let Inbound { from, message } = inbound;

        let result = match message {
            ClientMessage::CreateSession => self
                .create_session(from.clone())
                .map(|(_, events)| events),
            ClientMessage::JoinSession { session_id } => {
                self.join_session(&session_id, from.clone())
            }
            ClientMessage::Move {
                session_id,
                row,
                col,
                player,
            } => self
                .apply_move(&session_id, &from, player, (row, col))
                .map(MoveOutcome::into_events),
            ClientMessage::SetFlag {
                session_id,
                row,
                col,
                player,
                flagged,
            } => self
                .set_flag(&session_id, &from, player, (row, col), flagged)
                .map(MoveOutcome::into_events),
            ClientMessage::Leave => Ok(self.leave(&from)),
        };

        match result {
            Ok(events) => events,
            Err(err) => {
                log::debug!("Request from {from} failed: {err}");
                vec![Envelope::new(from, ServerMessage::error(err))]
            }
        }
    }

    pub fn create_session(
        &mut self,
        creator: ParticipantId,
    ) -> Result<(SessionId, Vec<Envelope>)> {
        let board = self.generator.generate(self.board_config)?;
        let id = self.registry.allocate_id(&mut self.rng);

        log::info!("{creator} created session {id}");
        self.registry.insert(Session::new(
            id.clone(),
            creator.clone(),
            DuelEngine::new(board),
        ));

        let created = ServerMessage::SessionCreated {
            session_id: id.clone(),
        };
        Ok((id, vec![Envelope::new(creator, created)]))
    }

    /// Seats the second participant. The board goes out here and not earlier.
    pub fn join_session(
        &mut self,
        id: &SessionId,
        participant: ParticipantId,
    ) -> Result<Vec<Envelope>> {
        let session = self.registry.get_mut(id).ok_or(SessionError::NotFound)?;
        session.join(participant.clone())?;
        log::info!("{participant} joined session {id}");

        let board = BoardView::from_board(session.engine().board(), self.visibility);
        let events = [Player::One, Player::Two]
            .into_iter()
            .filter_map(|player| {
                let to = session.participant(player)?.clone();
                let started = ServerMessage::GameStarted {
                    board: board.clone(),
                    player: player.number(),
                };
                Some(Envelope::new(to, started))
            })
            .collect();
        Ok(events)
    }

    pub fn apply_move(
        &mut self,
        id: &SessionId,
        participant: &ParticipantId,
        player: u8,
        coords: Coord2,
    ) -> Result<MoveOutcome> {
        let session = self.registry.get_mut(id).ok_or(SessionError::NotFound)?;
        let Some(seat) = claimed_seat(session, participant, player) else {
            log::debug!("{participant} claimed seat {player} in {id}, ignored");
            return Ok(MoveOutcome::Ignored(IgnoreReason::NotAParticipant));
        };

        let (row, col) = coords;
        let events = match session.engine_mut().reveal(seat, coords) {
            TurnOutcome::Ignored(reason) => {
                log::debug!("Move {coords:?} by player {player} in {id} ignored: {reason:?}");
                return Ok(MoveOutcome::Ignored(reason));
            }
            TurnOutcome::Revealed { cell, next } => {
                let applied = ServerMessage::MoveApplied {
                    row,
                    col,
                    player,
                    cell: cell.into(),
                };
                let switched = ServerMessage::TurnSwitched {
                    active_player: next.number(),
                };
                broadcast(session, [applied, switched])
            }
            TurnOutcome::HitMine {
                cell,
                loser,
                winner,
            } => {
                log::info!("Session {id} over, player {} hit a mine", loser.number());
                let applied = ServerMessage::MoveApplied {
                    row,
                    col,
                    player,
                    cell: cell.into(),
                };
                let over = ServerMessage::GameOver {
                    message: format!(
                        "Player {} hit a mine. Player {} wins!",
                        loser.number(),
                        winner.number()
                    ),
                    winner: Some(winner.number()),
                    loser: Some(loser.number()),
                };
                broadcast(session, [applied, over])
            }
        };
        Ok(MoveOutcome::Applied(events))
    }

    /// Flags never pass the turn, but the opponent is told since a flag blocks
    /// both players from opening that cell.
    pub fn set_flag(
        &mut self,
        id: &SessionId,
        participant: &ParticipantId,
        player: u8,
        coords: Coord2,
        flagged: bool,
    ) -> Result<MoveOutcome> {
        let session = self.registry.get_mut(id).ok_or(SessionError::NotFound)?;
        let Some(seat) = claimed_seat(session, participant, player) else {
            return Ok(MoveOutcome::Ignored(IgnoreReason::NotAParticipant));
        };

        match session.engine_mut().set_flag(seat, coords, flagged) {
            Err(reason) => {
                log::debug!("Flag {coords:?} by player {player} in {id} ignored: {reason:?}");
                Ok(MoveOutcome::Ignored(reason))
            }
            Ok(MarkOutcome::NoChange) => Ok(MoveOutcome::Unchanged),
            Ok(MarkOutcome::Changed) => {
                let (row, col) = coords;
                let toggled = ServerMessage::FlagToggled {
                    row,
                    col,
                    player,
                    flagged,
                };
                Ok(MoveOutcome::Applied(broadcast(session, [toggled])))
            }
        }
    }

    /// Drops every session `participant` is part of, finished or not, and tells
    /// whoever is left.
    pub fn leave(&mut self, participant: &ParticipantId) -> Vec<Envelope> {
        self.registry
            .sessions_of(participant)
            .iter()
            .flat_map(|id| self.remove_and_notify(id, participant))
            .collect()
    }

    /// Same as [`Self::leave`], limited to one session.
    ///
    /// No [`ClientMessage`] maps here. It is for transports that hold one
    /// connection per session and close them one at a time.
    pub fn close_session(
        &mut self,
        id: &SessionId,
        participant: &ParticipantId,
    ) -> Result<Vec<Envelope>> {
        let is_member = self
            .registry
            .get(id)
            .is_some_and(|session| session.has_participant(participant));
        if !is_member {
            return Err(SessionError::NotFound);
        }
        Ok(self.remove_and_notify(id, participant))
    }

    fn remove_and_notify(&mut self, id: &SessionId, participant: &ParticipantId) -> Vec<Envelope> {
        let Some(session) = self.registry.remove(id) else {
            return Vec::new();
        };
        log::info!("{participant} left, session {id} closed");

        session
            .others(participant)
            .map(|to| {
                let over = ServerMessage::GameOver {
                    message: DISCONNECT_MESSAGE.into(),
                    winner: None,
                    loser: None,
                };
                Envelope::new(to.clone(), over)
            })
            .collect()
    }
}

/// Seat `player` if `participant` actually holds it.
fn claimed_seat(session: &Session, participant: &ParticipantId, player: u8) -> Option<Player> {
    Player::from_number(player).filter(|&seat| session.participant(seat) == Some(participant))
}

/// Every message to every participant, message by message.
fn broadcast<const N: usize>(session: &Session, messages: [ServerMessage; N]) -> Vec<Envelope> {
    messages
        .into_iter()
        .flat_map(|message| {
            session
                .participants()
                .iter()
                .map(move |to| Envelope::new(to.clone(), message.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use duelsweep_core::{CellCount, DuelState, PresetBoardGenerator};
    use duelsweep_protocol::CellView;

    fn alice() -> ParticipantId {
        ParticipantId::new("alice")
    }

    fn bob() -> ParticipantId {
        ParticipantId::new("bob")
    }

    fn manager(mines: &[Coord2]) -> SessionManager<PresetBoardGenerator> {
        let config = BoardConfig::new(5, mines.len() as CellCount).unwrap();
        SessionManager::with_generator(
            config,
            Visibility::Redacted,
            PresetBoardGenerator::new(mines.to_vec()),
            0,
        )
    }

    /// Session between alice (player 1) and bob (player 2).
    fn started(manager: &mut SessionManager<PresetBoardGenerator>) -> SessionId {
        let (id, _) = manager.create_session(alice()).unwrap();
        manager.join_session(&id, bob()).unwrap();
        id
    }

    fn to_both(message: ServerMessage) -> [Envelope; 2] {
        [
            Envelope::new(alice(), message.clone()),
            Envelope::new(bob(), message),
        ]
    }

    #[test]
    fn create_registers_waiting_session() {
        let mut manager = manager(&[(3, 3)]);

        let (id, events) = manager.create_session(alice()).unwrap();

        assert_eq!(
            events,
            [Envelope::new(
                alice(),
                ServerMessage::SessionCreated {
                    session_id: id.clone()
                }
            )]
        );
        let session = manager.session(&id).unwrap();
        assert_eq!(session.state(), DuelState::AwaitingOpponent);
        assert_eq!(session.engine().active_player(), Player::One);
        assert_eq!(session.participants(), [alice()]);
    }

    #[test]
    fn created_ids_are_unique() {
        let mut manager = manager(&[(3, 3)]);

        let (a, _) = manager.create_session(alice()).unwrap();
        let (b, _) = manager.create_session(alice()).unwrap();

        assert_ne!(a, b);
        assert_eq!(manager.registry().len(), 2);
    }

    #[test]
    fn join_sends_redacted_board_to_both() {
        let mut manager = manager(&[(3, 3)]);
        let (id, _) = manager.create_session(alice()).unwrap();

        let events = manager.join_session(&id, bob()).unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].to, alice());
        assert_eq!(events[1].to, bob());
        for (event, seat) in events.iter().zip([1, 2]) {
            let ServerMessage::GameStarted { board, player } = &event.message else {
                panic!("expected game start, got {:?}", event.message);
            };
            assert_eq!(*player, seat);
            assert_eq!(board.size(), 5);
            assert_eq!(board.get(3, 3), Some(&CellView::default()));
        }
        assert_eq!(manager.session(&id).unwrap().state(), DuelState::InProgress);
    }

    #[test]
    fn full_layout_is_sent_when_configured() {
        let config = BoardConfig::new(5, 1).unwrap();
        let mut manager = SessionManager::with_generator(
            config,
            Visibility::Full,
            PresetBoardGenerator::new([(3, 3)]),
            0,
        );
        let (id, _) = manager.create_session(alice()).unwrap();

        let events = manager.join_session(&id, bob()).unwrap();

        let ServerMessage::GameStarted { board, .. } = &events[0].message else {
            panic!("expected game start");
        };
        assert!(board.get(3, 3).unwrap().mine);
    }

    #[test]
    fn join_unknown_session_fails() {
        let mut manager = manager(&[(3, 3)]);

        assert_eq!(
            manager.join_session(&SessionId::new("nope"), bob()),
            Err(SessionError::NotFound)
        );
    }

    #[test]
    fn first_safe_move_reports_cell_and_switches_turn() {
        let mut manager = manager(&[(1, 1), (3, 3)]);
        let id = started(&mut manager);

        let outcome = manager.apply_move(&id, &alice(), 1, (0, 0)).unwrap();

        let cell = CellView {
            mine: false,
            revealed: true,
            flagged: false,
            neighbor_mine_count: 1,
        };
        let mut expected = Vec::new();
        expected.extend(to_both(ServerMessage::MoveApplied {
            row: 0,
            col: 0,
            player: 1,
            cell,
        }));
        expected.extend(to_both(ServerMessage::TurnSwitched { active_player: 2 }));
        assert_eq!(outcome, MoveOutcome::Applied(expected));
        assert_eq!(
            manager.session(&id).unwrap().engine().active_player(),
            Player::Two
        );
    }

    #[test]
    fn out_of_turn_move_is_silent() {
        let mut manager = manager(&[(3, 3)]);
        let id = started(&mut manager);
        let before = manager.session(&id).unwrap().clone();

        let outcome = manager.apply_move(&id, &bob(), 2, (0, 0)).unwrap();

        assert_eq!(outcome, MoveOutcome::Ignored(IgnoreReason::NotYourTurn));
        assert_eq!(manager.session(&id).unwrap(), &before);
    }

    #[test]
    fn claiming_someone_elses_seat_is_silent() {
        let mut manager = manager(&[(3, 3)]);
        let id = started(&mut manager);
        let before = manager.session(&id).unwrap().clone();

        for (who, seat) in [(bob(), 1), (ParticipantId::new("mallory"), 1), (alice(), 3)] {
            assert_eq!(
                manager.apply_move(&id, &who, seat, (0, 0)).unwrap(),
                MoveOutcome::Ignored(IgnoreReason::NotAParticipant)
            );
        }
        assert_eq!(manager.session(&id).unwrap(), &before);
    }

    #[test]
    fn moves_before_opponent_joins_are_silent() {
        let mut manager = manager(&[(3, 3)]);
        let (id, _) = manager.create_session(alice()).unwrap();

        assert_eq!(
            manager.apply_move(&id, &alice(), 1, (0, 0)).unwrap(),
            MoveOutcome::Ignored(IgnoreReason::NotInProgress)
        );
    }

    #[test]
    fn move_on_unknown_session_fails() {
        let mut manager = manager(&[(3, 3)]);

        assert_eq!(
            manager.apply_move(&SessionId::new("nope"), &alice(), 1, (0, 0)),
            Err(SessionError::NotFound)
        );
    }

    #[test]
    fn revealed_cell_cannot_be_targeted_again() {
        let mut manager = manager(&[(3, 3)]);
        let id = started(&mut manager);

        manager.apply_move(&id, &alice(), 1, (0, 0)).unwrap();

        assert_eq!(
            manager.apply_move(&id, &bob(), 2, (0, 0)).unwrap(),
            MoveOutcome::Ignored(IgnoreReason::AlreadyRevealed)
        );
        let board = manager.session(&id).unwrap().engine().board();
        assert_eq!(board.revealed_count(), 1);
    }

    #[test]
    fn mine_ends_game_and_later_moves_do_nothing() {
        let mut manager = manager(&[(3, 3)]);
        let id = started(&mut manager);
        manager.apply_move(&id, &alice(), 1, (0, 0)).unwrap();

        let events = manager.apply_move(&id, &bob(), 2, (3, 3)).unwrap().into_events();

        assert_eq!(events.len(), 4);
        assert_eq!(
            events[2].message,
            ServerMessage::GameOver {
                message: "Player 2 hit a mine. Player 1 wins!".into(),
                winner: Some(1),
                loser: Some(2),
            }
        );
        let ServerMessage::MoveApplied { cell, .. } = events[0].message else {
            panic!("expected the mine cell first");
        };
        assert!(cell.mine && cell.revealed);

        let session = manager.session(&id).unwrap();
        assert_eq!(session.state(), DuelState::Finished);
        let frozen = session.clone();

        for (who, seat) in [(alice(), 1), (bob(), 2)] {
            assert_eq!(
                manager.apply_move(&id, &who, seat, (4, 4)).unwrap(),
                MoveOutcome::Ignored(IgnoreReason::NotInProgress)
            );
        }
        assert_eq!(manager.session(&id).unwrap(), &frozen);
    }

    #[test]
    fn finished_session_stays_registered_until_someone_leaves() {
        let mut manager = manager(&[(3, 3)]);
        let id = started(&mut manager);
        manager.apply_move(&id, &alice(), 1, (3, 3)).unwrap();

        assert!(manager.registry().contains(&id));

        let events = manager.leave(&bob());

        assert_eq!(
            events,
            [Envelope::new(
                alice(),
                ServerMessage::GameOver {
                    message: DISCONNECT_MESSAGE.into(),
                    winner: None,
                    loser: None,
                }
            )]
        );
        assert!(!manager.registry().contains(&id));
    }

    #[test]
    fn third_join_fails_and_leaves_session_alone() {
        let mut manager = manager(&[(3, 3)]);
        let id = started(&mut manager);
        let before = manager.session(&id).unwrap().clone();

        assert_eq!(
            manager.join_session(&id, ParticipantId::new("carol")),
            Err(SessionError::Full)
        );
        assert_eq!(
            manager.join_session(&id, ParticipantId::new("dave")),
            Err(SessionError::Full)
        );
        assert_eq!(manager.session(&id).unwrap(), &before);
    }

    #[test]
    fn seated_player_rejoining_is_told_the_session_is_full() {
        let mut manager = manager(&[(3, 3)]);
        let id = started(&mut manager);

        let events = manager.handle(Inbound {
            from: bob(),
            message: ClientMessage::JoinSession {
                session_id: id.clone(),
            },
        });

        assert_eq!(
            events,
            [Envelope::new(bob(), ServerMessage::error(SessionError::Full))]
        );
        assert_eq!(manager.session(&id).unwrap().state(), DuelState::InProgress);
    }

    #[test]
    fn disconnect_mid_game_removes_session() {
        let mut manager = manager(&[(3, 3)]);
        let id = started(&mut manager);
        manager.apply_move(&id, &alice(), 1, (0, 0)).unwrap();

        let events = manager.leave(&alice());

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].to, bob());
        assert!(matches!(events[0].message, ServerMessage::GameOver { .. }));
        assert!(manager.session(&id).is_none());
        assert_eq!(
            manager.apply_move(&id, &bob(), 2, (0, 1)),
            Err(SessionError::NotFound)
        );
        assert_eq!(
            manager.join_session(&id, ParticipantId::new("carol")),
            Err(SessionError::NotFound)
        );
    }

    #[test]
    fn creator_leaving_before_join_notifies_nobody() {
        let mut manager = manager(&[(3, 3)]);
        let (id, _) = manager.create_session(alice()).unwrap();

        assert!(manager.leave(&alice()).is_empty());
        assert!(manager.registry().is_empty());
        assert_eq!(
            manager.close_session(&id, &alice()),
            Err(SessionError::NotFound)
        );
    }

    #[test]
    fn leave_closes_every_session_of_the_participant() {
        let mut manager = manager(&[(3, 3)]);
        let first = started(&mut manager);
        let (second, _) = manager.create_session(bob()).unwrap();
        let (other, _) = manager.create_session(ParticipantId::new("carol")).unwrap();

        manager.leave(&bob());

        assert!(!manager.registry().contains(&first));
        assert!(!manager.registry().contains(&second));
        assert!(manager.registry().contains(&other));
    }

    #[test]
    fn close_session_requires_membership() {
        let mut manager = manager(&[(3, 3)]);
        let id = started(&mut manager);

        assert_eq!(
            manager.close_session(&id, &ParticipantId::new("carol")),
            Err(SessionError::NotFound)
        );
        assert_eq!(manager.close_session(&id, &bob()).unwrap().len(), 1);
    }

    #[test]
    fn flags_are_shared_and_idempotent() {
        let mut manager = manager(&[(3, 3)]);
        let id = started(&mut manager);

        let events = manager
            .set_flag(&id, &alice(), 1, (3, 3), true)
            .unwrap()
            .into_events();
        assert_eq!(
            events,
            to_both(ServerMessage::FlagToggled {
                row: 3,
                col: 3,
                player: 1,
                flagged: true,
            })
        );
        assert_eq!(
            manager.set_flag(&id, &alice(), 1, (3, 3), true).unwrap(),
            MoveOutcome::Unchanged
        );

        let engine = manager.session(&id).unwrap().engine();
        assert!(engine.board()[(3, 3)].flagged);
        assert_eq!(engine.active_player(), Player::One);

        assert_eq!(
            manager.apply_move(&id, &alice(), 1, (3, 3)).unwrap(),
            MoveOutcome::Ignored(IgnoreReason::Flagged)
        );

        assert!(matches!(
            manager.set_flag(&id, &alice(), 1, (3, 3), false).unwrap(),
            MoveOutcome::Applied(_)
        ));
        assert!(!manager.session(&id).unwrap().engine().board()[(3, 3)].flagged);
    }

    #[test]
    fn flag_out_of_turn_is_silent() {
        let mut manager = manager(&[(3, 3)]);
        let id = started(&mut manager);

        assert_eq!(
            manager.set_flag(&id, &bob(), 2, (0, 0), true).unwrap(),
            MoveOutcome::Ignored(IgnoreReason::NotYourTurn)
        );
    }

    #[test]
    fn handle_routes_errors_to_sender_only() {
        let mut manager = manager(&[(3, 3)]);

        let events = manager.handle(Inbound {
            from: bob(),
            message: ClientMessage::JoinSession {
                session_id: SessionId::new("missing"),
            },
        });

        assert_eq!(
            events,
            [Envelope::new(bob(), ServerMessage::error(SessionError::NotFound))]
        );
    }

    #[test]
    fn handle_drives_a_whole_game() {
        let mut manager = manager(&[(3, 3)]);

        let created = manager.handle(Inbound {
            from: alice(),
            message: ClientMessage::CreateSession,
        });
        let ServerMessage::SessionCreated { session_id } = created[0].message.clone() else {
            panic!("expected session id");
        };

        let started = manager.handle(Inbound {
            from: bob(),
            message: ClientMessage::JoinSession {
                session_id: session_id.clone(),
            },
        });
        assert_eq!(started.len(), 2);

        let moved = manager.handle(Inbound {
            from: alice(),
            message: ClientMessage::Move {
                session_id: session_id.clone(),
                row: 3,
                col: 3,
                player: 1,
            },
        });
        assert!(matches!(
            moved.last().map(|e| &e.message),
            Some(ServerMessage::GameOver { loser: Some(1), .. })
        ));

        let ignored = manager.handle(Inbound {
            from: bob(),
            message: ClientMessage::Move {
                session_id: session_id.clone(),
                row: 0,
                col: 0,
                player: 2,
            },
        });
        assert!(ignored.is_empty());

        let left = manager.handle(Inbound {
            from: alice(),
            message: ClientMessage::Leave,
        });
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].to, bob());
        assert!(manager.registry().is_empty());
    }

    #[test]
    fn from_config_rejects_invalid_board() {
        let config = ServerConfig {
            board: BoardConfig::new_unchecked(3, 10),
            ..ServerConfig::default()
        };

        assert!(SessionManager::from_config(&config).is_err());
    }

    #[test]
    fn seeded_managers_agree() {
        let config = ServerConfig {
            seed: Some(11),
            reveal_layout: true,
            ..ServerConfig::default()
        };
        let mut a = SessionManager::from_config(&config).unwrap();
        let mut b = SessionManager::from_config(&config).unwrap();

        let (id_a, _) = a.create_session(alice()).unwrap();
        let (id_b, _) = b.create_session(alice()).unwrap();

        assert_eq!(id_a, id_b);
        assert_eq!(
            a.session(&id_a).unwrap().engine().board(),
            b.session(&id_b).unwrap().engine().board()
        );
        assert_eq!(a.session(&id_a).unwrap().engine().board().mine_count(), 20);
    }
}
