//! Turn sequencing and move arbitration
//!
//! A [`Match`] consumes one resolved click at a time and owns everything
//! that changes during play: the roster, whose turn it is, the current
//! selection, and the running flag. The caller renders from the query
//! surface ([`Match::roster`], [`Match::selected`], [`Match::turn`]) and
//! reacts to the [`TurnEvent`] each click produces. The win scan is a
//! separate call, run unconditionally once per loop iteration rather than
//! only after moves.

use board::{Player, Square};
use roster::{PieceId, Roster};

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A contract violation surfaced by the rules layer
    #[error(transparent)]
    Rules(#[from] roster::Error),
    /// The caller-resolved occupant is not a live piece on the clicked
    /// square
    #[error("piece {id:?} is not standing on {square}")]
    OccupantMismatch { id: PieceId, square: Square },
    /// A click arrived after the match ended
    #[error("the match is already over")]
    MatchOver,
}

/// What one click did to the match
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnEvent {
    /// Nothing happened: an empty or opposing square was clicked with no
    /// selection, or a move attempt was silently rejected
    NoChange,
    /// The active player picked a piece up
    Selected(PieceId),
    /// The active player put their selected piece back down
    Deselected,
    /// The active player clicked another of their own pieces while one was
    /// already selected; the existing selection stands
    IllegalMove,
    /// The selected piece moved, capturing whatever stood on the target
    MoveApplied {
        mover: PieceId,
        captured: Option<PieceId>,
    },
    /// A king has been captured; the named player wins
    GameWon(Player),
}

/// The state of one match, mutated in place by every click
#[derive(Clone, Debug)]
pub struct Match {
    roster: Roster,
    turn: Player,
    selected: Option<PieceId>,
    running: bool,
}

impl Match {
    /// A fresh match on the standard layout, Player 1 to act
    pub fn new() -> Self {
        Self {
            roster: Roster::standard(),
            turn: Player::One,
            selected: None,
            running: true,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The player who may currently act
    pub const fn turn(&self) -> Player {
        self.turn
    }

    /// The piece the active player has picked up, if any
    pub const fn selected(&self) -> Option<PieceId> {
        self.selected
    }

    /// False once a king has been captured and the win announced
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Resolve the occupant of `square` and process the click
    pub fn click(&mut self, square: Square) -> Result<TurnEvent> {
        self.handle_click(square, self.roster.piece_at(square))
    }

    /// Process one resolved click
    ///
    /// `occupant` is the piece standing on the clicked square, as resolved
    /// by the caller; it is checked against the roster before anything else.
    /// The first click of a turn picks a piece up (own pieces only), the
    /// second tries to put it down: same piece deselects, another own piece
    /// raises [`TurnEvent::IllegalMove`] with the selection kept, and an
    /// invalid destination is silently rejected with the selection kept.
    pub fn handle_click(&mut self, square: Square, occupant: Option<PieceId>) -> Result<TurnEvent> {
        if !self.running {
            return Err(Error::MatchOver);
        }
        if let Some(id) = occupant {
            let piece = self.roster.get(id);
            if piece.is_captured() || piece.square() != square {
                return Err(Error::OccupantMismatch { id, square });
            }
        }
        let Some(current) = self.selected else {
            return Ok(match occupant {
                Some(id) if self.roster.get(id).player() == self.turn => {
                    self.selected = Some(id);
                    TurnEvent::Selected(id)
                }
                _ => TurnEvent::NoChange,
            });
        };
        match occupant {
            Some(id) if id == current => {
                self.selected = None;
                Ok(TurnEvent::Deselected)
            }
            Some(id) if self.roster.get(id).player() == self.roster.get(current).player() => {
                Ok(TurnEvent::IllegalMove)
            }
            Some(victim_id) => {
                let mover = *self.roster.get(current);
                let victim = *self.roster.get(victim_id);
                if mover.is_move_valid(square, Some(&victim), &self.roster)? {
                    self.roster.capture_piece(current, victim_id);
                    self.turn = self.turn.other();
                    self.selected = None;
                    Ok(TurnEvent::MoveApplied {
                        mover: current,
                        captured: Some(victim_id),
                    })
                } else {
                    Ok(TurnEvent::NoChange)
                }
            }
            None => {
                let mover = *self.roster.get(current);
                if mover.is_move_valid(square, None, &self.roster)? {
                    self.roster.move_piece(current, square);
                    self.turn = self.turn.other();
                    self.selected = None;
                    Ok(TurnEvent::MoveApplied {
                        mover: current,
                        captured: None,
                    })
                } else {
                    Ok(TurnEvent::NoChange)
                }
            }
        }
    }

    /// Scan for a captured king and end the match if one is found
    ///
    /// Run once per loop iteration. The first scan that finds a captured
    /// king yields [`TurnEvent::GameWon`] naming the opponent and stops the
    /// match; later calls yield nothing, so the win is announced exactly
    /// once.
    pub fn check_game_won(&mut self) -> Option<TurnEvent> {
        if !self.running {
            return None;
        }
        let winner = self.roster.captured_king()?.other();
        self.running = false;
        Some(TurnEvent::GameWon(winner))
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}
