//! The piece collection and the movement rules
//!
//! A [`Roster`] owns all 32 pieces of one match. Pieces are created once at
//! setup and never destroyed; capturing one only flags it, so its identity
//! survives for iteration while every occupancy and legality query skips it.

use board::{Player, Role, Square};

mod path;
mod piece;

pub use crate::path::path_is_clear;
pub use crate::piece::Piece;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A path query between squares that do not lie on a straight line of
    /// the requested kind. This is a caller contract violation, not a
    /// player-facing rejection.
    #[error("squares {from} and {to} do not lie on a straight path")]
    NoStraightPath { from: Square, to: Square },
}

/// Opaque handle to one of the pieces in a [`Roster`]
///
/// Only the roster mints these, so a held id always names one of its 32
/// pieces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PieceId(usize);

/// The full set of pieces in one match
#[derive(Clone, Debug)]
pub struct Roster {
    pieces: Vec<Piece>,
}

impl Roster {
    /// Set up the standard opening layout
    ///
    /// Player 2 (black) takes ranks 0 and 1, Player 1 (white) the mirrored
    /// ranks 7 and 6, with the back rank ordered rook, knight, bishop,
    /// queen, king, bishop, knight, rook.
    pub fn standard() -> Self {
        const BACK_RANK: [Role; 8] = [
            Role::Rook,
            Role::Knight,
            Role::Bishop,
            Role::Queen,
            Role::King,
            Role::Bishop,
            Role::Knight,
            Role::Rook,
        ];
        fn at(file: u8, rank: u8) -> Square {
            Square::new(file, rank).expect("standard layout stays on the board")
        }
        let mut pieces = Vec::with_capacity(32);
        for (player, back_rank, pawn_rank) in [(Player::Two, 0, 1), (Player::One, 7, 6)] {
            for (file, role) in BACK_RANK.into_iter().enumerate() {
                pieces.push(Piece::new(role, player, at(file as u8, back_rank)));
            }
            for file in 0..board::BOARD_SIDE {
                pieces.push(Piece::new(Role::Pawn, player, at(file, pawn_rank)));
            }
        }
        Self { pieces }
    }

    /// Look up a piece by id
    pub fn get(&self, id: PieceId) -> &Piece {
        &self.pieces[id.0]
    }

    /// The non-captured piece standing on `square`, if any
    pub fn piece_at(&self, square: Square) -> Option<PieceId> {
        self.pieces
            .iter()
            .position(|piece| !piece.is_captured() && piece.square() == square)
            .map(PieceId)
    }

    /// Whether a non-captured piece stands on `square`
    pub fn occupied(&self, square: Square) -> bool {
        self.piece_at(square).is_some()
    }

    /// All pieces, captured ones included, with their ids
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces
            .iter()
            .enumerate()
            .map(|(idx, piece)| (PieceId(idx), piece))
    }

    /// The owner of a captured king, if a king has been captured
    pub fn captured_king(&self) -> Option<Player> {
        self.pieces
            .iter()
            .find(|piece| piece.role() == Role::King && piece.is_captured())
            .map(|piece| piece.player())
    }

    /// Apply a quiet (non-capturing) move of `id` to `to`
    ///
    /// The destination must be empty; the caller has already checked the
    /// move's legality. A pawn's double-step allowance is spent here, on any
    /// quiet move.
    pub fn move_piece(&mut self, id: PieceId, to: Square) {
        debug_assert!(!self.occupied(to), "quiet move onto an occupied square");
        debug_assert!(!self.pieces[id.0].is_captured(), "moved a captured piece");
        let piece = &mut self.pieces[id.0];
        piece.move_to(to);
        piece.spend_first_move();
    }

    /// Capture `victim` and land `mover` on its square
    ///
    /// A capture does not spend a pawn's double-step allowance.
    pub fn capture_piece(&mut self, mover: PieceId, victim: PieceId) {
        debug_assert!(!self.pieces[mover.0].is_captured(), "moved a captured piece");
        debug_assert!(
            !self.pieces[victim.0].is_captured(),
            "captured a piece twice"
        );
        let square = self.pieces[victim.0].square();
        self.pieces[victim.0].capture();
        self.pieces[mover.0].move_to(square);
    }
}
