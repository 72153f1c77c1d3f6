use board::{geometry, Player, Role, Square};

use crate::{path_is_clear, Result, Roster};

/// One piece and its per-match state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    role: Role,
    player: Player,
    square: Square,
    captured: bool,
    /// Whether a pawn's double-step advance is still available
    ///
    /// Meaningful only for [`Role::Pawn`]; spent by the first quiet advance,
    /// not by a capture.
    first_move: bool,
}

impl Piece {
    pub(crate) const fn new(role: Role, player: Player, square: Square) -> Self {
        Self {
            role,
            player,
            square,
            captured: false,
            first_move: true,
        }
    }

    pub const fn role(self) -> Role {
        self.role
    }

    pub const fn player(self) -> Player {
        self.player
    }

    pub const fn square(self) -> Square {
        self.square
    }

    pub const fn is_captured(self) -> bool {
        self.captured
    }

    pub const fn first_move_available(self) -> bool {
        self.first_move
    }

    pub(crate) fn move_to(&mut self, square: Square) {
        self.square = square;
    }

    pub(crate) fn spend_first_move(&mut self) {
        self.first_move = false;
    }

    pub(crate) fn capture(&mut self) {
        self.captured = true;
    }

    /// Whether this piece may move to `target`, taking `victim` if a piece
    /// stands there
    ///
    /// `victim` is the piece on the clicked square, if any; for every role
    /// but the pawn the destination's occupant plays no part in the shape of
    /// a legal move. Moving to the piece's own square is never valid.
    /// Sliding roles check the intervening path; the gradient screening
    /// guarantees those queries are colinear, so the forwarded
    /// [`path_is_clear`] contract error cannot occur here.
    pub fn is_move_valid(
        &self,
        target: Square,
        victim: Option<&Piece>,
        roster: &Roster,
    ) -> Result<bool> {
        if target == self.square {
            return Ok(false);
        }
        let g = geometry::gradient(self.square, target);
        let d = geometry::distance(self.square, target);
        // Whole-square inputs make every comparison below exact.
        match self.role {
            Role::King => Ok((g == 0.0 || g == 1.0 || g == -1.0 || g == f64::INFINITY)
                && (d == geometry::STEP || d == geometry::DIAGONAL_STEP)),
            Role::Queen => {
                if g == 0.0 || g == f64::INFINITY {
                    path_is_clear(roster, self.square, target, false)
                } else if g == 1.0 || g == -1.0 {
                    path_is_clear(roster, self.square, target, true)
                } else {
                    Ok(false)
                }
            }
            Role::Rook => {
                if g == 0.0 || g == f64::INFINITY {
                    path_is_clear(roster, self.square, target, false)
                } else {
                    Ok(false)
                }
            }
            Role::Bishop => {
                if g == 1.0 || g == -1.0 {
                    path_is_clear(roster, self.square, target, true)
                } else {
                    Ok(false)
                }
            }
            Role::Knight => Ok((g == 2.0 || g == 0.5 || g == -2.0 || g == -0.5)
                && d == geometry::knight_leap()),
            Role::Pawn => Ok(self.pawn_move_valid(target, victim)),
        }
    }

    fn pawn_move_valid(&self, target: Square, victim: Option<&Piece>) -> bool {
        // Player 1 pawns advance toward rank 0, Player 2 toward rank 7.
        let forward: i8 = match self.player {
            Player::One => -1,
            Player::Two => 1,
        };
        match victim {
            Some(victim) => {
                if victim.player == self.player {
                    return false;
                }
                let stand = victim.square;
                stand.rank() as i8 - self.square.rank() as i8 == forward
                    && stand.file().abs_diff(self.square.file()) == 1
            }
            None => {
                if target.file() != self.square.file() {
                    return false;
                }
                let ahead = target.rank() as i8 - self.square.rank() as i8;
                ahead == forward || (self.first_move && ahead == 2 * forward)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(name: &str) -> Square {
        name.parse().unwrap()
    }

    /// A roster holding exactly the given pieces, for shaping positions the
    /// standard layout can't reach quickly
    fn roster_of(pieces: &[(Role, Player, &str)]) -> Roster {
        Roster {
            pieces: pieces
                .iter()
                .map(|&(role, player, name)| Piece::new(role, player, square(name)))
                .collect(),
        }
    }

    fn assert_valid(roster: &Roster, from: &str, to: &str, expected: bool) {
        let mover = *roster.get(roster.piece_at(square(from)).unwrap());
        let victim = roster.piece_at(square(to)).map(|id| *roster.get(id));
        let valid = mover
            .is_move_valid(square(to), victim.as_ref(), roster)
            .unwrap();
        assert_eq!(valid, expected, "{from} -> {to}");
    }

    #[test]
    fn test_king_single_steps() {
        let roster = roster_of(&[(Role::King, Player::One, "e4")]);
        for to in ["d3", "e3", "f3", "d4", "f4", "d5", "e5", "f5"] {
            assert_valid(&roster, "e4", to, true);
        }
        for to in ["e6", "c4", "g6", "c2", "e4"] {
            assert_valid(&roster, "e4", to, false);
        }
    }

    #[test]
    fn test_knight_jumps_over_pieces() {
        let roster = roster_of(&[
            (Role::Knight, Player::One, "g1"),
            (Role::Pawn, Player::One, "f2"),
            (Role::Pawn, Player::One, "g2"),
            (Role::Pawn, Player::One, "h2"),
        ]);
        assert_valid(&roster, "g1", "f3", true);
        assert_valid(&roster, "g1", "h3", true);
        assert_valid(&roster, "g1", "e2", true);
        assert_valid(&roster, "g1", "g3", false);
        assert_valid(&roster, "g1", "e3", false);
        // Gradient alone would admit a doubled L; the distance check rejects.
        assert_valid(&roster, "g1", "c3", false);
    }

    #[test]
    fn test_rook_lines_and_reflexivity() {
        let roster = roster_of(&[(Role::Rook, Player::One, "a4")]);
        assert_valid(&roster, "a4", "a8", true);
        assert_valid(&roster, "a4", "h4", true);
        assert_valid(&roster, "a4", "b5", false);
        // A clear line is walkable in both directions.
        let rook = *roster.get(roster.piece_at(square("a4")).unwrap());
        assert!(rook.is_move_valid(square("a8"), None, &roster).unwrap());
        let mirrored = roster_of(&[(Role::Rook, Player::One, "a8")]);
        let rook = *mirrored.get(mirrored.piece_at(square("a8")).unwrap());
        assert!(rook.is_move_valid(square("a4"), None, &mirrored).unwrap());
    }

    #[test]
    fn test_rook_blocked_by_any_piece() {
        let roster = roster_of(&[
            (Role::Rook, Player::One, "a1"),
            (Role::Pawn, Player::One, "a3"),
            (Role::Pawn, Player::Two, "d1"),
        ]);
        assert_valid(&roster, "a1", "a5", false);
        assert_valid(&roster, "a1", "a2", true);
        assert_valid(&roster, "a1", "h1", false);
        // The destination square itself never blocks.
        assert_valid(&roster, "a1", "d1", true);
    }

    #[test]
    fn test_bishop_diagonals_only() {
        let roster = roster_of(&[
            (Role::Bishop, Player::One, "c1"),
            (Role::Pawn, Player::One, "e3"),
        ]);
        assert_valid(&roster, "c1", "d2", true);
        assert_valid(&roster, "c1", "a3", true);
        assert_valid(&roster, "c1", "f4", false);
        assert_valid(&roster, "c1", "c4", false);
    }

    #[test]
    fn test_queen_combines_both_line_kinds() {
        let roster = roster_of(&[
            (Role::Queen, Player::One, "d1"),
            (Role::Pawn, Player::One, "d3"),
        ]);
        assert_valid(&roster, "d1", "d2", true);
        assert_valid(&roster, "d1", "d5", false);
        assert_valid(&roster, "d1", "h5", true);
        assert_valid(&roster, "d1", "a1", true);
        assert_valid(&roster, "d1", "e3", false);
    }

    #[test]
    fn test_pawn_advances() {
        let roster = roster_of(&[(Role::Pawn, Player::One, "e2")]);
        assert_valid(&roster, "e2", "e3", true);
        assert_valid(&roster, "e2", "e4", true);
        assert_valid(&roster, "e2", "e5", false);
        assert_valid(&roster, "e2", "d3", false);
        // Advancing backward is not a thing.
        assert_valid(&roster, "e2", "e1", false);

        let roster = roster_of(&[(Role::Pawn, Player::Two, "e7")]);
        assert_valid(&roster, "e7", "e6", true);
        assert_valid(&roster, "e7", "e5", true);
        assert_valid(&roster, "e7", "e8", false);
    }

    #[test]
    fn test_pawn_double_step_needs_first_move() {
        let mut roster = roster_of(&[(Role::Pawn, Player::One, "e2")]);
        let id = roster.piece_at(square("e2")).unwrap();
        roster.move_piece(id, square("e3"));
        assert_valid(&roster, "e3", "e4", true);
        assert_valid(&roster, "e3", "e5", false);
    }

    #[test]
    fn test_pawn_captures_diagonally_forward_only() {
        let roster = roster_of(&[
            (Role::Pawn, Player::One, "e4"),
            (Role::Pawn, Player::Two, "d5"),
            (Role::Pawn, Player::Two, "f5"),
            (Role::Pawn, Player::Two, "e5"),
            (Role::Pawn, Player::Two, "d3"),
        ]);
        assert_valid(&roster, "e4", "d5", true);
        assert_valid(&roster, "e4", "f5", true);
        // Straight ahead is an advance shape, not a capture shape.
        assert_valid(&roster, "e4", "e5", false);
        // Diagonally behind is the opponent's direction.
        assert_valid(&roster, "e4", "d3", false);
    }

    #[test]
    fn test_pawn_never_captures_its_own_side() {
        let roster = roster_of(&[
            (Role::Pawn, Player::One, "e4"),
            (Role::Pawn, Player::One, "d5"),
        ]);
        assert_valid(&roster, "e4", "d5", false);
    }
}
