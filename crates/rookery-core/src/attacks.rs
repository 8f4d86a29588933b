//! King-safety scanning: ray walks to the nearest blocker plus knight probes.

use crate::board::Board;
use crate::color::Color;
use crate::direction::Direction;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Walk from `from` along `dir` and return the first occupied square, or
/// `None` if the ray reaches the edge first.
pub(crate) fn nearest_blocker(board: &Board, from: Square, dir: Direction) -> Option<(Square, Piece)> {
    let mut sq = from;
    while let Some(next) = sq.offset(dir) {
        if let Some(piece) = board.piece_on(next) {
            return Some((next, piece));
        }
        sq = next;
    }
    None
}

/// Return `true` if `attacker`, the nearest blocker seen from `target` along
/// `dir`, attacks `target`. `defender` is the side owning `target`.
fn attacks_along_ray(
    attacker: Piece,
    attacker_sq: Square,
    target: Square,
    dir: Direction,
    defender: Color,
) -> bool {
    if !attacker.is_enemy_of(defender) {
        return false;
    }
    let adjacent = attacker_sq.distance(target) == 1;
    match attacker.kind() {
        PieceKind::Rook => !dir.is_diagonal(),
        PieceKind::Bishop => dir.is_diagonal(),
        PieceKind::Queen => true,
        PieceKind::King => adjacent,
        // An enemy pawn strikes back toward the defender's side, so it must
        // sit one step diagonally in the defender's forward direction.
        PieceKind::Pawn => adjacent && dir.is_diagonal() && dir.d_rank == defender.forward(),
        PieceKind::Knight => false,
    }
}

/// Return `true` if any `defender`'s enemy piece attacks `target`.
pub fn is_square_attacked(board: &Board, target: Square, defender: Color) -> bool {
    let by_ray = Direction::ALL.into_iter().any(|dir| {
        nearest_blocker(board, target, dir).is_some_and(|(sq, piece)| {
            attacks_along_ray(piece, sq, target, dir, defender)
        })
    });
    if by_ray {
        return true;
    }

    let enemy_knight = Piece::new(PieceKind::Knight, defender.flip());
    Direction::KNIGHT_JUMPS
        .into_iter()
        .filter_map(|jump| target.offset(jump))
        .any(|sq| board.piece_on(sq) == Some(enemy_knight))
}

impl Board {
    /// Return `true` if `color`'s king is attacked.
    ///
    /// A board without a king for `color` reports `false`; validated games
    /// always have one.
    pub fn is_king_attacked(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king_sq| is_square_attacked(self, king_sq, color))
    }
}
