//! Sliding piece move generation
//!
//! Bishops, rooks and queens cast rays from their square. Each ray stops at
//! the first occupied square, which is included only when it holds an enemy
//! piece.

use crate::board::Board;
use crate::square::SquareId;
use crate::types::{Color, PieceKind};

pub const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const QUEEN_DIRS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Ray directions for a sliding kind, empty for the others
pub fn slide_dirs(kind: PieceKind) -> &'static [(i8, i8)] {
    match kind {
        PieceKind::Bishop => &BISHOP_DIRS,
        PieceKind::Rook => &ROOK_DIRS,
        PieceKind::Queen => &QUEEN_DIRS,
        _ => &[],
    }
}

pub(super) fn ray_destinations(
    board: &Board,
    color: Color,
    from: SquareId,
    dirs: &[(i8, i8)],
) -> Vec<SquareId> {
    let mut moves = Vec::new();

    for &(d_row, d_column) in dirs {
        let mut current = from.offset(d_row, d_column);
        while let Some(square) = current {
            match board.piece_at(square) {
                None => moves.push(square),
                Some(piece) => {
                    if piece.color() != color {
                        moves.push(square);
                    }
                    break;
                }
            }
            current = square.offset(d_row, d_column);
        }
    }

    moves
}
