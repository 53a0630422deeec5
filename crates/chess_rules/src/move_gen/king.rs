//! King move generation
//!
//! Kings move one square in any direction. Castling is generated here as a
//! lateral two-square king move when:
//! - neither the king nor the castling rook has moved
//! - every square between them is empty
//! - the king is not in check, and neither passes through nor lands on an
//!   attacked square
//!
//! The rook's relocation happens at execution time in [`crate::make_move`].

use crate::board::Board;
use crate::piece::PieceId;
use crate::rules_engine::MoveValidator;
use crate::square::SquareId;
use crate::types::{Color, PieceKind};

pub const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// One castling option: rook file, squares that must be empty, squares the
/// king crosses (the last one is its destination)
struct CastlingSide {
    rook_column: u8,
    empty_columns: &'static [u8],
    king_path: [u8; 2],
}

const CASTLING_SIDES: [CastlingSide; 2] = [
    CastlingSide {
        rook_column: 8,
        empty_columns: &[6, 7],
        king_path: [6, 7],
    },
    CastlingSide {
        rook_column: 1,
        empty_columns: &[2, 3, 4],
        king_path: [4, 3],
    },
];

pub(super) fn king_destinations(board: &Board, color: Color, from: SquareId) -> Vec<SquareId> {
    KING_STEPS
        .iter()
        .filter_map(|&(d_row, d_column)| from.offset(d_row, d_column))
        .filter(|&square| board.piece_at(square).map_or(true, |piece| piece.color() != color))
        .collect()
}

/// Castling destinations for the king `id`
pub(super) fn castling_destinations(board: &Board, id: PieceId) -> Vec<SquareId> {
    let king = board.piece(id);
    let color = king.color();
    let home = color.home_rank();
    let Some(from) = king.square() else {
        return Vec::new();
    };
    if king.has_moved() || Some(from) != SquareId::new(home, 5) {
        return Vec::new();
    }

    let validator = MoveValidator;
    if validator.is_square_attacked(board, from, color) {
        return Vec::new();
    }

    let mut moves = Vec::new();
    for side in &CASTLING_SIDES {
        let rook_ready = SquareId::new(home, side.rook_column)
            .and_then(|square| board.piece_at(square))
            .is_some_and(|rook| {
                rook.kind() == PieceKind::Rook && rook.color() == color && !rook.has_moved()
            });
        if !rook_ready {
            continue;
        }

        let path_clear = side
            .empty_columns
            .iter()
            .filter_map(|&column| SquareId::new(home, column))
            .all(|square| board.is_empty(square));
        if !path_clear {
            continue;
        }

        let path_safe = side
            .king_path
            .iter()
            .filter_map(|&column| SquareId::new(home, column))
            .all(|square| !validator.is_square_attacked(board, square, color));
        if !path_safe {
            continue;
        }

        if let Some(target) = SquareId::new(home, side.king_path[1]) {
            moves.push(target);
        }
    }

    moves
}

/// Rook handle and destination when `id` moving to `target` is a castling move
pub fn castling_rook(board: &Board, id: PieceId, target: SquareId) -> Option<(PieceId, SquareId)> {
    let king = board.piece(id);
    let from = king.square()?;
    if king.kind() != PieceKind::King || from.row() != target.row() {
        return None;
    }

    let (rook_column, rook_target_column) = match target.column() as i8 - from.column() as i8 {
        2 => (8, 6),
        -2 => (1, 4),
        _ => return None,
    };
    let rook = board.piece_id_at(SquareId::new(from.row(), rook_column)?)?;
    Some((rook, SquareId::new(from.row(), rook_target_column)?))
}
