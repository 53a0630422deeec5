//! Pawn move generation
//!
//! Handles pawn-specific move generation including:
//! - Single and double forward pushes
//! - Diagonal captures
//! - En passant captures
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one square toward the opponent, onto an empty square
//! - **Double push**: from the pawn's starting rank, two squares when both are empty
//! - **Captures**: one square diagonally forward, onto an enemy piece
//! - **En passant**: onto the empty square behind an adjacent enemy pawn that
//!   double-pushed on the previous half-move
//! - **Promotion**: decided at execution time, see [`crate::make_move`]

use crate::board::Board;
use crate::piece::PieceId;
use crate::square::SquareId;
use crate::types::{Color, PieceKind};

/// Pushes and ordinary captures for a pawn of `color` on `from`
///
/// This is the geometry a [`crate::piece::Dummy`] pawn reuses, so it reads
/// nothing from the pawn itself.
pub(super) fn pawn_destinations(board: &Board, color: Color, from: SquareId) -> Vec<SquareId> {
    let mut moves = Vec::new();
    let forward = color.forward();

    if let Some(one) = from.offset(forward, 0).filter(|&sq| board.is_empty(sq)) {
        moves.push(one);
        if from.row() == color.pawn_rank() {
            if let Some(two) = one.offset(forward, 0).filter(|&sq| board.is_empty(sq)) {
                moves.push(two);
            }
        }
    }

    for d_column in [-1, 1] {
        if let Some(target) = from.offset(forward, d_column) {
            if board.piece_at(target).is_some_and(|piece| piece.color() != color) {
                moves.push(target);
            }
        }
    }

    moves
}

/// En passant destinations for the pawn `id`
pub(super) fn en_passant_destinations(board: &Board, id: PieceId) -> Vec<SquareId> {
    let pawn = board.piece(id);
    let Some(from) = pawn.square() else {
        return Vec::new();
    };

    [-1, 1]
        .into_iter()
        .filter_map(|d_column| {
            let target = from.offset(pawn.color().forward(), d_column)?;
            let beside = from.offset(0, d_column)?;
            let victim = board.piece_at(beside)?;
            let capturable = victim.kind() == PieceKind::Pawn
                && victim.color() != pawn.color()
                && victim.en_passant()
                && board.is_empty(target);
            capturable.then_some(target)
        })
        .collect()
}

/// The pawn captured en passant if `id` moves to `target`, else `None`
pub fn en_passant_victim(board: &Board, id: PieceId, target: SquareId) -> Option<PieceId> {
    let pawn = board.piece(id);
    let from = pawn.square()?;
    if pawn.kind() != PieceKind::Pawn
        || target.column() == from.column()
        || !board.is_empty(target)
    {
        return None;
    }

    let beside = SquareId::new(from.row(), target.column())?;
    let victim_id = board.piece_id_at(beside)?;
    let victim = board.piece(victim_id);
    let capturable = victim.kind() == PieceKind::Pawn
        && victim.color() != pawn.color()
        && victim.en_passant();
    capturable.then_some(victim_id)
}
