//! Move generation
//!
//! Three layers, each built on the previous one:
//!
//! 1. [`destinations`] - pure geometry for a kind/color/square. This is what a
//!    [`crate::piece::Dummy`] probe sees, so attack detection and movement share
//!    a single source of truth per piece kind.
//! 2. [`pseudo_legal_moves`] - geometry plus the moves that depend on the
//!    piece's own history: en passant and castling.
//! 3. [`possible_moves`] - pseudo-legal moves filtered against the mover's
//!    check status and by simulating each candidate and re-running check
//!    detection on the result. The simulation covers moving into check,
//!    failing to answer a check, and leaving a pin line.
//!
//! ## Module Organization
//!
//! - `pawn` - pushes, captures, en passant
//! - `knight` - L-shaped jumps
//! - `sliding` - bishop, rook and queen rays
//! - `king` - single steps and castling

mod king;
mod knight;
mod pawn;
mod sliding;


use tracing::trace;

use crate::board::Board;
use crate::check::Check;
use crate::piece::PieceId;
use crate::rules_engine::MoveValidator;
use crate::square::SquareId;
use crate::types::{Color, PieceKind};

pub use king::{castling_rook, KING_STEPS};
pub use knight::KNIGHT_DELTAS;
pub use pawn::en_passant_victim;
pub use sliding::{slide_dirs, BISHOP_DIRS, QUEEN_DIRS, ROOK_DIRS};

/// Geometric destinations of a `kind` of `color` standing on `from`
///
/// No en passant, no castling, no legality filtering.
pub fn destinations(board: &Board, kind: PieceKind, color: Color, from: SquareId) -> Vec<SquareId> {
    match kind {
        PieceKind::Pawn => pawn::pawn_destinations(board, color, from),
        PieceKind::Knight => knight::knight_destinations(board, color, from),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            sliding::ray_destinations(board, color, from, slide_dirs(kind))
        }
        PieceKind::King => king::king_destinations(board, color, from),
    }
}

/// Destinations of the piece `id` before any check or pin filtering
pub fn pseudo_legal_moves(board: &Board, id: PieceId) -> Vec<SquareId> {
    let piece = board.piece(id);
    let Some(from) = piece.square() else {
        return Vec::new();
    };

    let mut moves = destinations(board, piece.kind(), piece.color(), from);
    match piece.kind() {
        PieceKind::Pawn => moves.extend(pawn::en_passant_destinations(board, id)),
        PieceKind::King => moves.extend(king::castling_destinations(board, id)),
        _ => {}
    }
    moves
}

/// Every square the piece `id` may legally move to
///
/// `check` is the current check status of the piece's own king:
/// - `None`: only the simulate-and-check filter applies
/// - single check: non-king pieces must capture the checker or interpose on
///   its line to the king
/// - double check: only the king may move; every other piece gets nothing
///
/// # Examples
///
/// ```
/// use chess_rules::{move_gen, Board, SquareId};
///
/// let board = Board::new().unwrap();
/// let knight = board.piece_id_at(SquareId::parse("g1").unwrap()).unwrap();
/// let moves = move_gen::possible_moves(&board, knight, None);
/// assert_eq!(moves.len(), 2);
/// ```
pub fn possible_moves(board: &Board, id: PieceId, check: Option<&Check>) -> Vec<SquareId> {
    let piece = board.piece(id);
    if piece.is_captured() {
        return Vec::new();
    }

    let is_king = piece.kind() == PieceKind::King;
    if !is_king && check.is_some_and(Check::double_check) {
        return Vec::new();
    }

    let moves: Vec<SquareId> = pseudo_legal_moves(board, id)
        .into_iter()
        .filter(|&target| match check {
            Some(check) if !is_king => answers_check(board, id, target, check),
            _ => true,
        })
        .filter(|&target| leaves_king_safe(board, id, target))
        .collect();

    trace!("[MOVEGEN] {} has {} legal moves", piece, moves.len());
    moves
}

/// Whether moving `id` to `target` captures the sole checker or blocks its line
fn answers_check(board: &Board, id: PieceId, target: SquareId, check: &Check) -> bool {
    let Some(&attacker) = check.attackers().first() else {
        return true;
    };
    let Some(attacker_square) = board.piece(attacker).square() else {
        return true;
    };

    if target == attacker_square || en_passant_victim(board, id, target) == Some(attacker) {
        return true;
    }

    let king_square = board.piece(check.king()).square();
    board.piece(attacker).kind().is_slider()
        && king_square.is_some_and(|king_square| {
            attacker_square.between(king_square).contains(&target)
        })
}

/// Simulate `id` moving to `target` on a scratch copy and test the mover's king
pub(crate) fn leaves_king_safe(board: &Board, id: PieceId, target: SquareId) -> bool {
    let color = board.piece(id).color();
    let mut scratch = board.clone();
    scratch.apply_move(id, target);
    MoveValidator.is_in_check(&scratch, color).is_none()
}
