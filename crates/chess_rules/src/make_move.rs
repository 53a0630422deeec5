//! Move execution
//!
//! Mutating operations on [`Board`]. Callers are expected to pass only targets
//! produced by [`crate::move_gen::possible_moves`]; nothing here re-validates
//! legality.
//!
//! A move carries its side effects with it:
//! - a capture clears the victim's square back-reference (the owning player
//!   prunes its legal-move table on its next refresh)
//! - a king moving two files drags the matching rook to the inner square
//! - a pawn moving diagonally onto an empty square removes the pawn it passed
//! - a pawn's en-passant flag is set by a two-square advance, cleared otherwise
//! - a pawn reaching the farthest rank stays there and is handed back so the
//!   caller can enter the promotion sub-state

use tracing::debug;

use crate::board::Board;
use crate::move_gen::{castling_rook, en_passant_victim};
use crate::piece::PieceId;
use crate::square::SquareId;
use crate::types::{Color, PieceKind};

impl Board {
    /// Execute a move, returning the pawn if it now awaits promotion
    ///
    /// The pending marker is not recorded here; the moving player records it
    /// on itself and the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_rules::{Board, SquareId};
    ///
    /// let mut board = Board::new().unwrap();
    /// let e2 = SquareId::parse("e2").unwrap();
    /// let pawn = board.piece_id_at(e2).unwrap();
    /// assert_eq!(board.move_piece(pawn, SquareId::parse("e4").unwrap()), None);
    /// assert!(board.piece(pawn).en_passant());
    /// ```
    pub fn move_piece(&mut self, id: PieceId, target: SquareId) -> Option<PieceId> {
        let from = self.piece(id).square()?;
        self.apply_move(id, target);
        debug!("[BOARD] {} moved from {}", self.piece(id), from);

        let piece = self.piece(id);
        let promoting =
            piece.kind() == PieceKind::Pawn && target.row() == piece.color().promotion_rank();
        promoting.then_some(id)
    }

    /// Raw move with every side effect, shared by real moves and the
    /// simulate-and-check legality filter
    pub(crate) fn apply_move(&mut self, id: PieceId, target: SquareId) {
        let Some(from) = self.piece(id).square() else {
            return;
        };

        if let Some(victim) = en_passant_victim(self, id, target) {
            debug!("[BOARD] {} captured en passant", self.piece(victim));
            self.remove(victim);
        }

        if let Some((rook, rook_target)) = castling_rook(self, id, target) {
            self.relocate(rook, rook_target);
            self.piece_mut(rook).record_move();
        }

        self.relocate(id, target);
        let piece = self.piece_mut(id);
        piece.record_move();
        let double_step = piece.kind() == PieceKind::Pawn && from.row().abs_diff(target.row()) == 2;
        piece.set_en_passant(double_step);
    }

    /// Replace the pending pawn with a new piece of `kind` on the same square
    ///
    /// Returns the new piece, or `None` when `pawn` is not the pending
    /// promotion, is not on its last rank, or `kind` is not a promotion
    /// choice. The board is unchanged in the `None` case.
    pub fn promote(&mut self, pawn: PieceId, kind: PieceKind) -> Option<PieceId> {
        if self.promoting_pawn() != Some(pawn) || !PieceKind::PROMOTION_CHOICES.contains(&kind) {
            return None;
        }
        let old = self.piece(pawn);
        let square = old.square()?;
        let (color, move_count) = (old.color(), old.move_count());
        if old.kind() != PieceKind::Pawn || square.row() != color.promotion_rank() {
            return None;
        }

        self.remove(pawn);
        let promoted = self.add_piece(kind, color, square, move_count);
        self.set_promoting_pawn(None);
        debug!("[BOARD] {} pawn promoted to {} on {}", color, kind, square);
        Some(promoted)
    }

    /// Clear the en-passant flag of every `color` pawn
    pub(crate) fn expire_en_passant(&mut self, color: Color) {
        let expired: Vec<PieceId> = self
            .pieces_of(color)
            .filter(|(_, piece)| piece.en_passant())
            .map(|(id, _)| id)
            .collect();
        for id in expired {
            self.piece_mut(id).set_en_passant(false);
        }
    }
}
