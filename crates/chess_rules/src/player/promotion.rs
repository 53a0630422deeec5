//! Promotion sub-state
//!
//! While a pawn waits on the last rank, the renderer stacks the four choices
//! on the pawn's file, starting from the back rank and moving inward:
//! Queen, Rook, Bishop, Knight. A click inside that stack picks the matching
//! class; any other click is ignored and the promotion stays pending.

use tracing::{debug, warn};

use crate::board::Board;
use crate::square::SquareId;
use crate::types::{ClickOutcome, Color, PieceKind};

use super::Player;

/// Piece class offered on `row` of the promotion stack for `color`
///
/// # Examples
///
/// ```
/// use chess_rules::{player::promotion_choice, Color, PieceKind};
///
/// assert_eq!(promotion_choice(Color::White, 8), Some(PieceKind::Queen));
/// assert_eq!(promotion_choice(Color::Black, 4), Some(PieceKind::Knight));
/// assert_eq!(promotion_choice(Color::White, 4), None);
/// ```
pub fn promotion_choice(color: Color, row: u8) -> Option<PieceKind> {
    let depth = match color {
        Color::White => 8u8.checked_sub(row)?,
        Color::Black => row.checked_sub(1)?,
    };
    PieceKind::PROMOTION_CHOICES.get(depth as usize).copied()
}

impl Player {
    /// Resolve the pending promotion with a click on `square`
    ///
    /// Completing it swaps the pawn's table entry for the new piece, clears
    /// the pending marker on both this player and the board, and ends the turn.
    pub fn promotion(&mut self, board: &mut Board, square: SquareId) -> ClickOutcome {
        let Some(pawn) = self.promoting_pawn else {
            return ClickOutcome::Ignored;
        };
        let Some(pawn_square) = board.piece(pawn).square() else {
            warn!("[PLAYER] pending promotion pawn {} is off the board", pawn);
            return ClickOutcome::Ignored;
        };
        if square.column() != pawn_square.column() {
            return ClickOutcome::Ignored;
        }
        let Some(kind) = promotion_choice(self.color, square.row()) else {
            return ClickOutcome::Ignored;
        };

        let Some(promoted) = board.promote(pawn, kind) else {
            warn!("[PLAYER] board refused to promote {} to {}", pawn, kind);
            return ClickOutcome::Ignored;
        };

        debug!("[PLAYER] {} chose {} on {}", self.color, kind, pawn_square);
        self.legal_moves.remove(&pawn);
        self.legal_moves.insert(promoted, Vec::new());
        self.promoting_pawn = None;
        self.end_turn(board);
        ClickOutcome::Promoted(kind)
    }
}
