//! Attack and check detection
//!
//! [`MoveValidator`] is a stateless service. It never asks "which enemy pieces
//! attack this square"; it asks "what would a piece of kind T see from this
//! square" by standing a [`Dummy`] of the defender's color there, and then
//! looks for an enemy of that same kind among the squares the probe reaches.
//! Geometry is symmetric for every kind, so this finds exactly the attackers,
//! and each kind's ray/jump logic exists in one place only.
//!
//! ## Pawns
//!
//! A dummy pawn's diagonal captures are the two squares diagonally forward
//! from the defender's point of view, which is exactly where an attacking
//! enemy pawn must stand. [`MoveValidator::is_in_check`] reads those two
//! squares directly.
//!
//! ## Kings
//!
//! A king never gives check in a real game, but the king probe is part of the
//! attacker set so that the simulate-and-check filter rejects king moves
//! next to the enemy king.

use tracing::trace;

use crate::board::Board;
use crate::check::Check;
use crate::piece::{Dummy, PieceId};
use crate::square::SquareId;
use crate::types::{Color, PieceKind};

/// Kinds probed from the king's square, pawns handled separately
const PROBED_KINDS: [PieceKind; 5] = [
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

#[derive(Debug, Default, Clone, Copy)]
pub struct MoveValidator;

impl MoveValidator {
    /// Check descriptor for `color`'s king, `None` when it is not attacked
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_rules::{Board, Color, MoveValidator};
    ///
    /// let board = Board::new().unwrap();
    /// assert!(MoveValidator.is_in_check(&board, Color::White).is_none());
    /// ```
    pub fn is_in_check(&self, board: &Board, color: Color) -> Option<Check> {
        let king = board.king(color);
        let square = board.piece(king).square()?;

        let mut attackers: Vec<PieceId> = PROBED_KINDS
            .iter()
            .flat_map(|&kind| self.attackers_by(board, square, kind, color))
            .collect();
        attackers.extend(self.pawn_attackers(board, square, color));

        if !attackers.is_empty() {
            trace!("[RULES] {} king on {} attacked by {} piece(s)", color, square, attackers.len());
        }
        Check::new(king, attackers)
    }

    /// First enemy `kind` attacking `square`, as seen by a probe of `color`
    pub fn is_attacked_by(
        &self,
        board: &Board,
        square: SquareId,
        kind: PieceKind,
        color: Color,
    ) -> Option<PieceId> {
        self.attackers_by(board, square, kind, color).into_iter().next()
    }

    /// Every enemy `kind` attacking `square`, as seen by a probe of `color`
    pub fn attackers_by(
        &self,
        board: &Board,
        square: SquareId,
        kind: PieceKind,
        color: Color,
    ) -> Vec<PieceId> {
        Dummy::new(kind, color, square)
            .possible_moves(board)
            .into_iter()
            .filter_map(|target| board.piece_id_at(target))
            .filter(|&id| {
                let piece = board.piece(id);
                piece.kind() == kind && piece.color() != color
            })
            .collect()
    }

    /// Whether any enemy piece attacks `square` from `color`'s point of view
    ///
    /// Used for castling: the king may not castle out of, through or into an
    /// attacked square.
    pub fn is_square_attacked(&self, board: &Board, square: SquareId, color: Color) -> bool {
        !self.pawn_attackers(board, square, color).is_empty()
            || PROBED_KINDS
                .iter()
                .any(|&kind| self.is_attacked_by(board, square, kind, color).is_some())
    }

    fn pawn_attackers(&self, board: &Board, square: SquareId, color: Color) -> Vec<PieceId> {
        [-1, 1]
            .into_iter()
            .filter_map(|d_column| square.offset(color.forward(), d_column))
            .filter_map(|target| board.piece_id_at(target))
            .filter(|&id| {
                let piece = board.piece(id);
                piece.kind() == PieceKind::Pawn && piece.color() != color
            })
            .collect()
    }
}
