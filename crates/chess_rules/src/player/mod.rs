//! Per-color session state
//!
//! A [`Player`] owns no pieces. It holds handles into the board's arena:
//! the current selection, the pending promotion, and a legal-move table with
//! one entry per on-board piece of its color.
//!
//! # Click state machine
//!
//! ```text
//! Idle ──own piece──▶ Selected ──legal target──▶ MoveExecuted ──▶ turn ends
//!  ▲                     │                            │
//!  └──click elsewhere────┘                            ▼ pawn on last rank
//!                                            AwaitingPromotion ──choice──▶ turn ends
//! ```
//!
//! The table is refreshed for the side about to move by [`Player::get_status`]
//! and cleared by the side that just moved, so between half-moves only the
//! mover's table is populated.
//!
//! # Pairing
//!
//! Players are built independently and then bound with
//! [`Player::set_opponent`]. The binding is mandatory before
//! [`Player::get_status`], which otherwise returns
//! [`RulesError::UnpairedPlayer`].

mod material;
mod promotion;

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::board::Board;
use crate::check::Check;
use crate::error::{RulesError, RulesResult};
use crate::move_gen;
use crate::piece::PieceId;
use crate::square::SquareId;
use crate::types::{ClickOutcome, Color, GameResult};

pub use material::is_insufficient_material;
pub use promotion::promotion_choice;

#[derive(Debug, Clone)]
pub struct Player {
    color: Color,
    opponent: Option<Color>,
    selected: Option<PieceId>,
    legal_moves: BTreeMap<PieceId, Vec<SquareId>>,
    promoting_pawn: Option<PieceId>,
}

impl Player {
    /// Create a player and compute its unchecked legal moves
    pub fn new(board: &Board, color: Color) -> Self {
        let mut player = Self {
            color,
            opponent: None,
            selected: None,
            legal_moves: BTreeMap::new(),
            promoting_pawn: None,
        };
        player.set_legal_moves(board);
        player.get_legal_moves(board, None);
        player
    }

    /// Bind the opponent (non-owning, by color)
    pub fn set_opponent(&mut self, opponent: &Player) {
        self.opponent = Some(opponent.color);
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn opponent(&self) -> Option<Color> {
        self.opponent
    }

    pub fn selected(&self) -> Option<PieceId> {
        self.selected
    }

    pub fn promoting_pawn(&self) -> Option<PieceId> {
        self.promoting_pawn
    }

    pub fn legal_moves(&self) -> &BTreeMap<PieceId, Vec<SquareId>> {
        &self.legal_moves
    }

    /// Cached destinations of one piece, empty when it has no entry
    pub fn legal_moves_for(&self, id: PieceId) -> &[SquareId] {
        self.legal_moves.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Seed the table with an empty entry for every on-board piece of this color
    pub fn set_legal_moves(&mut self, board: &Board) {
        self.legal_moves = board.pieces_of(self.color).map(|(id, _)| (id, Vec::new())).collect();
    }

    /// Recompute every entry against `check`, pruning captured pieces
    ///
    /// Under double check only the king is recomputed; every other entry is
    /// emptied.
    pub fn get_legal_moves(&mut self, board: &Board, check: Option<&Check>) {
        self.legal_moves.retain(|&id, _| !board.piece(id).is_captured());

        let double_check = check.is_some_and(Check::double_check);
        let king = board.king(self.color);
        for (&id, moves) in self.legal_moves.iter_mut() {
            *moves = if double_check && id != king {
                Vec::new()
            } else {
                move_gen::possible_moves(board, id, check)
            };
        }
    }

    /// Classify the position for this player, who is about to move
    ///
    /// Refreshes the legal-move table first. Checkmate and stalemate take
    /// precedence over the insufficient-material draw.
    ///
    /// # Errors
    ///
    /// [`RulesError::UnpairedPlayer`] if [`Player::set_opponent`] was never called.
    pub fn get_status(
        &mut self,
        board: &Board,
        check: Option<&Check>,
        current_turn: Color,
    ) -> RulesResult<GameResult> {
        if self.opponent.is_none() {
            return Err(RulesError::UnpairedPlayer { color: self.color });
        }
        if current_turn != self.color {
            warn!("[PLAYER] {} status requested on {}'s turn", self.color, current_turn);
        }

        self.get_legal_moves(board, check);
        let no_moves = self.legal_moves.values().all(Vec::is_empty);

        let result = match (no_moves, check.is_some()) {
            (true, true) => GameResult::Checkmate,
            (true, false) => GameResult::Stalemate,
            _ if is_insufficient_material(board) => GameResult::InsufficientMaterial,
            _ => GameResult::Continue,
        };

        if result.is_terminal() {
            info!("[PLAYER] {} to move: {}", self.color, result);
        }
        Ok(result)
    }

    /// Select one of this player's pieces and highlight its legal moves
    ///
    /// Returns `false` (and selects nothing) for an opponent or captured piece.
    pub fn select(&mut self, board: &mut Board, id: PieceId) -> bool {
        let piece = board.piece(id);
        let Some(square) = piece.square() else {
            return false;
        };
        if piece.color() != self.color {
            debug!("[PLAYER] {} cannot select {}", self.color, piece);
            return false;
        }

        self.selected = Some(id);
        board.square_mut(square).selected_highlighted = true;
        for &target in self.legal_moves_for(id) {
            board.square_mut(target).highlighted = true;
        }
        true
    }

    /// Drop the selection and its highlights
    pub fn unselect(&mut self, board: &mut Board) {
        let Some(id) = self.selected.take() else {
            return;
        };
        if let Some(square) = board.piece(id).square() {
            board.square_mut(square).selected_highlighted = false;
        }
        for &target in self.legal_moves_for(id) {
            board.square_mut(target).highlighted = false;
        }
    }

    /// Empty every table entry; entries stay so pruning still sees them
    pub fn clear_legal_moves(&mut self) {
        for moves in self.legal_moves.values_mut() {
            moves.clear();
        }
    }

    /// Reset per-half-move state once this player's turn is over
    pub fn end_turn(&mut self, board: &mut Board) {
        self.unselect(board);
        self.clear_legal_moves();
    }

    /// Start this player's half-move: its pawns' en-passant windows close
    pub fn begin_turn(&mut self, board: &mut Board) {
        board.expire_en_passant(self.color);
    }

    /// Handle one click on `(row, column)`
    ///
    /// Nothing here fails: an off-board click, an opponent piece or a
    /// non-matching promotion click is [`ClickOutcome::Ignored`].
    pub fn play(&mut self, board: &mut Board, row: u8, column: u8) -> ClickOutcome {
        let Some(square) = SquareId::new(row, column) else {
            return ClickOutcome::Ignored;
        };

        if self.promoting_pawn.is_some() {
            return self.promotion(board, square);
        }

        let Some(selected) = self.selected else {
            return match board.piece_id_at(square) {
                Some(id) if self.select(board, id) => ClickOutcome::Selected,
                _ => ClickOutcome::Ignored,
            };
        };

        if self.legal_moves_for(selected).contains(&square) {
            return self.execute(board, selected, square);
        }

        let clicked = board.piece_id_at(square);
        self.unselect(board);
        match clicked {
            Some(id) if id != selected && self.select(board, id) => ClickOutcome::Selected,
            _ => ClickOutcome::Unselected,
        }
    }

    fn execute(&mut self, board: &mut Board, id: PieceId, target: SquareId) -> ClickOutcome {
        if let Some(king_square) = board.king_square(self.color) {
            board.square_mut(king_square).check_highlighted = false;
        }

        self.unselect(board);
        let promoting = board.move_piece(id, target);
        self.clear_legal_moves();

        match promoting {
            Some(pawn) => {
                debug!("[PLAYER] {} awaits a promotion choice on {}", self.color, target);
                self.promoting_pawn = Some(pawn);
                board.set_promoting_pawn(Some(pawn));
                ClickOutcome::PromotionPending
            }
            None => ClickOutcome::Moved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn sq(name: &str) -> SquareId {
        SquareId::parse(name).expect("square name")
    }

    fn click(player: &mut Player, board: &mut Board, name: &str) -> ClickOutcome {
        let square = sq(name);
        player.play(board, square.row(), square.column())
    }

    fn paired(board: &Board) -> (Player, Player) {
        let mut white = Player::new(board, Color::White);
        let mut black = Player::new(board, Color::Black);
        white.set_opponent(&black);
        black.set_opponent(&white);
        (white, black)
    }

    // ========================================================================
    // Legal-move table
    // ========================================================================

    #[test]
    fn test_new_player_covers_every_own_piece() {
        let board = Board::new().expect("standard setup");
        let white = Player::new(&board, Color::White);

        assert_eq!(white.legal_moves().len(), 16);
        let total: usize = white.legal_moves().values().map(Vec::len).sum();
        assert_eq!(total, 20, "16 pawn moves and 4 knight moves at the start");
    }

    #[test]
    fn test_captured_piece_pruned_on_refresh() {
        let mut board = Board::from_placements(&[
            (PieceKind::King, Color::White, 1, 5),
            (PieceKind::Rook, Color::White, 1, 1),
            (PieceKind::Knight, Color::Black, 5, 1),
            (PieceKind::King, Color::Black, 8, 5),
        ])
        .expect("valid placement");
        let (_, mut black) = paired(&board);
        assert_eq!(black.legal_moves().len(), 2);

        let rook = board.piece_id_at(sq("a1")).expect("rook");
        board.move_piece(rook, sq("a5"));
        black.get_legal_moves(&board, None);
        assert_eq!(black.legal_moves().len(), 1, "knight entry is pruned");
    }

    #[test]
    fn test_unpaired_player_status_is_an_error() {
        let board = Board::new().expect("standard setup");
        let mut white = Player::new(&board, Color::White);
        assert_eq!(
            white.get_status(&board, None, Color::White),
            Err(RulesError::UnpairedPlayer { color: Color::White })
        );
    }

    // ========================================================================
    // Click handling
    // ========================================================================

    #[test]
    fn test_select_highlights_legal_moves() {
        let mut board = Board::new().expect("standard setup");
        let (mut white, _) = paired(&board);

        assert_eq!(click(&mut white, &mut board, "g1"), ClickOutcome::Selected);
        assert!(board.square(sq("g1")).selected_highlighted);
        assert!(board.square(sq("f3")).highlighted);
        assert!(board.square(sq("h3")).highlighted);
        assert!(!board.square(sq("e2")).highlighted);

        assert_eq!(click(&mut white, &mut board, "g1"), ClickOutcome::Unselected);
        assert!(board.squares().iter().all(|s| !s.highlighted && !s.selected_highlighted));
    }

    #[test]
    fn test_opponent_piece_cannot_be_selected() {
        let mut board = Board::new().expect("standard setup");
        let (mut white, _) = paired(&board);

        assert_eq!(click(&mut white, &mut board, "e7"), ClickOutcome::Ignored);
        assert!(white.selected().is_none());
        assert_eq!(click(&mut white, &mut board, "e5"), ClickOutcome::Ignored);
        assert_eq!(white.play(&mut board, 9, 1), ClickOutcome::Ignored);
    }

    #[test]
    fn test_clicking_own_piece_switches_selection() {
        let mut board = Board::new().expect("standard setup");
        let (mut white, _) = paired(&board);

        click(&mut white, &mut board, "g1");
        assert_eq!(click(&mut white, &mut board, "b1"), ClickOutcome::Selected);
        assert_eq!(white.selected(), board.piece_id_at(sq("b1")));
        assert!(!board.square(sq("f3")).highlighted, "old highlights cleared");
        assert!(board.square(sq("c3")).highlighted);
    }

    #[test]
    fn test_illegal_target_unselects() {
        let mut board = Board::new().expect("standard setup");
        let (mut white, _) = paired(&board);

        click(&mut white, &mut board, "e2");
        assert_eq!(click(&mut white, &mut board, "e5"), ClickOutcome::Unselected);
        assert!(white.selected().is_none());
        assert_eq!(board.piece_at(sq("e2")).map(|p| p.kind()), Some(PieceKind::Pawn));
    }

    #[test]
    fn test_legal_target_moves_and_clears_cache() {
        let mut board = Board::new().expect("standard setup");
        let (mut white, _) = paired(&board);

        click(&mut white, &mut board, "e2");
        assert_eq!(click(&mut white, &mut board, "e4"), ClickOutcome::Moved);
        assert!(board.is_empty(sq("e2")));
        assert!(white.selected().is_none());
        assert!(white.legal_moves().values().all(Vec::is_empty));
        assert!(board.squares().iter().all(|s| !s.highlighted && !s.selected_highlighted));
    }

    // ========================================================================
    // Status
    // ========================================================================

    #[test]
    fn test_back_rank_mate_is_checkmate() {
        let board = Board::from_placements(&[
            (PieceKind::King, Color::White, 1, 7),
            (PieceKind::Pawn, Color::White, 2, 6),
            (PieceKind::Pawn, Color::White, 2, 7),
            (PieceKind::Pawn, Color::White, 2, 8),
            (PieceKind::Rook, Color::Black, 1, 1),
            (PieceKind::King, Color::Black, 8, 5),
        ])
        .expect("valid placement");
        let (mut white, _) = paired(&board);

        let check = crate::rules_engine::MoveValidator.is_in_check(&board, Color::White);
        assert!(check.is_some());
        assert_eq!(
            white.get_status(&board, check.as_ref(), Color::White),
            Ok(GameResult::Checkmate)
        );
    }

    #[test]
    fn test_cornered_king_is_stalemate() {
        let board = Board::from_placements(&[
            (PieceKind::King, Color::Black, 8, 8),
            (PieceKind::Queen, Color::White, 6, 7),
            (PieceKind::King, Color::White, 1, 1),
        ])
        .expect("valid placement");
        let (_, mut black) = paired(&board);

        assert_eq!(black.get_status(&board, None, Color::Black), Ok(GameResult::Stalemate));
    }
}
