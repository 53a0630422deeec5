//! Turn sequencing
//!
//! [`GameState`] owns the board and both players and holds the turn token.
//! Each click goes to the player whose turn it is; when that click completes a
//! half-move the token passes and the new position is classified for the side
//! about to move:
//!
//! 1. flip `current_turn`
//! 2. close the new side's en-passant windows
//! 3. ask the [`MoveValidator`] whether the new side's king is in check, and
//!    flag its square for the renderer
//! 4. refresh the new side's legal moves and classify the position
//!
//! A click that only changes the selection, or that leaves a promotion
//! pending, does not touch the turn or the result.

use tracing::{debug, error, info};

use crate::board::Board;
use crate::error::RulesResult;
use crate::player::Player;
use crate::rules_engine::MoveValidator;
use crate::types::{ClickOutcome, Color, GameResult};

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    white_player: Player,
    black_player: Player,
    current_turn: Color,
    result: GameResult,
    ended: bool,
    validator: MoveValidator,
}

impl GameState {
    /// New game from the standard starting position, White to move
    ///
    /// # Errors
    ///
    /// Propagates [`crate::RulesError`] from a corrupted board setup.
    pub fn new() -> RulesResult<Self> {
        Self::from_board(Board::new()?, Color::White)
    }

    /// Game from an arbitrary position with `to_move` holding the turn
    ///
    /// The position is classified immediately, so a board that starts in
    /// checkmate or stalemate is already ended.
    pub fn from_board(board: Board, to_move: Color) -> RulesResult<Self> {
        let mut white_player = Player::new(&board, Color::White);
        let mut black_player = Player::new(&board, Color::Black);
        white_player.set_opponent(&black_player);
        black_player.set_opponent(&white_player);

        let mut state = Self {
            board,
            white_player,
            black_player,
            current_turn: to_move,
            result: GameResult::Continue,
            ended: false,
            validator: MoveValidator,
        };
        state.classify()?;
        info!("[GAME] New game, {} to move", to_move);
        Ok(state)
    }

    /// Replace the board and players with a fresh standard game
    pub fn reset(&mut self) -> RulesResult<()> {
        *self = Self::new()?;
        info!("[GAME] Game reset");
        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Color {
        self.current_turn
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Set once the result is checkmate, stalemate or a draw
    pub fn ended(&self) -> bool {
        self.ended
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current_turn)
    }

    pub fn player(&self, color: Color) -> &Player {
        match color {
            Color::White => &self.white_player,
            Color::Black => &self.black_player,
        }
    }

    /// Side that delivered checkmate, `None` for any other result
    pub fn winner(&self) -> Option<Color> {
        (self.result == GameResult::Checkmate).then(|| self.current_turn.opponent())
    }

    /// Feed one board click to the side to move
    ///
    /// Returns the (possibly unchanged) result. Clicks after the game has
    /// ended are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_rules::{Color, GameResult, GameState};
    ///
    /// let mut game = GameState::new().unwrap();
    /// game.click(2, 5); // e2
    /// assert_eq!(game.click(4, 5), GameResult::Continue); // e4
    /// assert_eq!(game.current_turn(), Color::Black);
    /// ```
    pub fn click(&mut self, row: u8, column: u8) -> GameResult {
        if self.ended {
            debug!("[GAME] Click on ({}, {}) ignored, game is over", row, column);
            return self.result;
        }

        let player = match self.current_turn {
            Color::White => &mut self.white_player,
            Color::Black => &mut self.black_player,
        };
        let outcome = player.play(&mut self.board, row, column);
        debug!("[GAME] {} click ({}, {}): {:?}", self.current_turn, row, column, outcome);

        if outcome.completes_turn() {
            self.advance_turn();
        } else if outcome == ClickOutcome::PromotionPending {
            info!("[GAME] {} to choose a promotion piece", self.current_turn);
        }
        self.result
    }

    fn advance_turn(&mut self) {
        self.current_turn = self.current_turn.opponent();
        debug!("[GAME] Turn passes to {}", self.current_turn);

        if let Err(e) = self.classify() {
            error!("[GAME] Failed to classify position: {}", e);
            self.result = GameResult::Continue;
            self.ended = false;
        }
    }

    /// Check detection and status for the side to move
    fn classify(&mut self) -> RulesResult<()> {
        let color = self.current_turn;
        let player = match color {
            Color::White => &mut self.white_player,
            Color::Black => &mut self.black_player,
        };
        player.begin_turn(&mut self.board);

        let check = self.validator.is_in_check(&self.board, color);
        if check.is_some() {
            if let Some(square) = self.board.king_square(color) {
                self.board.square_mut(square).check_highlighted = true;
            }
        }

        let status = player.get_status(&self.board, check.as_ref(), color)?;
        self.result = match status {
            GameResult::Continue if check.is_some() => {
                info!("[GAME] {} is in check", color);
                GameResult::Check
            }
            other => other,
        };
        self.ended = self.result.is_terminal();
        if self.ended {
            info!("[GAME] Game over: {}", self.result);
        }
        Ok(())
    }
}
