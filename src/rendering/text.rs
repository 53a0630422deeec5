//! Text renderer
//!
//! Every cell is three characters wide. Markers follow the same precedence as
//! square highlighting on a graphical board:
//!
//! | Cell    | Meaning                                  |
//! |---------|------------------------------------------|
//! | ` * `   | legal destination, empty                 |
//! | `(p)`   | legal destination, capture               |
//! | `!K!`   | king in check                            |
//! | `[N]`   | selected piece                           |
//! | ` · `   | empty dark square (` . ` with ASCII)     |

use std::fmt::Write as _;

use chess_rules::{Board, Color, GameResult, GameState, Piece, PieceKind, Shade, Square};

use crate::core::GameSettings;

/// Draws boards, the promotion dialogue and end banners as plain text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRenderer {
    unicode: bool,
    coordinates: bool,
    legal_moves: bool,
    flip_for_black: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::from_settings(&GameSettings::default())
    }
}

impl TextRenderer {
    pub fn from_settings(settings: &GameSettings) -> Self {
        Self {
            unicode: settings.unicode_pieces,
            coordinates: settings.show_coordinates,
            legal_moves: settings.show_legal_moves,
            flip_for_black: settings.flip_for_black,
        }
    }

    /// Plain letters and dots regardless of settings
    pub fn ascii(mut self) -> Self {
        self.unicode = false;
        self
    }

    /// Full frame: board, then the promotion dialogue, end banner or turn line
    pub fn render(&self, game: &GameState) -> String {
        let perspective = if self.flip_for_black { game.current_turn() } else { Color::White };
        let mut frame = self.draw_board(game.board(), perspective);

        if let Some(dialogue) = self.draw_promotion_dialogue(game.board()) {
            frame.push('\n');
            frame.push_str(&dialogue);
        } else if game.ended() {
            frame.push('\n');
            frame.push_str(&self.draw_game_end(game.result(), game.winner()));
        } else {
            let _ = write!(frame, "\n{} to move", game.current_turn());
            if game.result() == GameResult::Check {
                frame.push_str(" (check)");
            }
        }
        frame
    }

    /// Board seen from `perspective`'s side, one rank per line
    pub fn draw_board(&self, board: &Board, perspective: Color) -> String {
        let mut rows: Vec<&[Square]> = board.rows().collect();
        let mut files: Vec<char> = ('a'..='h').collect();
        if perspective == Color::Black {
            rows.reverse();
            files.reverse();
        }

        let mut lines = Vec::with_capacity(9);
        for row in rows {
            let mut squares: Vec<&Square> = row.iter().collect();
            if perspective == Color::Black {
                squares.reverse();
            }
            let mut line = String::new();
            if self.coordinates {
                let _ = write!(line, "{} ", squares[0].row());
            }
            for square in squares {
                line.push_str(&self.draw_square(board, square));
            }
            lines.push(line.trim_end().to_string());
        }

        if self.coordinates {
            let letters: String = files.iter().map(|file| format!(" {} ", file)).collect();
            lines.push(format!("  {}", letters.trim_end()));
        }
        lines.join("\n")
    }

    fn draw_square(&self, board: &Board, square: &Square) -> String {
        let glyph = match square.piece() {
            Some(id) => self.glyph(board.piece(id)),
            None if square.shade() == Shade::Dark => {
                if self.unicode {
                    '·'
                } else {
                    '.'
                }
            }
            None => ' ',
        };

        if square.highlighted && self.legal_moves {
            if square.is_empty() {
                " * ".to_string()
            } else {
                format!("({})", glyph)
            }
        } else if square.check_highlighted {
            format!("!{}!", glyph)
        } else if square.selected_highlighted {
            format!("[{}]", glyph)
        } else {
            format!(" {} ", glyph)
        }
    }

    fn glyph(&self, piece: &Piece) -> char {
        if !self.unicode {
            return piece.symbol();
        }
        match (piece.color(), piece.kind()) {
            (Color::White, PieceKind::King) => '♔',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::Black, PieceKind::King) => '♚',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Pawn) => '♟',
        }
    }

    /// The four promotion choices stacked on the pawn's file, back rank first
    pub fn draw_promotion_dialogue(&self, board: &Board) -> Option<String> {
        let pawn = board.piece(board.promoting_pawn()?);
        let square = pawn.square()?;
        let color = pawn.color();

        let choices: Vec<String> = PieceKind::PROMOTION_CHOICES
            .iter()
            .enumerate()
            .filter_map(|(depth, kind)| {
                let target = square.offset(-color.forward() * depth as i8, 0)?;
                Some(format!("{} {}", target, kind))
            })
            .collect();
        Some(format!("{} promotes on {}: click {}", color, square, choices.join(", ")))
    }

    /// Result line, winner line on checkmate, restart hint
    pub fn draw_game_end(&self, result: GameResult, winner: Option<Color>) -> String {
        let mut banner = result.message().to_string();
        if let Some(winner) = winner {
            let _ = write!(banner, "\n{} wins!!", winner);
        }
        banner.push_str("\nType 'restart' to play again");
        banner
    }
}
