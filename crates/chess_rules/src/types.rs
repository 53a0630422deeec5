//! Core value types shared by every part of the rules engine
//!
//! Colors, piece kinds and result codes are closed enumerations, so that
//! comparisons are exhaustive-checked and illegal states cannot be spelled.

use std::fmt;
use std::ops::Not;

/// Side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// The other side
    #[inline]
    pub fn opponent(self) -> Color {
        !self
    }

    /// Row direction pawns of this color advance in (+1 for White, -1 for Black)
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank the back-row pieces start on
    #[inline]
    pub fn home_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 8,
        }
    }

    /// Rank the pawns start on (and may double-step from)
    #[inline]
    pub fn pawn_rank(self) -> u8 {
        match self {
            Color::White => 2,
            Color::Black => 7,
        }
    }

    /// Farthest rank, where pawns promote
    #[inline]
    pub fn promotion_rank(self) -> u8 {
        self.opponent().home_rank()
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

impl Not for Color {
    type Output = Color;

    fn not(self) -> Self::Output {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The six movable piece variants
///
/// The probe variant used for attack detection is [`crate::piece::Dummy`],
/// which impersonates one of these kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Piece classes a pawn may promote to, in dialogue order
    pub const PROMOTION_CHOICES: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Lowercase letter used in the ASCII board
    pub fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Bishops, rooks and queens attack along rays that can be blocked
    pub fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }

    /// Knights and bishops
    pub fn is_minor(self) -> bool {
        matches!(self, PieceKind::Knight | PieceKind::Bishop)
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Color of a board square (a1 is dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shade {
    Light,
    Dark,
}

/// Result tag surfaced to the renderer after every completed half-move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameResult {
    /// Game goes on, side to move is not in check
    #[default]
    Continue,
    /// Side to move is in check but has legal moves
    Check,
    /// Side to move is in check with no legal moves
    Checkmate,
    /// Side to move has no legal moves and is not in check
    Stalemate,
    /// Neither side can force mate with the remaining material
    InsufficientMaterial,
}

impl GameResult {
    /// Check if this result ends the game
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GameResult::Checkmate | GameResult::Stalemate | GameResult::InsufficientMaterial
        )
    }

    /// Banner text for the result
    pub fn message(self) -> &'static str {
        match self {
            GameResult::Continue => "Continue",
            GameResult::Check => "Check",
            GameResult::Checkmate => "Checkmate",
            GameResult::Stalemate => "Stalemate",
            GameResult::InsufficientMaterial => "Draw by insufficient material",
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// What a single click did to the clicking player's state
///
/// Every variant corresponds to the neutral `Continue` result at the game
/// level; only [`ClickOutcome::completes_turn`] decides whether the turn token
/// passes to the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Off-board click, empty square with nothing selected, opponent piece,
    /// or a promotion click that does not map to a choice
    Ignored,
    /// A piece is now selected
    Selected,
    /// The selection was dropped
    Unselected,
    /// A move was executed and the half-move is complete
    Moved,
    /// A pawn reached the last rank; the turn is suspended until promotion
    PromotionPending,
    /// The pending pawn was replaced and the half-move is complete
    Promoted(PieceKind),
}

impl ClickOutcome {
    pub fn completes_turn(self) -> bool {
        matches!(self, ClickOutcome::Moved | ClickOutcome::Promoted(_))
    }
}
