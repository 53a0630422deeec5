//! Pieces and the attack-detection probe
//!
//! A [`Piece`] lives in the board's piece arena and is addressed by a
//! [`PieceId`]. Its `square` is the back-reference into the square arena; a
//! captured piece keeps its arena slot with `square == None` so that handles
//! held by players stay valid until they prune them.
//!
//! [`Dummy`] is the seventh, never-placed variant. It impersonates one of the
//! six real kinds and answers "what would a piece of this kind see from here"
//! by reusing that kind's destination generation, without any pin filtering or
//! check constraints.

use std::fmt;

use crate::board::Board;
use crate::move_gen;
use crate::square::SquareId;
use crate::types::{Color, PieceKind};

/// Handle into the board's piece arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) u16);

impl PieceId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece owned by the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    square: Option<SquareId>,
    move_count: u32,
    en_passant: bool,
}

impl Piece {
    pub(crate) fn new(kind: PieceKind, color: Color, square: SquareId, move_count: u32) -> Self {
        Self {
            kind,
            color,
            square: Some(square),
            move_count,
            en_passant: false,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Current square, `None` once captured or promoted away
    pub fn square(&self) -> Option<SquareId> {
        self.square
    }

    pub fn is_captured(&self) -> bool {
        self.square.is_none()
    }

    /// Number of moves this piece has made (castling rights depend on zero)
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn has_moved(&self) -> bool {
        self.move_count > 0
    }

    /// Pawn only: true for the single half-move after a two-square advance
    pub fn en_passant(&self) -> bool {
        self.en_passant
    }

    /// ASCII symbol, uppercase for White
    pub fn symbol(&self) -> char {
        match self.color {
            Color::White => self.kind.symbol().to_ascii_uppercase(),
            Color::Black => self.kind.symbol(),
        }
    }

    pub(crate) fn set_square(&mut self, square: Option<SquareId>) {
        self.square = square;
    }

    pub(crate) fn record_move(&mut self) {
        self.move_count += 1;
    }

    pub(crate) fn set_en_passant(&mut self, eligible: bool) {
        self.en_passant = eligible;
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.square {
            Some(square) => write!(f, "{} {} on {}", self.color, self.kind, square),
            None => write!(f, "{} {} (captured)", self.color, self.kind),
        }
    }
}

/// Transient probe impersonating a piece kind on a square
///
/// Created only inside attack queries and dropped right after; it never
/// enters the board's arena and is never rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dummy {
    impersonates: PieceKind,
    color: Color,
    square: SquareId,
}

impl Dummy {
    pub fn new(impersonates: PieceKind, color: Color, square: SquareId) -> Self {
        Self {
            impersonates,
            color,
            square,
        }
    }

    pub fn impersonates(&self) -> PieceKind {
        self.impersonates
    }

    /// Destinations a `impersonates` of `color` standing on `square` could
    /// reach, stopping each ray at the first occupied square (included only
    /// if it holds an enemy piece)
    pub fn possible_moves(&self, board: &Board) -> Vec<SquareId> {
        move_gen::destinations(board, self.impersonates, self.color, self.square)
    }
}
