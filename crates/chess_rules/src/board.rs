//! Board arena
//!
//! The board is the sole owner of two flat arenas:
//! - 64 [`Square`]s, indexed by [`SquareId`], each holding an optional [`PieceId`]
//! - every [`Piece`] created during the game, indexed by [`PieceId`], each
//!   holding an optional `SquareId` back-reference
//!
//! Handles replace the square ↔ piece reference cycle, so no reference
//! counting is needed and the whole board is cheaply `Clone`able, which the
//! legality filter relies on to simulate moves.
//!
//! # Invariants
//!
//! - A square holds at most one piece, and a piece's `square` and that
//!   square's `piece` always agree.
//! - Exactly one king per color exists for the lifetime of the board. Kings are
//!   never captured, only checked.
//! - `promoting_pawn` is set only while a promotion choice is outstanding.

use std::fmt;

use tracing::debug;

use crate::error::{RulesError, RulesResult};
use crate::piece::{Piece, PieceId};
use crate::square::{Square, SquareId};
use crate::types::{Color, PieceKind};

/// Back-rank layout, from the a-file to the h-file
pub const HOME_PIECES: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A piece to place on a custom board: kind, color, row, column
pub type Placement = (PieceKind, Color, u8, u8);

#[derive(Debug, Clone)]
pub struct Board {
    squares: Vec<Square>,
    pieces: Vec<Piece>,
    kings: [PieceId; 2],
    promoting_pawn: Option<PieceId>,
}

impl Board {
    /// Standard starting position
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::MissingKing`] if a king does not end up on its
    /// home square, which would mean the setup tables are corrupted.
    pub fn new() -> RulesResult<Self> {
        let mut placements = Vec::with_capacity(32);
        for color in Color::ALL {
            for (index, kind) in HOME_PIECES.iter().enumerate() {
                placements.push((*kind, color, color.home_rank(), index as u8 + 1));
                placements.push((PieceKind::Pawn, color, color.pawn_rank(), index as u8 + 1));
            }
        }
        // a1 before a2 before b1 ... keeps white's arena slots in rank order
        placements.sort_by_key(|&(_, color, row, column)| (color, row, column));

        let board = Self::from_placements(&placements)?;
        for color in Color::ALL {
            let home = SquareId::new(color.home_rank(), 5);
            let king_home = home.and_then(|sq| board.piece_at(sq));
            if !matches!(king_home, Some(p) if p.kind() == PieceKind::King && p.color() == color) {
                return Err(RulesError::MissingKing {
                    color,
                    square: home.map(SquareId::name).unwrap_or_default(),
                });
            }
        }
        Ok(board)
    }

    /// Arbitrary position
    ///
    /// Pieces standing on their original square count as unmoved (so castling
    /// rights follow from the placement); every other piece counts as having
    /// moved once.
    ///
    /// # Errors
    ///
    /// - [`RulesError::InvalidSquare`] for a row or column outside 1..=8
    /// - [`RulesError::OccupiedSquare`] when two placements share a square
    /// - [`RulesError::KingCount`] unless each color has exactly one king
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_rules::{Board, Color, PieceKind};
    ///
    /// let board = Board::from_placements(&[
    ///     (PieceKind::King, Color::White, 1, 5),
    ///     (PieceKind::King, Color::Black, 8, 5),
    ///     (PieceKind::Rook, Color::White, 1, 8),
    /// ])
    /// .unwrap();
    /// assert_eq!(board.to_ascii().lines().last(), Some("....K..R"));
    /// ```
    pub fn from_placements(placements: &[Placement]) -> RulesResult<Self> {
        let mut squares: Vec<Square> = SquareId::all().map(Square::new).collect();
        let mut pieces: Vec<Piece> = Vec::with_capacity(placements.len());
        let mut kings: [Vec<PieceId>; 2] = [Vec::new(), Vec::new()];

        for &(kind, color, row, column) in placements {
            let square =
                SquareId::new(row, column).ok_or(RulesError::InvalidSquare { row, column })?;
            if !squares[square.index()].is_empty() {
                return Err(RulesError::OccupiedSquare {
                    square: square.name(),
                });
            }

            let id = PieceId(pieces.len() as u16);
            let move_count = if is_original_square(kind, color, square) { 0 } else { 1 };
            pieces.push(Piece::new(kind, color, square, move_count));
            squares[square.index()].set_piece(Some(id));
            if kind == PieceKind::King {
                kings[color_index(color)].push(id);
            }
        }

        for color in Color::ALL {
            let found = kings[color_index(color)].len();
            if found != 1 {
                return Err(RulesError::KingCount { color, found });
            }
        }

        Ok(Self {
            squares,
            pieces,
            kings: [kings[0][0], kings[1][0]],
            promoting_pawn: None,
        })
    }

    /// Square at a 1-based row and column, `None` off the board
    pub fn get_square(&self, row: u8, column: u8) -> Option<&Square> {
        SquareId::new(row, column).map(|id| self.square(id))
    }

    pub fn square(&self, id: SquareId) -> &Square {
        &self.squares[id.index()]
    }

    pub(crate) fn square_mut(&mut self, id: SquareId) -> &mut Square {
        &mut self.squares[id.index()]
    }

    /// All squares, a1 first
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Ranks from 8 down to 1, each from the a-file to the h-file
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(8).rev()
    }

    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.index()]
    }

    pub fn piece_id_at(&self, square: SquareId) -> Option<PieceId> {
        self.square(square).piece()
    }

    pub fn piece_at(&self, square: SquareId) -> Option<&Piece> {
        self.piece_id_at(square).map(|id| self.piece(id))
    }

    pub fn is_empty(&self, square: SquareId) -> bool {
        self.square(square).is_empty()
    }

    /// Handle of `color`'s king, fixed for the board's lifetime
    pub fn king(&self, color: Color) -> PieceId {
        self.kings[color_index(color)]
    }

    pub fn king_square(&self, color: Color) -> Option<SquareId> {
        self.piece(self.king(color)).square()
    }

    /// On-board pieces of one color, in arena order
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces
            .iter()
            .enumerate()
            .filter(move |(_, piece)| piece.color() == color && !piece.is_captured())
            .map(|(index, piece)| (PieceId(index as u16), piece))
    }

    /// Pawn waiting for its promotion choice
    pub fn promoting_pawn(&self) -> Option<PieceId> {
        self.promoting_pawn
    }

    pub(crate) fn set_promoting_pawn(&mut self, pawn: Option<PieceId>) {
        self.promoting_pawn = pawn;
    }

    /// Ranks 8 to 1, files a to h, uppercase White, lowercase Black, `.` empty
    pub fn to_ascii(&self) -> String {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|square| square.piece().map_or('.', |id| self.piece(id).symbol()))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Create a piece on an empty square (promotion)
    pub(crate) fn add_piece(
        &mut self,
        kind: PieceKind,
        color: Color,
        square: SquareId,
        move_count: u32,
    ) -> PieceId {
        debug_assert!(self.is_empty(square), "add_piece onto occupied {square}");
        let id = PieceId(self.pieces.len() as u16);
        self.pieces.push(Piece::new(kind, color, square, move_count));
        self.square_mut(square).set_piece(Some(id));
        id
    }

    /// Take a piece off the board, keeping its arena slot
    pub(crate) fn remove(&mut self, id: PieceId) {
        if let Some(square) = self.piece(id).square() {
            self.square_mut(square).set_piece(None);
        }
        self.piece_mut(id).set_square(None);
    }

    /// Move a piece's occupancy to `to`, removing whatever stood there
    ///
    /// Returns the removed piece.
    pub(crate) fn relocate(&mut self, id: PieceId, to: SquareId) -> Option<PieceId> {
        let captured = self.piece_id_at(to).filter(|&other| other != id);
        if let Some(victim) = captured {
            debug!("[BOARD] {} captured on {}", self.piece(victim), to);
            self.remove(victim);
        }
        if let Some(from) = self.piece(id).square() {
            self.square_mut(from).set_piece(None);
        }
        self.square_mut(to).set_piece(Some(id));
        self.piece_mut(id).set_square(Some(to));
        captured
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ascii())
    }
}

fn color_index(color: Color) -> usize {
    match color {
        Color::White => 0,
        Color::Black => 1,
    }
}

fn is_original_square(kind: PieceKind, color: Color, square: SquareId) -> bool {
    match kind {
        PieceKind::Pawn => square.row() == color.pawn_rank(),
        _ => {
            square.row() == color.home_rank() && HOME_PIECES[square.column() as usize - 1] == kind
        }
    }
}
