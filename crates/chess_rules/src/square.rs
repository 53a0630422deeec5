//! Board squares
//!
//! A [`SquareId`] is the fixed identity of a cell on the 8×8 grid (row and
//! column, both 1-based). A [`Square`] is the cell itself as stored in the
//! board's arena: its identity, the handle of the piece standing on it, and
//! the derived highlight flags the renderer reads.

use std::fmt;

use crate::piece::PieceId;
use crate::types::Shade;

/// Identity of a square, packed as `(row - 1) * 8 + (column - 1)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SquareId(u8);

impl SquareId {
    /// Build a square from a 1-based row and column, `None` if off the board
    #[inline]
    pub fn new(row: u8, column: u8) -> Option<Self> {
        if (1..=8).contains(&row) && (1..=8).contains(&column) {
            Some(SquareId((row - 1) * 8 + (column - 1)))
        } else {
            None
        }
    }

    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < 64);
        SquareId(index as u8)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.0 / 8 + 1
    }

    #[inline]
    pub fn column(self) -> u8 {
        self.0 % 8 + 1
    }

    /// Square reached by stepping `d_row` rows and `d_column` columns, if on the board
    #[inline]
    pub fn offset(self, d_row: i8, d_column: i8) -> Option<SquareId> {
        let row = self.row() as i8 + d_row;
        let column = self.column() as i8 + d_column;
        if row < 1 || column < 1 {
            return None;
        }
        SquareId::new(row as u8, column as u8)
    }

    /// Algebraic name, e.g. `"e4"`
    pub fn name(self) -> String {
        format!("{}{}", (b'a' + self.column() - 1) as char, self.row())
    }

    /// Parse an algebraic name such as `"e4"` (case-insensitive file letter)
    pub fn parse(name: &str) -> Option<SquareId> {
        let bytes = name.trim().as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&bytes[1]) {
            return None;
        }
        SquareId::new(bytes[1] - b'0', file - b'a' + 1)
    }

    /// a1 is dark, h1 is light
    pub fn shade(self) -> Shade {
        if (self.row() + self.column()) % 2 == 0 {
            Shade::Dark
        } else {
            Shade::Light
        }
    }

    /// Squares strictly between `self` and `other` when they share a rank,
    /// file or diagonal; empty otherwise
    pub fn between(self, other: SquareId) -> Vec<SquareId> {
        let d_row = other.row() as i8 - self.row() as i8;
        let d_column = other.column() as i8 - self.column() as i8;
        let aligned = d_row == 0 || d_column == 0 || d_row.abs() == d_column.abs();
        if !aligned || self == other {
            return Vec::new();
        }

        let step = (d_row.signum(), d_column.signum());
        let mut squares = Vec::new();
        let mut current = self.offset(step.0, step.1);
        while let Some(square) = current {
            if square == other {
                break;
            }
            squares.push(square);
            current = square.offset(step.0, step.1);
        }
        squares
    }

    /// All 64 squares, a1 first
    pub fn all() -> impl Iterator<Item = SquareId> {
        (0..64).map(SquareId::from_index)
    }
}

impl fmt::Display for SquareId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// A cell of the board arena
#[derive(Debug, Clone)]
pub struct Square {
    id: SquareId,
    piece: Option<PieceId>,
    /// Legal destination of the currently selected piece
    pub highlighted: bool,
    /// Holds the currently selected piece
    pub selected_highlighted: bool,
    /// Holds a king that is in check
    pub check_highlighted: bool,
}

impl Square {
    pub(crate) fn new(id: SquareId) -> Self {
        Self {
            id,
            piece: None,
            highlighted: false,
            selected_highlighted: false,
            check_highlighted: false,
        }
    }

    pub fn id(&self) -> SquareId {
        self.id
    }

    pub fn row(&self) -> u8 {
        self.id.row()
    }

    pub fn column(&self) -> u8 {
        self.id.column()
    }

    pub fn name(&self) -> String {
        self.id.name()
    }

    pub fn shade(&self) -> Shade {
        self.id.shade()
    }

    /// Handle of the piece standing here
    pub fn piece(&self) -> Option<PieceId> {
        self.piece
    }

    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    pub(crate) fn set_piece(&mut self, piece: Option<PieceId>) {
        self.piece = piece;
    }
}

impl PartialEq for Square {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Square {}
