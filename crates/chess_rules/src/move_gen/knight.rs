//! Knight move generation
//!
//! Knights jump in an L-shape and ignore blockers; only landing on a friendly
//! piece is excluded.

use crate::board::Board;
use crate::square::SquareId;
use crate::types::Color;

pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(super) fn knight_destinations(board: &Board, color: Color, from: SquareId) -> Vec<SquareId> {
    KNIGHT_DELTAS
        .iter()
        .filter_map(|&(d_row, d_column)| from.offset(d_row, d_column))
        .filter(|&square| board.piece_at(square).map_or(true, |piece| piece.color() != color))
        .collect()
}
