//! Insufficient-material detection

use crate::board::Board;
use crate::types::{Color, PieceKind, Shade};

/// Whether neither side can ever force checkmate
///
/// Any pawn, rook or queen on the board means there is enough material.
/// Otherwise the position is dead when at most one minor piece remains, or
/// when every remaining minor piece is a bishop and they all stand on squares
/// of the same shade.
pub fn is_insufficient_material(board: &Board) -> bool {
    let mut minors: Vec<(PieceKind, Shade)> = Vec::new();

    for color in Color::ALL {
        for (_, piece) in board.pieces_of(color) {
            let Some(square) = piece.square() else {
                continue;
            };
            match piece.kind() {
                PieceKind::King => {}
                PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
                kind => minors.push((kind, square.shade())),
            }
        }
    }

    match minors.as_slice() {
        [] | [_] => true,
        [(_, shade), ..] => minors
            .iter()
            .all(|&(kind, other)| kind == PieceKind::Bishop && other == *shade),
    }
}
