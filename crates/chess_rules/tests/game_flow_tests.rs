//! Game Flow Integration Tests
//!
//! Tests for full game flows driven through clicks, including:
//! - Turn alternation and selection handling
//! - Check, checkmate, stalemate and draw classification
//! - En passant window and promotion gating
//! - Legality closure over generated moves

use chess_rules::{Board, Color, GameResult, GameState, MoveValidator, PieceKind, SquareId};

fn sq(name: &str) -> SquareId {
    SquareId::parse(name).expect("square name")
}

/// Click a sequence of squares by name, returning the last result
fn click_all(game: &mut GameState, squares: &[&str]) -> GameResult {
    let mut result = game.result();
    for name in squares {
        let square = sq(name);
        result = game.click(square.row(), square.column());
    }
    result
}

fn position(placements: &[(PieceKind, Color, &str)]) -> Board {
    let placements: Vec<_> = placements
        .iter()
        .map(|&(kind, color, name)| {
            let square = sq(name);
            (kind, color, square.row(), square.column())
        })
        .collect();
    Board::from_placements(&placements).expect("valid test position")
}

/// Every cached move of the side to move keeps its own king safe
fn assert_legality_closure(game: &GameState) {
    let board = game.board();
    let player = game.current_player();
    for (&id, moves) in player.legal_moves() {
        for &target in moves {
            let mut scratch = board.clone();
            scratch.move_piece(id, target);
            assert!(
                MoveValidator.is_in_check(&scratch, player.color()).is_none(),
                "{} to {} leaves the {} king in check",
                board.piece(id),
                target,
                player.color()
            );
        }
    }
}

// ============================================================================
// Golden Game
// ============================================================================

const SCHOLARS_MATE_FINAL: &str = "\
r.bqkb.r
pppp.Qpp
..n..n..
....p...
..B.P...
........
PPPP.PPP
RNB.K.NR";

#[test]
fn test_scholars_mate() {
    //! e4 e5 Bc4 Nc6 Qh5 Nf6 Qxf7#
    let mut game = GameState::new().expect("standard game");

    let opening = ["e2", "e4", "e7", "e5", "f1", "c4", "b8", "c6", "d1", "h5", "g8", "f6"];
    assert_eq!(click_all(&mut game, &opening), GameResult::Continue);
    assert_eq!(game.current_turn(), Color::White);
    assert!(!game.ended());
    assert_legality_closure(&game);

    assert_eq!(click_all(&mut game, &["h5", "f7"]), GameResult::Checkmate);
    assert!(game.ended());
    assert_eq!(game.winner(), Some(Color::White));
    assert_eq!(game.current_turn(), Color::Black, "the mated side holds the turn");
    assert!(game.board().square(sq("e8")).check_highlighted);
    assert_eq!(game.board().to_ascii(), SCHOLARS_MATE_FINAL);

    let frozen = game.board().to_ascii();
    click_all(&mut game, &["e8", "e7"]);
    assert_eq!(game.board().to_ascii(), frozen, "no moves after the game has ended");
}

#[test]
fn test_fools_mate_black_wins() {
    let mut game = GameState::new().expect("standard game");
    let result = click_all(&mut game, &["f2", "f3", "e7", "e5", "g2", "g4", "d8", "h4"]);
    assert_eq!(result, GameResult::Checkmate);
    assert_eq!(game.winner(), Some(Color::Black));
}

// ============================================================================
// Turn Alternation Tests
// ============================================================================

#[test]
fn test_turns_alternate_only_on_completed_moves() {
    let mut game = GameState::new().expect("standard game");

    click_all(&mut game, &["e7", "e5"]);
    assert_eq!(game.current_turn(), Color::White, "Black cannot move on White's turn");
    assert!(game.board().piece_at(sq("e7")).is_some());

    click_all(&mut game, &["g1", "b1", "b1"]);
    assert_eq!(game.current_turn(), Color::White, "selection changes keep the turn");

    click_all(&mut game, &["b1", "c3"]);
    assert_eq!(game.current_turn(), Color::Black);
}

#[test]
fn test_illegal_move_is_rejected_by_play() {
    //! Pinned knight on d2 cannot leave the a5-e1 diagonal
    let board = position(&[
        (PieceKind::King, Color::White, "e1"),
        (PieceKind::Knight, Color::White, "d2"),
        (PieceKind::Bishop, Color::Black, "a5"),
        (PieceKind::King, Color::Black, "h8"),
    ]);
    let mut game = GameState::from_board(board, Color::White).expect("classified");
    let before = game.board().to_ascii();

    click_all(&mut game, &["d2", "f3"]);
    assert_eq!(game.board().to_ascii(), before);
    assert_eq!(game.current_turn(), Color::White);
    assert!(game.current_player().selected().is_none(), "illegal target unselects");
}

#[test]
fn test_round_trip_restores_positions_not_rights() {
    let mut game = GameState::new().expect("standard game");
    let start = game.board().to_ascii();

    click_all(&mut game, &["g1", "f3", "g8", "f6", "f3", "g1", "f6", "g8"]);
    assert_eq!(game.board().to_ascii(), start);
    assert_eq!(game.current_turn(), Color::White);

    let knight = game.board().piece_at(sq("g1")).expect("knight back home");
    assert_eq!(knight.move_count(), 2, "move history is one-way");
}

// ============================================================================
// Check and Status Tests
// ============================================================================

#[test]
fn test_check_is_reported_and_cleared() {
    let mut game = GameState::new().expect("standard game");

    let result = click_all(&mut game, &["e2", "e4", "f7", "f6", "d1", "h5"]);
    assert_eq!(result, GameResult::Check);
    assert!(!game.ended(), "check does not end the game");
    assert!(game.board().square(sq("e8")).check_highlighted);

    let result = click_all(&mut game, &["g7", "g6"]);
    assert_eq!(result, GameResult::Continue);
    assert!(!game.board().square(sq("e8")).check_highlighted, "mover clears its check flag");
}

#[test]
fn test_double_check_leaves_only_king_moves() {
    let board = position(&[
        (PieceKind::King, Color::White, "e1"),
        (PieceKind::Queen, Color::White, "d1"),
        (PieceKind::Rook, Color::White, "a2"),
        (PieceKind::Rook, Color::Black, "e8"),
        (PieceKind::Knight, Color::Black, "d3"),
        (PieceKind::King, Color::Black, "h8"),
    ]);
    let game = GameState::from_board(board, Color::White).expect("classified");
    assert_eq!(game.result(), GameResult::Check);

    let king = game.board().king(Color::White);
    for (&id, moves) in game.current_player().legal_moves() {
        if id == king {
            assert!(!moves.is_empty(), "king must have an escape");
        } else {
            assert!(moves.is_empty(), "{} must not move in double check", game.board().piece(id));
        }
    }
    assert_legality_closure(&game);
}

#[test]
fn test_no_moves_is_exactly_mate_or_stalemate() {
    let positions = [
        (
            position(&[
                (PieceKind::King, Color::Black, "h8"),
                (PieceKind::Queen, Color::White, "g7"),
                (PieceKind::King, Color::White, "f6"),
            ]),
            GameResult::Checkmate,
        ),
        (
            position(&[
                (PieceKind::King, Color::Black, "h8"),
                (PieceKind::Queen, Color::White, "g6"),
                (PieceKind::King, Color::White, "a1"),
            ]),
            GameResult::Stalemate,
        ),
        (
            position(&[
                (PieceKind::King, Color::Black, "a8"),
                (PieceKind::Pawn, Color::Black, "a7"),
                (PieceKind::Pawn, Color::White, "a6"),
                (PieceKind::King, Color::White, "c7"),
            ]),
            GameResult::Stalemate,
        ),
    ];

    for (board, expected) in positions {
        let in_check = MoveValidator.is_in_check(&board, Color::Black).is_some();
        let game = GameState::from_board(board, Color::Black).expect("classified");
        assert!(game.current_player().legal_moves().values().all(Vec::is_empty));
        assert_eq!(game.result(), expected);
        assert_eq!(game.result() == GameResult::Checkmate, in_check);
        assert!(game.ended());
    }
}

#[test]
fn test_capture_into_insufficient_material() {
    let board = position(&[
        (PieceKind::King, Color::White, "e1"),
        (PieceKind::Bishop, Color::White, "c1"),
        (PieceKind::Pawn, Color::Black, "g5"),
        (PieceKind::King, Color::Black, "h8"),
    ]);
    let mut game = GameState::from_board(board, Color::White).expect("classified");
    assert_eq!(game.result(), GameResult::Continue);

    let result = click_all(&mut game, &["c1", "g5"]);
    assert_eq!(result, GameResult::InsufficientMaterial);
    assert_eq!(result.message(), "Draw by insufficient material");
    assert!(game.ended());
    assert!(game.winner().is_none());
}

#[test]
fn test_same_shade_bishops_draw_opposite_shades_play_on() {
    let same = position(&[
        (PieceKind::King, Color::White, "e1"),
        (PieceKind::Bishop, Color::White, "c1"),
        (PieceKind::Bishop, Color::Black, "f8"),
        (PieceKind::King, Color::Black, "a8"),
    ]);
    let game = GameState::from_board(same, Color::White).expect("classified");
    assert_eq!(game.result(), GameResult::InsufficientMaterial);

    let opposite = position(&[
        (PieceKind::King, Color::White, "e1"),
        (PieceKind::Bishop, Color::White, "c1"),
        (PieceKind::Bishop, Color::Black, "c8"),
        (PieceKind::King, Color::Black, "a8"),
    ]);
    let game = GameState::from_board(opposite, Color::White).expect("classified");
    assert_eq!(game.result(), GameResult::Continue);
}

// ============================================================================
// Special Move Tests
// ============================================================================

#[test]
fn test_en_passant_window_lasts_one_half_move() {
    let mut game = GameState::new().expect("standard game");
    click_all(&mut game, &["e2", "e4", "a7", "a6", "e4", "e5", "d7", "d5"]);

    let pawn = game.board().piece_id_at(sq("e5")).expect("white pawn");
    let passed = game.board().piece_id_at(sq("d5")).expect("black pawn");
    assert!(game.board().piece(passed).en_passant());
    assert!(game.current_player().legal_moves_for(pawn).contains(&sq("d6")));

    click_all(&mut game, &["h2", "h3"]);
    assert!(!game.board().piece(passed).en_passant(), "expires after the opponent's next move");

    click_all(&mut game, &["a6", "a5"]);
    assert_eq!(game.current_player().legal_moves_for(pawn), &[sq("e6")]);
}

#[test]
fn test_en_passant_capture_through_clicks() {
    let mut game = GameState::new().expect("standard game");
    click_all(&mut game, &["e2", "e4", "a7", "a6", "e4", "e5", "f7", "f5", "e5", "f6"]);

    assert!(game.board().is_empty(sq("f5")), "passed pawn removed");
    assert_eq!(game.board().piece_at(sq("f6")).map(|p| p.color()), Some(Color::White));
    assert_eq!(game.board().pieces_of(Color::Black).count(), 15);
}

#[test]
fn test_promotion_gates_the_turn() {
    let board = position(&[
        (PieceKind::King, Color::White, "e1"),
        (PieceKind::Pawn, Color::White, "b7"),
        (PieceKind::King, Color::Black, "h8"),
    ]);
    let mut game = GameState::from_board(board, Color::White).expect("classified");

    click_all(&mut game, &["b7", "b8"]);
    assert_eq!(game.current_turn(), Color::White, "turn suspended until a choice is made");
    assert!(game.board().promoting_pawn().is_some());

    click_all(&mut game, &["h8", "b4", "c8"]);
    assert_eq!(game.current_turn(), Color::White, "non-matching clicks are ignored");

    let result = click_all(&mut game, &["b8"]);
    assert_eq!(game.current_turn(), Color::Black);
    assert!(game.board().promoting_pawn().is_none());
    assert_eq!(game.board().piece_at(sq("b8")).map(|p| p.kind()), Some(PieceKind::Queen));
    assert_eq!(result, GameResult::Check, "new queen checks along the back rank");
}

#[test]
fn test_black_underpromotes_to_knight() {
    let board = position(&[
        (PieceKind::King, Color::White, "h8"),
        (PieceKind::Pawn, Color::Black, "c2"),
        (PieceKind::King, Color::Black, "a8"),
    ]);
    let mut game = GameState::from_board(board, Color::Black).expect("classified");

    click_all(&mut game, &["c2", "c1"]);
    let pawn = game.board().promoting_pawn().expect("pending");
    assert_eq!(game.player(Color::Black).promoting_pawn(), Some(pawn));

    let c4 = sq("c4");
    let result = game.click(c4.row(), c4.column());
    assert_eq!(game.board().piece_at(sq("c1")).map(|p| p.kind()), Some(PieceKind::Knight));
    assert!(game.board().promoting_pawn().is_none());
    assert!(game.player(Color::Black).promoting_pawn().is_none());
    assert_eq!(game.current_turn(), Color::White);
    assert_eq!(result, GameResult::InsufficientMaterial, "a lone knight cannot mate");
}

#[test]
fn test_castling_through_clicks() {
    let mut game = GameState::new().expect("standard game");
    click_all(&mut game, &["e2", "e4", "e7", "e5", "g1", "f3", "b8", "c6", "f1", "c4", "g8", "f6"]);
    click_all(&mut game, &["e1", "g1"]);

    let back_rank = game.board().to_ascii().lines().last().map(str::to_string);
    assert_eq!(back_rank.as_deref(), Some("RNBQ.RK."));
    assert_eq!(game.current_turn(), Color::Black);
}

#[test]
fn test_reset_after_game_end() {
    let mut game = GameState::new().expect("standard game");
    click_all(&mut game, &["f2", "f3", "e7", "e5", "g2", "g4", "d8", "h4"]);
    assert!(game.ended());

    game.reset().expect("reset");
    assert!(!game.ended());
    assert_eq!(game.result(), GameResult::Continue);
    assert_eq!(game.board().to_ascii(), Board::new().expect("standard setup").to_ascii());
}
