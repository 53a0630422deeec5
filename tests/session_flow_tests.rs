//! Session Flow Integration Tests
//!
//! Drives the terminal session end to end through text input:
//! - Parsing commands and routing clicks
//! - Restart gating and quitting
//! - Frame output for ongoing and finished games

use std::io::Cursor;

use chess_rules::{Color, GameResult};
use hotseat_chess::core::GameSettings;
use hotseat_chess::input::Command;
use hotseat_chess::rendering::TextRenderer;
use hotseat_chess::{Flow, Session};

fn ascii_session() -> Session {
    let settings = GameSettings {
        unicode_pieces: false,
        show_coordinates: false,
        ..GameSettings::default()
    };
    Session::new(TextRenderer::from_settings(&settings)).expect("session")
}

const FOOLS_MATE: [&str; 8] = ["f2", "f3", "e7", "e5", "g2", "g4", "d8", "h4"];

// ============================================================================
// Replay Tests
// ============================================================================

#[test]
fn test_replay_scholars_mate() {
    let mut session = ascii_session();
    let script = [
        "e2", "e4", "e7", "e5", "f1", "c4", "b8", "c6", "d1", "h5", "g8", "f6", "h5", "f7",
    ];

    assert_eq!(session.replay(&script).expect("replay"), GameResult::Checkmate);
    assert_eq!(session.game().winner(), Some(Color::White));

    let frame = session.frame();
    assert!(frame.contains("Checkmate\nWhite wins!!"), "got:\n{frame}");
    assert!(frame.ends_with("Type 'restart' to play again"));
}

#[test]
fn test_replay_accepts_row_column_pairs_and_skips_noise() {
    let mut session = ascii_session();
    let result = session.replay(&["2 5", "hello", "", "4 5", "0 0"]).expect("replay");

    assert_eq!(result, GameResult::Continue);
    assert_eq!(session.game().current_turn(), Color::Black);
}

// ============================================================================
// Command Handling Tests
// ============================================================================

#[test]
fn test_restart_only_after_game_end() {
    let mut session = ascii_session();
    session.replay(&["e2", "e4"]).expect("replay");

    assert_eq!(session.handle(Command::Restart).expect("restart"), Flow::Continue);
    assert_eq!(session.game().current_turn(), Color::Black, "restart ignored mid-game");

    let mut session = ascii_session();
    session.replay(&FOOLS_MATE).expect("replay");
    assert!(session.game().ended());

    session.handle(Command::Restart).expect("restart");
    assert!(!session.game().ended());
    assert_eq!(session.game().current_turn(), Color::White);
}

#[test]
fn test_quit_stops_replay() {
    let mut session = ascii_session();
    session.replay(&["e2", "e4", "quit", "e7", "e5"]).expect("replay");
    assert_eq!(session.game().current_turn(), Color::Black, "clicks after quit are not applied");
}

// ============================================================================
// Interactive Loop Tests
// ============================================================================

#[test]
fn test_run_writes_a_frame_per_command() {
    let mut session = ascii_session();
    let input = Cursor::new("e2\ne4\nquit\ne7\n");
    let mut output = Vec::new();

    session.run(input, &mut output).expect("run");
    let text = String::from_utf8(output).expect("utf8");

    assert_eq!(text.matches("to move").count(), 3, "initial frame plus one per click");
    assert!(text.trim_end().ends_with("Black to move"));
}

#[test]
fn test_run_shows_check() {
    let mut session = ascii_session();
    let input = Cursor::new("e2\ne4\nf7\nf6\nd1\nh5\n");
    let mut output = Vec::new();

    session.run(input, &mut output).expect("run");
    let text = String::from_utf8(output).expect("utf8");
    assert!(text.trim_end().ends_with("Black to move (check)"), "got:\n{text}");
    assert!(text.contains("!k!"), "checked king is marked");
}
