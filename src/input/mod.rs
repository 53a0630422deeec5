//! Input module - text commands to game commands
//!
//! The terminal equivalent of turning pointer events into board clicks. Each
//! line of input becomes at most one [`Command`]:
//!
//! | Input                 | Command                      |
//! |-----------------------|------------------------------|
//! | `e2`                  | click on e2                  |
//! | `2 5`                 | click on row 2, column 5     |
//! | `restart` / `r`       | restart (only once game over) |
//! | `quit` / `q` / `exit` | quit                         |
//!
//! Row/column pairs are passed through unchecked so that off-board clicks
//! reach the rules engine and are ignored there, like a click outside the
//! board on screen.

use chess_rules::SquareId;
use tracing::warn;

/// A single user action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Click { row: u8, column: u8 },
    Restart,
    Quit,
}

/// Parse one line of input
///
/// Returns `None` for blank lines and, with a warning, for anything that is
/// not a command.
///
/// # Examples
///
/// ```
/// use hotseat_chess::input::{parse_command, Command};
///
/// assert_eq!(parse_command("e2"), Some(Command::Click { row: 2, column: 5 }));
/// assert_eq!(parse_command("8 1"), Some(Command::Click { row: 8, column: 1 }));
/// assert_eq!(parse_command("quit"), Some(Command::Quit));
/// ```
pub fn parse_command(line: &str) -> Option<Command> {
    let text = line.trim().to_ascii_lowercase();
    if text.is_empty() {
        return None;
    }

    match text.as_str() {
        "restart" | "r" => return Some(Command::Restart),
        "quit" | "q" | "exit" => return Some(Command::Quit),
        _ => {}
    }

    if let Some(square) = SquareId::parse(&text) {
        return Some(Command::Click {
            row: square.row(),
            column: square.column(),
        });
    }

    let mut parts = text.split_whitespace().map(str::parse::<u8>);
    if let (Some(Ok(row)), Some(Ok(column)), None) = (parts.next(), parts.next(), parts.next()) {
        return Some(Command::Click { row, column });
    }

    warn!("[INPUT] Unrecognised input {:?}", line.trim());
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_names() {
        assert_eq!(parse_command("a1"), Some(Command::Click { row: 1, column: 1 }));
        assert_eq!(parse_command("  H8 "), Some(Command::Click { row: 8, column: 8 }));
    }

    #[test]
    fn test_row_column_pairs_pass_through() {
        assert_eq!(parse_command("3 4"), Some(Command::Click { row: 3, column: 4 }));
        assert_eq!(parse_command("0 9"), Some(Command::Click { row: 0, column: 9 }));
        assert_eq!(parse_command("1 2 3"), None);
    }

    #[test]
    fn test_keywords() {
        assert_eq!(parse_command("restart"), Some(Command::Restart));
        assert_eq!(parse_command("R"), Some(Command::Restart));
        assert_eq!(parse_command("exit"), Some(Command::Quit));
    }

    #[test]
    fn test_garbage_and_blank_lines() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command("e9"), None);
        assert_eq!(parse_command("Nf3"), None);
    }
}
