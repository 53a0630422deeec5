//! Session loop
//!
//! Sequences "read input → mutate state → redraw" for one terminal session.
//! [`Session::handle`] applies a single [`Command`]; [`Session::run`] drives it
//! from any line-oriented reader and writes frames to any writer, so the loop
//! is testable without a terminal.

use std::io::{BufRead, Write};

use chess_rules::{GameResult, GameState};
use tracing::{debug, info};

use crate::core::CoreResult;
use crate::input::{parse_command, Command};
use crate::rendering::TextRenderer;

/// Whether the loop should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    game: GameState,
    renderer: TextRenderer,
}

impl Session {
    pub fn new(renderer: TextRenderer) -> CoreResult<Self> {
        Ok(Self {
            game: GameState::new()?,
            renderer,
        })
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Apply one command
    ///
    /// Restart is honoured only once the game has ended.
    pub fn handle(&mut self, command: Command) -> CoreResult<Flow> {
        match command {
            Command::Quit => {
                info!("[SESSION] Quit requested");
                return Ok(Flow::Quit);
            }
            Command::Restart if self.game.ended() => self.game.reset()?,
            Command::Restart => debug!("[SESSION] Restart ignored, game still in progress"),
            Command::Click { row, column } => {
                self.game.click(row, column);
            }
        }
        Ok(Flow::Continue)
    }

    /// Feed a list of square names or commands, returning the final result
    pub fn replay<S: AsRef<str>>(&mut self, script: &[S]) -> CoreResult<GameResult> {
        for line in script {
            if let Some(command) = parse_command(line.as_ref()) {
                if self.handle(command)? == Flow::Quit {
                    break;
                }
            }
        }
        Ok(self.game.result())
    }

    pub fn frame(&self) -> String {
        self.renderer.render(&self.game)
    }

    /// Interactive loop until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> CoreResult<()> {
        writeln!(output, "{}\n", self.frame())?;
        for line in input.lines() {
            let line = line?;
            let Some(command) = parse_command(&line) else {
                continue;
            };
            if self.handle(command)? == Flow::Quit {
                break;
            }
            writeln!(output, "{}\n", self.frame())?;
        }
        output.flush()?;
        Ok(())
    }
}
