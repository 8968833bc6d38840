//! Line-oriented terminal controller.
//!
//! Reads one command per line, drives a `RulesEngine` and writes plain-text
//! replies. It holds no rules logic of its own.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::chess_errors::ChessResult;
use crate::engines::engine_random::RandomMover;
use crate::engines::rules_engine::{GameStatus, RulesEngine};
use crate::game_state::chess_types::{Color, PieceKind};
use crate::utils::long_algebraic::{char_to_promotion, move_to_long_algebraic};
use crate::utils::render_game_state::render_game_state;

const HELP_TEXT: &str = "commands: show | fen | moves | move <e2e4[q]> | promote <q|r|b|n> \
                         | undo [n] | random | status | quit";

pub fn run_stdio_loop(engine: RulesEngine, mover: RandomMover) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut controller = ControllerState::new(engine, mover);

    writeln!(stdout, "{HELP_TEXT}")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = controller.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct ControllerState {
    engine: RulesEngine,
    mover: RandomMover,
}

impl ControllerState {
    pub fn new(engine: RulesEngine, mover: RandomMover) -> Self {
        Self { engine, mover }
    }

    pub fn engine(&self) -> &RulesEngine {
        &self.engine
    }

    /// Execute one command line. Returns `Ok(true)` when the loop should end.
    ///
    /// Rules errors are reported on `out` and never end the loop; only I/O
    /// failures are returned as errors.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let arg = parts.next();
        debug!(cmd, ?arg, "controller command");

        let result = match cmd {
            "show" => {
                write!(out, "{}", render_game_state(self.engine.game_state()))?;
                Ok(())
            }
            "fen" => {
                writeln!(out, "{}", self.engine.current_position_text())?;
                Ok(())
            }
            "moves" => {
                self.write_moves(out)?;
                Ok(())
            }
            "move" => match arg {
                Some(text) => self.engine.execute_long_algebraic(text).map(|_| ()),
                None => {
                    writeln!(out, "usage: move <from><to>[piece]")?;
                    Ok(())
                }
            },
            "promote" => self.handle_promote(arg, out)?,
            "undo" => self.handle_undo(arg, out)?,
            "random" => self.handle_random(out)?,
            "status" => {
                writeln!(out, "{}", describe_status(self.engine.game_status()))?;
                Ok(())
            }
            "help" => {
                writeln!(out, "{HELP_TEXT}")?;
                Ok(())
            }
            "quit" | "exit" => return Ok(true),
            _ => {
                writeln!(out, "unknown command '{cmd}'; {HELP_TEXT}")?;
                Ok(())
            }
        };

        if let Err(err) = result {
            warn!(%err, line = trimmed, "command rejected");
            writeln!(out, "error: {err}")?;
        }

        Ok(false)
    }

    fn write_moves(&self, out: &mut impl Write) -> io::Result<()> {
        let texts: Vec<String> =
            self.engine.legal_moves().iter().map(ToString::to_string).collect();
        writeln!(out, "{} legal: {}", texts.len(), texts.join(" "))
    }

    fn handle_promote(
        &mut self,
        arg: Option<&str>,
        out: &mut impl Write,
    ) -> io::Result<ChessResult<()>> {
        let Some(kind) = arg.and_then(|text| text.chars().next()).and_then(char_to_promotion) else {
            writeln!(out, "usage: promote <q|r|b|n>")?;
            return Ok(Ok(()));
        };
        let Some(square) = self.engine.pending_promotion() else {
            writeln!(out, "no promotion is pending")?;
            return Ok(Ok(()));
        };

        Ok(self.engine.resolve_promotion(square, kind))
    }

    fn handle_undo(
        &mut self,
        arg: Option<&str>,
        out: &mut impl Write,
    ) -> io::Result<ChessResult<()>> {
        let plies = match arg.map(str::parse::<usize>) {
            None => 1,
            Some(Ok(plies)) => plies,
            Some(Err(_)) => {
                writeln!(out, "usage: undo [plies]")?;
                return Ok(Ok(()));
            }
        };

        match self.engine.undo(plies) {
            Ok(true) => Ok(Ok(())),
            Ok(false) => {
                writeln!(out, "nothing to undo")?;
                Ok(Ok(()))
            }
            Err(err) => Ok(Err(err)),
        }
    }

    fn handle_random(&mut self, out: &mut impl Write) -> io::Result<ChessResult<()>> {
        match self.mover.play_random_move(&mut self.engine) {
            Ok(Some(mv)) => {
                // The mover always promotes to a queen.
                let promotion = mv.is_promotion.then_some(PieceKind::Queen);
                match move_to_long_algebraic(mv, promotion) {
                    Ok(text) => {
                        writeln!(out, "played {text}")?;
                        Ok(Ok(()))
                    }
                    Err(err) => Ok(Err(err)),
                }
            }
            Ok(None) => {
                writeln!(out, "no legal moves")?;
                Ok(Ok(()))
            }
            Err(err) => Ok(Err(err)),
        }
    }
}

fn describe_status(status: GameStatus) -> String {
    match status {
        GameStatus::Ongoing => "ongoing".to_owned(),
        GameStatus::Checkmate { winner } => format!("checkmate, {} wins", color_name(winner)),
        GameStatus::Stalemate => "stalemate".to_owned(),
        GameStatus::AwaitingPromotion { square } => {
            format!("awaiting promotion on square {square}")
        }
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::Light => "white",
        Color::Dark => "black",
    }
}
