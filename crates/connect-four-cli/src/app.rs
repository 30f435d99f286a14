//! Terminal front-end state: one game session plus restart handling.

use connect_four_core::{BoardError, GameSession, GameStatus, MoveOutcome, MoveResult, Player};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::command::{Command, HELP};
use crate::config::{Config, OutputFormat};
use crate::render;

/// Whether the input loop should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Text to print and what to do next
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub output: String,
    pub control: Control,
}

/// Machine-readable reply written in JSON output mode
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct Frame {
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<MoveResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    status: GameStatus,
    active_player: Player,
    board: Vec<Vec<u8>>,
}

pub struct App {
    config: Config,
    session: GameSession,
    /// Games started so far, including the current one
    games_started: u32,
}

impl App {
    pub fn new(config: Config) -> Result<Self, BoardError> {
        let session = GameSession::new(config.width, config.height)?;
        info!(
            width = config.width,
            height = config.height,
            "Starting game 1"
        );
        Ok(Self {
            config,
            session,
            games_started: 1,
        })
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    /// Greeting shown before the first prompt
    pub fn welcome(&self) -> String {
        match self.config.output {
            OutputFormat::Text => format!("Connect Four\n{}", self.text_view(None)),
            OutputFormat::Json => self.json_frame(None, None, None),
        }
    }

    /// Handle one line of input
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match line.parse::<Command>() {
            Ok(command) => self.handle_command(command),
            Err(err) => {
                warn!(input = line.trim(), "Unrecognized input");
                let error = err.to_string();
                self.reply(None, Some(error.clone()), Some(error))
            }
        }
    }

    pub fn handle_command(&mut self, command: Command) -> Reply {
        match command {
            Command::Drop(column) => self.drop_piece(column),
            Command::Restart => match self.restart() {
                Ok(()) => self.reply(None, Some("New game".to_string()), None),
                Err(err) => {
                    warn!(error = %err, "Restart failed");
                    let error = err.to_string();
                    self.reply(None, Some(error.clone()), Some(error))
                }
            },
            Command::Help => self.reply(None, Some(HELP.to_string()), None),
            Command::Quit => {
                info!(games = self.games_started, "Quitting");
                let output = match self.config.output {
                    OutputFormat::Text => "Bye!".to_string(),
                    OutputFormat::Json => String::new(),
                };
                Reply {
                    output,
                    control: Control::Quit,
                }
            }
        }
    }

    fn drop_piece(&mut self, column: usize) -> Reply {
        let player = self.session.active_player();
        let result = self.session.play_move(column);

        match &result {
            Ok(MoveOutcome::Continue { next_player }) => {
                debug!(%player, column, %next_player, "Move accepted");
            }
            Ok(MoveOutcome::Won { player, .. }) => {
                info!(%player, moves = self.session.move_count(), "Game won");
            }
            Ok(MoveOutcome::Tie) => {
                info!(moves = self.session.move_count(), "Game tied");
            }
            Err(err) => {
                warn!(%player, column, error = %err, "Move rejected");
            }
        }

        let message = render::describe_move(&result);
        let error = result.as_ref().err().map(ToString::to_string);
        self.reply(Some(result.into()), Some(message), error)
    }

    /// Discard the current session and start a new game of the configured size
    fn restart(&mut self) -> Result<(), BoardError> {
        self.session = GameSession::new(self.config.width, self.config.height)?;
        self.games_started += 1;
        info!(game = self.games_started, "Restarted");
        Ok(())
    }

    /// Build a reply; text mode shows `message`, JSON mode carries everything
    fn reply(
        &self,
        result: Option<MoveResult>,
        message: Option<String>,
        error: Option<String>,
    ) -> Reply {
        let output = match self.config.output {
            OutputFormat::Text => self.text_view(message.as_deref()),
            OutputFormat::Json => {
                // Errors are reported once, in the error field
                let message = if error.is_some() { None } else { message };
                self.json_frame(result, message, error)
            }
        };

        Reply {
            output,
            control: Control::Continue,
        }
    }

    fn text_view(&self, message: Option<&str>) -> String {
        let mut out = String::new();
        if let Some(message) = message {
            out.push_str(message);
            out.push('\n');
        }
        out.push_str(&render::render_board(&self.session));
        out.push_str(&render::render_status(&self.session));
        out
    }

    fn json_frame(
        &self,
        result: Option<MoveResult>,
        message: Option<String>,
        error: Option<String>,
    ) -> String {
        let frame = Frame {
            result,
            message,
            error,
            status: self.session.status(),
            active_player: self.session.active_player(),
            board: self.session.board().to_rows(),
        };
        serde_json::to_string(&frame).unwrap_or_else(|_| "{}".to_string())
    }
}
