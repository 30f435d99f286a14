//! Start-up configuration read from the environment.

use connect_four_core::{BoardError, GameSession, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use thiserror::Error;

pub const WIDTH_VAR: &str = "CONNECT_FOUR_WIDTH";
pub const HEIGHT_VAR: &str = "CONNECT_FOUR_HEIGHT";
pub const OUTPUT_VAR: &str = "CONNECT_FOUR_OUTPUT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("CONNECT_FOUR_OUTPUT must be \"text\" or \"json\", got {0:?}")]
    InvalidOutput(String),

    #[error("Invalid board size: {0}")]
    Board(#[from] BoardError),
}

/// How replies are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable board and messages
    #[default]
    Text,
    /// One JSON object per reply
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let width = parse_dimension(WIDTH_VAR, lookup(WIDTH_VAR), defaults.width)?;
        let height = parse_dimension(HEIGHT_VAR, lookup(HEIGHT_VAR), defaults.height)?;

        let output = match lookup(OUTPUT_VAR).as_deref().map(str::trim) {
            None | Some("") => defaults.output,
            Some(value) if value.eq_ignore_ascii_case("text") => OutputFormat::Text,
            Some(value) if value.eq_ignore_ascii_case("json") => OutputFormat::Json,
            Some(value) => return Err(ConfigError::InvalidOutput(value.to_string())),
        };

        // Reject sizes the engine would refuse before any game starts
        GameSession::new(width, height)?;

        Ok(Self {
            width,
            height,
            output,
        })
    }
}

fn parse_dimension(
    var: &'static str,
    value: Option<String>,
    default: usize,
) -> Result<usize, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidNumber { var, value }),
    }
}
