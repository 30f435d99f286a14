//! Connect Four - rules engine and board state
//!
//! This crate provides the core game logic for Connect Four, including:
//! - Board representation with gravity drops
//! - Four-in-a-row detection in all four directions
//! - Game state machine with turn order, win and tie detection
//!
//! # Architecture
//!
//! The engine performs no I/O. A presentation layer calls
//! [`GameSession::play_move`] with a chosen column and renders from the
//! returned result and [`GameSession::cell`]. It can be compiled to:
//! - Native Rust for terminal or server front-ends
//! - WebAssembly for a browser front-end (feature `wasm`)
//!
//! # Modules
//!
//! - [`board`]: Cell occupancy, landing rows and placement
//! - [`rules`]: Four-in-a-row detection
//! - [`game`]: Game session state machine

pub mod board;
pub mod game;
pub mod rules;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use board::{Board, BoardError, Cell, Player, Position, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use game::{
    get_cell, new_game, play_move, GameSession, GameStatus, MoveError, MoveOutcome, MoveResult,
    Placement,
};
pub use rules::{find_four, has_four_in_a_row, LINE_LENGTH};
