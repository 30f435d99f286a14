//! WebAssembly bindings for the Connect Four engine.
//!
//! This module exposes a game session to JavaScript through wasm-bindgen.
//! Restarting a game means dropping the old `WasmGame` and constructing a
//! new one.

use wasm_bindgen::prelude::*;

use crate::board::Player;
use crate::game::{GameSession, MoveResult};

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// WASM-exposed game wrapper
#[wasm_bindgen]
pub struct WasmGame {
    session: GameSession,
}

#[wasm_bindgen]
impl WasmGame {
    /// Create a new game with the given board size
    #[wasm_bindgen(constructor)]
    pub fn new(width: usize, height: usize) -> Result<WasmGame, JsValue> {
        let session = GameSession::new(width, height)
            .map_err(|e| JsValue::from_str(&format!("Invalid board: {}", e)))?;
        Ok(WasmGame { session })
    }

    /// Drop a piece for the current player, returns the move result as JSON
    #[wasm_bindgen(js_name = playMove)]
    pub fn play_move(&mut self, column: usize) -> String {
        let result: MoveResult = self.session.play_move(column).into();
        serde_json::to_string(&result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Get a cell: 0 for empty, otherwise the player id
    #[wasm_bindgen(js_name = getCell)]
    pub fn get_cell(&self, row: usize, column: usize) -> Option<u8> {
        self.session.cell(row, column).map(|cell| cell.to_id())
    }

    /// Get the current player id
    #[wasm_bindgen(js_name = getCurrentPlayer)]
    pub fn get_current_player(&self) -> u8 {
        self.session.active_player().id()
    }

    /// Get the game status as JSON
    #[wasm_bindgen(js_name = getStatus)]
    pub fn get_status(&self) -> String {
        serde_json::to_string(&self.session.status()).unwrap_or_else(|_| "\"Unknown\"".to_string())
    }

    /// Get board rows as JSON (for rendering)
    #[wasm_bindgen(js_name = getBoard)]
    pub fn get_board(&self) -> String {
        serde_json::to_string(&self.session.board().to_rows()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Get the winning line as JSON, or `null`
    #[wasm_bindgen(js_name = getWinningLine)]
    pub fn get_winning_line(&self) -> String {
        serde_json::to_string(&self.session.winning_line()).unwrap_or_else(|_| "null".to_string())
    }

    /// Check if the game is finished
    #[wasm_bindgen(js_name = isFinished)]
    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }

    /// Get the winner (if the game was won)
    #[wasm_bindgen(js_name = getWinner)]
    pub fn get_winner(&self) -> Option<u8> {
        self.session.winner().map(Player::id)
    }
}
