//! Core game state machine.
//!
//! A `GameSession` owns its board, the active player and the game status.
//! Each accepted move places a piece, then checks for a win by the mover,
//! then for a full board. Rejected moves leave the session untouched.

use crate::board::{Board, BoardError, Cell, Player, Position};
use crate::rules::{self, LINE_LENGTH};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Game status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted
    InProgress,
    /// A player completed four in a row
    Won(Player),
    /// The board filled with no winner
    Tie,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Reasons a move is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum MoveError {
    #[error("Column {column} is outside the board (width {width})")]
    InvalidColumn { column: usize, width: usize },

    #[error("Column {column} is full")]
    ColumnFull { column: usize },

    #[error("Game is over")]
    GameOver,
}

/// Outcome of an accepted move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Game continues with `next_player` to move
    Continue { next_player: Player },
    /// The mover completed `line`
    Won {
        player: Player,
        line: [Position; LINE_LENGTH],
    },
    /// The board is full with no winner
    Tie,
}

/// Presentation-facing move result, tagged by `status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum MoveResult {
    Rejected { reason: MoveError },
    Continue {
        #[serde(rename = "nextPlayer")]
        next_player: Player,
    },
    Won { player: Player },
    Tie,
}

impl From<Result<MoveOutcome, MoveError>> for MoveResult {
    fn from(result: Result<MoveOutcome, MoveError>) -> Self {
        match result {
            Ok(MoveOutcome::Continue { next_player }) => MoveResult::Continue { next_player },
            Ok(MoveOutcome::Won { player, .. }) => MoveResult::Won { player },
            Ok(MoveOutcome::Tie) => MoveResult::Tie,
            Err(reason) => MoveResult::Rejected { reason },
        }
    }
}

/// A piece placed on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub player: Player,
    pub position: Position,
}

/// One game from empty board to win or tie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    /// The game board
    board: Board,
    /// Player whose turn it is
    active_player: Player,
    /// Current status
    status: GameStatus,
    /// Line that ended the game, if won
    winning_line: Option<[Position; LINE_LENGTH]>,
    /// Most recent accepted move
    last_move: Option<Placement>,
    /// Number of accepted moves
    move_count: u32,
}

impl GameSession {
    /// Start a game on an empty board of the given size
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        Ok(Self::with_board(Board::new(width, height)?))
    }

    /// Start a game on the standard 7x6 board
    pub fn standard() -> Self {
        Self::with_board(Board::standard())
    }

    fn with_board(board: Board) -> Self {
        Self {
            board,
            active_player: Player::One,
            status: GameStatus::InProgress,
            winning_line: None,
            last_move: None,
            move_count: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is (the last mover once the game is over)
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }

    /// Get the winner if the game was won
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<[Position; LINE_LENGTH]> {
        self.winning_line
    }

    pub fn last_move(&self) -> Option<Placement> {
        self.last_move
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Read a cell for rendering; `None` when off the board
    pub fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        self.board.get(row, column)
    }

    /// Columns that would currently accept a piece
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_finished() {
            return Vec::new();
        }

        (0..self.board.width())
            .filter(|&column| matches!(self.board.landing_row(column), Ok(Some(_))))
            .collect()
    }

    /// Drop the active player's piece into `column`
    pub fn play_move(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        if self.is_finished() {
            return Err(MoveError::GameOver);
        }

        let row = self
            .board
            .landing_row(column)
            .map_err(|_| MoveError::InvalidColumn {
                column,
                width: self.board.width(),
            })?
            .ok_or(MoveError::ColumnFull { column })?;

        let player = self.active_player;
        self.board.place(row, column, player);
        self.move_count += 1;
        self.last_move = Some(Placement {
            player,
            position: Position::new(row, column),
        });

        if let Some(line) = rules::find_four(&self.board, player) {
            self.status = GameStatus::Won(player);
            self.winning_line = Some(line);
            return Ok(MoveOutcome::Won { player, line });
        }

        if self.board.is_full() {
            self.status = GameStatus::Tie;
            return Ok(MoveOutcome::Tie);
        }

        self.active_player = player.other();
        Ok(MoveOutcome::Continue {
            next_player: self.active_player,
        })
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::standard()
    }
}

/// Start a new game (`newGame`)
pub fn new_game(width: usize, height: usize) -> Result<GameSession, BoardError> {
    GameSession::new(width, height)
}

/// Play a move and report the presentation-facing result (`playMove`)
pub fn play_move(session: &mut GameSession, column: usize) -> MoveResult {
    session.play_move(column).into()
}

/// Read a cell (`getCell`)
pub fn get_cell(session: &GameSession, row: usize, column: usize) -> Option<Cell> {
    session.cell(row, column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_game_starts_in_progress() {
        let game = GameSession::standard();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.active_player(), Player::One);
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.legal_columns(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_new_game_rejects_bad_dimensions() {
        assert_eq!(
            new_game(0, 6),
            Err(BoardError::InvalidDimensions { width: 0, height: 6 })
        );
    }

    #[test]
    fn test_play_move_alternates_players() {
        let mut game = GameSession::standard();

        let outcome = game.play_move(3).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Continue {
                next_player: Player::Two
            }
        );
        assert_eq!(game.cell(5, 3), Some(Cell::Occupied(Player::One)));

        game.play_move(3).unwrap();
        assert_eq!(game.cell(4, 3), Some(Cell::Occupied(Player::Two)));
        assert_eq!(game.active_player(), Player::One);
        assert_eq!(
            game.last_move(),
            Some(Placement {
                player: Player::Two,
                position: Position::new(4, 3)
            })
        );
    }

    #[test]
    fn test_horizontal_win() {
        let mut game = GameSession::standard();

        // Player 1 on the bottom row, player 2 stacks on top
        for col in 0..3 {
            game.play_move(col).unwrap();
            game.play_move(col).unwrap();
        }
        let outcome = game.play_move(3).unwrap();

        assert!(matches!(outcome, MoveOutcome::Won { player: Player::One, .. }));
        assert_eq!(game.status(), GameStatus::Won(Player::One));
        assert_eq!(game.winner(), Some(Player::One));
        assert_eq!(
            game.winning_line(),
            Some([
                Position::new(5, 0),
                Position::new(5, 1),
                Position::new(5, 2),
                Position::new(5, 3),
            ])
        );
    }

    #[test]
    fn test_invalid_column_leaves_state_unchanged() {
        let mut game = GameSession::standard();
        game.play_move(0).unwrap();
        let before = game.clone();

        assert_eq!(
            game.play_move(7),
            Err(MoveError::InvalidColumn { column: 7, width: 7 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_full_column_keeps_active_player() {
        let mut game = GameSession::standard();
        for _ in 0..6 {
            game.play_move(0).unwrap();
        }
        let before = game.clone();

        assert_eq!(game.play_move(0), Err(MoveError::ColumnFull { column: 0 }));
        assert_eq!(game.active_player(), Player::One);
        assert_eq!(game, before);
        assert!(!game.legal_columns().contains(&0));
    }

    #[test]
    fn test_move_after_win_is_rejected() {
        let mut game = GameSession::standard();
        for _ in 0..3 {
            game.play_move(0).unwrap();
            game.play_move(1).unwrap();
        }
        game.play_move(0).unwrap();
        assert!(game.is_finished());
        let before = game.clone();

        assert_eq!(game.play_move(2), Err(MoveError::GameOver));
        assert_eq!(game, before);
        assert!(game.legal_columns().is_empty());
    }

    #[test]
    fn test_tie_on_tiny_board() {
        // A 2x2 board cannot hold four in a row
        let mut game = GameSession::new(2, 2).unwrap();
        game.play_move(0).unwrap();
        game.play_move(1).unwrap();
        game.play_move(0).unwrap();
        assert_eq!(game.play_move(1), Ok(MoveOutcome::Tie));
        assert_eq!(game.status(), GameStatus::Tie);
        assert_eq!(game.winner(), None);
        assert_eq!(game.play_move(0), Err(MoveError::GameOver));
    }

    #[test]
    fn test_win_on_last_cell_is_a_win() {
        // The 16th drop fills a 4x4 board and completes a down-left diagonal
        let mut game = GameSession::new(4, 4).unwrap();
        let moves = [1, 0, 3, 2, 2, 1, 0, 2, 0, 1, 0, 1, 2, 3, 3];
        for col in moves {
            assert!(matches!(game.play_move(col), Ok(MoveOutcome::Continue { .. })));
        }

        let outcome = game.play_move(3).unwrap();
        assert!(game.board().is_full());
        assert!(matches!(outcome, MoveOutcome::Won { player: Player::Two, .. }));
        assert_eq!(game.status(), GameStatus::Won(Player::Two));
    }

    #[test]
    fn test_move_result_json_shape() {
        let mut game = GameSession::standard();

        let result = play_move(&mut game, 0);
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::json!({"status": "continue", "nextPlayer": 2})
        );

        let result = play_move(&mut game, 9);
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::json!({
                "status": "rejected",
                "reason": {"kind": "InvalidColumn", "column": 9, "width": 7}
            })
        );

        let result = MoveResult::Rejected {
            reason: MoveError::GameOver,
        };
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::json!({"status": "rejected", "reason": {"kind": "GameOver"}})
        );

        assert_eq!(
            serde_json::to_value(&MoveResult::Tie).unwrap(),
            serde_json::json!({"status": "tie"})
        );
        assert_eq!(
            serde_json::to_value(&MoveResult::Won { player: Player::One }).unwrap(),
            serde_json::json!({"status": "won", "player": 1})
        );
    }

    #[test]
    fn test_get_cell_facade() {
        let mut game = new_game(7, 6).unwrap();
        play_move(&mut game, 6);
        assert_eq!(get_cell(&game, 5, 6), Some(Cell::Occupied(Player::One)));
        assert_eq!(get_cell(&game, 5, 5), Some(Cell::Empty));
        assert_eq!(get_cell(&game, 6, 0), None);
    }
}
