//! Board representation: cell occupancy and gravity drops.
//!
//! This module contains:
//! - Player identifiers (player 1 and player 2)
//! - The tagged `Cell` occupancy type
//! - The fixed-size `Board` grid with landing-row and placement queries
//!
//! Row 0 is the top of the board; row `height - 1` is the bottom, where
//! pieces settle first.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of columns
pub const DEFAULT_WIDTH: usize = 7;

/// Default number of rows
pub const DEFAULT_HEIGHT: usize = 6;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Both players, in turn order
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Numeric identifier (1 or 2)
    pub fn id(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Look up a player by numeric identifier
    pub fn from_id(id: u8) -> Option<Player> {
        match id {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// The opponent
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> u8 {
        player.id()
    }
}

impl TryFrom<u8> for Player {
    type Error = String;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Player::from_id(id).ok_or_else(|| format!("invalid player id {}", id))
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.id())
    }
}

/// Occupancy of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The occupying player, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Numeric form for rendering: 0 for empty, otherwise the player id
    pub fn to_id(self) -> u8 {
        self.player().map_or(0, Player::id)
    }
}

/// Errors raised by board construction and column queries
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum BoardError {
    #[error("Board dimensions must be positive (got {width}x{height})")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Column {column} is outside the board (width {width})")]
    InvalidColumn { column: usize, width: usize },

    #[error("Board of {width}x{height} needs {expected} cells (got {actual})")]
    CellCountMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
}

/// A row/column coordinate on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// The game grid, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

/// Unchecked wire form of a board, validated on the way in
#[derive(Deserialize)]
struct BoardRepr {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = BoardError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let BoardRepr {
            width,
            height,
            cells,
        } = repr;
        let board = Board::new(width, height)?;
        if cells.len() != board.cells.len() {
            return Err(BoardError::CellCountMismatch {
                width,
                height,
                expected: board.cells.len(),
                actual: cells.len(),
            });
        }
        Ok(Board { cells, ..board })
    }
}

impl Board {
    /// Create an empty board with the given dimensions
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        let size = width
            .checked_mul(height)
            .ok_or(BoardError::InvalidDimensions { width, height })?;

        Ok(Self {
            width,
            height,
            cells: vec![Cell::Empty; size],
        })
    }

    /// Create the standard 7x6 board
    pub fn standard() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cells: vec![Cell::Empty; DEFAULT_WIDTH * DEFAULT_HEIGHT],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether a coordinate lies on the board
    pub fn in_bounds(&self, row: usize, column: usize) -> bool {
        row < self.height && column < self.width
    }

    /// Get the cell at a position, or `None` when off the board
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        if self.in_bounds(row, column) {
            Some(self.cells[row * self.width + column])
        } else {
            None
        }
    }

    fn check_column(&self, column: usize) -> Result<(), BoardError> {
        if column >= self.width {
            return Err(BoardError::InvalidColumn {
                column,
                width: self.width,
            });
        }
        Ok(())
    }

    /// Find the lowest empty row in a column.
    ///
    /// Returns `Ok(None)` when the column is full.
    pub fn landing_row(&self, column: usize) -> Result<Option<usize>, BoardError> {
        self.check_column(column)?;

        Ok((0..self.height)
            .rev()
            .find(|&row| self.cells[row * self.width + column].is_empty()))
    }

    /// Check if a column has no empty cell left
    pub fn is_column_full(&self, column: usize) -> Result<bool, BoardError> {
        Ok(self.landing_row(column)?.is_none())
    }

    /// Mark a cell as occupied by `player`.
    ///
    /// # Panics
    ///
    /// Panics if the position is off the board or already occupied. Callers
    /// obtain the row from [`Board::landing_row`].
    pub fn place(&mut self, row: usize, column: usize, player: Player) {
        assert!(
            self.in_bounds(row, column),
            "Position ({}, {}) is off the board",
            row,
            column
        );
        let cell = &mut self.cells[row * self.width + column];
        assert!(
            cell.is_empty(),
            "Cell ({}, {}) is already occupied",
            row,
            column
        );
        *cell = Cell::Occupied(player);
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Numeric grid for rendering (0 = empty, 1/2 = player)
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.to_id()).collect())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::standard();
        assert_eq!(board.width(), 7);
        assert_eq!(board.height(), 6);
        for row in 0..DEFAULT_HEIGHT {
            for col in 0..DEFAULT_WIDTH {
                assert_eq!(board.get(row, col), Some(Cell::Empty));
            }
        }
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            Board::new(0, 6),
            Err(BoardError::InvalidDimensions { width: 0, height: 6 })
        );
        assert_eq!(
            Board::new(7, 0),
            Err(BoardError::InvalidDimensions { width: 7, height: 0 })
        );
        assert!(Board::new(usize::MAX, 2).is_err());
        assert!(Board::new(1, 1).is_ok());
    }

    #[test]
    fn test_landing_row_fills_bottom_up() {
        let mut board = Board::standard();
        assert_eq!(board.landing_row(3), Ok(Some(5)));

        board.place(5, 3, Player::One);
        assert_eq!(board.landing_row(3), Ok(Some(4)));

        board.place(4, 3, Player::Two);
        assert_eq!(board.landing_row(3), Ok(Some(3)));
        assert_eq!(board.get(5, 3), Some(Cell::Occupied(Player::One)));
        assert_eq!(board.get(4, 3), Some(Cell::Occupied(Player::Two)));
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::standard();
        for _ in 0..DEFAULT_HEIGHT {
            let row = board.landing_row(0).unwrap().unwrap();
            board.place(row, 0, Player::One);
        }

        assert_eq!(board.landing_row(0), Ok(None));
        assert_eq!(board.is_column_full(0), Ok(true));
        assert_eq!(board.is_column_full(1), Ok(false));
    }

    #[test]
    fn test_invalid_column() {
        let board = Board::standard();
        assert_eq!(
            board.landing_row(7),
            Err(BoardError::InvalidColumn { column: 7, width: 7 })
        );
    }

    #[test]
    #[should_panic(expected = "already occupied")]
    fn test_place_on_occupied_cell_panics() {
        let mut board = Board::standard();
        board.place(5, 0, Player::One);
        board.place(5, 0, Player::Two);
    }

    #[test]
    #[should_panic(expected = "off the board")]
    fn test_place_off_board_panics() {
        let mut board = Board::standard();
        board.place(6, 0, Player::One);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(2, 2).unwrap();
        assert!(!board.is_full());
        board.place(1, 0, Player::One);
        board.place(1, 1, Player::Two);
        board.place(0, 0, Player::One);
        assert!(!board.is_full());
        board.place(0, 1, Player::Two);
        assert!(board.is_full());
        assert_eq!(board.to_rows(), vec![vec![1, 2], vec![1, 2]]);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::standard();
        assert_eq!(board.get(6, 0), None);
        assert_eq!(board.get(0, 7), None);
    }

    #[test]
    fn test_player_ids() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
        assert_eq!(Player::from_id(2), Some(Player::Two));
        assert_eq!(Player::from_id(0), None);
        assert_eq!(Cell::Empty.to_id(), 0);
        assert_eq!(Cell::Occupied(Player::Two).to_id(), 2);
    }

    #[test]
    fn test_deserialize_checks_shape() {
        let mut board = Board::new(2, 2).unwrap();
        board.place(1, 0, Player::One);
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);

        let short = r#"{"width":7,"height":6,"cells":[]}"#;
        let err = serde_json::from_str::<Board>(short).unwrap_err();
        assert!(err.to_string().contains("needs 42 cells (got 0)"), "{}", err);

        let zero = r#"{"width":0,"height":6,"cells":[]}"#;
        assert!(serde_json::from_str::<Board>(zero).is_err());
    }

    #[test]
    fn test_player_serializes_as_id() {
        assert_eq!(serde_json::to_string(&Player::Two).unwrap(), "2");
        assert_eq!(serde_json::from_str::<Player>("1").unwrap(), Player::One);
        assert!(serde_json::from_str::<Player>("3").is_err());
    }
}
