//! Four-in-a-row detection.
//!
//! Every cell is tried as the start of a line in each of the four
//! directions. A line counts only when all four coordinates are on the
//! board and held by the same player.

use crate::board::{Board, Cell, Player, Position};

/// Number of contiguous pieces needed to win
pub const LINE_LENGTH: usize = 4;

/// (row step, column step) for each direction a line can run
const DIRECTIONS: [(isize, isize); 4] = [
    // Horizontal
    (0, 1),
    // Vertical
    (1, 0),
    // Diagonal down-right
    (1, 1),
    // Diagonal down-left
    (1, -1),
];

/// Build the line starting at (row, column), or `None` if it leaves the board
fn line_from(
    board: &Board,
    row: usize,
    column: usize,
    (d_row, d_col): (isize, isize),
) -> Option<[Position; LINE_LENGTH]> {
    let mut line = [Position::new(row, column); LINE_LENGTH];
    for (step, slot) in line.iter_mut().enumerate() {
        let step = step as isize;
        let r = (row as isize).checked_add(d_row * step)?;
        let c = (column as isize).checked_add(d_col * step)?;
        if r < 0 || c < 0 || !board.in_bounds(r as usize, c as usize) {
            return None;
        }
        *slot = Position::new(r as usize, c as usize);
    }
    Some(line)
}

/// Find a four-in-a-row belonging to `player` anywhere on the board
pub fn find_four(board: &Board, player: Player) -> Option<[Position; LINE_LENGTH]> {
    let target = Cell::Occupied(player);

    for row in 0..board.height() {
        for column in 0..board.width() {
            for direction in DIRECTIONS {
                let Some(line) = line_from(board, row, column, direction) else {
                    continue;
                };
                if line
                    .iter()
                    .all(|pos| board.get(pos.row, pos.column) == Some(target))
                {
                    return Some(line);
                }
            }
        }
    }

    None
}

/// Check whether `player` has four in a row anywhere on the board
pub fn has_four_in_a_row(board: &Board, player: Player) -> bool {
    find_four(board, player).is_some()
}
