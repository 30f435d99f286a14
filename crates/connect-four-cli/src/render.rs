//! Text rendering of the board and move results.

use connect_four_core::{Cell, GameSession, GameStatus, MoveError, MoveOutcome, Player};

fn piece(player: Player) -> char {
    match player {
        Player::One => 'X',
        Player::Two => 'O',
    }
}

/// Draw the board with a column index header; a winning line is drawn as `*`
pub fn render_board(session: &GameSession) -> String {
    let board = session.board();
    let line = session.winning_line();
    let mut out = String::new();

    let header: Vec<String> = (0..board.width()).map(|c| (c % 10).to_string()).collect();
    out.push_str(&header.join(" "));
    out.push('\n');

    for row in 0..board.height() {
        let cells: Vec<String> = (0..board.width())
            .map(|column| {
                let on_line = line
                    .map(|l| l.iter().any(|p| p.row == row && p.column == column))
                    .unwrap_or(false);
                let symbol = match board.get(row, column) {
                    Some(Cell::Occupied(_)) if on_line => '*',
                    Some(Cell::Occupied(player)) => piece(player),
                    _ => '.',
                };
                symbol.to_string()
            })
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }

    out
}

/// One-line status shown under the board
pub fn render_status(session: &GameSession) -> String {
    match session.status() {
        GameStatus::InProgress => {
            let player = session.active_player();
            format!("{} ({}) to move", player, piece(player))
        }
        GameStatus::Won(player) => format!("{} won! Type 'restart' to play again.", player),
        GameStatus::Tie => "Tie! Type 'restart' to play again.".to_string(),
    }
}

/// Describe the result of a move attempt
pub fn describe_move(result: &Result<MoveOutcome, MoveError>) -> String {
    match result {
        Ok(MoveOutcome::Continue { next_player }) => format!("{} to move", next_player),
        Ok(MoveOutcome::Won { player, line }) => {
            let cells: Vec<String> = line
                .iter()
                .map(|p| format!("({}, {})", p.row, p.column))
                .collect();
            format!("{} won with {}", player, cells.join(" "))
        }
        Ok(MoveOutcome::Tie) => "Tie!".to_string(),
        Err(err @ MoveError::GameOver) => format!("{}; type 'restart' to play again", err),
        Err(err) => format!("Move rejected: {}", err),
    }
}
