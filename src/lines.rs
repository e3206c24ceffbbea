//! Winning line analysis for the 3x3 board

use crate::board::{Cell, Player};

/// Winning line indices on the 3x3 board, in the scan order used by
/// [`winner_on`]: rows, then columns, then the main diagonal, then the
/// anti-diagonal.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8], // main diagonal
    [2, 4, 6], // anti-diagonal
];

/// Return the player owning a complete line, if any.
///
/// Lines are scanned in the fixed order of [`WINNING_LINES`]. At most one
/// player can hold a complete line on a reachable board, so the order does
/// not affect the result.
pub fn winner_on(cells: &[Cell; 9]) -> Option<Player> {
    for line in &WINNING_LINES {
        let first = cells[line[0]];
        if first != Cell::Empty && line.iter().all(|&idx| cells[idx] == first) {
            return first.to_player();
        }
    }
    None
}

/// Check if a player has three in a row
pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
    let target = player.mark();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == target))
}
