//! Exhaustive minimax search over the game tree
//!
//! Full-depth search with no heuristic evaluation: the whole tree from any
//! position has at most 9! leaf paths, so exhaustive recursion is tractable
//! without memoization. The only pruning is an early exit once a branch
//! reaches the best value the side to move can ever achieve (+1 for the
//! maximizer, -1 for the minimizer).

use crate::board::{Board, Move, Player};

/// Compute the optimal move for the player to move.
///
/// Returns `None` on a terminal board, where no move exists. Otherwise X
/// maximizes and O minimizes the eventual [`Board::utility`], assuming
/// optimal counterplay. Among equally optimal moves the first one in the
/// row-major order of [`Board::legal_moves`] wins: lowest row, then lowest
/// column.
pub fn best_move(board: &Board) -> Option<Move> {
    if board.is_terminal() {
        return None;
    }

    let maximizing = board.next_player() == Player::X;
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
    let mut best: Option<Move> = None;

    for mv in board.legal_moves() {
        let child = board
            .apply_move(mv)
            .expect("legal move generation should not fail");
        let score = if maximizing {
            min_value(&child)
        } else {
            max_value(&child)
        };

        // Strict comparison keeps the first move reaching the best score
        let improved = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improved {
            best_score = score;
            best = Some(mv);
        }
    }

    best
}

/// Minimax value of the position with the maximizer (X) to move.
///
/// Terminal boards evaluate to their utility. Otherwise the value is the
/// maximum over all legal moves of the minimizer's reply value, returning
/// +1 immediately once any branch reaches it.
pub fn max_value(board: &Board) -> i32 {
    if board.is_terminal() {
        return board.utility();
    }

    let mut value = i32::MIN;
    for mv in board.legal_moves() {
        let child = board
            .apply_move(mv)
            .expect("legal move generation should not fail");
        value = value.max(min_value(&child));
        if value == 1 {
            return 1;
        }
    }
    value
}

/// Minimax value of the position with the minimizer (O) to move.
///
/// Dual of [`max_value`], early-exiting at -1.
pub fn min_value(board: &Board) -> i32 {
    if board.is_terminal() {
        return board.utility();
    }

    let mut value = i32::MAX;
    for mv in board.legal_moves() {
        let child = board
            .apply_move(mv)
            .expect("legal move generation should not fail");
        value = value.min(max_value(&child));
        if value == -1 {
            return -1;
        }
    }
    value
}

/// Minimax value of an arbitrary position: the utility reached from here
/// when both sides play optimally.
pub fn value(board: &Board) -> i32 {
    if board.is_terminal() {
        board.utility()
    } else {
        match board.next_player() {
            Player::X => max_value(board),
            Player::O => min_value(board),
        }
    }
}
