//! Board state representation and game rules

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lines;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub(crate) fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
///
/// X moves first from the empty board and is the maximizing side (+1 on a
/// win); O is the minimizing side (-1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The cell value this player's mark occupies
    pub fn mark(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// A move: a (row, column) pair addressing one cell of the 3x3 grid.
///
/// A move is only meaningful relative to a specific board; applying it is
/// valid exactly when the addressed cell is empty and both coordinates are
/// in `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }

    /// Whether both coordinates are on the board
    pub fn in_bounds(self) -> bool {
        self.row < 3 && self.col < 3
    }

    /// Row-major cell index. Caller must check [`in_bounds`] first.
    ///
    /// [`in_bounds`]: Self::in_bounds
    pub(crate) fn index(self) -> usize {
        self.row * 3 + self.col
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Move {
            row: index / 3,
            col: index % 3,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Count of each mark on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkCounts {
    pub x: usize,
    pub o: usize,
    pub empty: usize,
}

/// An immutable 3x3 board, row-major.
///
/// This type implements `Copy` since it is only 9 bytes. There is no stored
/// side-to-move field: whose turn it is follows from the mark counts, so
/// every question about a position is answered from the grid contents alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Create the empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Create a board from a string of 9 cell characters.
    ///
    /// Whitespace is filtered out, so multi-line literals work. Valid cell
    /// characters are `X`/`x`, `O`/`o`/`0`, and `.` for empty.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Fewer than 9 non-whitespace characters are present
    /// - Any character is not a valid cell representation
    /// - The mark counts are unreachable in play (X and O differing by
    ///   more than 1, or O ahead of X)
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let board = Board { cells };
        let counts = board.mark_counts();
        if counts.o > counts.x || counts.x > counts.o + 1 {
            return Err(crate::Error::InvalidMarkCounts {
                x_count: counts.x,
                o_count: counts.o,
            });
        }

        Ok(board)
    }

    /// Get cell at (row, col). Coordinates must be in `0..3`.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * 3 + col]
    }

    /// Check whether a move addresses an empty on-board cell
    pub fn is_empty_at(&self, mv: Move) -> bool {
        mv.in_bounds() && self.cells[mv.index()] == Cell::Empty
    }

    /// Count the marks of each kind on the board
    pub fn mark_counts(&self) -> MarkCounts {
        let mut counts = MarkCounts {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in &self.cells {
            match cell {
                Cell::X => counts.x += 1,
                Cell::O => counts.o += 1,
                Cell::Empty => counts.empty += 1,
            }
        }
        counts
    }

    /// The player who moves next, derived from the mark counts.
    ///
    /// X moves whenever the counts are equal (including the empty board),
    /// O whenever X is one mark ahead. Positions where the counts differ by
    /// more than one are unreachable through [`apply_move`] and yield an
    /// unspecified answer.
    ///
    /// [`apply_move`]: Self::apply_move
    pub fn next_player(&self) -> Player {
        let counts = self.mark_counts();
        if counts.x > counts.o {
            Player::O
        } else {
            Player::X
        }
    }

    /// All moves addressing empty cells, in row-major order (lowest row
    /// first, then lowest column). Empty on a full board.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Move::from_index(i))
            .collect()
    }

    /// Apply a move for the player to move, returning the resulting board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMove`] when the addressed cell is occupied
    /// or the coordinates are out of bounds.
    ///
    /// [`Error::InvalidMove`]: crate::Error::InvalidMove
    #[must_use = "apply_move returns a new board; the original is unchanged"]
    pub fn apply_move(&self, mv: Move) -> Result<Board, crate::Error> {
        if !self.is_empty_at(mv) {
            return Err(crate::Error::InvalidMove {
                row: mv.row,
                col: mv.col,
            });
        }

        let mut next = *self;
        next.cells[mv.index()] = self.next_player().mark();
        Ok(next)
    }

    /// Get the winner if there is one.
    ///
    /// Lines are checked rows first, then columns, then the main diagonal,
    /// then the anti-diagonal.
    pub fn winner(&self) -> Option<Player> {
        lines::winner_on(&self.cells)
    }

    /// Check if a player has three in a row
    pub fn has_won(&self, player: Player) -> bool {
        lines::has_won(&self.cells, player)
    }

    /// Check if the game is over: a completed line exists or the board is
    /// full. A won board is terminal even with empty cells remaining.
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || !self.cells.contains(&Cell::Empty)
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        !self.cells.contains(&Cell::Empty) && self.winner().is_none()
    }

    /// Terminal outcome value: +1 if X has won, -1 if O has won, 0
    /// otherwise. Only meaningful on terminal boards; on a board still in
    /// play it falls through to 0.
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    /// Compact 9-character key string for use in maps and test fixtures
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                write!(f, "{}", self.get(row, col).to_char())?;
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.next_player(), Player::X);
    }

    #[test]
    fn test_next_player_derivation() {
        let board = Board::new();
        assert_eq!(board.next_player(), Player::X);

        let board = board.apply_move(Move::new(1, 1)).unwrap();
        assert_eq!(board.next_player(), Player::O);

        let board = board.apply_move(Move::new(0, 0)).unwrap();
        assert_eq!(board.next_player(), Player::X);
    }

    #[test]
    fn test_apply_move() {
        let board = Board::new();

        let next = board.apply_move(Move::new(1, 1)).unwrap();
        assert_eq!(next.get(1, 1), Cell::X);
        // Original board is unchanged
        assert_eq!(board.get(1, 1), Cell::Empty);

        // Move on occupied cell
        let result = next.apply_move(Move::new(1, 1));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("occupied"));
    }

    #[test]
    fn test_apply_move_out_of_bounds() {
        let board = Board::new();
        assert!(board.apply_move(Move::new(3, 0)).is_err());
        assert!(board.apply_move(Move::new(0, 3)).is_err());
        assert!(board.apply_move(Move::new(9, 9)).is_err());
    }

    #[test]
    fn test_legal_moves_row_major_order() {
        let board = Board::new();
        let moves = board.legal_moves();
        assert_eq!(moves.len(), 9);
        assert_eq!(moves[0], Move::new(0, 0));
        assert_eq!(moves[1], Move::new(0, 1));
        assert_eq!(moves[8], Move::new(2, 2));

        let board = board.apply_move(Move::new(0, 0)).unwrap();
        let moves = board.legal_moves();
        assert_eq!(moves.len(), 8);
        assert!(!moves.contains(&Move::new(0, 0)));
        assert_eq!(moves[0], Move::new(0, 1));
    }

    #[test]
    fn test_win_detection_row() {
        let board = Board::from_string("XXX OO. ...").unwrap();
        assert_eq!(board.winner(), Some(Player::X));
        assert!(board.is_terminal());
    }

    #[test]
    fn test_win_detection_column() {
        let board = Board::from_string(".O. XOX .OX").unwrap();
        assert_eq!(board.winner(), Some(Player::O));
        assert!(board.is_terminal());
    }

    #[test]
    fn test_win_detection_diagonals() {
        let board = Board::from_string("X.O .XO ..X").unwrap();
        assert_eq!(board.winner(), Some(Player::X));

        let board = Board::from_string("X.O XO. O.X").unwrap();
        assert_eq!(board.winner(), Some(Player::O));
    }

    #[test]
    fn test_terminal_with_empty_cells_remaining() {
        // X has the top row; six cells are still empty
        let board = Board::from_string("XXX O.O ...").unwrap();
        assert!(board.is_terminal());
        assert!(!board.legal_moves().is_empty());
        assert_eq!(board.utility(), 1);
    }

    #[test]
    fn test_full_board_draw() {
        let board = Board::from_string("XOX XOO OXX").unwrap();
        assert_eq!(board.winner(), None);
        assert!(board.is_terminal());
        assert!(board.is_draw());
        assert_eq!(board.utility(), 0);
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn test_utility_nonterminal_is_zero() {
        let board = Board::from_string("X.. .O. ...").unwrap();
        assert!(!board.is_terminal());
        assert_eq!(board.utility(), 0);
    }

    #[test]
    fn test_from_string_errors() {
        // Too short
        assert!(Board::from_string("XO.").is_err());

        // Invalid character
        assert!(Board::from_string("XOZ......").is_err());

        // O cannot be ahead of X
        assert!(Board::from_string("OO. X.. ...").is_err());

        // X cannot be ahead by more than one
        assert!(Board::from_string("XXX ..O ...").is_err());
    }

    #[test]
    fn test_encode_and_display() {
        let board = Board::from_string("XOX .O. X..").unwrap();
        assert_eq!(board.encode(), "XOX.O.X..");

        let display = format!("{board}");
        assert_eq!(display, "XOX\n.O.\nX..");
    }

    #[test]
    fn test_mark_counts() {
        let board = Board::from_string("XOX .O. X..").unwrap();
        let counts = board.mark_counts();
        assert_eq!(counts.x, 3);
        assert_eq!(counts.o, 2);
        assert_eq!(counts.empty, 4);
    }
}
