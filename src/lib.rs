//! Perfect-play Tic-Tac-Toe via exhaustive minimax search
//!
//! This crate provides:
//! - A pure, immutable board model: turn derivation, legal-move
//!   enumeration, move application, win detection, terminal evaluation
//! - A full-depth minimax search selecting the optimal move for the side
//!   to move, assuming optimal counterplay
//!
//! There is no UI, no persistence, and no randomness; callers hold a
//! [`Board`], ask [`minimax::best_move`] for the optimal move, and apply
//! it with [`Board::apply_move`] to progress the game.

pub mod board;
pub mod error;
pub mod lines;
pub mod minimax;

pub use board::{Board, Cell, MarkCounts, Move, Player};
pub use error::{Error, Result};
pub use minimax::best_move;
