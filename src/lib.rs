//! Optimal Tic-Tac-Toe play via exhaustive game-tree search
//!
//! This crate provides:
//! - Complete Tic-Tac-Toe rules implementation with validation
//! - Minimax search with alpha-beta pruning over the full game tree
//! - A search-trace recorder for inspecting explored trees
//! - Replayable game histories for driving complete games
//!
//! The board rules are pure: every operation that changes a position
//! returns a new [`Board`], and whose turn it is gets derived from the
//! mark counts rather than stored. The searcher on top is synchronous
//! and stateless, so concurrent searches on independent boards are safe.
//!
//! ```
//! use oxo::{Board, minimax};
//!
//! let board = Board::from_string("_XO OXX X_O").unwrap();
//! let action = minimax(&board).unwrap().expect("position is undecided");
//! assert_eq!((action.row, action.col), (2, 1));
//! ```

pub mod board;
pub mod error;
pub mod game;
pub mod lines;
pub mod search;
pub mod trace;
mod validation;

pub use board::{Action, Board, Cell, Player};
pub use error::{Error, Result};
pub use game::{Game, GameOutcome, Move};
pub use search::{SearchConfig, SearchOutcome, Searcher, minimax};
pub use trace::{NodeId, SearchNode, SearchTrace};
