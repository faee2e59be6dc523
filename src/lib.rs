//! Perfect-play tic-tac-toe.
//!
//! Max (X) is driven by an exhaustive minimax search and breaks ties between
//! equally good moves at random. Min (O) is played by a human who gets the
//! best tier of moves recommended by the same search.

pub mod common;
pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod min_max;
pub mod ranking;
pub mod ttt;

pub use crate::common::Move;
pub use crate::error::{Error, Result};
pub use crate::game::{Frontend, Game, GameState};
pub use crate::min_max::{Player, Score};
pub use crate::ttt::{GameBoard, Outcome};
