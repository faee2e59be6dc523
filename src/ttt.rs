use std::fmt;

use strum_macros::Display;

use crate::common::{Board3x3, Cell, Move};
use crate::error::{Error, Result};
use crate::min_max;
use crate::min_max::{Player, Score};

#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Display)]
pub enum Outcome {
    Ongoing,
    MaxWon,
    MinWon,
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// The exact score of a finished game, `None` while it is still running.
    pub fn score(&self) -> Option<Score> {
        match self {
            Outcome::MaxWon => Some(1),
            Outcome::MinWon => Some(-1),
            Outcome::Draw => Some(0),
            Outcome::Ongoing => None,
        }
    }
}

#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum CellState {
    EMPTY,
    X,
    O,
}

impl Cell for CellState {
    fn empty() -> Self {
        Self::EMPTY
    }
}

impl From<Player> for CellState {
    fn from(player: Player) -> Self {
        match player {
            Player::Max => CellState::X,
            Player::Min => CellState::O,
        }
    }
}

pub type GameBoard = Board3x3<CellState>;

impl GameBoard {
    pub fn outcome(&self) -> Outcome {
        // a full board can still hold a line, so lines go first
        match self.winning_indices() {
            Some(indices) => match self.cells[indices[0]] {
                CellState::X => Outcome::MaxWon,
                CellState::O => Outcome::MinWon,
                CellState::EMPTY => unreachable!("winning line of empty cells"),
            },
            None => {
                if self.is_full() {
                    Outcome::Draw
                } else {
                    Outcome::Ongoing
                }
            }
        }
    }

    /// Puts `player`'s mark on an empty cell. On error the board is unchanged.
    pub fn place(&mut self, cell: Move, player: Player) -> Result<()> {
        match self.get(cell) {
            CellState::EMPTY => {
                self.cells[cell.index()] = CellState::from(player);
                Ok(())
            }
            _ => Err(Error::Occupied { row: cell.row(), col: cell.col() }),
        }
    }

    pub fn place_at(&mut self, row: usize, col: usize, player: Player) -> Result<Move> {
        let cell = Move::new(row, col)?;
        self.place(cell, player)?;
        Ok(cell)
    }

    pub fn count(&self, player: Player) -> usize {
        let mark = CellState::from(player);
        self.cells.iter().filter(|&&c| c == mark).count()
    }
}

impl fmt::Display for GameBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            let c = match cell {
                CellState::EMPTY => '.',
                CellState::X => 'X',
                CellState::O => 'O',
            };
            write!(f, "{c}")?;
            if i % 3 == 2 && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Plain tic-tac-toe rules for the minimax search. Moves are explored in row-major order.
#[derive(Debug, Copy, Clone, Default)]
pub struct Strategy;

impl min_max::Strategy for Strategy {
    type State = GameBoard;
    type Move = Move;

    fn possible_moves(state: &GameBoard) -> Vec<Move> {
        state.empty_cells()
    }

    fn terminal_score(state: &GameBoard) -> Option<Score> {
        state.outcome().score()
    }

    fn do_move(state: &mut GameBoard, cell: &Move, player: Player) {
        debug_assert_eq!(state.get(*cell), CellState::EMPTY);
        state.cells[cell.index()] = CellState::from(player);
    }

    fn undo_move(state: &mut GameBoard, cell: &Move) {
        debug_assert_ne!(state.get(*cell), CellState::EMPTY);
        state.cells[cell.index()] = CellState::EMPTY;
    }
}

#[cfg(test)]
mod test {
    use std::time::Instant;

    use crate::common::Move;
    use crate::error::Error;
    use crate::min_max::{evaluate, Player, Search};
    use crate::min_max::cache::HashMapCache;
    use crate::min_max::stats::SimpleStats;
    use crate::ttt::{GameBoard, Outcome, Strategy};

    #[test]
    fn status() {
        use crate::ttt::CellState::*;
        let board = GameBoard::new([EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY]);
        assert_eq!(board.outcome(), Outcome::Ongoing);

        let board = GameBoard::new([X, X, X, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY]);
        assert_eq!(board.outcome(), Outcome::MaxWon);

        // top row decides regardless of the rest
        let board = GameBoard::new([X, X, X, O, O, EMPTY, O, EMPTY, EMPTY]);
        assert_eq!(board.outcome(), Outcome::MaxWon);

        let board = GameBoard::new([O, X, X, X, O, O, X, X, O]);
        assert_eq!(board.outcome(), Outcome::MinWon);

        let board = GameBoard::new([O, O, O, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY]);
        assert_eq!(board.outcome(), Outcome::MinWon);

        let board = GameBoard::new([X, O, O, O, X, X, EMPTY, O, O]);
        assert_eq!(board.outcome(), Outcome::Ongoing);

        let board = GameBoard::new([X, O, O, O, X, X, X, O, O]);
        assert_eq!(board.outcome(), Outcome::Draw);

        // last move fills the board and completes a column
        let board = GameBoard::new([X, O, X, X, O, O, X, X, O]);
        assert_eq!(board.outcome(), Outcome::MaxWon);
    }

    #[test]
    fn place_rejects_occupied_cells() {
        let mut board = GameBoard::empty();
        let cell = board.place_at(1, 1, Player::Max).unwrap();
        assert_eq!(cell, Move::new(1, 1).unwrap());

        let before = board;
        assert!(matches!(board.place(cell, Player::Min), Err(Error::Occupied { row: 1, col: 1 })));
        assert!(matches!(board.place_at(3, 1, Player::Min), Err(Error::OutOfBounds { row: 3, col: 1 })));
        assert_eq!(board, before);
        assert_eq!(board.count(Player::Max), 1);
        assert_eq!(board.count(Player::Min), 0);
    }

    #[test]
    fn display() {
        use crate::ttt::CellState::*;
        let board = GameBoard::new([X, EMPTY, O, EMPTY, X, EMPTY, O, EMPTY, EMPTY]);
        assert_eq!(board.to_string(), "X.O\n.X.\nO..");
    }

    #[test]
    fn empty_board() {
        let board = GameBoard::empty();
        let start = Instant::now();
        let score = evaluate::<Strategy>(&board, Player::Max);
        println!("search on empty board took {}ms", start.elapsed().as_millis());
        // perfect play from both sides is a draw
        assert_eq!(score, 0);
        assert_eq!(evaluate::<Strategy>(&board, Player::Min), 0);
    }

    #[test]
    fn empty_board_cached() {
        let mut board = GameBoard::empty();
        let mut search = Search::new(HashMapCache::default(), SimpleStats::default());
        assert_eq!(search.evaluate::<Strategy>(&mut board, Player::Max), 0);
        assert_eq!(board, GameBoard::empty());
        assert!(search.stats().cache_hit_count > 0);
        // each of the 5478 reachable positions is expanded at most once
        assert!(search.stats().state_scored_count < 20_000);
    }

    #[test]
    fn forced_results() {
        use crate::ttt::CellState::*;
        // X to move completes the top row
        let board = GameBoard::new([X, X, EMPTY, O, O, EMPTY, EMPTY, EMPTY, EMPTY]);
        assert_eq!(evaluate::<Strategy>(&board, Player::Max), 1);
        // O to move completes the middle row first
        assert_eq!(evaluate::<Strategy>(&board, Player::Min), -1);

        // X has a fork on the center diagonal and the middle column
        let board = GameBoard::new([X, X, O, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY]);
        assert_eq!(evaluate::<Strategy>(&board, Player::Max), 1);
    }
}
