//! Turn sequencing: Max moves automatically, Min's move comes from a [`Frontend`].

use rand::Rng;
use tracing::info;

use crate::common::Move;
use crate::config::GameConfig;
use crate::error::{Error, Result};
use crate::min_max::{Player, ScoredMove};
use crate::ranking::{MinRanking, Ranker};
use crate::ttt::{GameBoard, Outcome};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GameState {
    MaxToMove,
    MinToMove,
    /// Absorbing.
    Finished(Outcome),
}

impl GameState {
    fn to_move(&self) -> Option<Player> {
        match self {
            GameState::MaxToMove => Some(Player::Max),
            GameState::MinToMove => Some(Player::Min),
            GameState::Finished(_) => None,
        }
    }
}

/// Everything outside the core: choosing Min's move and showing what happens.
pub trait Frontend {
    /// Picks one of `ranking.moves`.
    fn choose_min_move(&mut self, board: &GameBoard, ranking: &MinRanking) -> Result<Move>;

    fn on_start(&mut self, _board: &GameBoard) -> Result<()> {
        Ok(())
    }

    fn on_turn(&mut self, _player: Player) -> Result<()> {
        Ok(())
    }

    fn on_move(&mut self, _board: &GameBoard, _player: Player, _cell: Move) -> Result<()> {
        Ok(())
    }

    fn on_finished(&mut self, _outcome: Outcome) -> Result<()> {
        Ok(())
    }
}

pub struct Game {
    board: GameBoard,
    state: GameState,
    ranker: Ranker,
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            board: GameBoard::empty(),
            state: GameState::MaxToMove,
            ranker: Ranker::new(config.cache),
        }
    }

    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn ranker(&self) -> &Ranker {
        &self.ranker
    }

    fn expect_turn(&self, player: Player) -> Result<()> {
        match self.state.to_move() {
            None => Err(Error::GameOver),
            Some(p) if p != player => Err(Error::NotYourTurn(player)),
            Some(_) => Ok(()),
        }
    }

    fn commit(&mut self, cell: Move, player: Player) -> Result<GameState> {
        self.board.place(cell, player)?;
        info!(%player, %cell, "move committed");
        self.state = match self.board.outcome() {
            Outcome::Ongoing => match player {
                Player::Max => GameState::MinToMove,
                Player::Min => GameState::MaxToMove,
            },
            outcome => {
                info!(%outcome, "game finished");
                GameState::Finished(outcome)
            }
        };
        Ok(self.state)
    }

    /// Plays one of Max's optimal moves, breaking ties with `rng`.
    pub fn play_max<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<ScoredMove<Move>> {
        self.expect_turn(Player::Max)?;
        let chosen = self.ranker.choose_max_move(&self.board, rng).ok_or(Error::NoMoves)?;
        self.commit(chosen.min_max_move, Player::Max)?;
        Ok(chosen)
    }

    pub fn min_ranking(&mut self) -> Result<MinRanking> {
        self.expect_turn(Player::Min)?;
        self.ranker.rank_min_moves(&self.board).ok_or(Error::NoMoves)
    }

    pub fn play_min(&mut self, cell: Move) -> Result<GameState> {
        self.expect_turn(Player::Min)?;
        self.commit(cell, Player::Min)
    }

    /// Runs the game to the end.
    pub fn play_out<R, F>(&mut self, rng: &mut R, frontend: &mut F) -> Result<Outcome>
        where R: Rng + ?Sized, F: Frontend + ?Sized
    {
        frontend.on_start(&self.board)?;
        loop {
            match self.state {
                GameState::Finished(outcome) => {
                    frontend.on_finished(outcome)?;
                    return Ok(outcome);
                }
                GameState::MaxToMove => {
                    frontend.on_turn(Player::Max)?;
                    let chosen = self.play_max(rng)?;
                    frontend.on_move(&self.board, Player::Max, chosen.min_max_move)?;
                }
                GameState::MinToMove => {
                    frontend.on_turn(Player::Min)?;
                    let ranking = self.min_ranking()?;
                    let cell = frontend.choose_min_move(&self.board, &ranking)?;
                    self.play_min(cell)?;
                    frontend.on_move(&self.board, Player::Min, cell)?;
                }
            }
        }
    }
}
