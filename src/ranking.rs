//! Move enumeration and ranking for both seats.
//!
//! Max is fully automated: every optimal move is collected and one is picked at
//! random. Min only gets advice: the best non-empty tier of moves is offered and
//! someone else picks.

use itertools::Itertools;
use rand::Rng;
use rand::seq::SliceRandom;
use strum_macros::Display;
use tracing::{debug, instrument};

use crate::common::Move;
use crate::min_max::{Player, Score, ScoredMove, Search};
use crate::min_max::cache::{Cache, HashMapCache, NullCache};
use crate::min_max::stats::SimpleStats;
use crate::ttt::{GameBoard, Strategy};

/// All of Max's moves that reach the best score.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BestMoves {
    pub score: Score,
    pub moves: Vec<Move>,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display)]
pub enum Tier {
    /// Min forces a win.
    WinForMin,
    /// Min forces at least a draw.
    DrawOrBetter,
    /// Max forces a win whatever Min does.
    NoGuarantee,
}

impl Tier {
    pub fn from_score(score: Score) -> Self {
        match score {
            s if s < 0 => Tier::WinForMin,
            0 => Tier::DrawOrBetter,
            _ => Tier::NoGuarantee,
        }
    }
}

/// The moves offered to Min, row-major.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MinRanking {
    pub tier: Tier,
    pub moves: Vec<Move>,
}

pub struct Ranker {
    search: Search<Box<dyn Cache<GameBoard>>, SimpleStats>,
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Ranker {
    /// With `cache` set, exact scores are memoized across calls.
    pub fn new(cache: bool) -> Self {
        let cache: Box<dyn Cache<GameBoard>> = if cache {
            Box::new(HashMapCache::<GameBoard>::default())
        } else {
            Box::new(NullCache)
        };
        Self { search: Search::new(cache, SimpleStats::default()) }
    }

    pub fn stats(&self) -> &SimpleStats {
        self.search.stats()
    }

    pub fn evaluate(&mut self, board: &GameBoard, player: Player) -> Score {
        let mut scratch = *board;
        self.search.evaluate::<Strategy>(&mut scratch, player)
    }

    fn score_moves(&mut self, board: &GameBoard, player: Player) -> Option<Vec<ScoredMove<Move>>> {
        if board.outcome().is_terminal() {
            return None;
        }
        let mut scratch = *board;
        let scored = self.search.score_possible_moves::<Strategy>(&mut scratch, player);
        debug_assert_eq!(&scratch, board);
        for m in &scored {
            debug!(%player, candidate = %m.min_max_move, score = m.score, "scored candidate");
        }
        debug!(states = self.stats().state_scored_count, cache_hits = self.stats().cache_hit_count, "search stats");
        Some(scored)
    }

    /// `None` if the game is already over.
    #[instrument(level = "debug", skip_all)]
    pub fn best_max_moves(&mut self, board: &GameBoard) -> Option<BestMoves> {
        let best = self.score_moves(board, Player::Max)?
            .into_iter()
            .max_set_by_key(|m| m.score);
        let score = best.first()?.score;
        Some(BestMoves { score, moves: best.into_iter().map(|m| m.min_max_move).collect() })
    }

    /// Picks uniformly among Max's optimal moves.
    pub fn choose_max_move<R: Rng + ?Sized>(&mut self, board: &GameBoard, rng: &mut R) -> Option<ScoredMove<Move>> {
        let BestMoves { score, moves } = self.best_max_moves(board)?;
        moves.choose(rng).map(|&m| ScoredMove::new(score, m))
    }

    /// The lowest-scoring moves for Min. The minimum set is exactly the best
    /// non-empty tier, and when no move wins or draws it is every legal move.
    #[instrument(level = "debug", skip_all)]
    pub fn rank_min_moves(&mut self, board: &GameBoard) -> Option<MinRanking> {
        let best = self.score_moves(board, Player::Min)?
            .into_iter()
            .min_set_by_key(|m| m.score);
        let tier = Tier::from_score(best.first()?.score);
        Some(MinRanking { tier, moves: best.into_iter().map(|m| m.min_max_move).collect() })
    }
}

pub fn evaluate(board: &GameBoard, player: Player) -> Score {
    Ranker::default().evaluate(board, player)
}

pub fn best_max_moves(board: &GameBoard) -> Option<BestMoves> {
    Ranker::default().best_max_moves(board)
}

pub fn choose_max_move<R: Rng + ?Sized>(board: &GameBoard, rng: &mut R) -> Option<ScoredMove<Move>> {
    Ranker::default().choose_max_move(board, rng)
}

pub fn rank_min_moves(board: &GameBoard) -> Option<MinRanking> {
    Ranker::default().rank_min_moves(board)
}
