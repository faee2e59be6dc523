pub mod cache;
pub mod stats;

use std::ops::Not;

use strum_macros::{Display, EnumIter};

use crate::min_max::cache::{Cache, NullCache};
use crate::min_max::stats::{NullStats, Stats};

/// Exact game value from Max's perspective: `1` Max forces a win, `0` draw, `-1` Min forces a win.
pub type Score = i32;

#[derive(Eq, PartialEq, Hash)]
#[derive(Debug, Copy, Clone, EnumIter, Display)]
pub enum Player {
    Min,
    Max,
}

impl Not for Player {
    type Output = Player;

    fn not(self) -> Player {
        match self {
            Player::Min => Player::Max,
            Player::Max => Player::Min,
        }
    }
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub struct ScoredMove<M> {
    pub score: Score,
    pub min_max_move: M,
}

impl<M> ScoredMove<M> {
    pub fn new(score: Score, min_max_move: M) -> ScoredMove<M> {
        ScoredMove { score, min_max_move }
    }
}

/// Game rules the search is generic over.
///
/// `do_move` and `undo_move` come in pairs: after `undo_move` the state must be
/// exactly what it was before the matching `do_move`.
pub trait Strategy {
    type State;
    type Move;

    fn possible_moves(state: &Self::State) -> Vec<Self::Move>;
    /// `Some(score)` if the state is terminal, `None` while the game is ongoing.
    fn terminal_score(state: &Self::State) -> Option<Score>;
    fn do_move(state: &mut Self::State, min_max_move: &Self::Move, player: Player);
    fn undo_move(state: &mut Self::State, min_max_move: &Self::Move);
}

/// Exhaustive minimax search. The cache holds exact values only.
#[derive(Debug, Default)]
pub struct Search<C = NullCache, T = NullStats> {
    cache: C,
    stats: T,
}

impl<C, T> Search<C, T> {
    pub fn new(cache: C, stats: T) -> Self {
        Self { cache, stats }
    }

    pub fn stats(&self) -> &T {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut T {
        &mut self.stats
    }

    pub fn evaluate<S>(&mut self, state: &mut S::State, player: Player) -> Score
        where S: Strategy, C: Cache<S::State>, T: Stats
    {
        self.stats.record_state_scored();
        if let Some(score) = S::terminal_score(state) {
            self.stats.record_terminal();
            return score;
        }

        if let Some(score) = self.cache.lookup(state, player) {
            self.stats.record_cache_hit();
            return score;
        }
        self.stats.record_cache_miss();

        let mut best: Option<Score> = None;
        for m in S::possible_moves(state) {
            S::do_move(state, &m, player);
            let score = self.evaluate::<S>(state, !player);
            S::undo_move(state, &m);
            best = Some(match (best, player) {
                (None, _) => score,
                (Some(best), Player::Max) => best.max(score),
                (Some(best), Player::Min) => best.min(score),
            });
        }
        let score = best.unwrap_or_else(|| panic!("ongoing state has no possible moves for {player}"));

        self.cache.cache(state, player, score);
        score
    }

    /// Scores every move `player` can make, in the order the strategy produces them.
    pub fn score_possible_moves<S>(&mut self, state: &mut S::State, player: Player) -> Vec<ScoredMove<S::Move>>
        where S: Strategy, C: Cache<S::State>, T: Stats
    {
        let pos_moves = S::possible_moves(state);
        pos_moves.into_iter().map(|m| {
            S::do_move(state, &m, player);
            let score = self.evaluate::<S>(state, !player);
            S::undo_move(state, &m);
            ScoredMove::new(score, m)
        }).collect()
    }
}

/// Scores `state` with `player` to move, searching a private copy.
pub fn evaluate<S>(state: &S::State, player: Player) -> Score
    where S: Strategy, S::State: Clone
{
    let mut scratch = state.clone();
    Search::<NullCache, NullStats>::default().evaluate::<S>(&mut scratch, player)
}

#[cfg(test)]
mod test {
    use strum::IntoEnumIterator;

    use crate::min_max::{evaluate, Player, Score, Search, Strategy};
    use crate::min_max::cache::{HashMapCache, NullCache};
    use crate::min_max::stats::SimpleStats;

    /// Never terminal, never has moves.
    struct Stuck;

    impl Strategy for Stuck {
        type State = ();
        type Move = ();

        fn possible_moves(_state: &()) -> Vec<()> {
            vec![]
        }

        fn terminal_score(_state: &()) -> Option<Score> {
            None
        }

        fn do_move(_state: &mut (), _min_max_move: &(), _player: Player) {}

        fn undo_move(_state: &mut (), _min_max_move: &()) {}
    }

    /// Counting game: players alternately add 1 or 2, whoever reaches 4 wins.
    /// The state carries the running total and the player who moved last.
    struct RaceToFour;

    impl Strategy for RaceToFour {
        type State = (u8, Player);
        type Move = u8;

        fn possible_moves(state: &Self::State) -> Vec<u8> {
            (1..=2).filter(|step| state.0 + step <= 4).collect()
        }

        fn terminal_score(state: &Self::State) -> Option<Score> {
            match state {
                (4, Player::Max) => Some(1),
                (4, Player::Min) => Some(-1),
                _ => None,
            }
        }

        fn do_move(state: &mut Self::State, step: &u8, player: Player) {
            state.0 += step;
            state.1 = player;
        }

        fn undo_move(state: &mut Self::State, step: &u8) {
            state.0 -= step;
            state.1 = !state.1;
        }
    }

    #[test]
    fn player_flips() {
        for player in Player::iter() {
            assert_ne!(player, !player);
            assert_eq!(player, !!player);
        }
    }

    #[test]
    #[should_panic(expected = "no possible moves")]
    fn ongoing_state_without_moves_panics() {
        evaluate::<Stuck>(&(), Player::Max);
    }

    #[test]
    fn race_to_four() {
        // from 0 the player to move can always hand over a total of 1 and win
        assert_eq!(evaluate::<RaceToFour>(&(0, Player::Min), Player::Max), 1);
        assert_eq!(evaluate::<RaceToFour>(&(0, Player::Max), Player::Min), -1);
        // from 1 the player to move loses
        assert_eq!(evaluate::<RaceToFour>(&(1, Player::Min), Player::Max), -1);
        assert_eq!(evaluate::<RaceToFour>(&(1, Player::Max), Player::Min), 1);
    }

    #[test]
    fn scored_moves_restore_state() {
        let mut state = (0, Player::Min);
        let mut search = Search::new(NullCache, SimpleStats::default());
        let scored = search.score_possible_moves::<RaceToFour>(&mut state, Player::Max);
        assert_eq!(state, (0, Player::Min));
        assert_eq!(scored.iter().map(|m| (m.min_max_move, m.score)).collect::<Vec<_>>(), vec![(1, 1), (2, -1)]);
        assert!(search.stats().state_scored_count > 0);
        assert_eq!(search.stats().cache_hit_count, 0);
    }

    #[test]
    fn cache_does_not_change_scores() {
        let mut cached = Search::new(HashMapCache::default(), SimpleStats::default());
        for start in 0..4 {
            for player in Player::iter() {
                let state = (start, !player);
                let expected = evaluate::<RaceToFour>(&state, player);
                assert_eq!(cached.evaluate::<RaceToFour>(&mut state.clone(), player), expected);
            }
        }
        assert!(cached.stats().cache_hit_count > 0);
    }
}
