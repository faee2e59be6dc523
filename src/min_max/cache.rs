use std::hash::Hash;

use ahash::HashMap;

use crate::min_max::{Player, Score};

/// Memo of exact scores keyed by state and player to move.
pub trait Cache<S> {
    fn cache(&mut self, state: &S, player: Player, score: Score);
    fn lookup(&mut self, state: &S, player: Player) -> Option<Score>;
}

impl<S> Cache<S> for Box<dyn Cache<S>> {
    fn cache(&mut self, state: &S, player: Player, score: Score) {
        (**self).cache(state, player, score)
    }

    fn lookup(&mut self, state: &S, player: Player) -> Option<Score> {
        (**self).lookup(state, player)
    }
}

#[derive(Debug, Clone)]
pub struct HashMapCache<S>(HashMap<(S, Player), Score>);

impl<S> Default for HashMapCache<S> {
    fn default() -> Self {
        Self(HashMap::default())
    }
}

impl<S> Cache<S> for HashMapCache<S> where S: Eq + Hash + Clone {
    fn cache(&mut self, state: &S, player: Player, score: Score) {
        self.0.insert((state.clone(), player), score);
    }

    fn lookup(&mut self, state: &S, player: Player) -> Option<Score> {
        self.0.get(&(state.clone(), player)).copied()
    }
}

#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Default)]
pub struct NullCache;

impl<S> Cache<S> for NullCache {
    fn cache(&mut self, _state: &S, _player: Player, _score: Score) {}

    fn lookup(&mut self, _state: &S, _player: Player) -> Option<Score> {
        None
    }
}
