//! Game configuration.

use clap::ValueEnum;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strum_macros::{Display, EnumIter};

/// Presentation variants. They only change names and messages, never the rules.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, ValueEnum, EnumIter, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ThemeKind {
    /// Thanos against Captain America.
    #[default]
    Marvel,
    /// Computer (X) against you (O).
    Classic,
}

/// # Examples
///
/// ```
/// use perfect_ttt::config::{GameConfig, ThemeKind};
///
/// let config = GameConfig::new()
///     .with_theme(ThemeKind::Classic)
///     .with_seed(42)
///     .with_cache(true);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    pub theme: ThemeKind,
    /// Seed for Max's tie-breaks. `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Memoize exact scores between turns.
    pub cache: bool,
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(mut self, theme: ThemeKind) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_cache(mut self, cache: bool) -> Self {
        self.cache = cache;
        self
    }

    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}
