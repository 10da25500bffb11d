//! Runtime configuration shared by the orchestrator and scenario runners.

use std::env;
use std::time::Duration;

use battle_core::{BattleConfig, BattleRng, EntropyRng, PcgRng, compute_seed};

use crate::events::RecentEvents;

/// Runtime configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    pub battle: BattleConfig,
    /// Size of the display window returned by `recent_events`.
    pub display_buffer_size: usize,
    /// Pause between automatic steps. Presentation pacing only.
    pub tick_delay: Option<Duration>,
    /// Base seed for reproducible battles. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            battle: BattleConfig::default(),
            display_buffer_size: RecentEvents::DEFAULT_CAPACITY,
            tick_delay: None,
            seed: None,
        }
    }
}

impl RuntimeConfig {
    /// Seed context for monster selection and other non-battle rolls.
    const SELECTION_CONTEXT: u32 = 1;

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_battle_config(mut self, battle: BattleConfig) -> Self {
        self.battle = battle;
        self
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_DISPLAY_BUFFER` - Display window size (default: 20)
    /// - `BATTLE_TICK_DELAY_MS` - Delay between automatic steps (default: none)
    /// - `BATTLE_SEED` - Base seed for reproducible runs (default: entropy)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(size) = read_var::<usize>(lookup("BATTLE_DISPLAY_BUFFER")) {
            config.display_buffer_size = size.max(1);
        }

        if let Some(millis) = read_var::<u64>(lookup("BATTLE_TICK_DELAY_MS")) {
            config.tick_delay = (millis > 0).then(|| Duration::from_millis(millis));
        }

        config.seed = read_var::<u64>(lookup("BATTLE_SEED"));

        config
    }

    /// Random source for the battle at position `stream` of a run.
    ///
    /// With a base seed every stream gets its own reproducible sequence.
    pub fn rng_for(&self, stream: u64) -> Box<dyn BattleRng> {
        self.rng_with_context(stream, 0)
    }

    /// Random source for selections that happen outside battles.
    pub fn selection_rng(&self) -> Box<dyn BattleRng> {
        self.rng_with_context(0, Self::SELECTION_CONTEXT)
    }

    fn rng_with_context(&self, stream: u64, context: u32) -> Box<dyn BattleRng> {
        match self.seed {
            Some(seed) => Box::new(PcgRng::new(compute_seed(seed, stream, context))),
            None => Box::new(EntropyRng::new()),
        }
    }
}

fn read_var<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    value?.trim().parse().ok()
}
