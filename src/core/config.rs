//! Engine configuration, fixed for the lifetime of a session.

use crate::core::rng::RandomizerPolicy;

/// Constructor-time configuration for [`Engine`](crate::core::Engine).
///
/// All scoring and gravity tuning flows through here; nothing in the core is
/// a hardcoded game constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Grid width in cells
    pub cols: u8,
    /// Grid height in cells
    pub rows: u8,
    /// Points awarded per cleared line
    pub line_bonus: u32,
    /// Cleared lines required per level-up
    pub lines_per_level: u32,
    /// Drop interval at level 1 (milliseconds)
    pub base_drop_ms: u32,
    /// Interval reduction per level gained (milliseconds)
    pub drop_step_ms: u32,
    /// Interval floor; gravity never gets faster than this (milliseconds)
    pub min_drop_ms: u32,
    /// Piece sequence policy
    pub policy: RandomizerPolicy,
    /// RNG seed for the piece sequence
    pub seed: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cols: 10,
            rows: 20,
            line_bonus: 100,
            lines_per_level: 5,
            base_drop_ms: 1000,
            drop_step_ms: 100,
            min_drop_ms: 200,
            policy: RandomizerPolicy::Bag,
            seed: 1,
        }
    }
}

impl EngineConfig {
    /// Default configuration with a specific seed.
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}
