use crate::skill::TimingSet;

/// Engine configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Seed for the per-combat random stream.
    pub seed: u64,

    /// Effect timings folded in by [`crate::resolve`] and by a
    /// [`crate::ResolutionBuilder`] that does not override them.
    pub resolve_timings: TimingSet,
}

impl EngineConfig {
    // ===== fixed rules =====
    /// Reach of an unarmed bruto.
    pub const BARE_HANDS_REACH: u32 = 1;
    /// Hit speed treated as the 1.0 multiplier.
    pub const BASELINE_HIT_SPEED: u32 = 100;
    /// Upper bound of draw chances, skill odds and the sampled interval.
    pub const PERCENT_MAX: f64 = 100.0;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SEED: u64 = 0;
    pub const DEFAULT_RESOLVE_TIMINGS: TimingSet =
        TimingSet::PASSIVE.union(TimingSet::ON_COMBAT_START);

    pub fn new() -> Self {
        Self {
            seed: Self::DEFAULT_SEED,
            resolve_timings: Self::DEFAULT_RESOLVE_TIMINGS,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::new()
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
