//! Bounded blink half-period

use crate::config::{BlinkConfig, TICKS_PER_MS};

/// Time the output stays at one level, in milliseconds. Always within the
/// floor and ceiling of the config it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkPeriod {
    ms: u32,
    floor_ms: u32,
    ceiling_ms: u32,
    step_ms: u32,
}

impl BlinkPeriod {
    /// Start at the configured default, clamped into bounds.
    pub fn from_config(config: &BlinkConfig) -> Self {
        Self {
            ms: config
                .default_period_ms
                .max(config.floor_period_ms)
                .min(config.ceiling_period_ms),
            floor_ms: config.floor_period_ms,
            ceiling_ms: config.ceiling_period_ms,
            step_ms: config.step_ms,
        }
    }

    #[inline]
    pub fn as_millis(&self) -> u32 {
        self.ms
    }

    /// Alarm value in timer ticks
    #[inline]
    pub fn as_ticks(&self) -> u32 {
        self.ms.saturating_mul(TICKS_PER_MS)
    }

    /// One step shorter (higher frequency), never below the floor.
    pub fn shorten(&mut self) {
        self.ms = self.ms.saturating_sub(self.step_ms).max(self.floor_ms);
    }

    /// One step longer (lower frequency), never above the ceiling.
    pub fn lengthen(&mut self) {
        self.ms = self.ms.saturating_add(self.step_ms).min(self.ceiling_ms);
    }

    pub fn at_floor(&self) -> bool {
        self.ms == self.floor_ms
    }

    pub fn at_ceiling(&self) -> bool {
        self.ms == self.ceiling_ms
    }
}
