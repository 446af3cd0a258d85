//! Configuration constants for the ATmega128 blinker firmware

use crate::error::Error;

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 16_000_000;

/// UART baud rate
pub const UART_BAUD: u32 = 9600;

/// Timer tick unit in microseconds
pub const TICK_UNIT_US: u32 = 1;

/// Microseconds per millisecond at the configured tick unit
pub const TICKS_PER_MS: u32 = 1_000 / TICK_UNIT_US;

/// Shortest allowed half-period in milliseconds
pub const FLOOR_PERIOD_MS: u32 = 100;

/// Longest allowed half-period in milliseconds
pub const CEILING_PERIOD_MS: u32 = 2_000;

/// Half-period change per accepted press in milliseconds
pub const STEP_MS: u32 = 50;

/// Button debounce time in milliseconds
pub const BUTTON_DEBOUNCE_MS: u32 = 200;

/// Half-period after reset in milliseconds
pub const DEFAULT_PERIOD_MS: u32 = 500;

/// Pin assignment on the BigAVR2 board
pub mod pins {
    /// Blinking output, PORTA bit
    pub const LED: u8 = 0;
    /// Increase-frequency button, PORTB bit
    pub const BTN_UP: u8 = 0;
    /// Decrease-frequency button, PORTB bit
    pub const BTN_DOWN: u8 = 1;
}

/// Runtime view of the timing constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkConfig {
    pub floor_period_ms: u32,
    pub ceiling_period_ms: u32,
    pub step_ms: u32,
    pub debounce_window_ms: u32,
    pub default_period_ms: u32,
    /// Print one console line per serviced tick
    pub trace_ticks: bool,
}

impl BlinkConfig {
    pub const DEFAULT: Self = Self {
        floor_period_ms: FLOOR_PERIOD_MS,
        ceiling_period_ms: CEILING_PERIOD_MS,
        step_ms: STEP_MS,
        debounce_window_ms: BUTTON_DEBOUNCE_MS,
        default_period_ms: DEFAULT_PERIOD_MS,
        trace_ticks: false,
    };

    pub fn validate(&self) -> Result<(), Error> {
        if self.floor_period_ms == 0 {
            return Err(Error::ZeroPeriod);
        }
        if self.step_ms == 0 {
            return Err(Error::ZeroStep);
        }
        if self.floor_period_ms >= self.ceiling_period_ms
            || self.default_period_ms < self.floor_period_ms
            || self.default_period_ms > self.ceiling_period_ms
        {
            return Err(Error::PeriodBounds);
        }
        // The alarm value is programmed in microseconds
        if self.ceiling_period_ms.checked_mul(TICKS_PER_MS).is_none() {
            return Err(Error::PeriodBounds);
        }
        Ok(())
    }
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
