//! Application layer: the cooperative main loop
//!
//! The alarm interrupt only counts ticks into [`PendingTicks`]. Everything
//! else happens here, one serviced tick per [`Application::poll`]: toggle the
//! output, sample the buttons, and reprogram the alarm with the current
//! half-period. Buttons are therefore sampled at the blink cadence.

use core::convert::Infallible;

use embedded_hal::digital::v2::{InputPin, OutputPin};
use ufmt::{uWrite, uwriteln};

use crate::clock::Monotonic;
use crate::config::{BlinkConfig, TICK_UNIT_US};
use crate::drivers::button_handler::{ButtonHandler, Presses};
use crate::error::Error;
use crate::period::BlinkPeriod;
use crate::tick_source::TickSource;
use crate::ticks::PendingTicks;

/// Outcome of one main-loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// No pending tick
    Idle,
    /// One tick consumed
    Serviced(TickReport),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Level written to the output
    pub level: bool,
    pub presses: Presses,
    /// Half-period programmed into the alarm, in milliseconds
    pub period_ms: u32,
}

/// Main application state and logic
pub struct Application<'a, LED, UP, DOWN, T, C, W> {
    ticks: &'a PendingTicks,
    led: LED,
    level: bool,
    buttons: ButtonHandler<UP, DOWN>,
    period: BlinkPeriod,
    timer: T,
    clock: C,
    console: W,
    config: BlinkConfig,
    consumed: u32,
}

impl<'a, LED, UP, DOWN, T, C, W> Application<'a, LED, UP, DOWN, T, C, W>
where
    LED: OutputPin,
    UP: InputPin,
    DOWN: InputPin,
    T: TickSource,
    C: Monotonic,
    W: uWrite,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        ticks: &'a PendingTicks,
        led: LED,
        up: UP,
        down: DOWN,
        timer: T,
        clock: C,
        console: W,
        config: BlinkConfig,
    ) -> Result<Self, Error> {
        config.validate()?;

        Ok(Self {
            ticks,
            led,
            level: false,
            buttons: ButtonHandler::new(up, down, config.debounce_window_ms),
            period: BlinkPeriod::from_config(&config),
            timer,
            clock,
            console,
            config,
            consumed: 0,
        })
    }

    /// Drive the output low, program the first alarm and enable the timer.
    pub fn start(&mut self) -> Result<(), Error> {
        self.led.set_low().map_err(|_| Error::OutputPin)?;

        self.timer.configure(TICK_UNIT_US, true)?;
        self.timer.set_alarm(self.period.as_ticks());
        self.timer.enable();

        let _ = uwriteln!(
            self.console,
            "System started, half-period {} ms",
            self.period.as_millis()
        );
        Ok(())
    }

    /// Service at most one pending tick.
    ///
    /// A pin error is fatal. The tick that hit it stays consumed and the
    /// output keeps its new level, but the alarm is not reprogrammed.
    pub fn poll(&mut self) -> Result<Step, Error> {
        if !self.ticks.try_take() {
            return Ok(Step::Idle);
        }
        self.consumed = self.consumed.wrapping_add(1);

        self.level = !self.level;
        let written = if self.level {
            self.led.set_high()
        } else {
            self.led.set_low()
        };
        written.map_err(|_| Error::OutputPin)?;

        if self.config.trace_ticks {
            let _ = uwriteln!(
                self.console,
                "tick {}: level {}",
                self.consumed,
                self.level as u8
            );
        }

        let presses = self.adjust_period()?;
        self.timer.set_alarm(self.period.as_ticks());

        Ok(Step::Serviced(TickReport {
            level: self.level,
            presses,
            period_ms: self.period.as_millis(),
        }))
    }

    /// Poll forever. Returns only on a pin error.
    pub fn run(&mut self) -> Result<Infallible, Error> {
        loop {
            self.poll()?;
        }
    }

    fn adjust_period(&mut self) -> Result<Presses, Error> {
        let now = self.clock.now_millis();
        let presses = self.buttons.poll(now)?;

        if presses.increase {
            if self.period.at_floor() {
                let _ = uwriteln!(self.console, "faster: already at {} ms", self.period.as_millis());
            }
            self.period.shorten();
        }
        if presses.decrease {
            if self.period.at_ceiling() {
                let _ = uwriteln!(self.console, "slower: already at {} ms", self.period.as_millis());
            }
            self.period.lengthen();
        }
        if presses.any() {
            let _ = uwriteln!(self.console, "half-period {} ms", self.period.as_millis());
        }

        Ok(presses)
    }

    /// Level last written to the output
    pub fn output_level(&self) -> bool {
        self.level
    }

    pub fn period_ms(&self) -> u32 {
        self.period.as_millis()
    }

    /// Ticks serviced since start, wrapping
    pub fn consumed(&self) -> u32 {
        self.consumed
    }

    pub fn console_mut(&mut self) -> &mut W {
        &mut self.console
    }

    pub fn release(self) -> (LED, UP, DOWN, T, C, W) {
        let (up, down) = self.buttons.release();
        (self.led, up, down, self.timer, self.clock, self.console)
    }
}
