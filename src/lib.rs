//! Timer-interrupt driven blinker for the ATmega128 with a two-button
//! frequency control.
//!
//! The hardware-independent core (`ticks`, `debounce`, `period`,
//! `application`) builds for any target; the register-level `hal` and the
//! serial console only exist on AVR.
#![cfg_attr(not(test), no_std)]
#![cfg_attr(target_arch = "avr", feature(abi_avr_interrupt))]

pub mod application;
pub mod clock;
pub mod config;
pub mod debounce;
pub mod drivers;
pub mod error;
pub mod period;
pub mod tick_source;
pub mod ticks;

#[cfg(target_arch = "avr")]
pub mod hal;

pub use application::{Application, Step, TickReport};
pub use clock::Monotonic;
pub use config::BlinkConfig;
pub use error::Error;
pub use tick_source::TickSource;
pub use ticks::PendingTicks;
