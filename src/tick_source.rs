//! Periodic alarm interface consumed by the main loop

use crate::error::Error;

/// Hardware timer raising a periodic alarm interrupt.
///
/// Each elapsed period invokes the handler registered with the concrete
/// driver exactly once, asynchronously to the caller.
pub trait TickSource {
    /// Select the tick unit and reload behavior. Fails if the hardware cannot
    /// provide the unit or no handler is attached; both are fatal at startup.
    fn configure(&mut self, tick_unit_us: u32, auto_reload: bool) -> Result<(), Error>;

    /// Program the alarm interval in ticks. May be called while running.
    fn set_alarm(&mut self, ticks: u32);

    /// Start generating alarm interrupts.
    fn enable(&mut self);
}

impl<T: TickSource + ?Sized> TickSource for &mut T {
    fn configure(&mut self, tick_unit_us: u32, auto_reload: bool) -> Result<(), Error> {
        (**self).configure(tick_unit_us, auto_reload)
    }

    fn set_alarm(&mut self, ticks: u32) {
        (**self).set_alarm(ticks)
    }

    fn enable(&mut self) {
        (**self).enable()
    }
}
