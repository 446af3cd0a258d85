//! Startup and runtime failures

use ufmt::derive::uDebug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, uDebug)]
pub enum Error {
    /// Floor not below ceiling, default outside the bounds, or alarm overflow
    PeriodBounds,
    /// Zero adjustment step
    ZeroStep,
    /// Zero floor period
    ZeroPeriod,
    /// Tick source cannot run at the requested tick unit (microseconds)
    UnsupportedTickUnit(u32),
    /// Tick source configured before an alarm handler was attached
    HandlerMissing,
    /// Writing the output pin failed
    OutputPin,
    /// Reading a button pin failed
    InputPin,
}
