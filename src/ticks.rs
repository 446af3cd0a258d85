//! Pending-tick counter shared between the alarm interrupt and the main loop

use core::cell::Cell;
use critical_section::Mutex;

/// Number of timer alarms that fired but were not yet serviced.
///
/// The interrupt side only ever calls [`PendingTicks::record`]; the main loop
/// only ever calls [`PendingTicks::try_take`]. Both go through
/// `critical_section::with`, which masks interrupts on the target and is safe
/// to nest inside an interrupt handler.
pub struct PendingTicks {
    count: Mutex<Cell<u32>>,
}

impl PendingTicks {
    pub const fn new() -> Self {
        Self {
            count: Mutex::new(Cell::new(0)),
        }
    }

    /// Count one alarm. Called from interrupt context.
    #[inline]
    pub fn record(&self) {
        critical_section::with(|cs| {
            let count = self.count.borrow(cs);
            count.set(count.get().wrapping_add(1));
        });
    }

    /// Consume one pending alarm, if any.
    ///
    /// Check and decrement happen in the same critical section, so the count
    /// cannot drop below zero whatever the interleaving with `record`.
    #[inline]
    pub fn try_take(&self) -> bool {
        critical_section::with(|cs| {
            let count = self.count.borrow(cs);
            match count.get() {
                0 => false,
                n => {
                    count.set(n - 1);
                    true
                }
            }
        })
    }

    /// Current backlog, without consuming it.
    #[inline]
    pub fn pending(&self) -> u32 {
        critical_section::with(|cs| self.count.borrow(cs).get())
    }
}

impl Default for PendingTicks {
    fn default() -> Self {
        Self::new()
    }
}
