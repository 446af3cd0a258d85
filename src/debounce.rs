//! Time-window debouncing for a single button

use crate::clock::elapsed_ms;

/// Accepts a press only if the previous accepted press of the same button is
/// more than `window_ms` in the past.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    window_ms: u32,
    last_accepted: Option<u32>,
}

impl Debouncer {
    pub const fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            last_accepted: None,
        }
    }

    /// Feed one sample. Returns `true` if this sample counts as a press.
    pub fn accept(&mut self, asserted: bool, now_ms: u32) -> bool {
        if !asserted {
            return false;
        }

        let ready = match self.last_accepted {
            None => true,
            Some(last) => elapsed_ms(now_ms, last) > self.window_ms,
        };
        if ready {
            self.last_accepted = Some(now_ms);
        }
        ready
    }
}
