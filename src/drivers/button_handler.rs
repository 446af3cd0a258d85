use embedded_hal::digital::v2::InputPin;

use crate::debounce::Debouncer;
use crate::error::Error;

/// Presses accepted during one sample. Both may be set.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Presses {
    pub increase: bool,
    pub decrease: bool,
}

impl Presses {
    pub fn any(&self) -> bool {
        self.increase || self.decrease
    }
}

/// The two frequency buttons, active low with pull-ups.
pub struct ButtonHandler<UP, DOWN> {
    up: UP,
    down: DOWN,
    up_debounce: Debouncer,
    down_debounce: Debouncer,
}

impl<UP, DOWN> ButtonHandler<UP, DOWN>
where
    UP: InputPin,
    DOWN: InputPin,
{
    pub fn new(up: UP, down: DOWN, debounce_ms: u32) -> Self {
        Self {
            up,
            down,
            up_debounce: Debouncer::new(debounce_ms),
            down_debounce: Debouncer::new(debounce_ms),
        }
    }

    /// Read both buttons once each, Increase first.
    pub fn poll(&mut self, now_ms: u32) -> Result<Presses, Error> {
        // Buttons are active low
        let up_low = self.up.is_low().map_err(|_| Error::InputPin)?;
        let down_low = self.down.is_low().map_err(|_| Error::InputPin)?;

        Ok(Presses {
            increase: self.up_debounce.accept(up_low, now_ms),
            decrease: self.down_debounce.accept(down_low, now_ms),
        })
    }

    pub fn release(self) -> (UP, DOWN) {
        (self.up, self.down)
    }
}
