//! Timer1 alarm source and Timer0 millisecond clock
//!
//! Timer1 runs in CTC mode with a 1 ms compare interrupt. The alarm value is
//! kept in microseconds and counted down in software, so the programmed
//! period keeps the 1 us unit while the hardware resolution is 1 ms.

use avr_device::atmega128a::{TC0, TC1};
use core::cell::{Cell, RefCell};
use critical_section::Mutex;

use crate::clock::Monotonic;
use crate::config::TICK_UNIT_US;
use crate::error::Error;
use crate::tick_source::TickSource;

/// Microseconds between two Timer1 compare interrupts
const COMPARE_PERIOD_US: u32 = 1_000;

// 16 MHz / 8 = 2 counts per us
const TC1_TOP: u16 = 1_999;
const TCCR1B_WGM12: u8 = 1 << 3;
const TCCR1B_CS11: u8 = 1 << 1;
const TIMSK_OCIE1A: u8 = 1 << 4;

// 16 MHz / 64 = 250 counts per ms
const TC0_TOP: u8 = 249;
const TCCR0_WGM01: u8 = 1 << 3;
const TCCR0_CS_DIV64: u8 = 0b100;
const TIMSK_OCIE0: u8 = 1 << 1;

struct AlarmState {
    handler: Option<fn()>,
    period_us: u32,
    elapsed_us: u32,
    auto_reload: bool,
    armed: bool,
}

static ALARM: Mutex<RefCell<AlarmState>> = Mutex::new(RefCell::new(AlarmState {
    handler: None,
    period_us: 0,
    elapsed_us: 0,
    auto_reload: true,
    armed: false,
}));

static MILLIS: Mutex<Cell<u32>> = Mutex::new(Cell::new(0));

/// Periodic alarm on Timer1.
pub struct AlarmTimer {
    tc1: TC1,
}

impl AlarmTimer {
    pub fn new(tc1: TC1) -> Self {
        // Stopped until `enable`
        tc1.tccr1b.write(|w| unsafe { w.bits(0) });
        Self { tc1 }
    }

    /// Register the function called from interrupt context on every alarm.
    pub fn attach(&mut self, handler: fn()) {
        critical_section::with(|cs| {
            ALARM.borrow(cs).borrow_mut().handler = Some(handler);
        });
    }
}

impl TickSource for AlarmTimer {
    fn configure(&mut self, tick_unit_us: u32, auto_reload: bool) -> Result<(), Error> {
        if tick_unit_us != TICK_UNIT_US {
            return Err(Error::UnsupportedTickUnit(tick_unit_us));
        }

        critical_section::with(|cs| {
            let mut alarm = ALARM.borrow(cs).borrow_mut();
            if alarm.handler.is_none() {
                return Err(Error::HandlerMissing);
            }
            alarm.auto_reload = auto_reload;
            alarm.elapsed_us = 0;
            Ok(())
        })?;

        self.tc1.tccr1a.write(|w| unsafe { w.bits(0) });
        self.tc1.tcnt1.write(|w| unsafe { w.bits(0) });
        self.tc1.ocr1a.write(|w| unsafe { w.bits(TC1_TOP) });
        Ok(())
    }

    fn set_alarm(&mut self, ticks: u32) {
        critical_section::with(|cs| {
            let mut alarm = ALARM.borrow(cs).borrow_mut();
            alarm.period_us = ticks.max(COMPARE_PERIOD_US);
            alarm.armed = true;
        });
    }

    fn enable(&mut self) {
        self.tc1
            .timsk
            .modify(|r, w| unsafe { w.bits(r.bits() | TIMSK_OCIE1A) });
        self.tc1
            .tccr1b
            .write(|w| unsafe { w.bits(TCCR1B_WGM12 | TCCR1B_CS11) });
    }
}

#[avr_device::interrupt(atmega128a)]
fn TIMER1_COMPA() {
    let fired = critical_section::with(|cs| {
        let mut alarm = ALARM.borrow(cs).borrow_mut();
        if !alarm.armed {
            return None;
        }
        alarm.elapsed_us = alarm.elapsed_us.saturating_add(COMPARE_PERIOD_US);
        if alarm.elapsed_us < alarm.period_us {
            return None;
        }
        alarm.elapsed_us = 0;
        alarm.armed = alarm.auto_reload;
        alarm.handler
    });

    if let Some(handler) = fired {
        handler();
    }
}

/// Millisecond counter on Timer0.
pub struct Millis {
    _tc0: TC0,
}

impl Millis {
    pub fn start(tc0: TC0) -> Self {
        tc0.tccr0.write(|w| unsafe { w.bits(TCCR0_WGM01 | TCCR0_CS_DIV64) });
        tc0.ocr0.write(|w| unsafe { w.bits(TC0_TOP) });
        tc0.tcnt0.write(|w| unsafe { w.bits(0) });
        tc0.timsk.modify(|r, w| unsafe { w.bits(r.bits() | TIMSK_OCIE0) });

        critical_section::with(|cs| MILLIS.borrow(cs).set(0));
        Self { _tc0: tc0 }
    }
}

impl Monotonic for Millis {
    fn now_millis(&self) -> u32 {
        critical_section::with(|cs| MILLIS.borrow(cs).get())
    }
}

#[avr_device::interrupt(atmega128a)]
fn TIMER0_COMP() {
    critical_section::with(|cs| {
        let millis = MILLIS.borrow(cs);
        millis.set(millis.get().wrapping_add(1));
    });
}
