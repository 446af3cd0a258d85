use avr_device::atmega128a::{PORTA, PORTB};
use core::convert::Infallible;
use core::marker::PhantomData;
use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::config::pins;

pub trait PinMode {}
pub struct Input<PULL> {
    _pull: PhantomData<PULL>,
}
pub struct Output;
pub struct Floating;
pub struct PullUp;
impl<PULL> PinMode for Input<PULL> {}
impl PinMode for Output {}

#[derive(Debug)]
pub struct Pin<PORT, const P: u8, MODE> {
    _port: PhantomData<PORT>,
    _mode: PhantomData<MODE>,
}

impl<PORT, const P: u8, MODE> Pin<PORT, P, MODE> {
    const fn new() -> Self {
        Pin {
            _port: PhantomData,
            _mode: PhantomData,
        }
    }
}

macro_rules! impl_port {
    ($PORT:ident, $port:ident, $ddr:ident, $pin:ident) => {
        impl<const P: u8, MODE: PinMode> Pin<$PORT, P, MODE> {
            pub fn into_output(self) -> Pin<$PORT, P, Output> {
                // Set DDRx bit
                unsafe {
                    (*$PORT::ptr()).$ddr.modify(|r, w| w.bits(r.bits() | (1 << P)));
                }
                Pin::new()
            }

            pub fn into_pull_up_input(self) -> Pin<$PORT, P, Input<PullUp>> {
                // Clear DDRx bit, PORTx bit enables the pull-up
                unsafe {
                    (*$PORT::ptr()).$ddr.modify(|r, w| w.bits(r.bits() & !(1 << P)));
                    (*$PORT::ptr()).$port.modify(|r, w| w.bits(r.bits() | (1 << P)));
                }
                Pin::new()
            }
        }

        impl<const P: u8> OutputPin for Pin<$PORT, P, Output> {
            type Error = Infallible;

            #[inline]
            fn set_high(&mut self) -> Result<(), Infallible> {
                unsafe {
                    (*$PORT::ptr()).$port.modify(|r, w| w.bits(r.bits() | (1 << P)));
                }
                Ok(())
            }

            #[inline]
            fn set_low(&mut self) -> Result<(), Infallible> {
                unsafe {
                    (*$PORT::ptr()).$port.modify(|r, w| w.bits(r.bits() & !(1 << P)));
                }
                Ok(())
            }
        }

        impl<const P: u8, PULL> InputPin for Pin<$PORT, P, Input<PULL>> {
            type Error = Infallible;

            #[inline]
            fn is_high(&self) -> Result<bool, Infallible> {
                Ok(unsafe { (*$PORT::ptr()).$pin.read().bits() } & (1 << P) != 0)
            }

            #[inline]
            fn is_low(&self) -> Result<bool, Infallible> {
                Ok(!self.is_high()?)
            }
        }
    };
}

impl_port!(PORTA, porta, ddra, pina);
impl_port!(PORTB, portb, ddrb, pinb);

// BigAVR2 board wiring
pub type Led = Pin<PORTA, { pins::LED }, Output>;
pub type BtnUp = Pin<PORTB, { pins::BTN_UP }, Input<PullUp>>;
pub type BtnDown = Pin<PORTB, { pins::BTN_DOWN }, Input<PullUp>>;

/// Pins used by the blinker, in their reset state.
pub struct Pins {
    pub led: Pin<PORTA, { pins::LED }, Input<Floating>>,
    pub btn_up: Pin<PORTB, { pins::BTN_UP }, Input<Floating>>,
    pub btn_down: Pin<PORTB, { pins::BTN_DOWN }, Input<Floating>>,
}

impl Pins {
    /// Taking the port peripherals by value guarantees nothing else drives them.
    pub fn new(_porta: PORTA, _portb: PORTB) -> Self {
        Self {
            led: Pin::new(),
            btn_up: Pin::new(),
            btn_down: Pin::new(),
        }
    }
}
