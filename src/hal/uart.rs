use avr_device::atmega128a::USART0;
use core::convert::Infallible;

use crate::config::{CPU_FREQ_HZ, UART_BAUD};

// Baud rate calculation, normal speed mode
const UBRR: u16 = (CPU_FREQ_HZ / (16 * UART_BAUD) - 1) as u16;

const UCSRA_UDRE: u8 = 1 << 5;
const UCSRB_TXEN: u8 = 1 << 3;
// Asynchronous, no parity, 1 stop bit, 8 data bits
const UCSRC_8N1: u8 = 0b0000_0110;

/// Transmit-only USART0.
pub struct Uart {
    usart: USART0,
}

impl Uart {
    pub fn new(usart: USART0) -> Self {
        usart.ubrr0h.write(|w| unsafe { w.bits((UBRR >> 8) as u8) });
        usart.ubrr0l.write(|w| unsafe { w.bits(UBRR as u8) });
        usart.ucsr0c.write(|w| unsafe { w.bits(UCSRC_8N1) });
        usart.ucsr0b.write(|w| unsafe { w.bits(UCSRB_TXEN) });

        Self { usart }
    }

    pub fn write_byte(&mut self, byte: u8) -> nb::Result<(), Infallible> {
        if self.usart.ucsr0a.read().bits() & UCSRA_UDRE == 0 {
            return Err(nb::Error::WouldBlock);
        }
        self.usart.udr0.write(|w| unsafe { w.bits(byte) });
        Ok(())
    }

    pub fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        for byte in s.bytes() {
            nb::block!(self.write_byte(byte))?;
        }
        Ok(())
    }
}
