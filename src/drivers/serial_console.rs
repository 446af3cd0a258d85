use crate::hal::Uart;
use core::convert::Infallible;
use ufmt::uWrite;

/// Line-oriented log sink on USART0.
pub struct SerialConsole {
    uart: Uart,
}

impl SerialConsole {
    pub fn new(uart: Uart) -> Self {
        Self { uart }
    }

    pub fn write_line(&mut self, s: &str) {
        let _ = self.uart.write_str(s);
        let _ = self.uart.write_str("\r\n");
    }
}

impl uWrite for SerialConsole {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        self.uart.write_str(s)
    }
}
