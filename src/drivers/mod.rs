pub mod button_handler;
#[cfg(target_arch = "avr")]
pub mod serial_console;

pub use button_handler::{ButtonHandler, Presses};
#[cfg(target_arch = "avr")]
pub use serial_console::SerialConsole;
