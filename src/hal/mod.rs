pub mod gpio;
pub mod timer;
pub mod uart;

// Re-export commonly used types
pub use gpio::{Input, Output, Pin, Pins, PullUp};
pub use timer::{AlarmTimer, Millis};
pub use uart::Uart;
