#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]

#[cfg(target_arch = "avr")]
mod firmware {
    use panic_halt as _;

    use atmega128_blinker::drivers::SerialConsole;
    use atmega128_blinker::hal::gpio::{BtnDown, BtnUp, Led};
    use atmega128_blinker::hal::{AlarmTimer, Millis, Pins, Uart};
    use atmega128_blinker::{Application, BlinkConfig, Error, PendingTicks};
    use avr_device::atmega128a::Peripherals;
    use ufmt::uwriteln;

    static PENDING_TICKS: PendingTicks = PendingTicks::new();

    // Alarm handler, runs in interrupt context
    fn on_alarm() {
        PENDING_TICKS.record();
    }

    #[avr_device::entry]
    fn main() -> ! {
        let dp = Peripherals::take().unwrap();

        let pins = Pins::new(dp.PORTA, dp.PORTB);
        let led: Led = pins.led.into_output();
        let btn_up: BtnUp = pins.btn_up.into_pull_up_input();
        let btn_down: BtnDown = pins.btn_down.into_pull_up_input();

        let mut console = SerialConsole::new(Uart::new(dp.USART0));
        console.write_line("ATmega128 blinker v0.1.0");

        let clock = Millis::start(dp.TC0);
        let mut timer = AlarmTimer::new(dp.TC1);
        timer.attach(on_alarm);

        let mut app = match Application::new(
            &PENDING_TICKS,
            led,
            btn_up,
            btn_down,
            timer,
            clock,
            console,
            BlinkConfig::DEFAULT,
        ) {
            Ok(app) => app,
            // The console moved into the rejected application
            Err(err) => halt(None, err),
        };

        if let Err(err) = app.start() {
            halt(Some(app.console_mut()), err);
        }

        // Enable interrupts globally
        unsafe { avr_device::interrupt::enable() };

        match app.run() {
            Ok(never) => match never {},
            Err(err) => halt(Some(app.console_mut()), err),
        }
    }

    fn halt(console: Option<&mut SerialConsole>, err: Error) -> ! {
        avr_device::interrupt::disable();
        if let Some(console) = console {
            let _ = uwriteln!(console, "fatal: {:?}", err);
        }
        loop {}
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {
    eprintln!("atmega128_blinker runs on the ATmega128; build it for an AVR target");
}
