// print! / println! over UART0.
// main() must hand the UART writer to `init` before anything is printed;
// until then output is dropped.

use core::cell::RefCell;
use core::fmt;
use core::fmt::Write;

use critical_section::Mutex;
use embedded_hal::prelude::_embedded_hal_serial_Write;
use rp2040_hal as hal;
use rp2040_hal::gpio::bank0::{Gpio0, Gpio1};
use rp2040_hal::pac;

pub type UartPins = (
    hal::gpio::Pin<Gpio0, hal::gpio::FunctionUart, hal::gpio::PullNone>,
    hal::gpio::Pin<Gpio1, hal::gpio::FunctionUart, hal::gpio::PullNone>,
);

pub type UartWriter = hal::uart::Writer<pac::UART0, UartPins>;

static UART_TRANSMITTER: Mutex<RefCell<Option<UartWriter>>> = Mutex::new(RefCell::new(None));

pub fn init(writer: UartWriter) {
    critical_section::with(|cs| {
        UART_TRANSMITTER.borrow(cs).replace(Some(writer));
    });
}

#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => ($crate::uart_log::_print(format_args!($($arg)*)));
}

#[macro_export]
macro_rules! println {
    ($fmt:expr) => (print!(concat!($fmt, "\r\n")));
    ($fmt:expr, $($arg:tt)*) => (print!(concat!($fmt, "\r\n"), $($arg)*));
}

pub fn _print(args: fmt::Arguments) {
    let _ = Console.write_fmt(args);
}

struct Console;

impl fmt::Write for Console {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        critical_section::with(|cs| {
            if let Some(writer) = UART_TRANSMITTER.borrow(cs).borrow_mut().as_mut() {
                for c in s.bytes() {
                    let _ = nb::block!(writer.write(c));
                }
            }
        });
        Ok(())
    }
}
