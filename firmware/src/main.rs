#![no_std]
#![no_main]

#[macro_use]
mod uart_log;

use fugit::RateExtU32;
use hal::pac;
use hal::uart::{DataBits, StopBits, UartConfig};
use rp2040_hal::Clock;
use rp_pico::entry;

use embedded_hal::digital::v2::OutputPin;

use panic_halt as _;
use rp2040_hal as hal;

use rp2040_hal::gpio::{FunctionI2C, Pin, PullUp};

use hdc1000::{Configuration, HalPlatform, Hdc1000, Mode, DEVICE_ID, MANUFACTURER_ID};

// HDC1000 click DRDYn routed to GP15, with an external pull-up to 3V3.
const DRDY_GPIO: u8 = 15;

#[entry]
fn main() -> ! {
    let mut pac = pac::Peripherals::take().unwrap();
    let core = pac::CorePeripherals::take().unwrap();
    let mut watchdog = hal::Watchdog::new(pac.WATCHDOG);
    let clocks = hal::clocks::init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    let delay = cortex_m::delay::Delay::new(core.SYST, clocks.system_clock.freq().to_Hz());

    let sio = hal::Sio::new(pac.SIO);

    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let uart_pins = (pins.gpio0.reconfigure(), pins.gpio1.reconfigure());
    let uart = hal::uart::UartPeripheral::new(pac.UART0, uart_pins, &mut pac.RESETS)
        .enable(
            UartConfig::new(9600.Hz(), DataBits::Eight, None, StopBits::One),
            clocks.peripheral_clock.freq(),
        )
        .unwrap();

    let (_, uart_tx) = uart.split();
    uart_log::init(uart_tx);

    let mut led_pin = pins.led.into_push_pull_output();

    let sda_pin: Pin<_, FunctionI2C, PullUp> = pins.gpio4.reconfigure();
    let scl_pin: Pin<_, FunctionI2C, PullUp> = pins.gpio5.reconfigure();
    let i2c = hal::I2C::i2c0(
        pac.I2C0,
        sda_pin,
        scl_pin,
        100.kHz(),
        &mut pac.RESETS,
        &clocks.system_clock,
    );

    let drdy = pins.gpio15.into_pull_up_input();

    let platform = HalPlatform::with_ready_pin(i2c, drdy, delay);
    let mut hdc = match Hdc1000::open(hdc1000::DEFAULT_ADDRESS, Some(DRDY_GPIO), platform) {
        Ok(hdc) => hdc,
        Err(e) => {
            println!("HDC1000 open failed: {:?}", e);
            loop {
                cortex_m::asm::wfi();
            }
        }
    };

    match (hdc.get_manufacturer_id(), hdc.get_device_id()) {
        (Ok(MANUFACTURER_ID), Ok(DEVICE_ID)) => {
            println!("HDC1000 found at 0x{:02x}.", hdc.address());
        }
        (mf, dev) => {
            println!("Unexpected IDs: manufacturer {:?}, device {:?}", mf, dev);
        }
    }

    if let Err(e) = hdc.set_configuration(Configuration::default().with_mode(Mode::Single)) {
        println!("Configuration write failed: {:?}", e);
    }
    if let Ok(config) = hdc.get_configuration() {
        println!("Config = 0x{:04x}\r\n", config);
    }
    if let Ok(serial) = hdc.get_serial_id() {
        println!("Serial = 0x{:011x}\r\n", serial);
    }

    loop {
        match (hdc.get_temperature(), hdc.get_humidity()) {
            (Ok(temp), Ok(humi)) => {
                println!("T = {:.2} ℃", temp);
                println!("H = {:.2} %", humi);
            }
            (t, h) => println!("Read failed: {:?} {:?}", t.err(), h.err()),
        }
        if let Ok(true) = hdc.get_battery_status() {
            println!("Supply below 2.8 V");
        }
        println!("");

        led_pin.set_high().unwrap();
        cortex_m::asm::delay(25_000_000);
        led_pin.set_low().unwrap();
        cortex_m::asm::delay(100_000_000);
    }
}
