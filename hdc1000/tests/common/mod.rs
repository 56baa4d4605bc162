#![allow(dead_code)]

use std::collections::VecDeque;

use hdc1000::{PinState, Platform};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Write(u8, u8),
    Read(u8, usize),
    Delay(u32),
    ConfigurePin(u8),
    ReadPin,
    ReleasePin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeError;

/// Records every primitive call and answers from scripted queues.
#[derive(Default)]
pub struct FakePlatform {
    pub calls: Vec<Call>,
    reads: VecDeque<Vec<u8>>,
    pin_levels: VecDeque<PinState>,
    fail_at: Option<usize>,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the bytes returned by the next `read_bytes`.
    pub fn reply(mut self, bytes: &[u8]) -> Self {
        self.reads.push_back(bytes.to_vec());
        self
    }

    /// Queues pin samples. Once the queue is empty the pin reads low.
    pub fn pin_levels(mut self, levels: &[PinState]) -> Self {
        self.pin_levels.extend(levels.iter().copied());
        self
    }

    /// Makes the `n`th call (zero based) fail.
    pub fn fail_at(mut self, n: usize) -> Self {
        self.fail_at = Some(n);
        self
    }

    fn record(&mut self, call: Call) -> Result<(), FakeError> {
        let index = self.calls.len();
        self.calls.push(call);
        if self.fail_at == Some(index) {
            return Err(FakeError);
        }
        Ok(())
    }
}

impl Platform for FakePlatform {
    type Error = FakeError;

    fn write_byte(&mut self, address: u8, value: u8) -> Result<(), Self::Error> {
        self.record(Call::Write(address, value))
    }

    fn read_bytes(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.record(Call::Read(address, buffer.len()))?;
        let bytes = self.reads.pop_front().unwrap_or_default();
        for (dst, src) in buffer.iter_mut().zip(bytes) {
            *dst = src;
        }
        Ok(())
    }

    fn delay_ms(&mut self, ms: u32) {
        self.calls.push(Call::Delay(ms));
    }

    fn configure_input_pin(&mut self, pin: u8) -> Result<(), Self::Error> {
        self.record(Call::ConfigurePin(pin))
    }

    fn read_input_pin(&mut self) -> Result<PinState, Self::Error> {
        self.record(Call::ReadPin)?;
        Ok(self.pin_levels.pop_front().unwrap_or(PinState::Low))
    }

    fn release_input_pin(&mut self) {
        self.calls.push(Call::ReleasePin);
    }
}
