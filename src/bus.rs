//! Shift-register bus driver.
//!
//! Drives the pattern lights through a 3-wire (data, shift clock, latch)
//! serial-in/parallel-out shift register. The write path is a fixed number
//! of GPIO toggles, so it is safe to call from the timer interrupt.

use crate::PatternBus;

/// GPIO lines of the shift-register bus.
///
/// Implementations set a single output pin each; they must not block.
pub trait ShiftPins {
    /// Drive the serial data line
    fn set_data(&mut self, high: bool);
    /// Drive the shift clock line
    fn set_shift_clock(&mut self, high: bool);
    /// Drive the register (latch) clock line
    fn set_latch(&mut self, high: bool);
}

/// Bit-serial writer for a 74HC595-style shift register.
///
/// Clocks out all 8 bits MSB-first and latches once per value, so the
/// outputs never show a partially shifted pattern.
pub struct ShiftRegisterBus<P: ShiftPins> {
    pins: P,
}

impl<P: ShiftPins> ShiftRegisterBus<P> {
    pub const fn new(pins: P) -> Self {
        Self { pins }
    }

    /// Consume the bus and return the pins.
    pub fn release(self) -> P {
        self.pins
    }
}

impl<P: ShiftPins> PatternBus for ShiftRegisterBus<P> {
    fn write(&mut self, pattern: u8) {
        self.pins.set_latch(false);
        let mut bit = 0x80u8;
        while bit != 0 {
            self.pins.set_data(pattern & bit != 0);
            self.pins.set_shift_clock(true);
            self.pins.set_shift_clock(false);
            bit >>= 1;
        }
        self.pins.set_latch(true);
    }
}
