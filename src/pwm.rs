//! Single-light brightness output.
//!
//! Thin stateful wrapper over a platform PWM channel: remembers the last
//! duty cycle so callers can read back what the light is currently doing.

use crate::DutyOutput;

/// A PWM-driven light holding its last commanded duty cycle.
pub struct PwmLed<D: DutyOutput> {
    output: D,
    duty: u8,
}

impl<D: DutyOutput> PwmLed<D> {
    /// Create the light with its output forced to 0 (dark).
    pub fn new(mut output: D) -> Self {
        output.set_duty(0);
        Self { output, duty: 0 }
    }

    /// Set the duty cycle (0 = off, 255 = full brightness).
    pub fn set_duty(&mut self, duty: u8) {
        self.duty = duty;
        self.output.set_duty(duty);
    }

    /// Last commanded duty cycle.
    pub const fn duty(&self) -> u8 {
        self.duty
    }
}
