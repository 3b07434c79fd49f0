#![no_std]

pub mod bus;
pub mod chase;
pub mod command;
pub mod controller;
pub mod decoder;
pub mod frame;
pub mod pwm;
pub mod sequencer;
pub mod signal;
pub mod trigger;

pub use bus::{ShiftPins, ShiftRegisterBus};
pub use chase::{ChaseId, PATTERN_BITS, PATTERN_MASK};
pub use command::{
    BrightnessCommand, ChannelCommands, FOOTPRINT, PatternCommand, chase_speed, map_window,
};
pub use controller::LightController;
pub use decoder::{
    CONNECTION_TIMEOUT, ConnectionState, DecodeError, DecoderConfig, FrameDecoder, VERIFY_SENTINEL,
};
pub use frame::{ChannelFrame, DMX_CHANNELS, DMX_START_CODE};
pub use pwm::PwmLed;
pub use sequencer::Sequencer;
pub use signal::{SignalId, SignalMode, SignalSequence, SignalStep};
pub use trigger::{SignalRequest, SignalTrigger, TriggerFull};

pub use embassy_time::{Duration, Instant};

/// Period of the hardware timer driving [`Sequencer::tick`].
///
/// All chase speeds and special-signal step durations are expressed in
/// multiples of this tick.
pub const TICK_PERIOD: Duration = Duration::from_millis(10);

/// Abstract 6-bit parallel pattern output
///
/// Implement this trait to support different hardware platforms.
/// The sequencer is generic over this trait; `write` must be safe to
/// call from interrupt context (bounded work, no blocking).
pub trait PatternBus {
    /// Write a 6-bit light pattern to the bus
    fn write(&mut self, pattern: u8);
}

/// Abstract PWM duty-cycle output for a single light
pub trait DutyOutput {
    /// Set the duty cycle (0 = off, 255 = full brightness)
    fn set_duty(&mut self, duty: u8);
}
