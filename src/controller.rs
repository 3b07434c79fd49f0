//! Foreground orchestrator.
//!
//! Ties the frame decoder to the actuators: PWM duties are pushed directly,
//! pattern commands go through the shared [`Sequencer`]'s mutators. Call
//! [`LightController::handle_frame`] once per received frame and
//! [`LightController::poll`] from the main loop for connection-loss
//! detection.

use embassy_time::Instant;

use crate::DutyOutput;
use crate::command::{ChannelCommands, PatternCommand};
use crate::decoder::{ConnectionState, DecodeError, DecoderConfig, FrameDecoder};
use crate::frame::ChannelFrame;
use crate::pwm::PwmLed;
use crate::sequencer::Sequencer;

/// Frame-driven light controller.
pub struct LightController<'a, C: DutyOutput, B: DutyOutput> {
    decoder: FrameDecoder,
    sequencer: &'a Sequencer,
    center: PwmLed<C>,
    box_leds: PwmLed<B>,
}

impl<'a, C: DutyOutput, B: DutyOutput> LightController<'a, C, B> {
    /// Wire up the controller. Both lights start dark.
    pub fn new(config: DecoderConfig, sequencer: &'a Sequencer, center: C, box_leds: B) -> Self {
        Self {
            decoder: FrameDecoder::new(config),
            sequencer,
            center: PwmLed::new(center),
            box_leds: PwmLed::new(box_leds),
        }
    }

    /// Decode one received frame and apply its commands.
    ///
    /// Returns `Ok(true)` when outputs were updated, `Ok(false)` when the
    /// frame was accepted without a relevant change.
    pub fn handle_frame(
        &mut self,
        frame: &ChannelFrame<'_>,
        now: Instant,
    ) -> Result<bool, DecodeError> {
        match self.decoder.process(frame, now)? {
            Some(commands) => {
                self.apply(&commands);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn apply(&mut self, commands: &ChannelCommands) {
        match commands.pattern {
            PatternCommand::Chase { speed } => {
                self.sequencer.set_speed(speed);
                self.sequencer.clear_pattern();
            }
            PatternCommand::Manual(mask) => self.sequencer.set_pattern(mask),
        }

        self.center.set_duty(commands.brightness.center);
        self.box_leds.set_duty(commands.brightness.box_leds);
    }

    /// Run the connection-loss check; returns `true` on a loss transition.
    pub fn poll(&mut self, now: Instant) -> bool {
        self.decoder.poll(now)
    }

    /// Current link state.
    pub const fn connection(&self) -> ConnectionState {
        self.decoder.connection()
    }

    /// Last commanded center light duty.
    pub const fn center_duty(&self) -> u8 {
        self.center.duty()
    }

    /// Last commanded box lights duty.
    pub const fn box_duty(&self) -> u8 {
        self.box_leds.duty()
    }
}
