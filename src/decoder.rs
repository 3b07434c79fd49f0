//! Frame validation, change detection and connection tracking.
//!
//! Runs in the foreground, once per received frame. Rejected frames leave
//! all state untouched; accepted frames only produce commands when the
//! device's channel window actually changed, so hardware writes track
//! changes instead of the protocol's frame rate.

use core::fmt;

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::command::{ChannelCommands, FOOTPRINT, map_window};
use crate::frame::{ChannelFrame, DMX_START_CODE};

/// Inactivity window after which the link counts as lost.
pub const CONNECTION_TIMEOUT: Duration = Duration::from_millis(1250);

/// Value the verification channel must carry for a frame to be accepted.
pub const VERIFY_SENTINEL: u8 = 100;

/// Why a frame was discarded. Never fatal; prior state is kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The transport flagged the frame as corrupt.
    TransportError,
    /// The start code is not one this device understands.
    MalformedFrame { start_code: u8 },
    /// The verification channel did not carry the sentinel value.
    VerificationMismatch,
    /// The frame does not cover the device's channel window.
    ShortFrame,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TransportError => write!(f, "transport reported a frame error"),
            Self::MalformedFrame { start_code } => {
                write!(f, "unrecognized start code {start_code} (0x{start_code:02x})")
            }
            Self::VerificationMismatch => write!(f, "verification channel mismatch"),
            Self::ShortFrame => write!(f, "frame too short for channel window"),
        }
    }
}

/// Link state as seen by the decoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connected,
}

/// Decoder wiring: where this device sits in the channel space.
#[derive(Clone, Copy, Debug)]
pub struct DecoderConfig {
    /// First (1-based) channel of the device's window.
    pub base_channel: u16,
    /// Optional channel that must equal [`VERIFY_SENTINEL`].
    ///
    /// Guards against corrupted or foreign frames on a shared bus.
    pub verify_channel: Option<u16>,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            base_channel: 36,
            verify_channel: None,
        }
    }
}

/// Foreground frame decoder.
pub struct FrameDecoder {
    base_channel: u16,
    verify_channel: Option<u16>,
    /// Window of the last accepted, changed frame. `None` means the next
    /// valid frame is unconditionally treated as a change.
    snapshot: Option<[u8; FOOTPRINT]>,
    connection: ConnectionState,
    last_valid_frame: Instant,
}

impl FrameDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self {
            base_channel: config.base_channel,
            verify_channel: config.verify_channel,
            snapshot: None,
            connection: ConnectionState::Disconnected,
            last_valid_frame: Instant::from_millis(0),
        }
    }

    /// Validate one received frame and derive commands from it.
    ///
    /// `Ok(None)` means the frame was accepted but the channel window is
    /// unchanged, so outputs must not be touched.
    pub fn process(
        &mut self,
        frame: &ChannelFrame<'_>,
        now: Instant,
    ) -> Result<Option<ChannelCommands>, DecodeError> {
        if frame.has_error() {
            #[cfg(feature = "esp32-log")]
            println!("decoder: transport frame error");
            return Err(DecodeError::TransportError);
        }

        match frame.start_code() {
            Some(DMX_START_CODE) => {}
            Some(start_code) => {
                #[cfg(feature = "esp32-log")]
                println!("decoder: unrecognized start code {} (0x{:02x})", start_code, start_code);
                return Err(DecodeError::MalformedFrame { start_code });
            }
            None => return Err(DecodeError::ShortFrame),
        }

        if let Some(channel) = self.verify_channel {
            if frame.channel(channel) != Some(VERIFY_SENTINEL) {
                return Err(DecodeError::VerificationMismatch);
            }
        }

        let window: [u8; FOOTPRINT] = frame
            .window(self.base_channel)
            .ok_or(DecodeError::ShortFrame)?;

        self.last_valid_frame = now;
        if self.connection == ConnectionState::Disconnected {
            self.connection = ConnectionState::Connected;
            #[cfg(feature = "esp32-log")]
            println!("decoder: connected");
        }

        if self.snapshot == Some(window) {
            return Ok(None);
        }
        self.snapshot = Some(window);

        Ok(Some(map_window(&window)))
    }

    /// Run the connection-loss check.
    ///
    /// Returns `true` when this call transitioned to `Disconnected`. The
    /// cached window is invalidated on loss so a reconnect is never
    /// suppressed by stale equality.
    pub fn poll(&mut self, now: Instant) -> bool {
        let silent_for = now.as_millis().saturating_sub(self.last_valid_frame.as_millis());
        if self.connection == ConnectionState::Connected && silent_for > CONNECTION_TIMEOUT.as_millis()
        {
            self.connection = ConnectionState::Disconnected;
            self.snapshot = None;
            #[cfg(feature = "esp32-log")]
            println!("decoder: disconnected");
            return true;
        }
        false
    }

    /// Current link state.
    pub const fn connection(&self) -> ConnectionState {
        self.connection
    }
}
