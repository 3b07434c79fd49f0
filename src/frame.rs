//! Received channel frames.
//!
//! The external transport hands the core one validated byte buffer per
//! protocol cycle, together with its error flag. Channels are numbered
//! 1-based on the wire; byte 0 is the start code.

/// Start code of frames this device understands.
pub const DMX_START_CODE: u8 = 0x00;

/// Maximum number of channels in one frame.
pub const DMX_CHANNELS: usize = 512;

/// One received frame, borrowed for the duration of a decode cycle.
#[derive(Clone, Copy, Debug)]
pub struct ChannelFrame<'a> {
    data: &'a [u8],
    error: bool,
}

impl<'a> ChannelFrame<'a> {
    /// Wrap a cleanly received buffer (start code at offset 0).
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, error: false }
    }

    /// Wrap a buffer together with the transport's error flag.
    pub const fn with_error(data: &'a [u8], error: bool) -> Self {
        Self { data, error }
    }

    /// Whether the transport flagged this frame as corrupt.
    pub const fn has_error(&self) -> bool {
        self.error
    }

    /// The frame's start code, if the buffer is non-empty.
    pub fn start_code(&self) -> Option<u8> {
        self.data.first().copied()
    }

    /// Value of a 1-based channel, if present in this frame.
    pub fn channel(&self, channel: u16) -> Option<u8> {
        if channel == 0 {
            return None;
        }
        self.data.get(channel as usize).copied()
    }

    /// Copy the `N`-channel window starting at 1-based `base`.
    ///
    /// Returns `None` when the frame is too short to cover the window.
    pub fn window<const N: usize>(&self, base: u16) -> Option<[u8; N]> {
        let start = base as usize;
        let slice = self.data.get(start..start + N)?;
        let mut window = [0u8; N];
        window.copy_from_slice(slice);
        Some(window)
    }
}
