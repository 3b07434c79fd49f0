//! Special-signal catalog.
//!
//! Special signals are short, fixed sequences of (pattern, hold) steps used
//! for status and alarm feedback. They pre-empt whatever the sequencer is
//! playing; one-shot signals return to the previous mode when done, looping
//! signals repeat until explicitly cleared.

/// Playback mode of a special signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignalMode {
    /// Plays once, then playback returns to the prior chase/manual state.
    /// The last step should leave the lights dark.
    OneShot,
    /// Repeats from the first step until cleared.
    Loop,
}

/// One step of a special signal.
#[derive(Clone, Copy, Debug)]
pub struct SignalStep {
    /// 6-bit pattern shown during this step
    pub pattern: u8,
    /// How long the step holds, in sequencer ticks
    pub hold_ticks: u16,
}

const fn step(pattern: u8, hold_ticks: u16) -> SignalStep {
    SignalStep {
        pattern,
        hold_ticks,
    }
}

/// A complete special-signal sequence.
pub struct SignalSequence {
    pub mode: SignalMode,
    pub steps: &'static [SignalStep],
}

const STARTUP_SPD: u16 = 20;

// No trailing "all off": startup never runs while the chase is off.
static SIG_STARTUP: SignalSequence = SignalSequence {
    mode: SignalMode::OneShot,
    steps: &[
        step(0b100000, STARTUP_SPD),
        step(0b110000, STARTUP_SPD),
        step(0b111000, STARTUP_SPD),
        step(0b111100, STARTUP_SPD),
        step(0b111110, STARTUP_SPD),
        step(0b111111, STARTUP_SPD * 2),
        step(0b111110, STARTUP_SPD),
        step(0b111100, STARTUP_SPD),
        step(0b111000, STARTUP_SPD),
        step(0b110000, STARTUP_SPD),
        step(0b100000, STARTUP_SPD),
    ],
};

static SIG_NO_CONTENT: SignalSequence = SignalSequence {
    mode: SignalMode::OneShot,
    steps: &[
        step(0b000000, 100),
        step(0b000001, 100),
        step(0b000000, 100),
        step(0b000001, 100),
        step(0b000000, 100),
    ],
};

static SIG_WAIT: SignalSequence = SignalSequence {
    mode: SignalMode::Loop,
    steps: &[step(0b100000, 50), step(0b000001, 50)],
};

static SIG_BAD_INPUT: SignalSequence = SignalSequence {
    mode: SignalMode::OneShot,
    steps: &[
        step(0b000000, 100),
        step(0b100000, 100),
        step(0b000000, 100),
        step(0b100000, 100),
        step(0b000000, 100),
    ],
};

static SIG_ALARM: SignalSequence = SignalSequence {
    mode: SignalMode::OneShot,
    steps: &[
        step(0b000111, 50),
        step(0b111000, 50),
        step(0b000111, 50),
        step(0b111000, 50),
        step(0b000111, 50),
        step(0b111000, 50),
        step(0b000111, 50),
        step(0b111000, 50),
        step(0b000000, 1),
    ],
};

static SIG_LEARN_START: SignalSequence = SignalSequence {
    mode: SignalMode::OneShot,
    steps: &[
        step(0b000000, 20),
        step(0b111111, 100),
        step(0b000000, 100),
        step(0b111111, 100),
        step(0b000000, 1),
    ],
};

static SIG_LEARN_NEXT: SignalSequence = SignalSequence {
    mode: SignalMode::OneShot,
    steps: &[
        step(0b000000, 10),
        step(0b001100, 50),
        step(0b000000, 50),
        step(0b001100, 50),
        step(0b000000, 1),
    ],
};

static SIG_LEARN_DONE: SignalSequence = SignalSequence {
    mode: SignalMode::OneShot,
    steps: &[
        step(0b000000, 10),
        step(0b111111, 50),
        step(0b000000, 50),
        step(0b111111, 50),
        step(0b000000, 50),
    ],
};

static SIG_COPY_ERROR: SignalSequence = SignalSequence {
    mode: SignalMode::Loop,
    steps: &[step(0b110000, 20), step(0b000011, 20)],
};

/// Named special signals invocable by status and diagnostics layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum SignalId {
    /// Power-up sweep
    Startup = 1,
    /// No content/audio files installed
    NoContent = 2,
    /// Busy: installing files, formatting, fw update
    Wait = 3,
    /// Unusable remote-control input
    BadInput = 4,
    /// Alarm notification
    Alarm = 5,
    /// IR learning started
    LearnStart = 6,
    /// IR learning: key accepted, send next
    LearnNext = 7,
    /// IR learning finished
    LearnDone = 8,
    /// Error while copying files
    CopyError = 9,
}

impl SignalId {
    /// Map a raw signal number to an id.
    ///
    /// Returns `None` for 0 (the "clear" request) and for unknown numbers.
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            1 => Some(Self::Startup),
            2 => Some(Self::NoContent),
            3 => Some(Self::Wait),
            4 => Some(Self::BadInput),
            5 => Some(Self::Alarm),
            6 => Some(Self::LearnStart),
            7 => Some(Self::LearnNext),
            8 => Some(Self::LearnDone),
            9 => Some(Self::CopyError),
            _ => None,
        }
    }

    /// The signal's step sequence.
    pub fn sequence(self) -> &'static SignalSequence {
        match self {
            Self::Startup => &SIG_STARTUP,
            Self::NoContent => &SIG_NO_CONTENT,
            Self::Wait => &SIG_WAIT,
            Self::BadInput => &SIG_BAD_INPUT,
            Self::Alarm => &SIG_ALARM,
            Self::LearnStart => &SIG_LEARN_START,
            Self::LearnNext => &SIG_LEARN_NEXT,
            Self::LearnDone => &SIG_LEARN_DONE,
            Self::CopyError => &SIG_COPY_ERROR,
        }
    }
}
