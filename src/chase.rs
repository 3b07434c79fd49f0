//! Chase pattern catalog.
//!
//! All chases are stored as immutable tables of 6-bit patterns; the
//! sequencer replays them cyclically, one entry per speed interval.
//! The slice length is the wrap point.

/// Number of pattern lights on the bus.
pub const PATTERN_BITS: u8 = 6;

/// Mask covering all valid pattern bits.
pub const PATTERN_MASK: u8 = (1 << PATTERN_BITS) - 1;

const CHASE_CLASSIC: &[u8] = &[
    0b100000, 0b010000, 0b001000, 0b000100, 0b000010, 0b000001,
];

// KITT
const CHASE_KITT: &[u8] = &[
    0b100000, 0b010000, 0b001000, 0b000100, 0b000010, 0b000001, 0b000010, 0b000100, 0b001000,
    0b010000,
];

// spinner
const CHASE_SPINNER: &[u8] = &[
    0b100000, 0b110000, 0b111000, 0b111100, 0b111110, 0b111111, 0b011111, 0b001111, 0b000111,
    0b000011, 0b000001,
];

// <>
const CHASE_DIAMOND: &[u8] = &[0b001100, 0b010010, 0b100001, 0b010010];

// <> full
const CHASE_DIAMOND_FULL: &[u8] = &[
    0b000000, 0b001100, 0b011110, 0b111111, 0b011110, 0b001100,
];

// <> exploding
const CHASE_DIAMOND_EXPLODE: &[u8] = &[0b001100, 0b011110, 0b111111, 0b110011, 0b100001];

// inverse normal
const CHASE_INVERSE: &[u8] = &[
    0b000001, 0b000010, 0b000100, 0b001000, 0b010000, 0b100000,
];

// jumpman
const CHASE_JUMPMAN: &[u8] = &[
    0b000001, 0b100000, 0b000010, 0b010000, 0b000100, 0b001000, 0b000100, 0b010000, 0b000010,
    0b100000,
];

// dual runner
const CHASE_DUAL_RUNNER: &[u8] = &[0b100100, 0b010010, 0b001001];

// double runner
const CHASE_DOUBLE_RUNNER: &[u8] = &[
    0b110000, 0b011000, 0b001100, 0b000110, 0b000011, 0b100001,
];

/// Known chase sequences that can be selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum ChaseId {
    #[default]
    Classic = 0,
    Kitt = 1,
    Spinner = 2,
    Diamond = 3,
    DiamondFull = 4,
    DiamondExplode = 5,
    Inverse = 6,
    Jumpman = 7,
    DualRunner = 8,
    DoubleRunner = 9,
}

impl ChaseId {
    /// Map a raw selector byte to a chase id.
    ///
    /// Out-of-range values fall back to [`ChaseId::Classic`].
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            1 => Self::Kitt,
            2 => Self::Spinner,
            3 => Self::Diamond,
            4 => Self::DiamondFull,
            5 => Self::DiamondExplode,
            6 => Self::Inverse,
            7 => Self::Jumpman,
            8 => Self::DualRunner,
            9 => Self::DoubleRunner,
            _ => Self::Classic,
        }
    }

    /// The chase's pattern table.
    pub const fn patterns(self) -> &'static [u8] {
        match self {
            Self::Classic => CHASE_CLASSIC,
            Self::Kitt => CHASE_KITT,
            Self::Spinner => CHASE_SPINNER,
            Self::Diamond => CHASE_DIAMOND,
            Self::DiamondFull => CHASE_DIAMOND_FULL,
            Self::DiamondExplode => CHASE_DIAMOND_EXPLODE,
            Self::Inverse => CHASE_INVERSE,
            Self::Jumpman => CHASE_JUMPMAN,
            Self::DualRunner => CHASE_DUAL_RUNNER,
            Self::DoubleRunner => CHASE_DOUBLE_RUNNER,
        }
    }
}
