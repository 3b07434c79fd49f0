//! Channel mapping.
//!
//! Pure translation of the device's channel window into brightness and
//! pattern commands. Channel layout (offsets into the window, 1-based on
//! the wire from the configured base address):
//!
//! | offset | function                                        |
//! |--------|-------------------------------------------------|
//! | 0      | master brightness (0 forces everything off)     |
//! | 1      | center light duty                               |
//! | 2      | box lights duty                                 |
//! | 3      | auto-chase speed selector (0 = manual mode)     |
//! | 4..=9  | manual pattern bits, outer to inner, ≥128 = on  |

/// Width of the device's channel window.
pub const FOOTPRINT: usize = 10;

/// Derived duty cycles for the two PWM lights.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrightnessCommand {
    pub center: u8,
    pub box_leds: u8,
}

/// Derived pattern-light mode, mutually exclusive per decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternCommand {
    /// Hold a fixed 6-bit pattern
    Manual(u8),
    /// Run the chase at the given speed (ticks per step)
    Chase { speed: u16 },
}

/// Everything one accepted, changed frame commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelCommands {
    pub brightness: BrightnessCommand,
    pub pattern: PatternCommand,
}

/// Map a chase speed selector (1..=255) to ticks per step.
///
/// 255 is fastest (2 ticks), 1 slowest (20 ticks).
pub const fn chase_speed(selector: u8) -> u16 {
    (255 - selector as u16) / 14 + 2
}

/// Derive commands from the channel window.
pub fn map_window(window: &[u8; FOOTPRINT]) -> ChannelCommands {
    let master = window[0];

    if master == 0 {
        // Master off overrides everything, including an active chase
        // selector: the chase is turned off, not just dimmed.
        return ChannelCommands {
            brightness: BrightnessCommand::default(),
            pattern: PatternCommand::Manual(0),
        };
    }

    let brightness = BrightnessCommand {
        center: scale(window[1], master),
        box_leds: scale(window[2], master),
    };

    let selector = window[3];
    let pattern = if selector != 0 {
        PatternCommand::Chase {
            speed: chase_speed(selector),
        }
    } else {
        let mut mask = 0u8;
        for value in &window[4..FOOTPRINT] {
            mask <<= 1;
            mask |= value >> 7;
        }
        PatternCommand::Manual(mask)
    };

    ChannelCommands {
        brightness,
        pattern,
    }
}

/// Integer floor scaling of a channel value by the master brightness.
const fn scale(value: u8, master: u8) -> u8 {
    (value as u16 * master as u16 / 255) as u8
}
