//! Interrupt-context pattern sequencer.
//!
//! [`Sequencer::tick`] is meant to be called from a fixed-period timer
//! interrupt (see [`crate::TICK_PERIOD`]). Every tick it picks exactly one
//! source for the bus, highest priority first:
//!
//! 1. an active special signal,
//! 2. a held manual pattern,
//! 3. chase playback (or a single blanking write when switched off).
//!
//! Foreground mutators and the interrupt share the state through a
//! critical-section mutex plus an advisory guard flag: while a mutator is
//! inside its update window the tick handler returns immediately instead of
//! waiting, so interrupt latency stays bounded and the tick never observes
//! a half-applied multi-field update.

use core::cell::RefCell;
use core::sync::atomic::{AtomicBool, Ordering};

use critical_section::Mutex;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::PatternBus;
use crate::chase::{ChaseId, PATTERN_MASK};
use crate::signal::{SignalId, SignalMode};

/// Playback position within an active special signal.
#[derive(Clone, Copy)]
struct ActiveSignal {
    id: SignalId,
    step: usize,
    step_ticks: u16,
}

/// The sequencer state machine proper.
///
/// Kept free of synchronization so the tick logic is testable on its own;
/// [`Sequencer`] wraps it for cross-context use.
pub(crate) struct SequencerCore {
    chase: ChaseId,
    ticks: u16,
    index: usize,
    tick_interval: u16,
    off: bool,
    /// All-off has been written while off; suppresses repeat blanking.
    blanked: bool,
    stopped: bool,
    /// Held manual pattern, pre-empting chase playback while set.
    held: Option<u8>,
    /// Last held pattern actually written to the bus (edge trigger).
    held_written: Option<u8>,
    signal: Option<ActiveSignal>,
    /// A signal wrote to the bus; forces one re-blank if the chase is off.
    was_signal: bool,
}

impl SequencerCore {
    const fn new() -> Self {
        Self {
            chase: ChaseId::Classic,
            ticks: 0,
            index: 0,
            tick_interval: 20,
            off: true,
            blanked: false,
            stopped: false,
            held: None,
            held_written: None,
            signal: None,
            was_signal: false,
        }
    }

    pub(crate) fn tick<B: PatternBus>(&mut self, bus: &mut B) {
        if self.signal.is_some() {
            self.tick_signal(bus);
            return;
        }

        if let Some(pattern) = self.held {
            if self.held_written != Some(pattern) {
                bus.write(pattern);
                self.held_written = Some(pattern);
            }
            return;
        }

        if self.off {
            if self.blanked && !self.was_signal {
                return;
            }
            bus.write(0);
            self.blanked = true;
            self.was_signal = false;
            return;
        }

        if self.blanked {
            // Coming back from off: restart the chase from a clean step.
            self.ticks = 0;
            self.index = 0;
            self.blanked = false;
        }

        if self.stopped {
            return;
        }

        let patterns = self.chase.patterns();
        if self.ticks == 0 {
            bus.write(patterns[self.index]);
        }
        self.ticks += 1;
        if self.ticks >= self.tick_interval {
            self.ticks = 0;
            self.index += 1;
            if self.index >= patterns.len() {
                self.index = 0;
            }
        }
    }

    fn tick_signal<B: PatternBus>(&mut self, bus: &mut B) {
        let Some(mut active) = self.signal else {
            return;
        };
        let seq = active.id.sequence();

        if active.step_ticks == 0 {
            self.was_signal = true;
            if active.step >= seq.steps.len() {
                match seq.mode {
                    SignalMode::OneShot => {
                        // Done; resume chase/manual from a clean step next
                        // tick, re-asserting any held pattern.
                        self.signal = None;
                        self.ticks = 0;
                        self.index = 0;
                        self.held_written = None;
                        return;
                    }
                    SignalMode::Loop => active.step = 0,
                }
            }
            bus.write(seq.steps[active.step].pattern);
        }

        active.step_ticks += 1;
        if active.step_ticks >= seq.steps[active.step].hold_ticks {
            active.step_ticks = 0;
            active.step += 1;
        }
        self.signal = Some(active);
    }
}

/// Shared pattern sequencer.
///
/// `const`-constructible so it can live in a `static` reachable from both
/// the timer interrupt and the foreground decoder.
pub struct Sequencer {
    state: Mutex<RefCell<SequencerCore>>,
    /// Advisory exclusion flag; set for the duration of every mutator.
    guard: AtomicBool,
}

impl Sequencer {
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(RefCell::new(SequencerCore::new())),
            guard: AtomicBool::new(false),
        }
    }

    /// Advance playback by one timer tick.
    ///
    /// Call from the fixed-period timer interrupt. Becomes a no-op while a
    /// foreground mutator holds the guard; the skipped tick is lost, not
    /// queued.
    pub fn tick<B: PatternBus>(&self, bus: &mut B) {
        if self.guard.load(Ordering::Acquire) {
            return;
        }
        critical_section::with(|cs| {
            self.state.borrow_ref_mut(cs).tick(bus);
        });
    }

    /// Run a multi-field state update atomically with respect to the tick.
    fn mutate<R>(&self, f: impl FnOnce(&mut SequencerCore) -> R) -> R {
        self.guard.store(true, Ordering::Release);
        let result = critical_section::with(|cs| f(&mut self.state.borrow_ref_mut(cs)));
        self.guard.store(false, Ordering::Release);
        result
    }

    /// Enable chase playback.
    pub fn on(&self) {
        self.mutate(|s| s.off = false);
    }

    /// Disable chase playback; the next tick blanks the bus once.
    pub fn off(&self) {
        self.mutate(|s| s.off = true);
    }

    /// Freeze/unfreeze the chase at its current step.
    pub fn stop(&self, stop: bool) {
        self.mutate(|s| s.stopped = stop);
    }

    /// Set the chase speed in ticks per step (clamped to at least 1).
    pub fn set_speed(&self, speed: u16) {
        let speed = speed.max(1);
        self.mutate(|s| s.tick_interval = speed);
        #[cfg(feature = "esp32-log")]
        println!("sequencer: setting speed {}", speed);
    }

    /// Current chase speed in ticks per step.
    pub fn speed(&self) -> u16 {
        self.mutate(|s| s.tick_interval)
    }

    /// Select a chase sequence and restart it from its first step.
    pub fn set_chase(&self, chase: ChaseId) {
        self.mutate(|s| {
            s.chase = chase;
            s.ticks = 0;
            s.index = 0;
        });
    }

    /// Hold a manual 6-bit pattern, pre-empting chase playback.
    ///
    /// The pattern is written on the next tick and re-written only when it
    /// changes.
    pub fn set_pattern(&self, pattern: u8) {
        self.mutate(|s| {
            s.held = Some(pattern & PATTERN_MASK);
            s.held_written = None;
        });
    }

    /// Release the held manual pattern and resume chase playback.
    pub fn clear_pattern(&self) {
        self.mutate(|s| {
            s.held = None;
            s.held_written = None;
        });
    }

    /// Start a special signal, unconditionally pre-empting any playback.
    pub fn start_signal(&self, id: SignalId) {
        self.mutate(|s| {
            s.blanked = false;
            s.signal = Some(ActiveSignal {
                id,
                step: 0,
                step_ticks: 0,
            });
        });
    }

    /// Clear any active special signal and resume prior playback.
    pub fn clear_signal(&self) {
        self.mutate(|s| {
            s.signal = None;
            s.blanked = false;
            s.ticks = 0;
            s.index = 0;
            s.held_written = None;
        });
    }

    /// Whether no special signal is currently playing.
    pub fn signal_done(&self) -> bool {
        self.mutate(|s| s.signal.is_none())
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}
