//! Cross-context special-signal trigger queue.
//!
//! Status and diagnostics layers request special signals from contexts that
//! must not touch the sequencer directly. Requests are queued through a
//! fixed-capacity, critical-section-protected deque and drained in the
//! foreground via [`SignalTrigger::dispatch`].

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::sequencer::Sequencer;
use crate::signal::SignalId;

/// One queued signal request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignalRequest {
    /// Start the named signal, pre-empting playback
    Start(SignalId),
    /// Clear any active signal
    Clear,
}

/// Error returned when the trigger queue is full.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriggerFull(pub SignalRequest);

/// Bounded signal trigger queue.
///
/// `const`-constructible so it can live in a `static` shared between the
/// requesting context and the foreground loop.
pub struct SignalTrigger<const N: usize> {
    inner: Mutex<RefCell<Deque<SignalRequest, N>>>,
}

impl<const N: usize> SignalTrigger<N> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Queue a signal request.
    pub fn request(&self, request: SignalRequest) -> Result<(), TriggerFull> {
        critical_section::with(|cs| {
            self.inner
                .borrow(cs)
                .borrow_mut()
                .push_back(request)
                .map_err(TriggerFull)
        })
    }

    /// Queue a request by raw signal number: 0 clears, 1..=9 starts.
    ///
    /// Unknown numbers are rejected as a clear would be surprising.
    pub fn request_raw(&self, raw: u8) -> Result<(), TriggerFull> {
        let request = if raw == 0 {
            SignalRequest::Clear
        } else {
            match SignalId::from_raw(raw) {
                Some(id) => SignalRequest::Start(id),
                None => return Ok(()),
            }
        };
        self.request(request)
    }

    /// Drain all pending requests into the sequencer, in order.
    pub fn dispatch(&self, sequencer: &Sequencer) {
        while let Some(request) = critical_section::with(|cs| {
            self.inner.borrow(cs).borrow_mut().pop_front()
        }) {
            match request {
                SignalRequest::Start(id) => sequencer.start_signal(id),
                SignalRequest::Clear => sequencer.clear_signal(),
            }
        }
    }
}

impl<const N: usize> Default for SignalTrigger<N> {
    fn default() -> Self {
        Self::new()
    }
}
