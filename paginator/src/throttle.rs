/// A timer-gated coalescer for repeated signals.
///
/// Continuous signal bursts (e.g. a resize gesture firing dozens of events)
/// collapse to at most one run per gate window: the first request fires on the
/// leading edge, later requests inside the window fold into a single trailing
/// run that [`Throttle::poll`] releases once the window elapses.
///
/// Timestamps are caller-provided milliseconds; there is no internal clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Throttle {
    interval_ms: u64,
    last_run_ms: Option<u64>,
    pending: bool,
}

impl Throttle {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_run_ms: None,
            pending: false,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Changes the gate window without dropping a pending run.
    pub fn set_interval_ms(&mut self, interval_ms: u64) {
        self.interval_ms = interval_ms;
    }

    /// Records a signal.
    ///
    /// Returns `true` when the caller should run immediately (leading edge).
    /// Otherwise the run is coalesced; `poll` releases it later.
    pub fn request(&mut self, now_ms: u64) -> bool {
        match self.last_run_ms {
            Some(last) if now_ms.saturating_sub(last) < self.interval_ms => {
                self.pending = true;
                false
            }
            _ => {
                // An immediate run services anything still pending.
                self.pending = false;
                self.last_run_ms = Some(now_ms);
                true
            }
        }
    }

    /// Releases the coalesced trailing run once the gate window has elapsed.
    ///
    /// Any number of `request` calls inside one window produce exactly one
    /// `true` here.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if !self.pending {
            return false;
        }
        let Some(last) = self.last_run_ms else {
            self.pending = false;
            self.last_run_ms = Some(now_ms);
            return true;
        };
        if now_ms.saturating_sub(last) >= self.interval_ms {
            self.pending = false;
            self.last_run_ms = Some(now_ms);
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Clears pending state and the gate window.
    pub fn reset(&mut self) {
        self.last_run_ms = None;
        self.pending = false;
    }
}
