use alloc::vec;
use alloc::vec::Vec;

use crate::Span;

/// A visibility report over the element registry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Visibility {
    /// First element currently in view, if any.
    pub active_index: Option<usize>,
    /// Number of elements concurrently in view.
    pub visible_count: usize,
}

/// A source of visibility reports.
///
/// Two backing strategies exist: event-driven ([`IntersectionTracker`], fed
/// by host intersection notifications) and poll-driven ([`RectTracker`],
/// recomputed from bounding spans on demand). [`crate::Paginator::observe`]
/// accepts either.
pub trait VisibilityTracker {
    fn visibility(&self) -> Visibility;
}

/// One intersection notification forwarded from the host.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntersectionEntry {
    pub index: usize,
    /// Fraction of the element inside the visible region, `0.0..=1.0`.
    pub ratio: f32,
}

/// Event-driven tracker fed by host intersection notifications.
///
/// The host observes every registry element and forwards each notification
/// batch via [`IntersectionTracker::record_all`]. An element whose latest
/// ratio is at or above the threshold counts as in view.
#[derive(Clone, Debug)]
pub struct IntersectionTracker {
    threshold: f32,
    intersecting: Vec<bool>,
}

impl IntersectionTracker {
    pub fn new(len: usize, threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            intersecting: vec![false; len],
        }
    }

    pub fn len(&self) -> usize {
        self.intersecting.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intersecting.is_empty()
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Re-seeds the tracker after the registry changes length.
    ///
    /// All elements start out of view; the host's next notification batch
    /// repopulates them.
    pub fn set_len(&mut self, len: usize) {
        self.intersecting.clear();
        self.intersecting.resize(len, false);
    }

    pub fn record(&mut self, entry: IntersectionEntry) {
        if entry.index >= self.intersecting.len() {
            pwarn!(
                index = entry.index,
                len = self.intersecting.len(),
                "IntersectionTracker: out-of-range index"
            );
            debug_assert!(
                entry.index < self.intersecting.len(),
                "IntersectionTracker: out-of-range index (i={}, len={})",
                entry.index,
                self.intersecting.len()
            );
            return;
        }
        self.intersecting[entry.index] = entry.ratio >= self.threshold;
    }

    pub fn record_all(&mut self, entries: impl IntoIterator<Item = IntersectionEntry>) {
        for entry in entries {
            self.record(entry);
        }
    }
}

impl VisibilityTracker for IntersectionTracker {
    fn visibility(&self) -> Visibility {
        Visibility {
            active_index: self.intersecting.iter().position(|&v| v),
            visible_count: self.intersecting.iter().filter(|&&v| v).count(),
        }
    }
}

/// Poll-driven tracker comparing element bounding spans against the wrapper's
/// viewport span.
///
/// An element is in view when its span is fully contained by the viewport.
/// The host re-measures at start and after (throttled) resizes via
/// [`RectTracker::measure`].
#[derive(Clone, Debug, Default)]
pub struct RectTracker {
    viewport: Span,
    items: Vec<Span>,
}

impl RectTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn viewport(&self) -> Span {
        self.viewport
    }

    /// Replaces the tracked geometry with a fresh measurement pass.
    pub fn measure(&mut self, viewport: Span, items: impl IntoIterator<Item = Span>) {
        self.viewport = viewport;
        self.items.clear();
        self.items.extend(items);
        ptrace!(
            viewport_start = viewport.start,
            viewport_size = viewport.size,
            items = self.items.len(),
            "RectTracker::measure"
        );
    }
}

impl VisibilityTracker for RectTracker {
    fn visibility(&self) -> Visibility {
        let mut active_index = None;
        let mut visible_count = 0usize;
        for (i, &item) in self.items.iter().enumerate() {
            if self.viewport.contains(item) {
                if active_index.is_none() {
                    active_index = Some(i);
                }
                visible_count += 1;
            }
        }
        Visibility {
            active_index,
            visible_count,
        }
    }
}
