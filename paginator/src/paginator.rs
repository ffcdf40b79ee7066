use alloc::sync::Arc;
use core::cell::Cell;
use core::cmp;

use crate::throttle::Throttle;
use crate::visibility::{Visibility, VisibilityTracker};
use crate::{Align, NavDirection, NavState, PaginatorOptions, ScrollBehavior, ScrollRequest};

/// A headless pagination controller for scroll-snap lists.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects; the element registry lives in your
///   adapter, only its length is installed here.
/// - Your adapter drives it with visibility reports, resize/scroll signals,
///   and timestamps (`now_ms`).
/// - Navigation is exposed as [`ScrollRequest`] values the adapter executes
///   against its host (e.g. a DOM `scrollIntoView`).
///
/// For the host capability trait and a ready-made controller, see the
/// `paginator-adapter` crate.
#[derive(Clone, Debug)]
pub struct Paginator {
    options: PaginatorOptions,
    count: usize,
    active_index: usize,
    page_size: usize,
    reduced_motion: bool,
    is_scrolling: bool,
    last_scroll_event_ms: Option<u64>,
    resize_throttle: Throttle,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Paginator {
    /// Creates a new paginator from options.
    ///
    /// The registry length starts at zero; the adapter installs it after
    /// element discovery via [`Paginator::set_count`]. Until then the
    /// paginator is inert: queries return `None` and navigation no-ops.
    pub fn new(options: PaginatorOptions) -> Self {
        pdebug!(
            enabled = options.enabled,
            paginated = options.paginated,
            add_controls = options.add_controls,
            "Paginator::new"
        );
        let resize_throttle = Throttle::new(options.resize_throttle_ms);
        Self {
            options,
            count: 0,
            active_index: 0,
            page_size: 0,
            reduced_motion: false,
            is_scrolling: false,
            last_scroll_event_ms: None,
            resize_throttle,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &PaginatorOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: PaginatorOptions) {
        let was_enabled = self.options.enabled;
        self.options = options;
        ptrace!(
            enabled = self.options.enabled,
            paginated = self.options.paginated,
            "Paginator::set_options"
        );
        self.resize_throttle
            .set_interval_ms(self.options.resize_throttle_ms);

        if !self.options.enabled || !was_enabled {
            // Disabled, or freshly re-enabled: stale indexes are meaningless
            // until the next visibility pass.
            self.clear_tracking_state();
        } else {
            self.clamp_active_index();
        }

        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to
    /// `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut PaginatorOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Paginator, bool) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self, self.is_scrolling);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// On a typical adapter frame, a resize, a visibility pass, and a scroll
    /// event may land together; without batching each setter would fire
    /// `on_change` separately.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Installs the registry length discovered by the adapter.
    ///
    /// Shrinking clamps the active index back into range; an empty registry
    /// leaves the paginator inert rather than failing.
    pub fn set_count(&mut self, count: usize) {
        if self.count == count {
            return;
        }
        pdebug!(prev = self.count, count, "Paginator::set_count");
        self.count = count;
        self.clamp_active_index();
        self.page_size = cmp::min(self.page_size, count);
        self.notify();
    }

    pub fn enabled(&self) -> bool {
        self.options.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.options.enabled == enabled {
            return;
        }
        self.options.enabled = enabled;
        self.clear_tracking_state();
        self.notify();
    }

    /// Whether the paginator has anything to paginate.
    ///
    /// `false` covers both an explicit disable and the silent-degradation
    /// path where element discovery found nothing; callers that care can
    /// check this single condition instead of handling an error.
    pub fn is_active(&self) -> bool {
        self.options.enabled && self.count > 0
    }

    /// First element currently in view, `None` while inert.
    pub fn active_index(&self) -> Option<usize> {
        self.is_active().then_some(self.active_index)
    }

    /// Number of elements treated as one navigational page.
    pub fn page_size(&self) -> usize {
        if !self.is_active() {
            return 0;
        }
        self.page_size
    }

    pub fn nav_state(&self) -> NavState {
        NavState {
            active_index: self.active_index(),
            page_size: self.page_size(),
            is_scrolling: self.is_scrolling,
        }
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Installs the host-reported reduced-motion preference.
    pub fn set_reduced_motion(&mut self, reduced_motion: bool) {
        if self.reduced_motion == reduced_motion {
            return;
        }
        self.reduced_motion = reduced_motion;
        self.notify();
    }

    /// Behavior a scroll issued right now would use.
    pub fn scroll_behavior(&self) -> ScrollBehavior {
        if self.reduced_motion {
            ScrollBehavior::Instant
        } else {
            ScrollBehavior::Smooth
        }
    }

    /// Applies a visibility report.
    ///
    /// This is the only mutator of the active index and page size. A report
    /// without an active element keeps the current index (matching observer
    /// batches where no entry intersects); out-of-range indexes are clamped,
    /// preserving `0 <= active < count`.
    pub fn apply_visibility(&mut self, visibility: Visibility) {
        if !self.options.enabled {
            return;
        }
        ptrace!(
            active = visibility.active_index,
            visible = visibility.visible_count,
            "Paginator::apply_visibility"
        );
        if let Some(active) = visibility.active_index {
            self.active_index = cmp::min(active, self.count.saturating_sub(1));
        }
        let mut page = cmp::min(visibility.visible_count, self.count);
        if self.options.trim_partial_page {
            page = page.saturating_sub(1);
        }
        self.page_size = page;
        self.notify();
    }

    /// Pulls a report from a tracker and applies it.
    pub fn observe(&mut self, tracker: &impl VisibilityTracker) {
        self.apply_visibility(tracker.visibility());
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn set_is_scrolling(&mut self, is_scrolling: bool) {
        if self.is_scrolling == is_scrolling {
            return;
        }
        self.is_scrolling = is_scrolling;
        if !is_scrolling {
            self.last_scroll_event_ms = None;
        }
        self.notify();
    }

    /// Records a scroll event from the host and enters the scrolling state.
    pub fn notify_scroll_event(&mut self, now_ms: u64) {
        if !self.options.enabled {
            return;
        }
        self.last_scroll_event_ms = Some(now_ms);
        self.set_is_scrolling(true);
    }

    /// Debounced return to the idle state.
    ///
    /// Call periodically (or on a timer); once `settle_delay_ms` has passed
    /// since the last scroll event, `is_scrolling` resets.
    pub fn update_scrolling(&mut self, now_ms: u64) {
        if !self.options.enabled {
            return;
        }
        if !self.is_scrolling {
            return;
        }
        let Some(last) = self.last_scroll_event_ms else {
            return;
        };
        if now_ms.saturating_sub(last) >= self.options.settle_delay_ms {
            self.set_is_scrolling(false);
        }
    }

    /// Records a resize signal.
    ///
    /// Returns `true` when the adapter should re-run its visibility pass
    /// immediately; bursts inside the gate window coalesce into a single
    /// trailing pass released by [`Paginator::poll_remeasure`].
    pub fn request_remeasure(&mut self, now_ms: u64) -> bool {
        if !self.options.enabled {
            return false;
        }
        self.resize_throttle.request(now_ms)
    }

    /// Releases a coalesced remeasure once the gate window elapses.
    pub fn poll_remeasure(&mut self, now_ms: u64) -> bool {
        if !self.options.enabled {
            return false;
        }
        self.resize_throttle.poll(now_ms)
    }

    /// Elements a single navigation moves across.
    ///
    /// At least one even when no visibility pass has run yet, so navigation
    /// degrades to stepping rather than freezing.
    pub fn stride(&self) -> usize {
        if !self.options.paginated {
            return 1;
        }
        cmp::max(self.page_size, 1)
    }

    /// Computes the scroll a navigation in `direction` should perform.
    ///
    /// Returns `None` when the paginator is inert or the navigation would be
    /// a boundary no-op (next at the last element, previous at the first).
    /// The paginator's own state does not change; commit the returned request
    /// with [`Paginator::commit_scroll`] once the host scroll is issued.
    pub fn page_target(&self, direction: NavDirection) -> Option<ScrollRequest> {
        if !self.is_active() {
            return None;
        }
        let last = self.count - 1;
        let (index, align) = match direction {
            NavDirection::Next => {
                if self.active_index >= last {
                    return None;
                }
                (cmp::min(self.active_index + self.stride(), last), Align::Start)
            }
            NavDirection::Previous => {
                if self.active_index == 0 {
                    return None;
                }
                (self.active_index.saturating_sub(self.stride()), Align::End)
            }
        };
        Some(ScrollRequest {
            index,
            align,
            behavior: self.scroll_behavior(),
        })
    }

    pub fn next_page(&self) -> Option<ScrollRequest> {
        self.page_target(NavDirection::Next)
    }

    pub fn previous_page(&self) -> Option<ScrollRequest> {
        self.page_target(NavDirection::Previous)
    }

    /// Marks a request as dispatched to the host.
    ///
    /// The active index moves to the target optimistically and the scrolling
    /// state begins; the next visibility pass corrects the index if the host
    /// settled elsewhere. Rapid repeated commits are legal; later requests
    /// simply retarget.
    pub fn commit_scroll(&mut self, request: ScrollRequest, now_ms: u64) {
        if !self.is_active() {
            return;
        }
        pdebug!(
            index = request.index,
            from = self.active_index,
            "Paginator::commit_scroll"
        );
        self.batch_update(|p| {
            p.active_index = cmp::min(request.index, p.count.saturating_sub(1));
            p.notify_scroll_event(now_ms);
        });
    }

    fn clamp_active_index(&mut self) {
        self.active_index = cmp::min(self.active_index, self.count.saturating_sub(1));
    }

    fn clear_tracking_state(&mut self) {
        self.active_index = 0;
        self.page_size = 0;
        self.is_scrolling = false;
        self.last_scroll_event_ms = None;
        self.resize_throttle.reset();
    }
}
