use alloc::vec::Vec;

use paginator::{
    IntersectionEntry, IntersectionTracker, NavDirection, Paginator, PaginatorOptions, RectTracker,
};

use crate::{ControlsSpec, NavControls, ScrollHost};

/// Which visibility-tracking strategy a controller mounts with.
///
/// `Intersection` expects the host to forward its native intersection
/// notifications via [`NavController::on_intersections`]. `BoundingRect`
/// needs no host events: the controller re-polls element spans itself at
/// mount and after (throttled) resizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackerKind {
    Intersection,
    BoundingRect,
}

#[derive(Clone, Debug)]
enum Backend {
    Intersection(IntersectionTracker),
    BoundingRect(RectTracker),
}

/// A paginator mounted onto a [`ScrollHost`].
///
/// Owns the element registry (handles discovered at mount), the navigation
/// controls, and the visibility tracker; forwards host signals into the
/// headless [`Paginator`] and executes the scrolls it requests.
///
/// Mounting never fails: missing containers or an empty item list produce an
/// inert controller whose navigation no-ops, observable via
/// [`NavController::is_active`].
#[derive(Clone, Debug)]
pub struct NavController<H: ScrollHost> {
    host: H,
    paginator: Paginator,
    items: Vec<H::Handle>,
    wrapper: Option<H::Handle>,
    controls: Option<NavControls<H::Handle>>,
    backend: Backend,
}

impl<H: ScrollHost> NavController<H> {
    /// Mounts with the poll-driven tracker and stock control markup.
    pub fn mount(host: H, options: PaginatorOptions) -> Self {
        Self::mount_with(host, options, TrackerKind::BoundingRect, ControlsSpec::default())
    }

    /// Mounts with an explicit tracker strategy and control markup.
    pub fn mount_with(
        mut host: H,
        options: PaginatorOptions,
        tracker: TrackerKind,
        spec: ControlsSpec,
    ) -> Self {
        let items = host.query_all(&options.item_selector);
        let wrapper = host.query(&options.wrapper_selector);
        let container = host.query(&options.container_selector);

        let controls = if options.add_controls {
            container.as_ref().map(|c| host.append_controls(c, &spec))
        } else {
            match (
                host.query(&options.previous_selector),
                host.query(&options.next_selector),
            ) {
                (Some(previous), Some(next)) => Some(NavControls { previous, next }),
                _ => None,
            }
        };

        let reduced_motion = host.prefers_reduced_motion();
        let mut paginator = Paginator::new(options);
        paginator.batch_update(|p| {
            p.set_count(items.len());
            p.set_reduced_motion(reduced_motion);
        });

        let backend = match tracker {
            TrackerKind::Intersection => Backend::Intersection(IntersectionTracker::new(
                items.len(),
                paginator.options().intersection_threshold,
            )),
            TrackerKind::BoundingRect => Backend::BoundingRect(RectTracker::new()),
        };

        let mut controller = Self {
            host,
            paginator,
            items,
            wrapper,
            controls,
            backend,
        };
        controller.refresh();
        controller
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    pub fn paginator_mut(&mut self) -> &mut Paginator {
        &mut self.paginator
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Registry handles, in discovery order.
    pub fn items(&self) -> &[H::Handle] {
        &self.items
    }

    /// The navigation buttons, when discovery or synthesis produced them.
    pub fn controls(&self) -> Option<&NavControls<H::Handle>> {
        self.controls.as_ref()
    }

    /// Whether the mount found anything to paginate.
    pub fn is_active(&self) -> bool {
        self.paginator.is_active()
    }

    /// Resize signal from the host.
    ///
    /// Rate-limited: bursts collapse to a leading pass plus one trailing
    /// pass released by [`NavController::tick`].
    pub fn on_resize(&mut self, now_ms: u64) {
        if self.paginator.request_remeasure(now_ms) {
            self.refresh();
        }
    }

    /// Intersection notifications forwarded from the host.
    ///
    /// Only meaningful with [`TrackerKind::Intersection`]; a poll-driven
    /// controller ignores them.
    pub fn on_intersections(&mut self, entries: impl IntoIterator<Item = IntersectionEntry>) {
        let Backend::Intersection(tracker) = &mut self.backend else {
            return;
        };
        tracker.record_all(entries);
        self.paginator.observe(tracker);
    }

    /// Scroll event from the host container (wheel, drag, snap settle).
    pub fn on_scroll(&mut self, now_ms: u64) {
        self.paginator.notify_scroll_event(now_ms);
    }

    /// Advances time-based state: releases a coalesced resize pass and
    /// settles `is_scrolling` after the debounce window.
    pub fn tick(&mut self, now_ms: u64) {
        if self.paginator.poll_remeasure(now_ms) {
            self.refresh();
        }
        self.paginator.update_scrolling(now_ms);
    }

    pub fn next(&mut self, now_ms: u64) -> bool {
        self.navigate(NavDirection::Next, now_ms)
    }

    pub fn previous(&mut self, now_ms: u64) -> bool {
        self.navigate(NavDirection::Previous, now_ms)
    }

    /// Handles a navigation button click.
    ///
    /// Re-reads the reduced-motion preference (it can change while the page
    /// is up), resolves the page target, and dispatches the scroll to the
    /// host. Returns whether a scroll was issued; boundary clicks and inert
    /// controllers return `false`.
    pub fn navigate(&mut self, direction: NavDirection, now_ms: u64) -> bool {
        let reduced_motion = self.host.prefers_reduced_motion();
        self.paginator.set_reduced_motion(reduced_motion);

        let Some(request) = self.paginator.page_target(direction) else {
            return false;
        };
        let Some(handle) = self.items.get(request.index).cloned() else {
            return false;
        };
        self.host
            .scroll_into_view(&handle, request.align, request.behavior);
        self.paginator.commit_scroll(request, now_ms);
        true
    }

    /// Runs a visibility pass against the current tracker.
    ///
    /// Poll-driven controllers re-measure every span; event-driven ones
    /// re-apply the latest recorded notifications.
    fn refresh(&mut self) {
        match &mut self.backend {
            Backend::BoundingRect(tracker) => {
                let Some(wrapper) = &self.wrapper else {
                    return;
                };
                let viewport = self.host.span_of(wrapper);
                let host = &self.host;
                tracker.measure(viewport, self.items.iter().map(|h| host.span_of(h)));
                self.paginator.observe(tracker);
            }
            Backend::Intersection(tracker) => {
                self.paginator.observe(tracker);
            }
        }
    }
}
