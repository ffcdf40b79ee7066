use alloc::string::String;
use alloc::sync::Arc;

use crate::paginator::Paginator;

/// A callback fired when a paginator state update occurs.
///
/// The second argument is `is_scrolling`.
pub type OnChangeCallback = Arc<dyn Fn(&Paginator, bool) + Send + Sync>;

/// Configuration for [`crate::Paginator`].
///
/// All fields have defaults matching the stock scroll-snap markup; callers
/// override the few they care about and merge the rest via [`Default`].
/// The callback field is stored in an `Arc` so options are cheap to clone and
/// can be re-submitted through `Paginator::set_options` without reallocating
/// closures.
pub struct PaginatorOptions {
    /// Selector for the scroll container element.
    pub container_selector: String,
    /// Selector for the wrapper whose width bounds the visible items.
    pub wrapper_selector: String,
    /// Selector for the pagination units inside the container.
    pub item_selector: String,
    /// Selector for a pre-existing "previous" button.
    pub previous_selector: String,
    /// Selector for a pre-existing "next" button.
    pub next_selector: String,

    /// Synthesize navigation controls when none are found.
    pub add_controls: bool,
    /// Navigate by one page of elements; when false, by a single element.
    pub paginated: bool,
    /// Disabled paginators answer every query with an empty/no-op result.
    pub enabled: bool,

    /// Fraction of an element that must be in view before it counts as
    /// visible, `0.0..=1.0`.
    pub intersection_threshold: f32,
    /// Gate window for resize-driven recalculation.
    pub resize_throttle_ms: u64,
    /// Debounce window after the last scroll event before the paginator
    /// returns to the idle state.
    pub settle_delay_ms: u64,

    /// Count one element less than fully visible per page.
    ///
    /// Guards against overshooting a page boundary when the trailing element
    /// is partially clipped by the wrapper. Off by default: with snap
    /// containers the visible count is exact and the full page is the right
    /// stride.
    pub trim_partial_page: bool,

    /// Optional callback fired when the paginator's internal state changes.
    ///
    /// The second argument indicates whether a scroll is in progress.
    pub on_change: Option<OnChangeCallback>,
}

impl Default for PaginatorOptions {
    fn default() -> Self {
        Self {
            container_selector: String::from(".scroll-snap-container"),
            wrapper_selector: String::from(".scroll-snap-wrapper"),
            item_selector: String::from(".scroll-snap-container li"),
            previous_selector: String::from(".scroll-snap-nav-previous"),
            next_selector: String::from(".scroll-snap-nav-next"),
            add_controls: true,
            paginated: true,
            enabled: true,
            intersection_threshold: 0.75,
            resize_throttle_ms: 250,
            settle_delay_ms: 150,
            trim_partial_page: false,
            on_change: None,
        }
    }
}

impl PaginatorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container_selector(mut self, selector: impl Into<String>) -> Self {
        self.container_selector = selector.into();
        self
    }

    pub fn with_wrapper_selector(mut self, selector: impl Into<String>) -> Self {
        self.wrapper_selector = selector.into();
        self
    }

    pub fn with_item_selector(mut self, selector: impl Into<String>) -> Self {
        self.item_selector = selector.into();
        self
    }

    pub fn with_previous_selector(mut self, selector: impl Into<String>) -> Self {
        self.previous_selector = selector.into();
        self
    }

    pub fn with_next_selector(mut self, selector: impl Into<String>) -> Self {
        self.next_selector = selector.into();
        self
    }

    pub fn with_add_controls(mut self, add_controls: bool) -> Self {
        self.add_controls = add_controls;
        self
    }

    pub fn with_paginated(mut self, paginated: bool) -> Self {
        self.paginated = paginated;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_intersection_threshold(mut self, threshold: f32) -> Self {
        self.intersection_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn with_resize_throttle_ms(mut self, interval_ms: u64) -> Self {
        self.resize_throttle_ms = interval_ms;
        self
    }

    pub fn with_settle_delay_ms(mut self, delay_ms: u64) -> Self {
        self.settle_delay_ms = delay_ms;
        self
    }

    pub fn with_trim_partial_page(mut self, trim_partial_page: bool) -> Self {
        self.trim_partial_page = trim_partial_page;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Paginator, bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl Clone for PaginatorOptions {
    fn clone(&self) -> Self {
        Self {
            container_selector: self.container_selector.clone(),
            wrapper_selector: self.wrapper_selector.clone(),
            item_selector: self.item_selector.clone(),
            previous_selector: self.previous_selector.clone(),
            next_selector: self.next_selector.clone(),
            add_controls: self.add_controls,
            paginated: self.paginated,
            enabled: self.enabled,
            intersection_threshold: self.intersection_threshold,
            resize_throttle_ms: self.resize_throttle_ms,
            settle_delay_ms: self.settle_delay_ms,
            trim_partial_page: self.trim_partial_page,
            on_change: self.on_change.clone(),
        }
    }
}

impl core::fmt::Debug for PaginatorOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PaginatorOptions")
            .field("container_selector", &self.container_selector)
            .field("wrapper_selector", &self.wrapper_selector)
            .field("item_selector", &self.item_selector)
            .field("previous_selector", &self.previous_selector)
            .field("next_selector", &self.next_selector)
            .field("add_controls", &self.add_controls)
            .field("paginated", &self.paginated)
            .field("enabled", &self.enabled)
            .field("intersection_threshold", &self.intersection_threshold)
            .field("resize_throttle_ms", &self.resize_throttle_ms)
            .field("settle_delay_ms", &self.settle_delay_ms)
            .field("trim_partial_page", &self.trim_partial_page)
            .finish_non_exhaustive()
    }
}
