use alloc::string::String;
use alloc::vec::Vec;

use paginator::{Align, ScrollBehavior, Span};

/// Class names and labels for synthesized navigation markup.
///
/// Defaults match the recognized scroll-snap class names, so markup produced
/// here is discoverable by the default selectors in
/// `paginator::PaginatorOptions`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlsSpec {
    pub nav_class: String,
    pub previous_class: String,
    pub next_class: String,
    pub previous_label: String,
    pub next_label: String,
}

impl Default for ControlsSpec {
    fn default() -> Self {
        Self {
            nav_class: String::from("scroll-snap-nav"),
            previous_class: String::from("scroll-snap-nav-previous"),
            next_class: String::from("scroll-snap-nav-next"),
            previous_label: String::from("Previous"),
            next_label: String::from("Next"),
        }
    }
}

/// The pair of navigation button handles, discovered or synthesized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavControls<H> {
    pub previous: H,
    pub next: H,
}

/// Capability trait standing in for the host UI surface (for browsers, the
/// DOM; for TUIs, whatever widget tree renders the list).
///
/// Handles are opaque to the adapter: clones must refer to the same element,
/// and geometry queries are expected to be cheap enough to repeat on resize.
pub trait ScrollHost {
    type Handle: Clone + core::fmt::Debug;

    /// First element matching `selector`, if any.
    fn query(&self, selector: &str) -> Option<Self::Handle>;

    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Handle>;

    /// Bounding span of an element along the inline axis.
    fn span_of(&self, handle: &Self::Handle) -> Span;

    /// Brings an element into view.
    ///
    /// Fire-and-forget: the host animates (or jumps) on its own schedule and
    /// never reports completion back.
    fn scroll_into_view(&mut self, handle: &Self::Handle, align: Align, behavior: ScrollBehavior);

    /// The host's reduced-motion media preference.
    fn prefers_reduced_motion(&self) -> bool;

    /// Synthesizes the navigation block as a child of `container` and
    /// returns the new button handles.
    fn append_controls(
        &mut self,
        container: &Self::Handle,
        spec: &ControlsSpec,
    ) -> NavControls<Self::Handle>;
}
