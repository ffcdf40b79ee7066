//! A headless pagination controller for scroll-snap lists.
//!
//! For adapter-level utilities (the host capability trait, control synthesis,
//! a ready-made controller), see the `paginator-adapter` crate.
//!
//! This crate focuses on the core state of "previous/next" navigation over a
//! snap-scrolling row of elements: which element is active, how many fit in
//! one page, and where a navigation should scroll to, with the accessibility
//! and rate-limiting rules that come with it (reduced motion, throttled
//! resize recalculation).
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - the element registry length (after discovery)
//! - visibility reports (intersection events or polled bounding spans)
//! - resize/scroll signals with timestamps
//! - execution of the returned [`ScrollRequest`]s
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod options;
mod paginator;
mod state;
mod throttle;
mod types;
mod visibility;

#[cfg(test)]
mod tests;

pub use options::{OnChangeCallback, PaginatorOptions};
pub use paginator::Paginator;
pub use state::NavState;
pub use throttle::Throttle;
pub use types::{Align, NavDirection, ScrollBehavior, ScrollRequest, Span};
pub use visibility::{
    IntersectionEntry, IntersectionTracker, RectTracker, Visibility, VisibilityTracker,
};
