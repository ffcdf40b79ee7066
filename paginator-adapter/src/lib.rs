//! Adapter utilities for the `paginator` crate.
//!
//! The `paginator` crate is UI-agnostic and focuses on the core navigation
//! state. This crate provides the pieces an embedding needs to wire that
//! state to a real surface:
//!
//! - [`ScrollHost`], a capability trait over the host UI (element discovery,
//!   geometry queries, scroll dispatch, the reduced-motion preference)
//! - [`ControlsSpec`]/[`NavControls`], navigation-button synthesis
//! - [`NavController`], a mounted controller that owns the element registry
//!   and forwards host signals into a `Paginator`
//!
//! This crate is intentionally framework-agnostic (no DOM or TUI bindings);
//! a concrete embedding implements `ScrollHost` for its element type.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod host;


pub use controller::{NavController, TrackerKind};
pub use host::{ControlsSpec, NavControls, ScrollHost};
