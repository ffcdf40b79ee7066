/// A lightweight, serializable snapshot of the paginator's navigation state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
/// Useful for `on_change` consumers that want to diff state across frames
/// without holding a reference to the paginator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavState {
    /// First element currently in view, `None` while the controller is inert.
    pub active_index: Option<usize>,
    /// Number of elements treated as one navigational page.
    pub page_size: usize,
    pub is_scrolling: bool,
}
