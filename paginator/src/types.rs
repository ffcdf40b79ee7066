/// Alignment of a scroll target along the inline axis of the container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    Nearest,
}

/// How a programmatic scroll should move.
///
/// `Smooth` is downgraded to `Instant` when the host reports a reduced-motion
/// preference; see [`crate::Paginator::set_reduced_motion`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Direction of a page navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavDirection {
    Previous,
    Next,
}

/// A one-dimensional extent along the scroll axis.
///
/// `start` is relative to whatever origin the host measures against (for DOM
/// hosts, typically the viewport), so it can be negative for elements scrolled
/// out before the visible region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: i64,
    pub size: u32,
}

impl Span {
    pub fn new(start: i64, size: u32) -> Self {
        Self { start, size }
    }

    pub fn end(&self) -> i64 {
        self.start.saturating_add(self.size as i64)
    }

    /// Whether `other` lies fully inside this span.
    pub fn contains(&self, other: Span) -> bool {
        other.start >= self.start && other.end() <= self.end()
    }

    /// Fraction of `other` covered by this span, `0.0..=1.0`.
    pub fn coverage(&self, other: Span) -> f32 {
        if other.size == 0 {
            return if self.contains(other) { 1.0 } else { 0.0 };
        }
        let lo = self.start.max(other.start);
        let hi = self.end().min(other.end());
        if hi <= lo {
            return 0.0;
        }
        (hi - lo) as f32 / other.size as f32
    }
}

/// A scroll the adapter should perform on its host.
///
/// Produced by [`crate::Paginator::page_target`]; the paginator never touches
/// the host itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollRequest {
    /// Registry index of the element to bring into view.
    pub index: usize,
    pub align: Align,
    pub behavior: ScrollBehavior,
}
