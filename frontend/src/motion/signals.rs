//! Observer seams between browser signals and the motion state they drive.
//!
//! Hooks in `crate::hooks` own the `scroll` listener and the
//! `IntersectionObserver`; they only forward plain numbers through these
//! traits, so everything behind them can be exercised without a DOM.

/// Receives the vertical scroll offset of the page.
pub trait ScrollObserver {
    fn on_scroll(&mut self, offset: f64);
}

/// Receives visibility samples for a single observed element.
pub trait VisibilityObserver {
    fn on_intersection(&mut self, sample: Intersection);
}

/// One visibility sample: how much of the element's area is on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Fraction of the element's area inside the viewport, `0.0..=1.0`.
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl Intersection {
    pub fn new(ratio: f64, is_intersecting: bool) -> Self {
        let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
        Self {
            ratio,
            is_intersecting,
        }
    }

    pub fn outside() -> Self {
        Self::new(0.0, false)
    }
}
