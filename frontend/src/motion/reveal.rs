use super::signals::{Intersection, VisibilityObserver};

/// Share of an element's area that must be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Vertical offset of a hidden section from its resting position.
pub const HIDDEN_OFFSET_PX: f64 = 50.0;
pub const REVEAL_DURATION_SECS: f64 = 0.6;

// Observers report ratios computed from rounded pixel rects.
const RATIO_TOLERANCE: f64 = 1e-3;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    pub fn is_visible(self) -> bool {
        matches!(self, RevealState::Visible)
    }

    /// Inline style for the wrapper element in this state.
    pub fn css(self) -> String {
        let (opacity, offset) = match self {
            RevealState::Hidden => (0.0, HIDDEN_OFFSET_PX),
            RevealState::Visible => (1.0, 0.0),
        };
        format!(
            "opacity: {opacity}; transform: translateY({offset}px); \
             transition: opacity {d}s ease-out, transform {d}s ease-out;",
            d = REVEAL_DURATION_SECS
        )
    }
}

/// One-shot Hidden -> Visible latch for a single section.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RevealLatch {
    state: RevealState,
}

impl RevealLatch {
    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Feeds a sample and reports whether this call flipped the latch.
    pub fn observe(&mut self, sample: Intersection) -> bool {
        if self.state.is_visible() {
            return false;
        }
        if sample.is_intersecting && sample.ratio + RATIO_TOLERANCE >= REVEAL_THRESHOLD {
            self.state = RevealState::Visible;
            return true;
        }
        false
    }
}

impl VisibilityObserver for RevealLatch {
    fn on_intersection(&mut self, sample: Intersection) {
        self.observe(sample);
    }
}

/// Axis-aligned box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}

/// Measures how much of `element` lies within a viewport of the given size,
/// the way the mount-time check needs it before any observer has fired.
///
/// Zero-area elements count as fully visible when they sit inside the
/// viewport, matching `IntersectionObserver`.
pub fn viewport_intersection(element: Rect, viewport_width: f64, viewport_height: f64) -> Intersection {
    let right = element.left + element.width;
    let bottom = element.top + element.height;

    let overlap_w = right.min(viewport_width) - element.left.max(0.0);
    let overlap_h = bottom.min(viewport_height) - element.top.max(0.0);
    if overlap_w < 0.0 || overlap_h < 0.0 {
        return Intersection::outside();
    }

    let area = element.width * element.height;
    if area == 0.0 {
        return Intersection::new(1.0, true);
    }
    Intersection::new((overlap_w * overlap_h) / area, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seen(ratio: f64) -> Intersection {
        Intersection::new(ratio, ratio > 0.0)
    }

    #[test]
    fn test_starts_hidden() {
        assert_eq!(RevealLatch::default().state(), RevealState::Hidden);
    }

    #[test]
    fn test_below_threshold_stays_hidden() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(seen(0.05)));
        assert!(!latch.observe(Intersection::outside()));
        assert_eq!(latch.state(), RevealState::Hidden);
    }

    #[test]
    fn test_reveals_at_threshold() {
        let mut latch = RevealLatch::default();
        assert!(latch.observe(seen(REVEAL_THRESHOLD)));
        assert_eq!(latch.state(), RevealState::Visible);
    }

    #[test]
    fn test_rounding_just_under_threshold_still_reveals() {
        let mut latch = RevealLatch::default();
        assert!(latch.observe(seen(0.0995)));
    }

    #[test]
    fn test_not_intersecting_never_reveals() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(Intersection::new(0.5, false)));
    }

    #[test]
    fn test_enter_leave_enter_stays_visible() {
        let mut latch = RevealLatch::default();
        assert!(latch.observe(seen(0.4)));
        assert!(!latch.observe(Intersection::outside()));
        assert_eq!(latch.state(), RevealState::Visible);
        assert!(!latch.observe(seen(1.0)));
        assert_eq!(latch.state(), RevealState::Visible);
    }

    #[test]
    fn test_observer_trait_feeds_latch() {
        let mut latch = RevealLatch::default();
        latch.on_intersection(seen(0.3));
        latch.on_intersection(Intersection::outside());
        assert!(latch.state().is_visible());
    }

    #[test]
    fn test_css_per_state() {
        let hidden = RevealState::Hidden.css();
        assert!(hidden.contains("opacity: 0;"));
        assert!(hidden.contains("translateY(50px)"));
        assert!(hidden.contains("0.6s ease-out"));

        let visible = RevealState::Visible.css();
        assert!(visible.contains("opacity: 1;"));
        assert!(visible.contains("translateY(0px)"));
    }

    #[test]
    fn test_fully_inside_initial_viewport() {
        let sample = viewport_intersection(Rect::new(120.0, 0.0, 800.0, 300.0), 1280.0, 720.0);
        assert_eq!(sample.ratio, 1.0);

        let mut latch = RevealLatch::default();
        assert!(latch.observe(sample));
    }

    #[test]
    fn test_partially_below_fold() {
        // 100 of 400px visible
        let sample = viewport_intersection(Rect::new(620.0, 0.0, 1000.0, 400.0), 1000.0, 720.0);
        assert!((sample.ratio - 0.25).abs() < 1e-9);
        assert!(sample.is_intersecting);
    }

    #[test]
    fn test_sliver_below_threshold() {
        // 20 of 400px visible
        let sample = viewport_intersection(Rect::new(700.0, 0.0, 1000.0, 400.0), 1000.0, 720.0);
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(sample));
    }

    #[test]
    fn test_entirely_offscreen() {
        let below = viewport_intersection(Rect::new(2000.0, 0.0, 500.0, 300.0), 1000.0, 720.0);
        assert_eq!(below, Intersection::outside());

        let above = viewport_intersection(Rect::new(-900.0, 0.0, 500.0, 300.0), 1000.0, 720.0);
        assert_eq!(above, Intersection::outside());
    }

    #[test]
    fn test_zero_area_inside_counts_as_visible() {
        let sample = viewport_intersection(Rect::new(10.0, 10.0, 0.0, 0.0), 1000.0, 720.0);
        assert_eq!(sample.ratio, 1.0);
    }
}
