use super::interpolate::RangeMap;
use super::signals::ScrollObserver;

/// Scroll distance over which the header settles into its scrolled look.
pub const SCROLL_RANGE: (f64, f64) = (0.0, 100.0);

const OPACITY: RangeMap = RangeMap::new(SCROLL_RANGE, (1.0, 0.95));
const BLUR_PX: RangeMap = RangeMap::new(SCROLL_RANGE, (0.0, 10.0));

/// Visual properties of the fixed header derived from the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderStyle {
    pub opacity: f64,
    pub blur_px: f64,
}

impl HeaderStyle {
    pub fn at(offset: f64) -> Self {
        Self {
            opacity: OPACITY.map(offset),
            blur_px: BLUR_PX.map(offset),
        }
    }

    /// Inline `style` attribute value for the header element.
    pub fn css(&self) -> String {
        format!(
            "opacity: {:.4}; backdrop-filter: blur({:.2}px); -webkit-backdrop-filter: blur({:.2}px);",
            self.opacity, self.blur_px, self.blur_px
        )
    }
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self::at(0.0)
    }
}

/// Tracks the latest scroll offset and exposes the header style for it.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ScrollHeaderController {
    offset: f64,
}

impl ScrollHeaderController {
    pub fn style(&self) -> HeaderStyle {
        HeaderStyle::at(self.offset)
    }
}

impl ScrollObserver for ScrollHeaderController {
    fn on_scroll(&mut self, offset: f64) {
        self.offset = if offset.is_nan() { 0.0 } else { offset };
    }
}

/// Coalesces bursts of scroll events into one update per animation frame.
///
/// The caller schedules a frame only when [`FrameThrottle::request`] returns
/// true, records the host's frame handle with [`FrameThrottle::scheduled`]
/// and calls [`FrameThrottle::complete`] from inside the frame callback.
#[derive(Debug, Default)]
pub struct FrameThrottle {
    pending: bool,
    handle: Option<i32>,
}

impl FrameThrottle {
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn scheduled(&mut self, handle: i32) {
        self.handle = Some(handle);
    }

    /// Called from the frame callback, or when scheduling failed on the
    /// host side so the next event can retry.
    pub fn complete(&mut self) {
        self.pending = false;
        self.handle = None;
    }

    /// Takes the outstanding frame handle so it can be cancelled.
    pub fn cancel(&mut self) -> Option<i32> {
        self.pending = false;
        self.handle.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resting_style_at_or_above_top() {
        for offset in [0.0, -1.0, -250.0] {
            let style = HeaderStyle::at(offset);
            assert_eq!(style.opacity, 1.0);
            assert_eq!(style.blur_px, 0.0);
        }
    }

    #[test]
    fn test_settled_style_past_range() {
        for offset in [100.0, 100.5, 200.0, 1e7] {
            let style = HeaderStyle::at(offset);
            assert_eq!(style.opacity, 0.95);
            assert_eq!(style.blur_px, 10.0);
        }
    }

    #[test]
    fn test_monotonic_within_range() {
        let mut previous = HeaderStyle::at(0.0);
        for step in 1..=1000 {
            let current = HeaderStyle::at(step as f64 * 0.1);
            assert!(current.opacity <= previous.opacity);
            assert!(current.blur_px >= previous.blur_px);
            previous = current;
        }
    }

    #[test]
    fn test_scroll_from_top_to_200() {
        let mut controller = ScrollHeaderController::default();
        assert_eq!(controller.style().opacity, 1.0);

        controller.on_scroll(50.0);
        let halfway = controller.style();
        assert!(halfway.opacity < 1.0 && halfway.opacity > 0.95);
        assert!((halfway.blur_px - 5.0).abs() < 1e-9);

        for offset in [100.0, 150.0, 200.0] {
            controller.on_scroll(offset);
            assert_eq!(controller.style().opacity, 0.95);
        }
        assert_eq!(controller.style(), HeaderStyle::at(200.0));
    }

    #[test]
    fn test_controller_has_no_hysteresis() {
        let mut controller = ScrollHeaderController::default();
        controller.on_scroll(180.0);
        controller.on_scroll(30.0);
        assert_eq!(controller.style(), HeaderStyle::at(30.0));
    }

    #[test]
    fn test_nan_offset_resets_to_top() {
        let mut controller = ScrollHeaderController::default();
        controller.on_scroll(f64::NAN);
        assert_eq!(controller.style(), HeaderStyle::default());
    }

    #[test]
    fn test_css_contains_both_properties() {
        let css = HeaderStyle::at(100.0).css();
        assert!(css.contains("opacity: 0.9500"));
        assert!(css.contains("backdrop-filter: blur(10.00px)"));
    }

    #[test]
    fn test_throttle_coalesces_until_frame_runs() {
        let mut throttle = FrameThrottle::default();
        assert!(throttle.request());
        throttle.scheduled(7);
        assert!(!throttle.request());
        assert!(!throttle.request());

        throttle.complete();
        assert!(throttle.request());
    }

    #[test]
    fn test_throttle_cancel_returns_handle() {
        let mut throttle = FrameThrottle::default();
        assert!(throttle.request());
        throttle.scheduled(42);
        assert_eq!(throttle.cancel(), Some(42));
        assert_eq!(throttle.cancel(), None);
        assert!(throttle.request());
    }

    #[test]
    fn test_throttle_retries_after_failed_schedule() {
        let mut throttle = FrameThrottle::default();
        assert!(throttle.request());
        throttle.complete();
        assert!(throttle.request());
    }
}
