/// Linear mapping from an input range onto an output range, clamped at both
/// ends so inputs outside the domain pin to the nearest output endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeMap {
    input: (f64, f64),
    output: (f64, f64),
}

impl RangeMap {
    pub const fn new(input: (f64, f64), output: (f64, f64)) -> Self {
        Self { input, output }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (in_start, in_end) = self.input;
        let (out_start, out_end) = self.output;

        if value.is_nan() {
            return self.map(in_start);
        }
        if in_end == in_start {
            return out_end;
        }

        let progress = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
        out_start + (out_end - out_start) * progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FADE: RangeMap = RangeMap::new((0.0, 100.0), (1.0, 0.95));

    #[test]
    fn test_endpoints_map_exactly() {
        assert_eq!(FADE.map(0.0), 1.0);
        assert_eq!(FADE.map(100.0), 0.95);
    }

    #[test]
    fn test_midpoint_is_linear() {
        let blur = RangeMap::new((0.0, 100.0), (0.0, 10.0));
        assert!((blur.map(50.0) - 5.0).abs() < 1e-9);
        assert!((blur.map(25.0) - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_clamps_outside_domain() {
        assert_eq!(FADE.map(-40.0), 1.0);
        assert_eq!(FADE.map(10_000.0), 0.95);
        assert_eq!(FADE.map(f64::INFINITY), 0.95);
        assert_eq!(FADE.map(f64::NEG_INFINITY), 1.0);
    }

    #[test]
    fn test_nan_maps_to_start() {
        assert_eq!(FADE.map(f64::NAN), 1.0);
    }

    #[test]
    fn test_degenerate_domain_returns_end() {
        let step = RangeMap::new((5.0, 5.0), (0.0, 1.0));
        assert_eq!(step.map(-1.0), 1.0);
        assert_eq!(step.map(9.0), 1.0);
    }
}
