use serde::{Deserialize, Serialize};

use crate::core::NormalizedPoint;

/// One cubic Bézier piece of the chart curve, in normalized space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicSegment {
    pub p0: NormalizedPoint,
    pub p1: NormalizedPoint,
    pub p2: NormalizedPoint,
    pub p3: NormalizedPoint,
}

impl CubicSegment {
    #[must_use]
    pub const fn new(
        p0: (f64, f64),
        p1: (f64, f64),
        p2: (f64, f64),
        p3: (f64, f64),
    ) -> Self {
        Self {
            p0: NormalizedPoint::new(p0.0, p0.1),
            p1: NormalizedPoint::new(p1.0, p1.1),
            p2: NormalizedPoint::new(p2.0, p2.1),
            p3: NormalizedPoint::new(p3.0, p3.1),
        }
    }

    /// Evaluates the segment at parameter `t` in `0..=1`.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> NormalizedPoint {
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;
        let t2 = t * t;
        let t3 = t2 * t;

        let x = mt3 * self.p0.x + 3.0 * mt2 * t * self.p1.x + 3.0 * mt * t2 * self.p2.x + t3 * self.p3.x;
        let y = mt3 * self.p0.y + 3.0 * mt2 * t * self.p1.y + 3.0 * mt * t2 * self.p2.y + t3 * self.p3.y;
        NormalizedPoint::new(x, y)
    }
}

/// The fixed curve: rise to the peak, fall into the valley, climb the slope
/// and level off on the plateau. Segment `i` ends where segment `i + 1`
/// starts.
pub const DK_CURVE_SEGMENTS: [CubicSegment; 4] = [
    CubicSegment::new((0.00, 0.15), (0.05, 0.15), (0.08, 0.95), (0.15, 0.95)),
    CubicSegment::new((0.15, 0.95), (0.22, 0.95), (0.30, 0.12), (0.40, 0.12)),
    CubicSegment::new((0.40, 0.12), (0.50, 0.12), (0.60, 0.45), (0.70, 0.60)),
    CubicSegment::new((0.70, 0.60), (0.80, 0.72), (0.90, 0.75), (1.00, 0.75)),
];

/// x coordinates where one segment hands over to the next.
#[must_use]
pub fn segment_boundaries() -> Vec<f64> {
    DK_CURVE_SEGMENTS
        .iter()
        .skip(1)
        .map(|segment| segment.p0.x)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{DK_CURVE_SEGMENTS, segment_boundaries};

    #[test]
    fn segments_are_contiguous() {
        for pair in DK_CURVE_SEGMENTS.windows(2) {
            assert_eq!(pair[0].p3, pair[1].p0, "segment end must match next start");
        }
    }

    #[test]
    fn evaluate_hits_endpoints_exactly() {
        for segment in &DK_CURVE_SEGMENTS {
            assert_eq!(segment.evaluate(0.0), segment.p0, "t=0 must be p0");
            assert_eq!(segment.evaluate(1.0), segment.p3, "t=1 must be p3");
        }
    }

    #[test]
    fn boundaries_match_canonical_segment_list() {
        assert_eq!(segment_boundaries(), vec![0.15, 0.40, 0.70]);
    }
}
