use std::sync::{Arc, OnceLock};

use ordered_float::OrderedFloat;

use crate::core::bezier::{CubicSegment, DK_CURVE_SEGMENTS};
use crate::core::NormalizedPoint;

pub const DEFAULT_SAMPLES_PER_SEGMENT: usize = 50;
pub const MAX_SAMPLES_PER_SEGMENT: usize = 10_000;

const DEGENERATE_BRACKET_EPSILON: f64 = 1e-9;

/// Precomputed `(x, y)` samples of the curve, sorted by `x`.
///
/// Built once from the segment list and never mutated afterwards, so one
/// table can be shared by reference between any number of readers.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleTable {
    samples: Vec<NormalizedPoint>,
}

impl SampleTable {
    /// Evaluates each segment at `samples_per_segment + 1` evenly spaced
    /// parameters. Segment end points appear twice; the stable sort keeps
    /// them adjacent. The density is clamped to
    /// `1..=MAX_SAMPLES_PER_SEGMENT`.
    #[must_use]
    pub fn build(segments: &[CubicSegment], samples_per_segment: usize) -> Self {
        let count = samples_per_segment.clamp(1, MAX_SAMPLES_PER_SEGMENT);
        let mut samples = Vec::with_capacity(segments.len() * (count + 1));
        for segment in segments {
            for step in 0..=count {
                let t = step as f64 / count as f64;
                samples.push(segment.evaluate(t));
            }
        }
        samples.sort_by_key(|sample| OrderedFloat(sample.x));
        Self { samples }
    }

    #[must_use]
    pub fn samples(&self) -> &[NormalizedPoint] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Indices `(lo, hi)` of the samples bracketing `x`, with `hi - lo <= 1`.
    #[must_use]
    pub fn bracket(&self, x: f64) -> (usize, usize) {
        let mut lo = 0;
        let mut hi = self.samples.len().saturating_sub(1);
        while hi - lo > 1 {
            let mid = (lo + hi) / 2;
            if self.samples[mid].x <= x {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        (lo, hi)
    }
}

/// Answers height and nearest-point queries against the fixed curve.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSampler {
    table: SampleTable,
}

impl CurveSampler {
    #[must_use]
    pub fn new(samples_per_segment: usize) -> Self {
        Self::from_segments(&DK_CURVE_SEGMENTS, samples_per_segment)
    }

    #[must_use]
    pub fn from_segments(segments: &[CubicSegment], samples_per_segment: usize) -> Self {
        Self {
            table: SampleTable::build(segments, samples_per_segment),
        }
    }

    /// Process-wide sampler over the canonical curve at default density.
    #[must_use]
    pub fn shared() -> Arc<Self> {
        static SHARED: OnceLock<Arc<CurveSampler>> = OnceLock::new();
        Arc::clone(SHARED.get_or_init(|| Arc::new(Self::new(DEFAULT_SAMPLES_PER_SEGMENT))))
    }

    #[must_use]
    pub fn table(&self) -> &SampleTable {
        &self.table
    }

    /// Curve height at `x`, linearly interpolated between the bracketing
    /// samples. `x` is clamped to `0..=1` first.
    #[must_use]
    pub fn curve_height(&self, x: f64) -> f64 {
        let samples = self.table.samples();
        let Some(first) = samples.first() else {
            return 0.0;
        };
        let x = clamp_unit(x);
        let (lo, hi) = self.table.bracket(x);
        let a = samples[lo];
        let b = samples[hi];
        if lo == hi {
            return first.y;
        }

        if (b.x - a.x).abs() < DEGENERATE_BRACKET_EPSILON {
            return a.y;
        }

        let frac = (x - a.x) / (b.x - a.x);
        a.y + frac * (b.y - a.y)
    }

    /// Keeps the (clamped) x and replaces y with the curve height there.
    #[must_use]
    pub fn snap(&self, point: NormalizedPoint) -> NormalizedPoint {
        let x = clamp_unit(point.x);
        NormalizedPoint::new(x, self.curve_height(x))
    }

    /// Table sample closest to `target` in visual distance.
    ///
    /// `aspect_ratio` is drawable width over height; the x distance is
    /// scaled by it so that the comparison matches on-screen distance.
    /// The curve is not monotonic under this metric, so the whole table is
    /// scanned. Ties keep the earliest sample.
    #[must_use]
    pub fn nearest_point(&self, target: NormalizedPoint, aspect_ratio: f64) -> NormalizedPoint {
        let aspect = if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
            aspect_ratio
        } else {
            1.0
        };
        let tx = finite_or(target.x, 0.5);
        let ty = finite_or(target.y, 0.5);

        self.table
            .samples()
            .iter()
            .copied()
            .min_by_key(|sample| {
                let dx = (sample.x - tx) * aspect;
                let dy = sample.y - ty;
                OrderedFloat(dx * dx + dy * dy)
            })
            .unwrap_or_else(|| NormalizedPoint::new(clamp_unit(tx), 0.0))
    }
}

impl Default for CurveSampler {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLES_PER_SEGMENT)
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}

#[cfg(test)]
mod tests {
    use super::{CurveSampler, SampleTable};
    use crate::core::bezier::DK_CURVE_SEGMENTS;

    #[test]
    fn table_has_boundary_duplicates() {
        let table = SampleTable::build(&DK_CURVE_SEGMENTS, 50);
        assert_eq!(table.len(), 204);
    }

    #[test]
    fn oversized_density_is_clamped() {
        let table = SampleTable::build(&DK_CURVE_SEGMENTS[..1], usize::MAX);
        assert_eq!(table.len(), super::MAX_SAMPLES_PER_SEGMENT + 1);
    }

    #[test]
    fn bracket_narrows_to_adjacent_pair() {
        let sampler = CurveSampler::default();
        for x in [0.0, 0.07, 0.15, 0.33, 0.4, 0.55, 0.7, 0.99, 1.0] {
            let (lo, hi) = sampler.table().bracket(x);
            assert_eq!(hi - lo, 1, "bracket for {x} must be adjacent");
        }
    }

    #[test]
    fn nan_input_is_clamped_to_origin() {
        let sampler = CurveSampler::default();
        assert_eq!(sampler.curve_height(f64::NAN), sampler.curve_height(0.0));
    }
}
