use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

pub const MAX_PUSH_ATTEMPTS: usize = 64;
pub const MAX_NEIGHBOR_WINDOW: usize = 256;
pub const MAX_LABEL_CHARS: usize = 256;

/// Tunables for label box estimation and overlap resolution, in normalized
/// chart units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagLayoutConfig {
    pub char_width: f64,
    pub label_padding: f64,
    pub half_height: f64,
    pub base_offset: f64,
    pub push_step: f64,
    pub max_push_attempts: usize,
    /// How many previous entries (in x order) each entry is checked against.
    pub neighbor_window: usize,
    /// Names longer than this are truncated on display, so the box stops
    /// growing here.
    pub max_label_chars: usize,
}

impl Default for TagLayoutConfig {
    fn default() -> Self {
        Self {
            char_width: 0.009,
            label_padding: 0.01,
            half_height: 0.03,
            base_offset: 0.10,
            push_step: 0.05,
            max_push_attempts: 5,
            neighbor_window: 3,
            max_label_chars: 12,
        }
    }
}

impl TagLayoutConfig {
    pub fn validate(self) -> ChartResult<Self> {
        for (value, name) in [
            (self.char_width, "char_width"),
            (self.label_padding, "label_padding"),
            (self.half_height, "half_height"),
            (self.base_offset, "base_offset"),
            (self.push_step, "push_step"),
        ] {
            if !value.is_finite() || value <= 0.0 || value > 1.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "tag layout `{name}` must be in (0, 1]"
                )));
            }
        }
        for (value, max, name) in [
            (self.max_push_attempts, MAX_PUSH_ATTEMPTS, "max_push_attempts"),
            (self.neighbor_window, MAX_NEIGHBOR_WINDOW, "neighbor_window"),
            (self.max_label_chars, MAX_LABEL_CHARS, "max_label_chars"),
        ] {
            if value > max {
                return Err(ChartError::InvalidConfig(format!(
                    "tag layout `{name}` must be <= {max}"
                )));
            }
        }
        if self.max_label_chars == 0 {
            return Err(ChartError::InvalidConfig(
                "tag layout `max_label_chars` must be > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    pub fn half_width(self, name_len: usize) -> f64 {
        let capped = name_len.min(self.max_label_chars);
        capped as f64 * self.char_width / 2.0 + self.label_padding
    }
}

/// One label that wants to sit next to the curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutInput {
    pub index: usize,
    pub x: f64,
    pub curve_y: f64,
    pub name_len: usize,
}

impl LayoutInput {
    #[must_use]
    pub fn new(index: usize, x: f64, curve_y: f64, name_len: usize) -> Self {
        Self {
            index,
            x,
            curve_y,
            name_len,
        }
    }
}

/// Axis-aligned label box in normalized space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TagRect {
    pub x: f64,
    pub curve_y: f64,
    pub half_width: f64,
    pub half_height: f64,
    /// Positive places the box above the curve, negative below.
    pub offset: f64,
}

impl TagRect {
    #[must_use]
    pub fn for_input(input: LayoutInput, offset: f64, config: TagLayoutConfig) -> Self {
        Self {
            x: input.x,
            curve_y: input.curve_y,
            half_width: config.half_width(input.name_len),
            half_height: config.half_height,
            offset,
        }
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.x - self.half_width
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.x + self.half_width
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.curve_y + self.offset
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.center_y() - self.half_height
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.center_y() + self.half_height
    }

    /// Strict on both axes: boxes that only touch do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.max_x() > other.min_x()
            && other.max_x() > self.min_x()
            && self.max_y() > other.min_y()
            && other.max_y() > self.min_y()
    }
}

/// Greedy left-to-right label placer.
///
/// Labels are visited in x order. Each one takes the first offset from a
/// fixed candidate list that clears the previous `neighbor_window` labels:
/// `+base`, `-base`, then `-(base + k * push_step)` and finally
/// `+(base + k * push_step)` for `k` up to `max_push_attempts`. The side of
/// the colliding neighbor is not consulted, so a label above the curve that
/// hits a neighbor below still tries below before being pushed upwards.
/// When no candidate is free the last one is kept. Labels further apart in
/// x order are never compared, so large crowded inputs may keep overlaps.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TagLayoutEngine {
    config: TagLayoutConfig,
}

impl TagLayoutEngine {
    #[must_use]
    pub fn new(config: TagLayoutConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> TagLayoutConfig {
        self.config
    }

    /// Returns one offset per input, aligned with the input order.
    #[must_use]
    pub fn resolve(&self, inputs: &[LayoutInput]) -> Vec<f64> {
        self.resolve_rects(inputs)
            .into_iter()
            .map(|rect| rect.offset)
            .collect()
    }

    /// Same as [`Self::resolve`] but returns the resolved boxes.
    #[must_use]
    pub fn resolve_rects(&self, inputs: &[LayoutInput]) -> Vec<TagRect> {
        if inputs.is_empty() {
            return Vec::new();
        }

        let config = self.config;
        let mut order: Vec<usize> = (0..inputs.len()).collect();
        order.sort_by_key(|&position| OrderedFloat(inputs[position].x));

        let candidates = candidate_offsets(config);
        let mut placed: Vec<TagRect> = Vec::with_capacity(inputs.len());
        for &position in &order {
            let input = inputs[position];
            let window_start = placed.len().saturating_sub(config.neighbor_window);
            let neighbors = &placed[window_start..];

            let mut rect = TagRect::for_input(input, config.base_offset, config);
            for &offset in &candidates {
                rect.offset = offset;
                if !neighbors.iter().any(|neighbor| neighbor.overlaps(&rect)) {
                    break;
                }
            }
            placed.push(rect);
        }

        let mut resolved = vec![placed[0]; inputs.len()];
        for (rect, &position) in placed.into_iter().zip(order.iter()) {
            resolved[position] = rect;
        }
        resolved
    }
}

/// Offsets tried in order: default above, flipped below, pushed further
/// below, then pushed further above. The last candidate is kept when none
/// is free.
fn candidate_offsets(config: TagLayoutConfig) -> Vec<f64> {
    let base = config.base_offset;
    let attempts = config.max_push_attempts.min(MAX_PUSH_ATTEMPTS);
    let mut candidates = Vec::with_capacity(2 + 2 * attempts);
    candidates.push(base);
    candidates.push(-base);
    for attempt in 1..=attempts {
        candidates.push(-(base + attempt as f64 * config.push_step));
    }
    for attempt in 1..=attempts {
        candidates.push(base + attempt as f64 * config.push_step);
    }
    candidates
}
