use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_SAMPLES_PER_SEGMENT, MAX_SAMPLES_PER_SEGMENT, TagLayoutConfig};
use crate::error::{ChartError, ChartResult};
use crate::theme::ThemeId;

/// Chart bootstrap configuration.
///
/// Every field has a default, so a partial JSON document is enough.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub samples_per_segment: usize,
    pub random_x_min: f64,
    pub random_x_max: f64,
    pub status_clear_delay_ms: u64,
    pub theme: ThemeId,
    /// Fixed RNG seed for reproducible placement and ids.
    pub seed: Option<u64>,
    pub tag_layout: TagLayoutConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            samples_per_segment: DEFAULT_SAMPLES_PER_SEGMENT,
            random_x_min: 0.1,
            random_x_max: 0.9,
            status_clear_delay_ms: 2_000,
            theme: ThemeId::default(),
            seed: None,
            tag_layout: TagLayoutConfig::default(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: ThemeId) -> Self {
        self.theme = theme;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if self.samples_per_segment == 0 || self.samples_per_segment > MAX_SAMPLES_PER_SEGMENT {
            return Err(ChartError::InvalidConfig(format!(
                "`samples_per_segment` must be in 1..={MAX_SAMPLES_PER_SEGMENT}"
            )));
        }
        if !self.random_x_min.is_finite()
            || !self.random_x_max.is_finite()
            || self.random_x_min < 0.0
            || self.random_x_max > 1.0
            || self.random_x_min > self.random_x_max
        {
            return Err(ChartError::InvalidConfig(
                "random x range must be finite, ordered and inside [0, 1]".to_owned(),
            ));
        }
        if self.status_clear_delay_ms == 0 {
            return Err(ChartError::InvalidConfig(
                "`status_clear_delay_ms` must be > 0".to_owned(),
            ));
        }
        self.tag_layout.validate()?;
        Ok(self)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::Serialization(format!("failed to parse chart config: {e}")))?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::Serialization(format!("failed to serialize chart config: {e}")))
    }
}
