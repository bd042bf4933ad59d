pub mod bezier;
pub mod curve_sampler;
pub mod tag_layout;
pub mod types;
pub mod zones;

pub use bezier::{CubicSegment, DK_CURVE_SEGMENTS, segment_boundaries};
pub use curve_sampler::{
    CurveSampler, DEFAULT_SAMPLES_PER_SEGMENT, MAX_SAMPLES_PER_SEGMENT, SampleTable,
};
pub use tag_layout::{
    LayoutInput, MAX_LABEL_CHARS, MAX_NEIGHBOR_WINDOW, MAX_PUSH_ATTEMPTS, TagLayoutConfig,
    TagLayoutEngine, TagRect,
};
pub use types::{NormalizedPoint, Viewport};
pub use zones::{ZONE_BANDS, ZONE_THRESHOLDS, Zone, ZoneBand, band_for, status_message_for, zone_for};
