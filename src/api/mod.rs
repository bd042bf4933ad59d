mod chart_config;
mod chart_state;
mod entry;
mod export_frame_builder;
mod json_contract;
mod observer_registry;
mod snapshot;
mod status;

pub use chart_config::ChartConfig;
pub use chart_state::ChartState;
pub use entry::{Entry, EntryId, MAX_DISPLAY_CHARS};
pub use export_frame_builder::{
    FrameOptions, X_AXIS_LABEL, Y_AXIS_LABEL, build_chart_frame, tag_pixel_position,
};
pub use json_contract::{CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshotJsonContractV1};
pub use snapshot::ChartSnapshot;
pub use status::{StatusBoard, StatusTicket};
