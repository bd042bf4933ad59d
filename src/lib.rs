//! dk-chart: the geometry and state behind an interactive Dunning-Kruger
//! chart.
//!
//! `core` samples the fixed Bézier curve and lays out name tags,
//! `api::ChartState` owns the plotted entries, and `render` turns a state
//! snapshot into backend-agnostic draw primitives.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;
pub mod theme;

pub use api::{ChartConfig, ChartState, Entry, EntryId};
pub use error::{ChartError, ChartResult};
