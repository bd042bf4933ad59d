//! Hooks for rendering layers that want to follow chart changes.

pub mod observers;

pub use observers::{ChartContext, ChartEvent, ChartObserver};
