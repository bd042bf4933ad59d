//! Pixel/normalized conversions for the drawable area and drag tracking.

use serde::{Deserialize, Serialize};

use crate::core::{NormalizedPoint, Viewport};
use crate::error::{ChartError, ChartResult};

pub const COMPACT_WIDTH_PX: u32 = 500;
pub const COMPACT_PADDING_PX: f64 = 28.0;
pub const REGULAR_PADDING_PX: f64 = 44.0;

/// Placement of the drawable area inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub viewport: Viewport,
    pub padding_px: f64,
}

impl ChartGeometry {
    pub fn new(viewport: Viewport, padding_px: f64) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !padding_px.is_finite() || padding_px < 0.0 {
            return Err(ChartError::InvalidData(
                "chart padding must be finite and >= 0".to_owned(),
            ));
        }
        Ok(Self {
            viewport,
            padding_px,
        })
    }

    /// Interactive layout: tighter padding on compact screens.
    pub fn for_viewport(viewport: Viewport) -> ChartResult<Self> {
        let padding = if viewport.width < COMPACT_WIDTH_PX {
            COMPACT_PADDING_PX
        } else {
            REGULAR_PADDING_PX
        };
        Self::new(viewport, padding)
    }

    /// Static export layout: always the regular padding.
    pub fn export(viewport: Viewport) -> ChartResult<Self> {
        Self::new(viewport, REGULAR_PADDING_PX)
    }

    /// Drawable `(width, height)`; never negative.
    #[must_use]
    pub fn drawable_size(&self) -> (f64, f64) {
        let width = (f64::from(self.viewport.width) - 2.0 * self.padding_px).max(0.0);
        let height = (f64::from(self.viewport.height) - 2.0 * self.padding_px).max(0.0);
        (width, height)
    }

    /// Drawable width over height; the height is floored at one pixel.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        let (width, height) = self.drawable_size();
        width / height.max(1.0)
    }

    /// Pixel position of a normalized point; y grows downwards on screen.
    #[must_use]
    pub fn to_pixel(&self, point: NormalizedPoint) -> (f64, f64) {
        let (width, height) = self.drawable_size();
        (
            self.padding_px + point.x * width,
            self.padding_px + (1.0 - point.y) * height,
        )
    }

    #[must_use]
    pub fn to_normalized(&self, px: f64, py: f64) -> NormalizedPoint {
        let (width, height) = self.drawable_size();
        NormalizedPoint::new(
            (px - self.padding_px) / width.max(1.0),
            1.0 - (py - self.padding_px) / height.max(1.0),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragPhase {
    Dragging,
    Finished,
}

/// Free drag of a marker starting from its snapped pixel position.
///
/// While dragging, the marker follows the pointer in both axes; on release
/// the end point is handed to the chart state to snap back onto the curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragSession {
    origin_px: (f64, f64),
    translation_px: (f64, f64),
    phase: DragPhase,
}

/// Where a finished drag wants to go, in the units `move_entry` expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragTarget {
    pub point: NormalizedPoint,
    pub aspect_ratio: f64,
}

impl DragSession {
    #[must_use]
    pub fn begin(geometry: &ChartGeometry, snapped: NormalizedPoint) -> Self {
        Self {
            origin_px: geometry.to_pixel(snapped),
            translation_px: (0.0, 0.0),
            phase: DragPhase::Dragging,
        }
    }

    /// Sets the total pointer translation since the drag began.
    pub fn update(&mut self, dx: f64, dy: f64) {
        if self.phase != DragPhase::Dragging || !dx.is_finite() || !dy.is_finite() {
            return;
        }
        self.translation_px = (dx, dy);
    }

    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    #[must_use]
    pub fn translation(&self) -> (f64, f64) {
        self.translation_px
    }

    /// Current on-screen position of the dragged marker.
    #[must_use]
    pub fn display_position(&self) -> (f64, f64) {
        (
            self.origin_px.0 + self.translation_px.0,
            self.origin_px.1 + self.translation_px.1,
        )
    }

    /// Ends the drag and resets the translation.
    pub fn finish(&mut self, geometry: &ChartGeometry) -> DragTarget {
        let (px, py) = self.display_position();
        self.translation_px = (0.0, 0.0);
        self.phase = DragPhase::Finished;
        DragTarget {
            point: geometry.to_normalized(px, py),
            aspect_ratio: geometry.aspect_ratio(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ChartGeometry;
    use crate::core::{NormalizedPoint, Viewport};

    #[test]
    fn pixel_round_trip_keeps_point() {
        let geometry = ChartGeometry::for_viewport(Viewport::new(800, 500)).expect("geometry");
        let point = NormalizedPoint::new(0.3, 0.7);
        let (px, py) = geometry.to_pixel(point);
        let back = geometry.to_normalized(px, py);
        assert!((back.x - point.x).abs() <= 1e-12);
        assert!((back.y - point.y).abs() <= 1e-12);
    }

    #[test]
    fn compact_viewport_uses_tight_padding() {
        let geometry = ChartGeometry::for_viewport(Viewport::new(420, 300)).expect("geometry");
        assert_eq!(geometry.padding_px, 28.0);
    }
}
