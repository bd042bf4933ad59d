use chrono::NaiveDate;

use crate::core::{DK_CURVE_SEGMENTS, Viewport, Zone};
use crate::error::ChartResult;
use crate::interaction::ChartGeometry;
use crate::render::{
    Color, LinePrimitive, LineStrokeStyle, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};
use crate::theme::{ChartTheme, ThemeOverlay};

use super::{ChartState, Entry};

const GRID_COLUMNS: usize = 10;
const GRID_ROWS: usize = 8;
const CURVE_STEPS_PER_SEGMENT: usize = 24;
const MARKER_DOT_SIZE_PX: f64 = 10.0;
const LEADER_LINE_MIN_OFFSET: f64 = 0.01;
const SCANLINE_SPACING_PX: f64 = 3.0;

pub const X_AXIS_LABEL: &str = "EXPERIENCE / KNOWLEDGE -->";
pub const Y_AXIS_LABEL: &str = "CONFIDENCE -->";

/// What to draw besides the chart body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameOptions {
    /// Static export: fixed font sizes plus title.
    pub export: bool,
    /// Date watermark in the bottom-right corner (export only).
    pub date: Option<NaiveDate>,
}

impl FrameOptions {
    #[must_use]
    pub fn interactive() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn export(date: Option<NaiveDate>) -> Self {
        Self { export: true, date }
    }
}

/// Builds the full scene for `entries` under `theme`.
///
/// Paint order: background, grid, curve (glow first), captions, overlay,
/// then per entry leader line, dot, tag box and tag text, and last the
/// export title and date.
pub fn build_chart_frame(
    entries: &[Entry],
    theme: &ChartTheme,
    geometry: &ChartGeometry,
    options: FrameOptions,
) -> ChartResult<RenderFrame> {
    let mut frame = RenderFrame::new(geometry.viewport);
    let (width, height) = viewport_size(geometry.viewport);

    frame.push(
        RectPrimitive::new(0.0, 0.0, width, height, theme.background_color)
            .with_border(theme.border_width, theme.border_color)
            .with_corner_radius(corner_radius(theme)),
    );

    push_grid(&mut frame, theme, geometry);
    push_curve(&mut frame, theme, geometry);
    push_captions(&mut frame, theme, geometry, options);

    // The overlay tints the chart body but stays under the markers.
    if theme.overlay == ThemeOverlay::CrtScanlines {
        push_scanlines(&mut frame, width, height);
    }

    for entry in entries {
        push_marker(&mut frame, entry, theme, geometry);
    }

    if options.export {
        frame.push(TextPrimitive::new(
            theme.export_title_text,
            width / 2.0,
            16.0,
            13.0,
            theme.title_color,
            TextHAlign::Center,
        ));
        if let Some(date) = options.date {
            frame.push(TextPrimitive::new(
                date.format("%b %-d, %Y").to_string(),
                width - 60.0,
                height - 10.0,
                9.0,
                theme.axis_label_color.with_opacity(0.5),
                TextHAlign::Center,
            ));
        }
    }

    frame.validate()?;
    Ok(frame)
}

/// Tag center in pixels, x clamped so the estimated tag stays inside the
/// drawable area.
#[must_use]
pub fn tag_pixel_position(entry: &Entry, theme: &ChartTheme, geometry: &ChartGeometry) -> (f64, f64) {
    let (snap_x, snap_y) = geometry.to_pixel(entry.position);
    let (_, drawable_height) = geometry.drawable_size();
    let half_width = theme.estimated_tag_half_width(display_len(entry));
    let min_x = geometry.padding_px + half_width;
    let max_x = f64::from(geometry.viewport.width) - geometry.padding_px - half_width;
    let x = min_x.max(snap_x.min(max_x));
    (x, snap_y - entry.tag_offset * drawable_height)
}

fn display_len(entry: &Entry) -> usize {
    entry.display_name().chars().count()
}

fn viewport_size(viewport: Viewport) -> (f64, f64) {
    (f64::from(viewport.width), f64::from(viewport.height))
}

fn corner_radius(theme: &ChartTheme) -> f64 {
    if theme.square_borders { 0.0 } else { 4.0 }
}

fn push_grid(frame: &mut RenderFrame, theme: &ChartTheme, geometry: &ChartGeometry) {
    let pad = geometry.padding_px;
    let (width, height) = geometry.drawable_size();
    for column in 1..GRID_COLUMNS {
        let x = pad + width * column as f64 / GRID_COLUMNS as f64;
        frame.push(LinePrimitive::new(
            x,
            pad,
            x,
            pad + height,
            0.5,
            theme.grid_line_color,
        ));
    }
    for row in 1..GRID_ROWS {
        let y = pad + height * row as f64 / GRID_ROWS as f64;
        frame.push(LinePrimitive::new(
            pad,
            y,
            pad + width,
            y,
            0.5,
            theme.grid_line_color,
        ));
    }
}

fn push_curve(frame: &mut RenderFrame, theme: &ChartTheme, geometry: &ChartGeometry) {
    let mut points = Vec::with_capacity(DK_CURVE_SEGMENTS.len() * CURVE_STEPS_PER_SEGMENT + 1);
    for (index, segment) in DK_CURVE_SEGMENTS.iter().enumerate() {
        let first_step = usize::from(index > 0);
        for step in first_step..=CURVE_STEPS_PER_SEGMENT {
            let t = step as f64 / CURVE_STEPS_PER_SEGMENT as f64;
            points.push(geometry.to_pixel(segment.evaluate(t)));
        }
    }

    let mut passes = Vec::with_capacity(2);
    if let Some(glow) = theme.curve_glow_color {
        passes.push((theme.curve_glow_width, glow));
    }
    passes.push((theme.curve_line_width, theme.curve_color));

    for (stroke_width, color) in passes {
        for pair in points.windows(2) {
            let ((x1, y1), (x2, y2)) = (pair[0], pair[1]);
            frame.push(LinePrimitive::new(x1, y1, x2, y2, stroke_width, color));
        }
    }
}

fn push_captions(
    frame: &mut RenderFrame,
    theme: &ChartTheme,
    geometry: &ChartGeometry,
    options: FrameOptions,
) {
    let pad = geometry.padding_px;
    let (drawable_width, drawable_height) = geometry.drawable_size();
    let (width, height) = viewport_size(geometry.viewport);
    let (phase_size, axis_size) = if options.export {
        (13.0, 11.0)
    } else {
        responsive_font_sizes(width)
    };

    for zone in Zone::ALL {
        let (ax, ay) = zone.caption_anchor();
        frame.push(TextPrimitive::new(
            zone.caption(),
            pad + ax * drawable_width,
            pad + ay * drawable_height,
            phase_size,
            theme.phase_label_color,
            TextHAlign::Center,
        ));
    }

    frame.push(TextPrimitive::new(
        X_AXIS_LABEL,
        width / 2.0,
        height - 10.0,
        axis_size,
        theme.axis_label_color,
        TextHAlign::Center,
    ));
    let y_label_x = if options.export { 14.0 } else { 12.0 };
    frame.push(
        TextPrimitive::new(
            Y_AXIS_LABEL,
            y_label_x,
            height / 2.0,
            axis_size,
            theme.axis_label_color,
            TextHAlign::Center,
        )
        .rotated(90.0),
    );
}

/// `(phase label, axis label)` font sizes for a viewport width.
fn responsive_font_sizes(width: f64) -> (f64, f64) {
    if width < 400.0 {
        (9.0, 8.0)
    } else if width < 600.0 {
        (11.0, 10.0)
    } else {
        (13.0, 11.0)
    }
}

fn push_marker(frame: &mut RenderFrame, entry: &Entry, theme: &ChartTheme, geometry: &ChartGeometry) {
    let color = entry.color(theme);
    let (snap_x, snap_y) = geometry.to_pixel(entry.position);
    let (tag_x, tag_y) = tag_pixel_position(entry, theme, geometry);

    if entry.tag_offset.abs() > LEADER_LINE_MIN_OFFSET {
        frame.push(
            LinePrimitive::new(snap_x, snap_y, tag_x, tag_y, 1.5, color.with_opacity(0.6))
                .with_stroke_style(LineStrokeStyle::Dashed {
                    dash_px: 4.0,
                    gap_px: 3.0,
                }),
        );
    }

    let half_dot = MARKER_DOT_SIZE_PX / 2.0;
    frame.push(
        RectPrimitive::new(
            snap_x - half_dot,
            snap_y - half_dot,
            MARKER_DOT_SIZE_PX,
            MARKER_DOT_SIZE_PX,
            color,
        )
        .with_corner_radius(half_dot),
    );

    let label = entry.display_name();
    let (box_width, box_height) = theme.tag_box_size(label.chars().count());
    frame.push(
        RectPrimitive::new(
            tag_x - box_width / 2.0,
            tag_y - box_height / 2.0,
            box_width,
            box_height,
            theme.background_color.with_opacity(theme.tag_bg_opacity),
        )
        .with_border(theme.tag_border_width, color)
        .with_corner_radius(corner_radius(theme)),
    );
    frame.push(TextPrimitive::new(
        label,
        tag_x,
        tag_y,
        theme.tag_font_size_px(),
        color,
        TextHAlign::Center,
    ));
}

fn push_scanlines(frame: &mut RenderFrame, width: f64, height: f64) {
    let shade = Color::BLACK.with_opacity(0.15);
    let mut y = 0.0;
    while y < height {
        frame.push(RectPrimitive::new(0.0, y, width, 1.0, shade));
        y += SCANLINE_SPACING_PX;
    }
}

impl ChartState {
    /// Scene for the current entries and theme.
    pub fn build_frame(
        &self,
        geometry: &ChartGeometry,
        options: FrameOptions,
    ) -> ChartResult<RenderFrame> {
        build_chart_frame(&self.entries, &self.theme(), geometry, options)
    }

    /// Builds the static export scene for `viewport` and hands it to
    /// `renderer`.
    pub fn render_export<R: Renderer>(
        &self,
        renderer: &mut R,
        viewport: Viewport,
        date: Option<NaiveDate>,
    ) -> ChartResult<RenderFrame> {
        let geometry = ChartGeometry::export(viewport)?;
        let frame = self.build_frame(&geometry, FrameOptions::export(date))?;
        renderer.render(&frame)?;
        Ok(frame)
    }
}
