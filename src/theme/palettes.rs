use crate::render::Color;

use super::{ChartTheme, TagFont, ThemeId, ThemeOverlay};

pub(super) fn zx_spectrum() -> ChartTheme {
    let green = Color::rgb(0.0, 1.0, 0.0);
    ChartTheme {
        id: ThemeId::ZxSpectrum,
        title_text: "DUNNING-KREUGERIZER-5000",
        export_title_text: "\u{26A1} DUNNING-KREUGERIZER-5000 \u{26A1}",
        background_color: Color::rgb(0.05, 0.05, 0.12),
        grid_line_color: Color::rgb(0.15, 0.15, 0.25),
        curve_color: green,
        curve_glow_color: Some(green.with_opacity(0.3)),
        title_color: Color::rgb(1.0, 1.0, 0.0),
        axis_label_color: Color::rgb(0.0, 0.8, 0.8),
        phase_label_color: Color::rgb(0.7, 0.7, 0.7),
        border_color: Color::rgb(0.0, 0.8, 0.8),
        marker_colors: [
            Color::rgb(1.0, 0.0, 0.0),
            Color::rgb(0.3, 0.5, 1.0),
            Color::rgb(1.0, 0.0, 1.0),
            Color::rgb(0.0, 1.0, 1.0),
            Color::rgb(1.0, 1.0, 0.0),
            Color::WHITE,
            green,
            Color::rgb(1.0, 0.5, 0.0),
        ],
        curve_line_width: 3.0,
        curve_glow_width: 8.0,
        tag_font: TagFont::Pixel { pixel_size: 3.0 },
        tag_glow_radius: 6.0,
        tag_border_width: 2.0,
        tag_bg_opacity: 0.92,
        square_borders: true,
        bracket_buttons: true,
        prompt_char: ">",
        border_width: 2.0,
        overlay: ThemeOverlay::CrtScanlines,
    }
}

pub(super) fn victorian() -> ChartTheme {
    ChartTheme {
        id: ThemeId::Victorian,
        title_text: "\u{2767} The Dunning-Kruger Effect \u{2766}",
        export_title_text: "\u{2726} The Dunning-Kruger Effect \u{2726}",
        background_color: Color::rgb(0.92, 0.87, 0.76),
        grid_line_color: Color::rgb(0.72, 0.62, 0.48),
        curve_color: Color::rgb(0.35, 0.12, 0.08),
        curve_glow_color: None,
        title_color: Color::rgb(0.55, 0.38, 0.08),
        axis_label_color: Color::rgb(0.45, 0.30, 0.12),
        phase_label_color: Color::rgb(0.42, 0.28, 0.14),
        border_color: Color::rgb(0.58, 0.42, 0.18),
        marker_colors: [
            Color::rgb(0.65, 0.10, 0.10),
            Color::rgb(0.10, 0.22, 0.55),
            Color::rgb(0.55, 0.15, 0.50),
            Color::rgb(0.08, 0.42, 0.30),
            Color::rgb(0.62, 0.48, 0.05),
            Color::rgb(0.55, 0.20, 0.08),
            Color::rgb(0.28, 0.15, 0.48),
            Color::rgb(0.10, 0.38, 0.45),
        ],
        curve_line_width: 3.0,
        curve_glow_width: 0.0,
        tag_font: TagFont::System { size_px: 10.0 },
        tag_glow_radius: 0.0,
        tag_border_width: 2.0,
        tag_bg_opacity: 0.90,
        square_borders: false,
        bracket_buttons: false,
        prompt_char: "\u{2767}",
        border_width: 2.5,
        overlay: ThemeOverlay::None,
    }
}

pub(super) fn chalkboard() -> ChartTheme {
    ChartTheme {
        id: ThemeId::Chalkboard,
        title_text: "The Dunning-Kruger Effect",
        export_title_text: "The Dunning-Kruger Effect",
        background_color: Color::rgb(0.14, 0.27, 0.17),
        grid_line_color: Color::WHITE.with_opacity(0.12),
        curve_color: Color::WHITE.with_opacity(0.88),
        curve_glow_color: None,
        title_color: Color::WHITE.with_opacity(0.92),
        axis_label_color: Color::rgb(0.95, 0.85, 0.50),
        phase_label_color: Color::WHITE.with_opacity(0.65),
        border_color: Color::WHITE.with_opacity(0.35),
        marker_colors: [
            Color::rgb(1.0, 0.85, 0.40),
            Color::rgb(0.55, 0.80, 1.0),
            Color::rgb(1.0, 0.60, 0.65),
            Color::WHITE,
            Color::rgb(0.70, 1.0, 0.65),
            Color::rgb(1.0, 0.75, 0.50),
            Color::rgb(0.80, 0.65, 1.0),
            Color::rgb(0.60, 0.95, 0.90),
        ],
        curve_line_width: 3.5,
        curve_glow_width: 0.0,
        tag_font: TagFont::System { size_px: 10.0 },
        tag_glow_radius: 0.0,
        tag_border_width: 1.5,
        tag_bg_opacity: 0.85,
        square_borders: false,
        bracket_buttons: false,
        prompt_char: "\u{270E}",
        border_width: 2.0,
        overlay: ThemeOverlay::None,
    }
}

pub(super) fn corporate() -> ChartTheme {
    let blue = Color::rgb(0.20, 0.40, 0.75);
    ChartTheme {
        id: ThemeId::Corporate,
        title_text: "Competency Assessment Matrix",
        export_title_text: "Competency Assessment Matrix",
        background_color: Color::rgb(0.97, 0.97, 0.98),
        grid_line_color: Color::rgb(0.88, 0.88, 0.90),
        curve_color: blue,
        curve_glow_color: None,
        title_color: Color::rgb(0.20, 0.20, 0.28),
        axis_label_color: Color::rgb(0.45, 0.45, 0.52),
        phase_label_color: Color::rgb(0.55, 0.55, 0.62),
        border_color: Color::rgb(0.80, 0.80, 0.84),
        marker_colors: [
            blue,
            Color::rgb(0.90, 0.35, 0.25),
            Color::rgb(0.20, 0.65, 0.35),
            Color::rgb(0.95, 0.65, 0.10),
            Color::rgb(0.55, 0.30, 0.70),
            Color::rgb(0.15, 0.55, 0.55),
            Color::rgb(0.85, 0.45, 0.15),
            Color::rgb(0.50, 0.50, 0.55),
        ],
        curve_line_width: 2.5,
        curve_glow_width: 0.0,
        tag_font: TagFont::System { size_px: 10.0 },
        tag_glow_radius: 0.0,
        tag_border_width: 1.0,
        tag_bg_opacity: 0.95,
        square_borders: false,
        bracket_buttons: false,
        prompt_char: "\u{2022}",
        border_width: 1.0,
        overlay: ThemeOverlay::None,
    }
}
