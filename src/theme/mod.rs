//! Visual themes consumed by the scene builder.
//!
//! Themes are plain data keyed by [`ThemeId`]; nothing in the curve or
//! layout code depends on them.

mod palettes;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::render::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ThemeId {
    #[default]
    ZxSpectrum,
    Victorian,
    Chalkboard,
    Corporate,
}

impl ThemeId {
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::ZxSpectrum,
            Self::Victorian,
            Self::Chalkboard,
            Self::Corporate,
        ]
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ZxSpectrum => "8-BIT",
            Self::Victorian => "VICTORIAN",
            Self::Chalkboard => "CHALKBOARD",
            Self::Corporate => "CORPORATE",
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Self::ZxSpectrum => "\u{1F47E}",
            Self::Victorian => "\u{1F3DB}",
            Self::Chalkboard => "\u{1F34E}",
            Self::Corporate => "\u{1F4CA}",
        }
    }

    #[must_use]
    pub fn tagline(self) -> &'static str {
        match self {
            Self::ZxSpectrum => "Loading tape\u{2026}",
            Self::Victorian => "Ye olde chart",
            Self::Chalkboard => "Class is in session",
            Self::Corporate => "Per my last email",
        }
    }

    #[must_use]
    pub fn display_name(self) -> String {
        format!("{} {}", self.emoji(), self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeOverlay {
    None,
    CrtScanlines,
}

/// How name tags are lettered; drives the tag width estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TagFont {
    /// 3x5 glyphs with a 1px gap, scaled by `pixel_size`.
    Pixel { pixel_size: f64 },
    System { size_px: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartTheme {
    pub id: ThemeId,
    pub title_text: &'static str,
    pub export_title_text: &'static str,

    pub background_color: Color,
    pub grid_line_color: Color,
    pub curve_color: Color,
    /// `None` disables the glow pass under the curve.
    pub curve_glow_color: Option<Color>,
    pub title_color: Color,
    pub axis_label_color: Color,
    pub phase_label_color: Color,
    pub border_color: Color,
    pub marker_colors: [Color; 8],

    pub curve_line_width: f64,
    pub curve_glow_width: f64,

    pub tag_font: TagFont,
    pub tag_glow_radius: f64,
    pub tag_border_width: f64,
    pub tag_bg_opacity: f64,

    pub square_borders: bool,
    pub bracket_buttons: bool,
    pub prompt_char: &'static str,
    pub border_width: f64,
    pub overlay: ThemeOverlay,
}

impl ChartTheme {
    #[must_use]
    pub fn for_id(id: ThemeId) -> Self {
        match id {
            ThemeId::ZxSpectrum => palettes::zx_spectrum(),
            ThemeId::Victorian => palettes::victorian(),
            ThemeId::Chalkboard => palettes::chalkboard(),
            ThemeId::Corporate => palettes::corporate(),
        }
    }

    /// Palette color for a monotonically assigned color index.
    #[must_use]
    pub fn marker_color(&self, color_index: usize) -> Color {
        self.marker_colors[color_index % self.marker_colors.len()]
    }

    #[must_use]
    pub fn uses_pixel_font(&self) -> bool {
        matches!(self.tag_font, TagFont::Pixel { .. })
    }

    #[must_use]
    pub fn add_text(&self) -> &'static str {
        if self.bracket_buttons { "[ADD]" } else { "Add" }
    }

    #[must_use]
    pub fn share_text(&self) -> &'static str {
        if self.bracket_buttons { "[SHARE]" } else { "Share" }
    }

    #[must_use]
    pub fn remove_text(&self) -> &'static str {
        if self.bracket_buttons { "[X]" } else { "\u{00D7}" }
    }

    /// Estimated pixel half-width of a name tag with `display_len` visible
    /// characters, including stroke and glow bleed.
    #[must_use]
    pub fn estimated_tag_half_width(&self, display_len: usize) -> f64 {
        let len = display_len as f64;
        match self.tag_font {
            TagFont::Pixel { pixel_size } => {
                let frame_width = len * 4.0 * pixel_size + 8.0;
                frame_width / 2.0 + 12.0
            }
            TagFont::System { .. } => len * 6.5 / 2.0 + 14.0,
        }
    }

    /// Drawn tag box size in pixels, without the bleed margin.
    #[must_use]
    pub fn tag_box_size(&self, display_len: usize) -> (f64, f64) {
        let len = display_len as f64;
        match self.tag_font {
            TagFont::Pixel { pixel_size } => {
                let cols = (len * 4.0 - 1.0).max(1.0);
                (cols * pixel_size + 8.0, 5.0 * pixel_size + 6.0)
            }
            TagFont::System { size_px } => (len * 6.5 + 12.0, size_px + 6.0),
        }
    }

    #[must_use]
    pub fn tag_font_size_px(&self) -> f64 {
        match self.tag_font {
            TagFont::Pixel { pixel_size } => 5.0 * pixel_size,
            TagFont::System { size_px } => size_px,
        }
    }
}

/// The built-in themes, in picker order.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: IndexMap<ThemeId, ChartTheme>,
}

impl ThemeRegistry {
    #[must_use]
    pub fn builtin() -> Self {
        let themes = ThemeId::all()
            .into_iter()
            .map(|id| (id, ChartTheme::for_id(id)))
            .collect();
        Self { themes }
    }

    #[must_use]
    pub fn get(&self, id: ThemeId) -> Option<&ChartTheme> {
        self.themes.get(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = ThemeId> + '_ {
        self.themes.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
