use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::NormalizedPoint;
use crate::render::Color;
use crate::theme::ChartTheme;

/// Characters shown on a name tag before truncation.
pub const MAX_DISPLAY_CHARS: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    #[must_use]
    pub fn from_random_bytes(bytes: [u8; 16]) -> Self {
        Self(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }

    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// One plotted person.
///
/// `position.y` always equals the curve height at `position.x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub name: String,
    pub color_index: usize,
    pub position: NormalizedPoint,
    /// Signed distance of the name tag from the curve; positive is above.
    pub tag_offset: f64,
}

impl Entry {
    #[must_use]
    pub fn name_len(&self) -> usize {
        self.name.chars().count()
    }

    /// Upper-cased name, cut to fit the tag with a trailing ellipsis.
    #[must_use]
    pub fn display_name(&self) -> String {
        let upper = self.name.to_uppercase();
        if upper.chars().count() <= MAX_DISPLAY_CHARS {
            return upper;
        }
        let mut truncated: String = upper.chars().take(MAX_DISPLAY_CHARS - 1).collect();
        truncated.push('\u{2026}');
        truncated
    }

    #[must_use]
    pub fn initials(&self) -> String {
        let parts: Vec<&str> = self.name.split_whitespace().collect();
        if parts.len() >= 2 {
            return parts[..2]
                .iter()
                .filter_map(|part| part.chars().next())
                .collect::<String>()
                .to_uppercase();
        }
        self.name.chars().take(2).collect::<String>().to_uppercase()
    }

    #[must_use]
    pub fn color(&self, theme: &ChartTheme) -> Color {
        theme.marker_color(self.color_index)
    }
}

#[cfg(test)]
mod tests {
    use super::{Entry, EntryId};
    use crate::core::NormalizedPoint;

    fn entry(name: &str) -> Entry {
        Entry {
            id: EntryId::from_random_bytes([7; 16]),
            name: name.to_owned(),
            color_index: 0,
            position: NormalizedPoint::new(0.5, 0.5),
            tag_offset: 0.0,
        }
    }

    #[test]
    fn display_name_truncates_long_names() {
        assert_eq!(entry("Ada").display_name(), "ADA");
        assert_eq!(entry("Twelve Chars").display_name(), "TWELVE CHARS");
        assert_eq!(
            entry("Bartholomew Jones").display_name(),
            "BARTHOLOMEW\u{2026}"
        );
    }

    #[test]
    fn initials_prefer_first_two_words() {
        assert_eq!(entry("grace brewster hopper").initials(), "GB");
        assert_eq!(entry("linus").initials(), "LI");
        assert_eq!(entry("Q").initials(), "Q");
    }
}
