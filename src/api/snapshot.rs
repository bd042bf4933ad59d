use serde::{Deserialize, Serialize};

use crate::theme::ThemeId;

use super::{ChartState, Entry};

/// Serializable copy of everything the rendering layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub theme: ThemeId,
    pub entries: Vec<Entry>,
    pub status_message: Option<String>,
}

impl ChartState {
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot {
            theme: self.theme,
            entries: self.current_entries(),
            status_message: self.current_status_message().map(str::to_owned),
        }
    }
}
