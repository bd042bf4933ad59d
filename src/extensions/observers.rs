use serde::{Deserialize, Serialize};

use crate::api::{EntryId, StatusTicket};
use crate::theme::ThemeId;

/// Read-only state summary passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartContext {
    pub entries_len: usize,
    pub theme: ThemeId,
    pub has_status_message: bool,
    pub status_generation: u64,
}

/// Change notifications emitted by `ChartState` after each mutation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ChartEvent {
    EntryAdded { id: EntryId, x: f64 },
    EntryRemoved { id: EntryId },
    EntryMoved { id: EntryId, x: f64 },
    Randomized { entries_len: usize },
    LayoutResolved { entries_len: usize },
    /// A new status message is showing; arm a timer for `ticket`.
    StatusPosted { ticket: StatusTicket },
    StatusCleared { generation: u64 },
    ThemeChanged { theme: ThemeId },
}

/// Rendering-side subscriber.
///
/// Observers see every change after it is applied and cannot mutate the
/// chart from inside the hook.
pub trait ChartObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: ChartEvent, context: ChartContext);
}
