use std::sync::Arc;
use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use tracing::{debug, trace};

use crate::core::{
    CurveSampler, DEFAULT_SAMPLES_PER_SEGMENT, LayoutInput, NormalizedPoint, TagLayoutEngine,
    Zone, status_message_for, zone_for,
};
use crate::error::ChartResult;
use crate::extensions::{ChartContext, ChartEvent, ChartObserver};
use crate::interaction::{ChartGeometry, DragSession};
use crate::theme::{ChartTheme, ThemeId};

use super::{ChartConfig, Entry, EntryId, StatusBoard, StatusTicket};

/// Single owner of the plotted entries.
///
/// Every mutation snaps positions onto the curve, re-runs the tag layout
/// for all entries and notifies observers. Invalid input (blank names,
/// unknown ids) is ignored rather than reported.
pub struct ChartState {
    pub(super) config: ChartConfig,
    pub(super) sampler: Arc<CurveSampler>,
    pub(super) layout: TagLayoutEngine,
    pub(super) entries: Vec<Entry>,
    pub(super) next_color_index: usize,
    pub(super) rng: Pcg64,
    pub(super) status: StatusBoard,
    pub(super) theme: ThemeId,
    pub(super) observers: Vec<Box<dyn ChartObserver>>,
}

impl ChartState {
    /// Default configuration with an entropy-seeded RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::build(ChartConfig::default())
    }

    pub fn with_config(config: ChartConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: ChartConfig) -> Self {
        let sampler = if config.samples_per_segment == DEFAULT_SAMPLES_PER_SEGMENT {
            CurveSampler::shared()
        } else {
            Arc::new(CurveSampler::new(config.samples_per_segment))
        };
        let seed = config.seed.unwrap_or_else(rand::random);
        Self {
            config,
            sampler,
            layout: TagLayoutEngine::new(config.tag_layout),
            entries: Vec::new(),
            next_color_index: 0,
            rng: Pcg64::seed_from_u64(seed),
            status: StatusBoard::default(),
            theme: config.theme,
            observers: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> ChartConfig {
        self.config
    }

    #[must_use]
    pub fn sampler(&self) -> &CurveSampler {
        &self.sampler
    }

    /// Adds a named entry at a random x on the curve.
    ///
    /// Returns `None` without touching state when the trimmed name is empty.
    pub fn add_entry(&mut self, name: &str) -> Option<EntryId> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            trace!("ignoring add with blank name");
            return None;
        }

        let color_index = self.next_color_index;
        self.next_color_index += 1;

        let id = EntryId::from_random_bytes(self.rng.r#gen());
        let position = self.random_curve_point();
        self.entries.push(Entry {
            id,
            name: trimmed.to_owned(),
            color_index,
            position,
            tag_offset: 0.0,
        });
        debug!(%id, x = position.x, color_index, count = self.entries.len(), "add entry");

        self.relayout_all();
        self.emit_event(ChartEvent::EntryAdded { id, x: position.x });
        let message = format!(
            "{} joined the chart. {}",
            trimmed,
            status_message_for(trimmed, position.x)
        );
        self.post_status(message);
        Some(id)
    }

    /// Removes the entry with `id`. Returns `false` when it was not present.
    pub fn remove_entry(&mut self, id: EntryId) -> bool {
        let Some(index) = self.index_of(id) else {
            trace!(%id, "ignoring remove of unknown entry");
            return false;
        };
        self.entries.remove(index);
        debug!(%id, count = self.entries.len(), "remove entry");

        self.relayout_all();
        self.emit_event(ChartEvent::EntryRemoved { id });
        true
    }

    /// Moves the entry to the curve sample visually closest to `target`.
    ///
    /// `aspect_ratio` is the drawable width over height at the time of the
    /// move. Returns `false` when `id` is unknown.
    pub fn move_entry(&mut self, id: EntryId, target: NormalizedPoint, aspect_ratio: f64) -> bool {
        let Some(index) = self.index_of(id) else {
            trace!(%id, "ignoring move of unknown entry");
            return false;
        };
        let nearest = self.sampler.nearest_point(target, aspect_ratio);
        let position = self.sampler.snap(nearest);
        self.entries[index].position = position;
        debug!(%id, x = position.x, y = position.y, "move entry");

        self.relayout_all();
        self.emit_event(ChartEvent::EntryMoved { id, x: position.x });
        let message = status_message_for(&self.entries[index].name, position.x);
        self.post_status(message);
        true
    }

    /// Completes a marker drag and moves the entry to where it was dropped.
    pub fn finish_drag(
        &mut self,
        id: EntryId,
        geometry: &ChartGeometry,
        session: &mut DragSession,
    ) -> bool {
        let target = session.finish(geometry);
        self.move_entry(id, target.point, target.aspect_ratio)
    }

    /// Gives every entry a fresh random x on the curve.
    pub fn randomize_all(&mut self) {
        for index in 0..self.entries.len() {
            let position = self.random_curve_point();
            self.entries[index].position = position;
        }
        debug!(count = self.entries.len(), "randomize entries");

        self.relayout_all();
        self.emit_event(ChartEvent::Randomized {
            entries_len: self.entries.len(),
        });
    }

    /// Recomputes every tag offset from the current positions.
    ///
    /// Pure with respect to positions: calling it twice yields the same
    /// offsets.
    pub fn relayout_all(&mut self) {
        let inputs: Vec<LayoutInput> = self
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                LayoutInput::new(index, entry.position.x, entry.position.y, entry.name_len())
            })
            .collect();

        let offsets = self.layout.resolve(&inputs);
        for (entry, offset) in self.entries.iter_mut().zip(offsets) {
            entry.tag_offset = offset;
        }
        trace!(count = self.entries.len(), "relayout tags");
        self.emit_event(ChartEvent::LayoutResolved {
            entries_len: self.entries.len(),
        });
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Owned copy of the entries in insertion order.
    #[must_use]
    pub fn current_entries(&self) -> Vec<Entry> {
        self.entries.clone()
    }

    #[must_use]
    pub fn entry(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn zone_of(&self, id: EntryId) -> Option<Zone> {
        self.entry(id).map(|entry| zone_for(entry.position.x))
    }

    #[must_use]
    pub fn current_status_message(&self) -> Option<&str> {
        self.status.message()
    }

    /// Ticket for the message currently showing, if any.
    #[must_use]
    pub fn pending_status_ticket(&self) -> Option<StatusTicket> {
        self.status.message()?;
        Some(StatusTicket {
            generation: self.status.generation(),
            clear_after: self.status_clear_delay(),
        })
    }

    /// Timer callback: clears the message only if `ticket` is still current.
    pub fn expire_status(&mut self, ticket: StatusTicket) -> bool {
        let cleared = self.status.expire(ticket);
        if cleared {
            trace!(generation = ticket.generation, "status cleared");
            self.emit_event(ChartEvent::StatusCleared {
                generation: ticket.generation,
            });
        } else {
            trace!(
                generation = ticket.generation,
                current = self.status.generation(),
                "stale status ticket ignored"
            );
        }
        cleared
    }

    #[must_use]
    pub fn theme_id(&self) -> ThemeId {
        self.theme
    }

    #[must_use]
    pub fn theme(&self) -> ChartTheme {
        ChartTheme::for_id(self.theme)
    }

    pub fn set_theme(&mut self, theme: ThemeId) {
        if self.theme == theme {
            return;
        }
        self.theme = theme;
        debug!(?theme, "set theme");
        self.emit_event(ChartEvent::ThemeChanged { theme });
    }

    fn index_of(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    fn random_curve_point(&mut self) -> NormalizedPoint {
        let x = self
            .rng
            .gen_range(self.config.random_x_min..=self.config.random_x_max);
        self.sampler.snap(NormalizedPoint::new(x, 0.0))
    }

    fn status_clear_delay(&self) -> Duration {
        Duration::from_millis(self.config.status_clear_delay_ms)
    }

    fn post_status(&mut self, message: String) {
        let ticket = self.status.post(message, self.status_clear_delay());
        trace!(generation = ticket.generation, "status posted");
        self.emit_event(ChartEvent::StatusPosted { ticket });
    }

    pub(super) fn chart_context(&self) -> ChartContext {
        ChartContext {
            entries_len: self.entries.len(),
            theme: self.theme,
            has_status_message: self.status.message().is_some(),
            status_generation: self.status.generation(),
        }
    }

    pub(super) fn emit_event(&mut self, event: ChartEvent) {
        let context = self.chart_context();
        for observer in &mut self.observers {
            observer.on_event(event, context);
        }
    }
}

impl Default for ChartState {
    fn default() -> Self {
        Self::new()
    }
}
