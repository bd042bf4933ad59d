use std::cell::RefCell;
use std::rc::Rc;

use dk_chart::ChartError;
use dk_chart::api::{ChartConfig, ChartState};
use dk_chart::core::NormalizedPoint;
use dk_chart::extensions::{ChartContext, ChartEvent, ChartObserver};
use dk_chart::theme::ThemeId;

#[derive(Clone)]
struct RecordingObserver {
    id: String,
    events: Rc<RefCell<Vec<(ChartEvent, ChartContext)>>>,
}

impl RecordingObserver {
    fn new(id: impl Into<String>, events: Rc<RefCell<Vec<(ChartEvent, ChartContext)>>>) -> Self {
        Self {
            id: id.into(),
            events,
        }
    }
}

impl ChartObserver for RecordingObserver {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: ChartEvent, context: ChartContext) {
        self.events.borrow_mut().push((event, context));
    }
}

fn event_kind(event: &ChartEvent) -> &'static str {
    match event {
        ChartEvent::EntryAdded { .. } => "added",
        ChartEvent::EntryRemoved { .. } => "removed",
        ChartEvent::EntryMoved { .. } => "moved",
        ChartEvent::Randomized { .. } => "randomized",
        ChartEvent::LayoutResolved { .. } => "layout",
        ChartEvent::StatusPosted { .. } => "status",
        ChartEvent::StatusCleared { .. } => "cleared",
        ChartEvent::ThemeChanged { .. } => "theme",
    }
}

fn state() -> ChartState {
    ChartState::with_config(ChartConfig::default().with_seed(5)).expect("state")
}

#[test]
fn observers_see_every_mutation_in_order() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut state = state();
    state
        .register_observer(Box::new(RecordingObserver::new("rec", Rc::clone(&events))))
        .expect("register");

    let id = state.add_entry("Alice").expect("alice");
    state.move_entry(id, NormalizedPoint::new(0.5, 0.5), 1.0);
    state.randomize_all();
    state.remove_entry(id);

    let kinds: Vec<&str> = events.borrow().iter().map(|(e, _)| event_kind(e)).collect();
    assert_eq!(
        kinds,
        vec![
            "layout", "added", "status", "layout", "moved", "status", "layout", "randomized",
            "layout", "removed",
        ]
    );

    let (last, context) = events.borrow().last().copied().expect("event");
    assert_eq!(last, ChartEvent::EntryRemoved { id });
    assert_eq!(context.entries_len, 0);
}

#[test]
fn status_posted_event_carries_the_live_ticket() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut state = state();
    state
        .register_observer(Box::new(RecordingObserver::new("rec", Rc::clone(&events))))
        .expect("register");

    state.add_entry("Alice").expect("alice");
    let ticket = events
        .borrow()
        .iter()
        .find_map(|(event, _)| match event {
            ChartEvent::StatusPosted { ticket } => Some(*ticket),
            _ => None,
        })
        .expect("status event");
    assert_eq!(state.pending_status_ticket(), Some(ticket));

    assert!(state.expire_status(ticket));
    assert!(matches!(
        events.borrow().last(),
        Some((ChartEvent::StatusCleared { .. }, context)) if !context.has_status_message
    ));
}

#[test]
fn ignored_inputs_emit_nothing() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut state = state();
    state
        .register_observer(Box::new(RecordingObserver::new("rec", Rc::clone(&events))))
        .expect("register");

    assert!(state.add_entry("  ").is_none());
    state.set_theme(state.theme_id());
    assert!(events.borrow().is_empty());
}

#[test]
fn theme_change_is_announced() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut state = state();
    state
        .register_observer(Box::new(RecordingObserver::new("rec", Rc::clone(&events))))
        .expect("register");

    state.set_theme(ThemeId::Victorian);
    assert_eq!(state.theme_id(), ThemeId::Victorian);
    assert_eq!(
        events.borrow().last().map(|(event, _)| *event),
        Some(ChartEvent::ThemeChanged {
            theme: ThemeId::Victorian
        })
    );
}

#[test]
fn registry_rejects_duplicate_and_empty_ids() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut state = state();
    state
        .register_observer(Box::new(RecordingObserver::new("a", Rc::clone(&events))))
        .expect("first");

    let duplicate =
        state.register_observer(Box::new(RecordingObserver::new("a", Rc::clone(&events))));
    assert!(matches!(duplicate, Err(ChartError::DuplicateObserver(id)) if id == "a"));

    let empty = state.register_observer(Box::new(RecordingObserver::new("", Rc::clone(&events))));
    assert!(matches!(empty, Err(ChartError::InvalidData(_))));

    assert_eq!(state.observer_count(), 1);
    assert!(state.has_observer("a"));
    assert!(state.unregister_observer("a"));
    assert!(!state.unregister_observer("a"));
    assert_eq!(state.observer_count(), 0);
}
