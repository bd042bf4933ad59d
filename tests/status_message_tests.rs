use std::time::Duration;

use dk_chart::api::{ChartConfig, ChartState};
use dk_chart::core::NormalizedPoint;

fn seeded_state() -> ChartState {
    ChartState::with_config(ChartConfig::default().with_seed(21)).expect("valid config")
}

#[test]
fn adding_posts_a_message_naming_the_entry() {
    let mut state = seeded_state();
    assert!(state.pending_status_ticket().is_none());

    state.add_entry("Alice").expect("alice");
    let message = state.current_status_message().expect("status message");
    assert!(message.starts_with("Alice joined the chart."));

    let ticket = state.pending_status_ticket().expect("ticket");
    assert_eq!(ticket.clear_after, Duration::from_secs(2));
    assert_eq!(ticket.generation, 1);
}

#[test]
fn add_message_uses_the_trimmed_name_as_typed() {
    let mut state = seeded_state();
    let id = state.add_entry("  alice cooper ").expect("entry");
    let x = state.entry(id).expect("entry").position.x;

    let expected = format!(
        "alice cooper joined the chart. {}",
        dk_chart::core::status_message_for("alice cooper", x)
    );
    assert_eq!(state.current_status_message(), Some(expected.as_str()));
}

#[test]
fn stale_ticket_does_not_clear_a_newer_message() {
    let mut state = seeded_state();
    let id = state.add_entry("Alice").expect("alice");
    let first = state.pending_status_ticket().expect("first ticket");

    state.move_entry(id, NormalizedPoint::new(0.9, 0.75), 1.0);
    let second = state.pending_status_ticket().expect("second ticket");
    assert!(second.generation > first.generation);

    assert!(!state.expire_status(first));
    assert!(state.current_status_message().is_some());

    assert!(state.expire_status(second));
    assert!(state.current_status_message().is_none());
    assert!(state.pending_status_ticket().is_none());
}

#[test]
fn move_message_reflects_the_new_zone() {
    let mut state = seeded_state();
    let id = state.add_entry("Grace").expect("grace");
    state.move_entry(id, NormalizedPoint::new(1.0, 0.75), 1.0);
    assert_eq!(
        state.current_status_message(),
        Some("Grace has reached the plateau. Respect.")
    );
}

#[test]
fn remove_and_randomize_keep_the_current_message() {
    let mut state = seeded_state();
    let a = state.add_entry("Ann").expect("ann");
    state.add_entry("Ben").expect("ben");
    let ticket = state.pending_status_ticket().expect("ticket");

    state.remove_entry(a);
    state.randomize_all();
    assert_eq!(state.pending_status_ticket(), Some(ticket));
}

#[test]
fn configured_delay_is_carried_by_tickets() {
    let config = ChartConfig {
        status_clear_delay_ms: 750,
        seed: Some(1),
        ..ChartConfig::default()
    };
    let mut state = ChartState::with_config(config).expect("state");
    state.add_entry("Quick").expect("entry");
    let ticket = state.pending_status_ticket().expect("ticket");
    assert_eq!(ticket.clear_after, Duration::from_millis(750));
}
