use contact_form::ui::alert::{AlertIntent, AlertKind, AlertReducer, AlertState};
use contact_form::ui::mvi::Reducer;

fn visible(text: &str, generation: u64) -> AlertState {
    AlertState::Visible {
        kind: AlertKind::Error,
        text: text.to_string(),
        generation,
    }
}

#[test]
fn show_makes_alert_visible() {
    let state = AlertReducer::reduce(
        AlertState::Hidden,
        AlertIntent::Show {
            kind: AlertKind::Success,
            text: "done".to_string(),
            generation: 1,
        },
    );
    assert!(state.is_visible());
    assert_eq!(state.text(), Some("done"));
    assert_eq!(state.kind(), Some(AlertKind::Success));
}

#[test]
fn show_replaces_prior_alert() {
    let state = AlertReducer::reduce(
        visible("A", 1),
        AlertIntent::Show {
            kind: AlertKind::Success,
            text: "B".to_string(),
            generation: 2,
        },
    );
    assert_eq!(state.text(), Some("B"));
}

#[test]
fn hide_is_idempotent() {
    let state = AlertReducer::reduce(visible("A", 1), AlertIntent::Hide);
    assert!(!state.is_visible());
    let state = AlertReducer::reduce(state, AlertIntent::Hide);
    assert!(!state.is_visible());
}

#[test]
fn expire_hides_matching_generation() {
    let state = AlertReducer::reduce(visible("A", 3), AlertIntent::Expire { generation: 3 });
    assert!(!state.is_visible());
}

#[test]
fn stale_expire_leaves_newer_alert_visible() {
    let state = AlertReducer::reduce(visible("B", 2), AlertIntent::Expire { generation: 1 });
    assert!(state.is_visible());
    assert_eq!(state.text(), Some("B"));
}

#[test]
fn expire_on_hidden_is_a_no_op() {
    let state = AlertReducer::reduce(AlertState::Hidden, AlertIntent::Expire { generation: 7 });
    assert!(!state.is_visible());
}
