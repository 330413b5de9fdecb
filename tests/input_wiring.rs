use contact_form::config::Config;
use contact_form::ui::app::App;
use contact_form::ui::form::FormFocus;
use contact_form::ui::input::handle_key;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn make_app() -> App {
    App::new(Config::default())
}

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_str(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

#[test]
fn typed_characters_land_in_the_focused_field() {
    let mut app = make_app();
    type_str(&mut app, "Ana");
    assert_eq!(app.form().name, "Ana");

    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "a@b");
    assert_eq!(app.form().email, "a@b");
}

#[test]
fn tab_and_backtab_move_focus() {
    let mut app = make_app();
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.form().focus, FormFocus::Email);
    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
    );
    assert_eq!(app.form().focus, FormFocus::Name);
}

#[test]
fn backspace_edits_the_focused_field() {
    let mut app = make_app();
    type_str(&mut app, "Jon");
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.form().name, "Jo");
}

#[test]
fn enter_submits_from_any_focus() {
    let mut app = make_app();
    type_str(&mut app, "Ana");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "ana@example.com");
    // Still focused on the email field, not the submit control.
    press(&mut app, KeyCode::Enter);
    assert!(app.form().is_submitting());
}

#[test]
fn ctrl_q_requests_quit() {
    let mut app = make_app();
    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
    );
    assert!(app.should_quit());
}

#[test]
fn ctrl_modified_characters_are_not_inserted() {
    let mut app = make_app();
    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL),
    );
    assert!(app.form().name.is_empty());
}

#[test]
fn escape_requests_quit() {
    let mut app = make_app();
    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit());
}
