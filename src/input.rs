//! Keyboard input handling.
//!
//! Maps terminal key events to [`App`] actions.  Adding a new keybinding is
//! a single match arm in [`handle_key_event`].
//!
//! ## For contributors
//!
//! To add a new keybinding:
//!
//! 1. Add a method on [`App`] for the action (if one doesn't exist).
//! 2. Add a `KeyCode` match arm in [`handle_ready_key`] that calls it.
//!    Letters are search text while the catalog is shown, so bindings there
//!    must use non-character keys or `Ctrl`.
//! 3. Update the help text in the status bar (`crate::ui`).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Status};

/// Process a single key event, updating app state accordingly.
///
/// Only reacts to key-press events (ignoring release / repeat) so that each
/// physical keypress triggers exactly one action.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if key.code == KeyCode::Esc || (ctrl && key.code == KeyCode::Char('c')) {
        app.quit = true;
        return;
    }

    match app.status() {
        Status::Ready => handle_ready_key(app, key, ctrl),
        // No search box exists yet (or ever, after an error).
        Status::Loading | Status::Error(_) => {
            if key.code == KeyCode::Char('q') {
                app.quit = true;
            }
        }
    }
}

fn handle_ready_key(app: &mut App, key: KeyEvent, ctrl: bool) {
    match key.code {
        KeyCode::Char('u') if ctrl => app.clear_query(),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            app.push_query_char(c)
        }
        KeyCode::Backspace => app.pop_query_char(),
        KeyCode::Right => app.select_next(),
        KeyCode::Left => app.select_previous(),
        KeyCode::Down => app.select_below(),
        KeyCode::Up => app.select_above(),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Product;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn ready_app() -> App {
        let mut app = App::new();
        app.apply_fetch(Ok(vec![
            Product {
                id: 1,
                title: "Red Shirt".into(),
                price: Some(19.5),
                image: "u1".into(),
                category: "clothing".into(),
            },
            Product {
                id: 2,
                title: "Blue Hat".into(),
                price: Some(9.0),
                image: "u2".into(),
                category: "clothing".into(),
            },
        ]));
        app
    }

    #[test]
    fn typing_updates_query_immediately() {
        let mut app = ready_app();
        for c in "Hat".chars() {
            handle_key_event(&mut app, press(KeyCode::Char(c)));
        }
        assert_eq!(app.query(), "Hat");
        assert_eq!(app.visible().len(), 1);

        handle_key_event(&mut app, press(KeyCode::Backspace));
        assert_eq!(app.query(), "Ha");
    }

    #[test]
    fn q_is_search_text_when_ready() {
        let mut app = ready_app();
        handle_key_event(&mut app, press(KeyCode::Char('q')));
        assert!(!app.quit);
        assert_eq!(app.query(), "q");
    }

    #[test]
    fn ctrl_u_clears_query() {
        let mut app = ready_app();
        app.set_query("red");
        handle_key_event(&mut app, ctrl('u'));
        assert!(app.query().is_empty());
        assert_eq!(app.visible().len(), 2);
    }

    #[test]
    fn escape_and_ctrl_c_quit_in_every_state() {
        for mut app in [App::new(), ready_app()] {
            handle_key_event(&mut app, press(KeyCode::Esc));
            assert!(app.quit);
        }
        for mut app in [App::new(), ready_app()] {
            handle_key_event(&mut app, ctrl('c'));
            assert!(app.quit);
        }
    }

    #[test]
    fn typing_while_loading_is_inert() {
        let mut app = App::new();
        handle_key_event(&mut app, press(KeyCode::Char('r')));
        assert!(app.query().is_empty());
        assert!(!app.quit);

        handle_key_event(&mut app, press(KeyCode::Char('q')));
        assert!(app.quit);
    }

    #[test]
    fn arrows_move_selection() {
        let mut app = ready_app();
        handle_key_event(&mut app, press(KeyCode::Right));
        assert_eq!(app.selected_id(), Some(2));
        handle_key_event(&mut app, press(KeyCode::Left));
        assert_eq!(app.selected_id(), Some(1));
        handle_key_event(&mut app, press(KeyCode::End));
        assert_eq!(app.selected_id(), Some(2));
        handle_key_event(&mut app, press(KeyCode::Home));
        assert_eq!(app.selected_id(), Some(1));
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = ready_app();
        let release = KeyEvent {
            code: KeyCode::Char('x'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        handle_key_event(&mut app, release);
        assert!(app.query().is_empty());
    }

    #[test]
    fn shifted_letters_are_typed() {
        let mut app = ready_app();
        handle_key_event(&mut app, KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT));
        assert_eq!(app.query(), "R");
        assert_eq!(app.visible().len(), 1);
    }
}
