/*
[INPUT]:  Crossterm key events and the current input mode
[OUTPUT]: AppState mutations and the quit decision
[POS]:    TUI event routing
[UPDATE]: When changing keybindings or mode handling
*/

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{AppState, InputMode, Tab};

/// Handles key events for the TUI.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub(super) fn handle_key_event(app: &mut AppState, key: KeyEvent) -> bool {
    // Ctrl+C quits from any mode, even while a task is in flight.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.mode {
        InputMode::Insert => handle_insert_key(app, key.code),
        InputMode::Normal => handle_normal_key(app, key.code),
    }
}

fn handle_insert_key(app: &mut AppState, code: KeyCode) -> bool {
    match code {
        KeyCode::Esc => {
            app.mode = InputMode::Normal;
        }
        KeyCode::Enter => {
            app.dispatch_submit();
        }
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(ch) => {
            app.input.push(ch);
        }
        _ => {}
    }
    false
}

fn handle_normal_key(app: &mut AppState, code: KeyCode) -> bool {
    match code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('i') | KeyCode::Char('e') => {
            app.set_tab(Tab::Console);
            app.mode = InputMode::Insert;
        }
        KeyCode::Enter | KeyCode::Char('r') => {
            app.dispatch_submit();
        }
        KeyCode::Char('c') => {
            app.clear();
        }
        KeyCode::Tab | KeyCode::Char('l') => {
            app.next_tab();
        }
        KeyCode::Char('1') => app.set_tab(Tab::Console),
        KeyCode::Char('2') => app.set_tab(Tab::Logs),
        _ => {}
    }
    false
}
