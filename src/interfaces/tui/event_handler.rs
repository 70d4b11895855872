//! Event handling for TUI
//!
//! Global keys first (quit, focus cycling, dismissing the error), then the
//! handler for whatever has focus.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Focus};

/// Handle one key press; returns true when the app should exit
pub async fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => return true,
        KeyCode::Tab => {
            app.focus_next();
            return false;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return false;
        }
        KeyCode::Esc => {
            app.controller.dismiss_error();
            return false;
        }
        _ => {}
    }

    match app.focus {
        Focus::Url | Focus::Alias => handle_form_field(app, key, ctrl).await,
        Focus::Submit => handle_submit_button(app, key.code).await,
        Focus::Table => handle_table(app, key.code).await,
    }

    app.should_quit
}

async fn handle_form_field(app: &mut App, key: KeyEvent, ctrl: bool) {
    match key.code {
        KeyCode::Char('u') if ctrl => app.clear_field(),
        KeyCode::Char(c) if !ctrl => app.input_char(c),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Enter => app.submit().await,
        KeyCode::Down => app.focus_next(),
        KeyCode::Up => app.focus_prev(),
        _ => {}
    }
}

async fn handle_submit_button(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Enter | KeyCode::Char(' ') => app.submit().await,
        KeyCode::Down => app.focus_next(),
        KeyCode::Up => app.focus_prev(),
        _ => {}
    }
}

async fn handle_table(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),
        KeyCode::Left | KeyCode::Char('h') => app.prev_page(),
        KeyCode::Right | KeyCode::Char('l') => app.next_page(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.cycle_rows_per_page(true),
        KeyCode::Char('-') => app.cycle_rows_per_page(false),
        KeyCode::Char('c') | KeyCode::Char('y') => app.copy_selected(),
        KeyCode::Char('o') => app.open_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected().await,
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        _ => {}
    }
}
