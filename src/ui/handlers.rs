use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{AppState, InputMode};

pub fn handle_key_event(app_state: &mut AppState, key: KeyEvent) {
    match app_state.input_mode {
        InputMode::Normal => handle_normal_mode(app_state, key.code),
        InputMode::Command => handle_command_mode(app_state, key.code),
        InputMode::Help => handle_help_mode(app_state, key.code),
    }
}

fn handle_command_mode(app_state: &mut AppState, key_code: KeyCode) {
    match key_code {
        KeyCode::Enter => app_state.execute_command(),
        KeyCode::Esc => app_state.cancel_input(),
        KeyCode::Backspace => app_state.delete_char_from_input(),
        KeyCode::Char(c) => app_state.add_char_to_input(c),
        _ => {}
    }
}

fn handle_normal_mode(app_state: &mut AppState, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('h') | KeyCode::Left => app_state.move_view(0, -1),
        KeyCode::Char('j') | KeyCode::Down => app_state.move_view(1, 0),
        KeyCode::Char('k') | KeyCode::Up => app_state.move_view(-1, 0),
        KeyCode::Char('l') | KeyCode::Right => app_state.move_view(0, 1),
        KeyCode::PageDown => app_state.move_view(app_state.visible_rows as isize, 0),
        KeyCode::PageUp => app_state.move_view(-(app_state.visible_rows as isize), 0),
        KeyCode::Char('g') | KeyCode::Home => app_state.jump_to_top(),
        KeyCode::Char('G') | KeyCode::End => app_state.jump_to_bottom(),
        KeyCode::Char(':') => app_state.start_command_mode(),
        KeyCode::Char('?') => app_state.show_help(),
        KeyCode::Char('q') => app_state.should_quit = true,
        KeyCode::Esc => app_state.highlighted = None,
        _ => {}
    }
}

fn handle_help_mode(app_state: &mut AppState, key_code: KeyCode) {
    if matches!(key_code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?')) {
        app_state.input_mode = InputMode::Normal;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::from_rows;
    use crate::table::Table;
    use crossterm::event::KeyModifiers;
    use std::path::PathBuf;

    fn press(app: &mut AppState, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn typed_command_runs_lookup() {
        let grid = from_rows([["", "Q1"], ["R1", "x"]]);
        let mut app = AppState::new(Table::new(grid, 1, 1, false).unwrap(), PathBuf::from("t.json"));

        press(&mut app, KeyCode::Char(':'));
        for c in "R1;Q1".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.input_mode, InputMode::Normal));
        assert_eq!(app.highlighted, Some((1, 1)));

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
