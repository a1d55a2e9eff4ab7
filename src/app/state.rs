use std::path::PathBuf;

use crate::style::{styled_render, StyledGrid};
use crate::table::Table;

pub enum InputMode {
    Normal,
    Command,
    Help,
}

pub struct AppState {
    pub table: Table,
    pub styled: StyledGrid,
    pub file_path: PathBuf,
    pub start_row: usize,
    pub start_col: usize,
    pub visible_rows: usize,
    pub visible_cols: usize,
    pub column_widths: Vec<usize>,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub should_quit: bool,
    pub highlighted: Option<(usize, usize)>, // (row, col) in the rendered grid
    pub notification_messages: Vec<String>,
    pub max_notifications: usize,
    pub info_panel_height: usize,
}

impl AppState {
    pub fn new(table: Table, file_path: PathBuf) -> Self {
        let styled = styled_render(table.render(), table.header_extent());
        let column_widths = styled
            .column_widths()
            .into_iter()
            .map(|width| width.clamp(3, 30) + 2)
            .collect();

        let mut app_state = Self {
            table,
            styled,
            file_path,
            start_row: 0,
            start_col: 0,
            visible_rows: 1,
            visible_cols: 1,
            column_widths,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            should_quit: false,
            highlighted: None,
            notification_messages: Vec::new(),
            max_notifications: 5,
            info_panel_height: 4,
        };

        let mode = if app_state.table.is_pure() { "PureTable" } else { "raw" };
        app_state.add_notification(format!(
            "{} data rows x {} data columns ({} view). Press : to look up a cell, ? for help",
            app_state.table.data_rows(),
            app_state.table.data_cols(),
            mode
        ));
        app_state
    }

    pub fn get_column_width(&self, col: usize) -> usize {
        self.column_widths.get(col).copied().unwrap_or(5)
    }

    pub fn add_notification(&mut self, message: String) {
        self.notification_messages.push(message);
        if self.notification_messages.len() > self.max_notifications {
            self.notification_messages.remove(0);
        }
    }

    pub fn start_command_mode(&mut self) {
        self.input_mode = InputMode::Command;
        self.input_buffer = String::new();
    }

    pub fn add_char_to_input(&mut self, c: char) {
        self.input_buffer.push(c);
    }

    pub fn delete_char_from_input(&mut self) {
        self.input_buffer.pop();
    }

    pub fn cancel_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input_buffer = String::new();
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }
}
