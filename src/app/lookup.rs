use crate::app::{AppState, InputMode};
use crate::style::format_cell;
use crate::table::{Axis, Lookup};

impl AppState {
    /// Runs the text in the input buffer: `q` quits, `row ; column` looks up
    /// a cell. Comma-separated values select by several headers at once.
    pub fn execute_command(&mut self) {
        let command = std::mem::take(&mut self.input_buffer);
        self.input_mode = InputMode::Normal;

        let command = command.trim();
        if command.is_empty() {
            return;
        }
        if matches!(command, "q" | "quit") {
            self.should_quit = true;
            return;
        }

        let Some((row_text, column_text)) = command.split_once(';') else {
            self.add_notification(format!("Expected `row ; column`, got: {}", command));
            return;
        };

        self.lookup(row_text.trim(), column_text.trim());
    }

    pub fn lookup(&mut self, row_text: &str, column_text: &str) {
        let row = self.table.parse_selector(Axis::Row, row_text);
        let column = self.table.parse_selector(Axis::Column, column_text);

        match self.table.find(&row, &column) {
            Lookup::Found { row, column, value } => {
                let message = format!("{} ; {} = {}", row_text, column_text, format_cell(value));
                let extent = self.table.header_extent();
                let position = (row + extent.top_rows, column + extent.left_cols);
                self.highlighted = Some(position);
                self.ensure_visible(position.0, position.1);
                self.add_notification(message);
            }
            Lookup::NotFound { row, column } => {
                self.highlighted = None;
                let axis = match (row, column) {
                    (None, None) => "row and column",
                    (None, Some(_)) => "row",
                    _ => "column",
                };
                self.add_notification(format!(
                    "No {} matches {} ; {}",
                    axis, row_text, column_text
                ));
            }
        }
    }
}
