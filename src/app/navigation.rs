use crate::app::AppState;

impl AppState {
    /// Scrolls the view, keeping at least one row and column on screen.
    pub fn move_view(&mut self, delta_row: isize, delta_col: isize) {
        let max_row = self.styled.rows().saturating_sub(1);
        let max_col = self.styled.cols().saturating_sub(1);

        self.start_row = self.start_row.saturating_add_signed(delta_row).min(max_row);
        self.start_col = self.start_col.saturating_add_signed(delta_col).min(max_col);
    }

    pub fn jump_to_top(&mut self) {
        self.start_row = 0;
        self.start_col = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.start_row = self.styled.rows().saturating_sub(self.visible_rows);
    }

    /// Scrolls just enough for `(row, col)` of the rendered grid to be visible.
    pub fn ensure_visible(&mut self, row: usize, col: usize) {
        if row < self.start_row {
            self.start_row = row;
        } else if row >= self.start_row + self.visible_rows {
            self.start_row = row + 1 - self.visible_rows.max(1);
        }

        if col < self.start_col {
            self.start_col = col;
        } else if col >= self.start_col + self.visible_cols {
            self.start_col = col + 1 - self.visible_cols.max(1);
        }
    }
}
