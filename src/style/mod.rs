//! Presentation of a rendered grid: which cells belong to the header band and
//! how each cell reads as text. Consumers (terminal viewer, xlsx export) draw
//! borders and centering themselves; this module only decides content and
//! emphasis.

mod number;

pub use number::format_general;

use crate::grid::{Grid, Scalar};
use crate::table::HeaderExtent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledCell {
    pub text: String,
    /// Inside the top or left header band.
    pub bold: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledGrid {
    pub cells: Vec<Vec<StyledCell>>,
    pub extent: HeaderExtent,
}

impl StyledGrid {
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Widest cell text per column, in characters.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths = vec![0; self.cols()];
        for row in &self.cells {
            for (col, cell) in row.iter().enumerate() {
                if let Some(width) = widths.get_mut(col) {
                    *width = (*width).max(cell.text.chars().count());
                }
            }
        }
        widths
    }
}

/// Display text for a cell. Numbers use general formatting, null is blank.
pub fn format_cell(value: &Scalar) -> String {
    match value {
        Scalar::Null => String::new(),
        Scalar::Bool(true) => "True".to_owned(),
        Scalar::Bool(false) => "False".to_owned(),
        Scalar::Int(i) => format_general(*i as f64),
        Scalar::Float(f) => format_general(*f),
        Scalar::Text(s) => s.clone(),
    }
}

/// Marks the header band of `grid` and formats every cell. The grid itself is
/// left untouched.
pub fn styled_render(grid: &Grid, extent: HeaderExtent) -> StyledGrid {
    let cells = grid
        .iter()
        .enumerate()
        .map(|(row, values)| {
            values
                .iter()
                .enumerate()
                .map(|(col, value)| StyledCell {
                    text: format_cell(value),
                    bold: row < extent.top_rows || col < extent.left_cols,
                })
                .collect()
        })
        .collect();

    StyledGrid { cells, extent }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Table;

    #[test]
    fn header_band_is_bold() {
        let grid: Grid = vec![
            vec!["".into(), "Q1".into()],
            vec!["R1".into(), 10.5.into()],
        ];
        let table = Table::new(grid, 1, 1, true).unwrap();
        let styled = styled_render(table.render(), table.header_extent());

        assert_eq!(styled.rows(), 3);
        assert_eq!(styled.cols(), 3);
        assert!(styled.cells[0].iter().all(|cell| cell.bold));
        assert!(styled.cells[2][1].bold);
        assert!(!styled.cells[2][2].bold);
        assert_eq!(styled.cells[2][2].text, "10.5");
        assert_eq!(styled.cells[0][2].text, "A");
    }

    #[test]
    fn no_band_without_headers() {
        let grid: Grid = vec![vec![1.into(), Scalar::Null]];
        let styled = styled_render(&grid, HeaderExtent::default());
        assert!(styled.cells[0].iter().all(|cell| !cell.bold));
        assert_eq!(styled.cells[0][1].text, "");
        assert_eq!(styled.column_widths(), vec![1, 0]);
    }

    #[test]
    fn booleans_read_as_words() {
        assert_eq!(format_cell(&Scalar::Bool(true)), "True");
        assert_eq!(format_cell(&Scalar::Bool(false)), "False");
        assert_eq!(format_cell(&Scalar::Int(1)), "1");
    }
}
