use thiserror::Error;

/// Reasons a grid cannot be turned into a [`Table`](crate::table::Table).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Row header depth {depth} exceeds the grid's {columns} columns")]
    RowHeaderDepth { depth: usize, columns: usize },

    #[error("Column header depth {depth} exceeds the grid's {rows} rows")]
    ColumnHeaderDepth { depth: usize, rows: usize },
}
