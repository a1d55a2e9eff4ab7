//! Header-aware view over a rectangular grid.
//!
//! A [`Table`] splits its grid once, at construction, into a corner block,
//! row headers, column headers and the body. Cells are then looked up by
//! header values, and the grid can be redrawn as it came in or with a band of
//! positional labels (`1, 2, ...` down the side, `A, B, ...` across the top)
//! when the table is built in PureTable mode.

mod decompose;
mod error;
mod labels;
mod render;
mod resolve;
mod selector;

use std::sync::OnceLock;

use tracing::debug;

use crate::grid::{self, Grid};
use decompose::{decompose, Blocks};
use labels::{synthesize, SearchTuples};

pub use error::TableError;
pub use labels::{column_label, row_label};
pub use render::{HeaderExtent, SENTINEL};
pub use resolve::Lookup;
pub use selector::{Axis, Key, Label, Selector};

#[derive(Debug, Clone)]
pub struct Table {
    source: Grid,
    row_header_depth: usize,
    column_header_depth: usize,
    pure: bool,
    blocks: Blocks,
    search: SearchTuples,
    rendered: OnceLock<Grid>,
}

impl Table {
    /// Splits `grid` using the first `row_header_depth` columns as row headers
    /// and the first `column_header_depth` rows as column headers.
    ///
    /// # Errors
    ///
    /// Rejects ragged grids and depths larger than the grid. A depth equal to
    /// the grid's extent is accepted and leaves the body empty on that axis.
    pub fn new(
        grid: Grid,
        row_header_depth: usize,
        column_header_depth: usize,
        pure: bool,
    ) -> Result<Self, TableError> {
        let columns = grid::width(&grid);
        if let Some(row) = grid::first_ragged_row(&grid) {
            return Err(TableError::Ragged {
                row,
                expected: columns,
                found: grid[row].len(),
            });
        }
        if column_header_depth > grid.len() {
            return Err(TableError::ColumnHeaderDepth {
                depth: column_header_depth,
                rows: grid.len(),
            });
        }
        if row_header_depth > columns {
            return Err(TableError::RowHeaderDepth {
                depth: row_header_depth,
                columns,
            });
        }

        let blocks = decompose(&grid, row_header_depth, column_header_depth);
        let search = if pure {
            synthesize(&blocks)
        } else {
            SearchTuples::default()
        };

        debug!(
            rows = grid.len(),
            columns,
            row_header_depth,
            column_header_depth,
            pure,
            data_rows = blocks.data_rows(),
            data_cols = blocks.data_cols(),
            "Table decomposed"
        );

        Ok(Table {
            source: grid,
            row_header_depth,
            column_header_depth,
            pure,
            blocks,
            search,
            rendered: OnceLock::new(),
        })
    }

    /// The grid the table was built from.
    pub fn source(&self) -> &Grid {
        &self.source
    }

    pub fn row_header_depth(&self) -> usize {
        self.row_header_depth
    }

    pub fn column_header_depth(&self) -> usize {
        self.column_header_depth
    }

    pub fn is_pure(&self) -> bool {
        self.pure
    }

    /// Present only when both header depths are non-zero.
    pub fn corners(&self) -> Option<&Grid> {
        self.blocks.corners.as_ref()
    }

    pub fn row_headers(&self) -> Option<&Grid> {
        self.blocks.row_headers.as_ref()
    }

    pub fn column_headers(&self) -> Option<&Grid> {
        self.blocks.column_headers.as_ref()
    }

    pub fn body(&self) -> &Grid {
        &self.blocks.body
    }

    pub fn data_rows(&self) -> usize {
        self.blocks.data_rows()
    }

    pub fn data_cols(&self) -> usize {
        self.blocks.data_cols()
    }

    /// Per-row tuples of `(label, header values...)`. PureTable mode only.
    pub fn row_search_tuples(&self) -> Option<&[Vec<grid::Scalar>]> {
        self.search.rows.as_deref()
    }

    /// Per-column tuples of `(label, header values top to bottom...)`.
    /// PureTable mode only.
    pub fn column_search_tuples(&self) -> Option<&[Vec<grid::Scalar>]> {
        self.search.columns.as_deref()
    }

    /// Reads free text as a selector for `axis`. Positional labels are only
    /// recognized in PureTable mode.
    pub fn parse_selector(&self, axis: Axis, text: &str) -> Selector {
        Selector::parse(axis, text, self.pure)
    }
}
