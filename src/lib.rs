//! # pure-table
//!
//! Splits a rectangular grid of cells into a corner block, row headers,
//! column headers and a data body, then:
//!
//! - looks body cells up by header values, matching a selector against a
//!   header tuple by containment (every selector value must appear somewhere
//!   in the tuple);
//! - redraws the grid, either exactly as it came in or, in PureTable mode,
//!   with an extra band of positional labels (`1, 2, ...` for rows,
//!   `A..Z` then `Col27, ...` for columns) that can also be used as selectors.
//!
//! Around that core the crate loads grids from spreadsheets or JSON, exports
//! the rendering as JSON or a styled xlsx workbook, and provides a terminal
//! viewer.
//!
//! ```
//! use pure_table::grid::Scalar;
//! use pure_table::table::{Label, Table};
//!
//! let grid = vec![
//!     vec!["".into(), "Q1".into(), "Q2".into()],
//!     vec!["R1".into(), 10.into(), 20.into()],
//!     vec!["R2".into(), 30.into(), 40.into()],
//! ];
//! let table = Table::new(grid, 1, 1, true).unwrap();
//!
//! assert_eq!(table.search("R1", "Q2"), Some(&Scalar::Int(20)));
//! assert_eq!(table.search(Label::Row(1), Label::Column(1)), Some(&Scalar::Int(10)));
//! ```

pub mod app;
pub mod excel;
pub mod grid;
pub mod json_export;
pub mod style;
pub mod table;
pub mod ui;
pub mod xlsx_export;
