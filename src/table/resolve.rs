use tracing::debug;

use crate::grid::{self, Scalar};
use crate::table::selector::{Axis, Key, Label, Selector};
use crate::table::Table;

/// Outcome of a cell lookup.
///
/// `NotFound` records which axes did resolve, so a caller can tell an
/// unmatched row from an unmatched column. A matched cell that holds
/// [`Scalar::Null`] is still `Found`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    Found {
        row: usize,
        column: usize,
        value: &'a Scalar,
    },
    NotFound {
        row: Option<usize>,
        column: Option<usize>,
    },
}

impl<'a> Lookup<'a> {
    pub fn value(&self) -> Option<&'a Scalar> {
        match self {
            Lookup::Found { value, .. } => Some(value),
            Lookup::NotFound { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found { .. })
    }
}

impl Table {
    /// Resolves a row selector and a column selector to a body cell.
    pub fn find(&self, row: &Selector, column: &Selector) -> Lookup<'_> {
        let row_index = self.row_index(row);
        let column_index = self.column_index(column);

        let lookup = match (row_index, column_index) {
            (Some(r), Some(c)) => match self.body().get(r).and_then(|cells| cells.get(c)) {
                Some(value) => Lookup::Found {
                    row: r,
                    column: c,
                    value,
                },
                None => Lookup::NotFound {
                    row: row_index,
                    column: column_index,
                },
            },
            _ => Lookup::NotFound {
                row: row_index,
                column: column_index,
            },
        };

        debug!(?row, ?column, ?row_index, ?column_index, found = lookup.is_found(), "Cell lookup");
        lookup
    }

    /// Value of the cell at the intersection, or `None` when either axis
    /// fails to resolve.
    pub fn search(&self, row: impl Into<Selector>, column: impl Into<Selector>) -> Option<&Scalar> {
        self.find(&row.into(), &column.into()).value()
    }

    /// First body row whose row-header tuple contains every key.
    pub fn row_index(&self, selector: &Selector) -> Option<usize> {
        let headers = self.row_headers()?;
        let wanted = self.translate(Axis::Row, selector)?;
        headers.iter().position(|tuple| contains_all(tuple, &wanted))
    }

    /// First body column whose column-header tuple (read top to bottom)
    /// contains every key.
    pub fn column_index(&self, selector: &Selector) -> Option<usize> {
        let headers = self.column_headers()?;
        let wanted = self.translate(Axis::Column, selector)?;
        grid::transpose(headers)
            .iter()
            .position(|tuple| contains_all(tuple, &wanted))
    }

    /// Turns every key into the values it accepts. `None` when any key ends
    /// up null, which can never match.
    fn translate(&self, axis: Axis, selector: &Selector) -> Option<Vec<Vec<Scalar>>> {
        let wanted: Vec<Vec<Scalar>> = selector
            .keys()
            .iter()
            .map(|key| match key {
                Key::Value(value) => vec![value.clone()],
                Key::Numeric { value, text } => vec![value.clone(), Scalar::from(text.as_str())],
                Key::Label(label) => vec![self.translate_label(axis, *label)],
            })
            .collect();

        if wanted.iter().flatten().any(Scalar::is_null) {
            None
        } else {
            Some(wanted)
        }
    }

    /// A label on its own axis stands for the first header value at that
    /// position. Labels that are out of range, on the wrong axis, or used
    /// outside PureTable mode stand for their own text.
    fn translate_label(&self, axis: Axis, label: Label) -> Scalar {
        let tuples = match axis {
            Axis::Row => self.row_search_tuples(),
            Axis::Column => self.column_search_tuples(),
        };

        let tuple = tuples
            .filter(|_| self.is_pure() && label.axis() == axis)
            .and_then(|tuples| label.position().checked_sub(1).and_then(|i| tuples.get(i)));

        match tuple {
            Some(tuple) => tuple.get(1).or_else(|| tuple.first()).cloned().unwrap_or_default(),
            None => Scalar::Text(label.text()),
        }
    }
}

/// Every key finds one of its accepted values somewhere in `tuple`.
fn contains_all(tuple: &[Scalar], wanted: &[Vec<Scalar>]) -> bool {
    wanted
        .iter()
        .all(|accepted| accepted.iter().any(|value| tuple.contains(value)))
}
