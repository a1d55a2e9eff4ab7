use crate::grid::{self, Scalar};
use crate::table::{column_label, row_label, Table};

fn is_blank(value: &Scalar) -> bool {
    match value {
        Scalar::Null => true,
        Scalar::Text(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Joins header tuples into keys. Blank header cells repeat the last value
/// seen at the same depth, so merged header cells spread across their span.
fn join_tuples(tuples: &[Vec<Scalar>], fallback: fn(usize) -> String) -> Vec<String> {
    let mut last_by_depth: Vec<Option<String>> = Vec::new();

    tuples
        .iter()
        .enumerate()
        .map(|(index, tuple)| {
            if last_by_depth.len() < tuple.len() {
                last_by_depth.resize(tuple.len(), None);
            }

            let parts: Vec<String> = tuple
                .iter()
                .enumerate()
                .filter_map(|(depth, value)| {
                    if is_blank(value) {
                        last_by_depth[depth].clone()
                    } else {
                        let text = value.to_string();
                        last_by_depth[depth] = Some(text.clone());
                        Some(text)
                    }
                })
                .collect();

            if parts.is_empty() {
                fallback(index)
            } else {
                parts.join("-")
            }
        })
        .collect()
}

/// One key per body row: its row header values joined with "-", or the row
/// number when there are no row headers.
pub fn row_keys(table: &Table) -> Vec<String> {
    match table.row_headers() {
        Some(headers) => join_tuples(headers, row_label),
        None => (0..table.data_rows()).map(row_label).collect(),
    }
}

/// One key per body column: its column header values, top to bottom, joined
/// with "-", or the column letter when there are no column headers.
pub fn column_keys(table: &Table) -> Vec<String> {
    match table.column_headers() {
        Some(headers) => join_tuples(&grid::transpose(headers), column_label),
        None => (0..table.data_cols()).map(column_label).collect(),
    }
}
