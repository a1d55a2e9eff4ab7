use crate::grid::{self, Scalar};
use crate::table::decompose::Blocks;

/// Past this many columns labels switch from single letters to `Col{n}`.
pub const LETTER_LABELS: usize = 26;

/// Positional label for body row `index` (0-based): "1", "2", ...
#[must_use]
pub fn row_label(index: usize) -> String {
    (index + 1).to_string()
}

/// Positional label for body column `index` (0-based): "A".."Z", then "Col27", ...
#[must_use]
pub fn column_label(index: usize) -> String {
    if index < LETTER_LABELS {
        char::from(b'A' + index as u8).to_string()
    } else {
        format!("Col{}", index + 1)
    }
}

/// Header tuples with their positional label in front, one per body row and
/// one per body column.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct SearchTuples {
    pub(crate) rows: Option<Vec<Vec<Scalar>>>,
    pub(crate) columns: Option<Vec<Vec<Scalar>>>,
}

pub(crate) fn synthesize(blocks: &Blocks) -> SearchTuples {
    let data_rows = blocks.data_rows();
    let data_cols = blocks.data_cols();

    let rows = match &blocks.row_headers {
        Some(headers) if !headers.is_empty() => Some(prefixed(headers.iter().cloned(), row_label)),
        _ if data_rows > 0 => Some(bare(data_rows, row_label)),
        _ => None,
    };

    let columns = match &blocks.column_headers {
        Some(headers) if data_cols > 0 => {
            Some(prefixed(grid::transpose(headers).into_iter(), column_label))
        }
        _ if data_cols > 0 => Some(bare(data_cols, column_label)),
        _ => None,
    };

    SearchTuples { rows, columns }
}

fn prefixed<I>(tuples: I, label: fn(usize) -> String) -> Vec<Vec<Scalar>>
where
    I: Iterator<Item = Vec<Scalar>>,
{
    tuples
        .enumerate()
        .map(|(index, tuple)| {
            let mut labelled = Vec::with_capacity(tuple.len() + 1);
            labelled.push(Scalar::Text(label(index)));
            labelled.extend(tuple);
            labelled
        })
        .collect()
}

fn bare(count: usize, label: fn(usize) -> String) -> Vec<Vec<Scalar>> {
    (0..count).map(|index| vec![Scalar::Text(label(index))]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::from_rows;
    use crate::table::decompose::decompose;

    #[test]
    fn column_labels_overflow_past_z() {
        assert_eq!(column_label(0), "A");
        assert_eq!(column_label(25), "Z");
        assert_eq!(column_label(26), "Col27");
        assert_eq!(column_label(27), "Col28");
        assert_eq!(row_label(0), "1");
        assert_eq!(row_label(11), "12");
    }

    #[test]
    fn tuples_carry_label_then_headers() {
        let grid = from_rows([
            ["", "", "Q1", "Q2"],
            ["", "", "a", "b"],
            ["R1", "x", "1", "2"],
        ]);
        let tuples = synthesize(&decompose(&grid, 2, 2));

        assert_eq!(tuples.rows, Some(vec![vec![
                Scalar::from("1"),
                Scalar::from("R1"),
                Scalar::from("x"),
            ]]));
        assert_eq!(
            tuples.columns,
            Some(vec![
                vec![Scalar::from("A"), Scalar::from("Q1"), Scalar::from("a")],
                vec![Scalar::from("B"), Scalar::from("Q2"), Scalar::from("b")],
            ])
        );
    }

    #[test]
    fn headerless_axes_get_bare_labels() {
        let grid = from_rows([["1", "2"], ["3", "4"]]);
        let tuples = synthesize(&decompose(&grid, 0, 0));

        assert_eq!(
            tuples.rows,
            Some(vec![vec![Scalar::from("1")], vec![Scalar::from("2")]])
        );
        assert_eq!(
            tuples.columns,
            Some(vec![vec![Scalar::from("A")], vec![Scalar::from("B")]])
        );
    }

    #[test]
    fn empty_body_has_no_column_tuples() {
        let grid = from_rows([["R1"], ["R2"]]);
        let tuples = synthesize(&decompose(&grid, 1, 0));
        assert!(tuples.columns.is_none());
        assert_eq!(tuples.rows.map(|rows| rows.len()), Some(2));
    }
}
