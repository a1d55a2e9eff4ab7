use crate::grid::{self, Grid, Scalar};

/// The four regions of a grid once its header depths are known.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Blocks {
    pub(crate) corners: Option<Grid>,
    pub(crate) row_headers: Option<Grid>,
    pub(crate) column_headers: Option<Grid>,
    pub(crate) body: Grid,
}

/// Splits `grid` at `row_depth` columns and `column_depth` rows.
///
/// Depths are expected to be within the grid's extent; anything past the end
/// clips to an empty slice.
pub(crate) fn decompose(grid: &[Vec<Scalar>], row_depth: usize, column_depth: usize) -> Blocks {
    let split = column_depth.min(grid.len());
    let (top, bottom) = grid.split_at(split);

    let left = |rows: &[Vec<Scalar>]| -> Grid {
        rows.iter()
            .map(|row| row[..row_depth.min(row.len())].to_vec())
            .collect()
    };
    let right = |rows: &[Vec<Scalar>]| -> Grid {
        rows.iter()
            .map(|row| row[row_depth.min(row.len())..].to_vec())
            .collect()
    };

    Blocks {
        corners: (row_depth > 0 && column_depth > 0).then(|| left(top)),
        row_headers: (row_depth > 0).then(|| left(bottom)),
        column_headers: (column_depth > 0).then(|| right(top)),
        body: right(bottom),
    }
}

impl Blocks {
    pub(crate) fn data_rows(&self) -> usize {
        self.body.len()
    }

    /// Data column count, which survives a body with no rows through the
    /// column headers.
    pub(crate) fn data_cols(&self) -> usize {
        match (&self.column_headers, self.body.is_empty()) {
            (Some(headers), true) => grid::width(headers),
            _ => grid::width(&self.body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::from_rows;

    fn sample() -> Grid {
        from_rows([
            ["", "Q1", "Q2"],
            ["R1", "10", "20"],
            ["R2", "30", "40"],
        ])
    }

    #[test]
    fn splits_all_four_blocks() {
        let blocks = decompose(&sample(), 1, 1);

        assert_eq!(blocks.corners, Some(from_rows([[""]])));
        assert_eq!(blocks.row_headers, Some(from_rows([["R1"], ["R2"]])));
        assert_eq!(blocks.column_headers, Some(from_rows([["Q1", "Q2"]])));
        assert_eq!(blocks.body, from_rows([["10", "20"], ["30", "40"]]));
    }

    #[test]
    fn corners_need_both_depths() {
        let blocks = decompose(&sample(), 1, 0);
        assert!(blocks.corners.is_none());
        assert!(blocks.column_headers.is_none());
        assert_eq!(blocks.row_headers.as_ref().map(Vec::len), Some(3));

        let blocks = decompose(&sample(), 0, 2);
        assert!(blocks.corners.is_none());
        assert!(blocks.row_headers.is_none());
        assert_eq!(blocks.body, from_rows([["R2", "30", "40"]]));
    }

    #[test]
    fn zero_depths_keep_everything_in_body() {
        let blocks = decompose(&sample(), 0, 0);
        assert_eq!(blocks.body, sample());
        assert_eq!(blocks.data_rows(), 3);
        assert_eq!(blocks.data_cols(), 3);
    }

    #[test]
    fn full_depth_leaves_empty_body() {
        let blocks = decompose(&sample(), 1, 3);
        assert!(blocks.body.is_empty());
        assert_eq!(blocks.row_headers, Some(Vec::new()));
        assert_eq!(blocks.data_cols(), 2);
    }
}
