mod scalar;

pub use scalar::Scalar;

/// Rectangular block of cells, row-major.
pub type Grid = Vec<Vec<Scalar>>;

/// Number of columns, taken from the first row.
#[must_use]
pub fn width(grid: &[Vec<Scalar>]) -> usize {
    grid.first().map_or(0, Vec::len)
}

/// Index of the first row whose length differs from the first row's, if any.
#[must_use]
pub fn first_ragged_row(grid: &[Vec<Scalar>]) -> Option<usize> {
    let expected = width(grid);
    grid.iter().position(|row| row.len() != expected)
}

/// Column-major copy of `grid`. Expects a rectangular grid.
#[must_use]
pub fn transpose(grid: &[Vec<Scalar>]) -> Grid {
    let cols = width(grid);
    (0..cols)
        .map(|col| grid.iter().map(|row| row[col].clone()).collect())
        .collect()
}

/// Build a grid from anything convertible into cells.
pub fn from_rows<R, C>(rows: R) -> Grid
where
    R: IntoIterator,
    R::Item: IntoIterator<Item = C>,
    C: Into<Scalar>,
{
    rows.into_iter()
        .map(|row| row.into_iter().map(Into::into).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_of_empty_grid_is_zero() {
        let grid: Grid = Vec::new();
        assert_eq!(width(&grid), 0);
        assert_eq!(first_ragged_row(&grid), None);
    }

    #[test]
    fn ragged_row_is_reported() {
        let grid = vec![
            vec![Scalar::from(1), Scalar::from(2)],
            vec![Scalar::from(3)],
        ];
        assert_eq!(first_ragged_row(&grid), Some(1));
    }

    #[test]
    fn transpose_swaps_axes() {
        let grid = from_rows([["a", "b", "c"], ["d", "e", "f"]]);
        let flipped = transpose(&grid);
        assert_eq!(flipped.len(), 3);
        assert_eq!(flipped[2], vec![Scalar::from("c"), Scalar::from("f")]);
    }
}
