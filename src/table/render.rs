use crate::grid::{Grid, Scalar};
use crate::table::decompose::Blocks;
use crate::table::labels::{column_label, row_label};
use crate::table::Table;

/// Placeholder for header cells that have no source value in PureTable mode.
pub const SENTINEL: &str = "--";

/// How many leading rows and columns of a rendered grid are header cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderExtent {
    pub top_rows: usize,
    pub left_cols: usize,
}

impl Table {
    /// The display grid, computed on first use and kept afterwards.
    pub fn render(&self) -> &Grid {
        self.rendered.get_or_init(|| self.rebuild())
    }

    /// Recomputes the display grid without touching the cache.
    pub fn rebuild(&self) -> Grid {
        if self.is_pure() {
            render_pure(
                &self.blocks,
                self.row_header_depth(),
                self.column_header_depth(),
            )
        } else {
            render_raw(&self.blocks, self.column_header_depth())
        }
    }

    /// Header band of the rendered grid, including the label row and column
    /// in PureTable mode.
    pub fn header_extent(&self) -> HeaderExtent {
        let extra = usize::from(self.is_pure());
        HeaderExtent {
            top_rows: self.column_header_depth() + extra,
            left_cols: self.row_header_depth() + extra,
        }
    }
}

fn row_of(block: Option<&Grid>, index: usize) -> &[Scalar] {
    block
        .and_then(|rows| rows.get(index))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn joined(left: &[Scalar], right: &[Scalar]) -> Vec<Scalar> {
    let mut row = Vec::with_capacity(left.len() + right.len());
    row.extend_from_slice(left);
    row.extend_from_slice(right);
    row
}

fn render_raw(blocks: &Blocks, column_depth: usize) -> Grid {
    let mut grid = Vec::with_capacity(column_depth + blocks.data_rows());

    if blocks.column_headers.is_some() {
        for i in 0..column_depth {
            grid.push(joined(
                row_of(blocks.corners.as_ref(), i),
                row_of(blocks.column_headers.as_ref(), i),
            ));
        }
    }

    for (i, data) in blocks.body.iter().enumerate() {
        grid.push(joined(row_of(blocks.row_headers.as_ref(), i), data));
    }

    grid
}

fn blank() -> Scalar {
    Scalar::from("")
}

fn sentinel() -> Scalar {
    Scalar::from(SENTINEL)
}

/// Corner block grown by one blank row and column.
fn pure_corners(blocks: &Blocks, row_depth: usize, column_depth: usize) -> Grid {
    let mut block = vec![vec![blank(); row_depth + 1]; column_depth + 1];
    for i in 0..column_depth {
        for j in 0..row_depth {
            block[i + 1][j + 1] = match &blocks.corners {
                Some(corners) => corners[i][j].clone(),
                None => sentinel(),
            };
        }
    }
    block
}

/// Column headers with the letter labels as their first row.
fn pure_column_headers(blocks: &Blocks, column_depth: usize) -> Grid {
    let data_cols = blocks.data_cols();
    let mut block = Vec::with_capacity(column_depth + 1);
    block.push((0..data_cols).map(|j| Scalar::Text(column_label(j))).collect());

    match &blocks.column_headers {
        Some(headers) => block.extend(headers.iter().cloned()),
        None => block.extend((0..column_depth).map(|_| vec![sentinel(); data_cols])),
    }
    block
}

/// Row headers with the number labels as their first column.
fn pure_row_headers(blocks: &Blocks) -> Grid {
    (0..blocks.data_rows())
        .map(|i| {
            let mut row = vec![Scalar::Text(row_label(i))];
            row.extend_from_slice(row_of(blocks.row_headers.as_ref(), i));
            row
        })
        .collect()
}

fn render_pure(blocks: &Blocks, row_depth: usize, column_depth: usize) -> Grid {
    let corners = pure_corners(blocks, row_depth, column_depth);
    let column_headers = pure_column_headers(blocks, column_depth);
    let row_headers = pure_row_headers(blocks);

    let top = corners
        .iter()
        .zip(&column_headers)
        .map(|(corner, header)| joined(corner, header));
    let bottom = row_headers
        .iter()
        .zip(&blocks.body)
        .map(|(header, data)| joined(header, data));

    top.chain(bottom).collect()
}
