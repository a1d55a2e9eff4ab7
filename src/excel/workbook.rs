use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Reader};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

use crate::excel::convert::data_to_scalar;
use crate::grid::{Grid, Scalar};

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Reads a grid from `path`.
///
/// `.json` files hold an array of arrays of scalars. Anything else is opened
/// as a spreadsheet (xlsx, xlsm, xlsb, xls, ods); `sheet` picks a worksheet by
/// name, defaulting to the first one.
pub fn load_grid<P: AsRef<Path>>(path: P, sheet: Option<&str>) -> Result<Grid> {
    let path = path.as_ref();

    if is_json(path) {
        let file = File::open(path)
            .with_context(|| format!("Unable to open file: {}", path.display()))?;
        let grid: Grid = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Unable to parse JSON grid: {}", path.display()))?;
        debug!(path = %path.display(), rows = grid.len(), "Loaded JSON grid");
        return Ok(grid);
    }

    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Unable to parse spreadsheet file: {}", path.display()))?;

    let names = workbook.sheet_names();
    let name = match sheet {
        Some(name) => {
            if !names.iter().any(|n| n == name) {
                anyhow::bail!(
                    "Worksheet not found: {} (available: {})",
                    name,
                    names.join(", ")
                );
            }
            name.to_owned()
        }
        None => names
            .first()
            .cloned()
            .context("No worksheets found in file")?,
    };

    let range = workbook
        .worksheet_range(&name)
        .with_context(|| format!("Unable to read worksheet: {}", name))?;

    // The range starts at the first used cell; pad so the grid starts at A1.
    let (top, left) = range
        .start()
        .map_or((0, 0), |(row, col)| (row as usize, col as usize));
    let width = left + range.width();

    let mut grid: Grid = vec![vec![Scalar::Null; width]; top];
    grid.extend(range.rows().map(|row| {
        let mut cells = vec![Scalar::Null; left];
        cells.extend(row.iter().map(data_to_scalar));
        cells
    }));

    debug!(path = %path.display(), sheet = %name, rows = grid.len(), "Loaded worksheet");
    Ok(grid)
}

/// Worksheet names in workbook order. JSON files have none.
pub fn sheet_names<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    if is_json(path) {
        return Ok(Vec::new());
    }

    let workbook = open_workbook_auto(path)
        .with_context(|| format!("Unable to parse spreadsheet file: {}", path.display()))?;
    Ok(workbook.sheet_names())
}
