use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook as XlsxWorkbook};
use std::path::Path;
use tracing::debug;

use crate::grid::{Grid, Scalar};
use crate::style::styled_render;
use crate::table::HeaderExtent;

/// Writes `grid` to a new xlsx file: every cell centered with a thin border,
/// the header band in bold, numbers kept numeric under the "General" format.
pub fn export_styled_xlsx(
    grid: &Grid,
    extent: HeaderExtent,
    sheet_name: &str,
    path: &Path,
) -> Result<()> {
    let styled = styled_render(grid, extent);

    let body_format = Format::new()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
        .set_num_format("General");
    let header_format = body_format.clone().set_bold();

    let mut workbook = XlsxWorkbook::new();
    let worksheet = workbook.add_worksheet().set_name(sheet_name)?;

    for (col, width) in styled.column_widths().into_iter().enumerate() {
        worksheet.set_column_width(col as u16, (width.max(6) + 2) as f64)?;
    }

    for (row, (values, cells)) in grid.iter().zip(&styled.cells).enumerate() {
        for (col, (value, cell)) in values.iter().zip(cells).enumerate() {
            let row_idx = row as u32;
            let col_idx = col as u16;
            let format = if cell.bold { &header_format } else { &body_format };

            match value {
                Scalar::Null => {
                    worksheet.write_blank(row_idx, col_idx, format)?;
                }
                Scalar::Bool(b) => {
                    worksheet.write_boolean_with_format(row_idx, col_idx, *b, format)?;
                }
                Scalar::Int(_) | Scalar::Float(_) => {
                    let number = value.as_f64().unwrap_or_default();
                    if number.is_finite() {
                        worksheet.write_number_with_format(row_idx, col_idx, number, format)?;
                    } else {
                        worksheet.write_string_with_format(row_idx, col_idx, &cell.text, format)?;
                    }
                }
                Scalar::Text(s) => {
                    worksheet.write_string_with_format(row_idx, col_idx, s, format)?;
                }
            }
        }
    }

    workbook
        .save(path)
        .with_context(|| format!("Failed to write workbook: {}", path.display()))?;

    debug!(path = %path.display(), rows = grid.len(), "Exported styled workbook");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::excel::{load_grid, sheet_names};
    use crate::table::Table;

    #[test]
    fn exported_workbook_reads_back() {
        let grid: Grid = vec![
            vec!["".into(), "Q1".into(), "Q2".into()],
            vec!["R1".into(), 10.into(), 20.5.into()],
        ];
        let table = Table::new(grid, 1, 1, true).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.xlsx");
        export_styled_xlsx(table.render(), table.header_extent(), "Table", &path).unwrap();

        assert_eq!(sheet_names(&path).unwrap(), vec!["Table".to_owned()]);
        let missing = load_grid(&path, Some("Other")).unwrap_err().to_string();
        assert!(missing.contains("available: Table"), "{missing}");

        let loaded = load_grid(&path, Some("Table")).unwrap();
        assert_eq!(loaded[0][2], Scalar::from("A"));
        assert_eq!(loaded[2][0], Scalar::from("1"));
        assert_eq!(loaded[2][2], Scalar::Int(10));
        assert_eq!(loaded[2][3], Scalar::Float(20.5));
    }
}
