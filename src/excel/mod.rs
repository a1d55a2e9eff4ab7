mod convert;
mod workbook;

pub use convert::{data_to_scalar, excel_serial_to_iso};
pub use workbook::{load_grid, sheet_names};
