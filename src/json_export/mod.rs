mod converters;
mod exporters;
mod extractors;
mod types;

pub use converters::{grid_to_json, scalar_to_json};
pub use exporters::{records, serialize_to_json, write_json_to_file};
pub use extractors::{column_keys, row_keys};
pub use types::{ExportFormat, Records};
