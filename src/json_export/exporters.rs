use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Serialize;

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::json_export::converters::scalar_to_json;
use crate::json_export::extractors::{column_keys, row_keys};
use crate::json_export::types::Records;
use crate::table::Table;

pub fn serialize_to_json<T: Serialize>(data: &T) -> Result<String> {
    serde_json::to_string_pretty(data).context("Failed to serialize data to JSON")
}

pub fn write_json_to_file<T: Serialize>(data: &T, path: &Path) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))?;

    let json_string = serialize_to_json(data)?;

    file.write_all(json_string.as_bytes())
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;

    Ok(())
}

/// Returns `key`, suffixing it with its position when an earlier entry already
/// took the same key.
fn unique_key<V>(map: &IndexMap<String, V>, key: String, position: usize) -> String {
    if map.contains_key(&key) {
        format!("{} ({})", key, position + 1)
    } else {
        key
    }
}

/// Body cells keyed by row key, then column key, in grid order.
pub fn records(table: &Table) -> Records {
    let rows = row_keys(table);
    let columns = column_keys(table);

    let mut records = IndexMap::with_capacity(rows.len());

    for (row_idx, (row_key, cells)) in rows.into_iter().zip(table.body()).enumerate() {
        let mut row_data = IndexMap::with_capacity(columns.len());

        for (col_idx, (col_key, cell)) in columns.iter().zip(cells).enumerate() {
            let key = unique_key(&row_data, col_key.clone(), col_idx);
            row_data.insert(key, scalar_to_json(cell));
        }

        let key = unique_key(&records, row_key, row_idx);
        records.insert(key, row_data);
    }

    records
}
