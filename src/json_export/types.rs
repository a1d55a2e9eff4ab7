use indexmap::IndexMap;
use serde_json::Value;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExportFormat {
    /// The rendered grid as an array of arrays.
    Grid,
    /// Body cells keyed by row header, then column header.
    Records,
}

impl FromStr for ExportFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "g" | "grid" => Ok(ExportFormat::Grid),
            "r" | "records" => Ok(ExportFormat::Records),
            _ => Err(()),
        }
    }
}

pub type Records = IndexMap<String, IndexMap<String, Value>>;
