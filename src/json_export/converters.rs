use serde_json::{json, Number, Value};

use crate::grid::{Grid, Scalar};

pub fn scalar_to_json(value: &Scalar) -> Value {
    match value {
        Scalar::Null => Value::Null,
        Scalar::Bool(b) => json!(b),
        Scalar::Int(i) => json!(i),
        Scalar::Float(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
        Scalar::Text(s) => json!(s),
    }
}

pub fn grid_to_json(grid: &Grid) -> Value {
    Value::Array(
        grid.iter()
            .map(|row| Value::Array(row.iter().map(scalar_to_json).collect()))
            .collect(),
    )
}
