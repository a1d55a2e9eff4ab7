use calamine::Data;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::grid::Scalar;

/// Converts an Excel date serial (1900 system) to ISO text: a date, or a
/// date-time when the serial carries a time of day.
pub fn excel_serial_to_iso(serial: f64) -> Option<String> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }

    // Serial 60 is the fictitious 1900-02-29; later serials are one day ahead.
    let days = if serial > 59.0 { serial - 1.0 } else { serial };
    let base = NaiveDate::from_ymd_opt(1899, 12, 31)?;
    let date = base.checked_add_signed(Duration::days(days.trunc() as i64))?;

    let seconds = (days.fract() * 86_400.0).round() as u32;
    if seconds == 0 {
        return Some(date.format("%Y-%m-%d").to_string());
    }

    let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds.min(86_399), 0)?;
    Some(
        NaiveDateTime::new(date, time)
            .format("%Y-%m-%dT%H:%M:%S")
            .to_string(),
    )
}

/// Maps a calamine cell onto a grid value.
pub fn data_to_scalar(cell: &Data) -> Scalar {
    match cell {
        Data::Empty => Scalar::Null,
        Data::String(s) => Scalar::Text(s.clone()),
        Data::Int(i) => Scalar::Int(*i),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                Scalar::Int(*f as i64)
            } else {
                Scalar::Float(*f)
            }
        }
        Data::Bool(b) => Scalar::Bool(*b),
        Data::DateTime(dt) => match excel_serial_to_iso(dt.as_f64()) {
            Some(iso) => Scalar::Text(iso),
            None => Scalar::Float(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => Scalar::Text(s.clone()),
        Data::Error(e) => Scalar::Text(format!("#ERR {:?}", e)),
    }
}
