use serde_json::Value;
use std::io;

use partner_roi_core::export;
use partner_roi_core::projection::MonthlyRecord;

use super::{format_value, monthly_series};

/// Write output as CSV to stdout.
///
/// Projections are written in the export layout (one row per month); any
/// other output falls back to field/value pairs or one row per result.
pub fn print_csv(value: &Value) {
    let written = match monthly_series(value) {
        Some(series) => write_projection_csv(series, io::stdout().lock()),
        None => write_value_csv(value, io::stdout().lock()),
    };
    if let Err(e) = written {
        eprintln!("CSV export error: {}", e);
    }
}

fn write_projection_csv<W: io::Write>(
    series: &[Value],
    writer: W,
) -> Result<(), Box<dyn std::error::Error>> {
    let records: Vec<MonthlyRecord> = series
        .iter()
        .map(|v| serde_json::from_value(v.clone()))
        .collect::<Result<_, _>>()?;
    export::write_monthly_csv(&records, writer)?;
    Ok(())
}

fn write_value_csv<W: io::Write>(
    value: &Value,
    writer: W,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_writer(writer);

    match value {
        Value::Object(map) => {
            if let Some(Value::Array(results)) = map.get("results") {
                write_array_csv(&mut wtr, results)?;
            } else {
                wtr.write_record(["field", "value"])?;
                for (key, val) in map {
                    wtr.write_record([key.as_str(), &format_value(val)])?;
                }
            }
        }
        Value::Array(arr) => write_array_csv(&mut wtr, arr)?,
        _ => wtr.write_record([&format_value(value)])?,
    }

    wtr.flush()?;
    Ok(())
}

fn write_array_csv<W: io::Write>(wtr: &mut csv::Writer<W>, arr: &[Value]) -> csv::Result<()> {
    let Some(Value::Object(first)) = arr.first() else {
        for item in arr {
            wtr.write_record([&format_value(item)])?;
        }
        return Ok(());
    };

    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    wtr.write_record(&headers)?;

    for item in arr {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(*h).map(format_value).unwrap_or_default())
                .collect();
            wtr.write_record(&row)?;
        }
    }
    Ok(())
}
