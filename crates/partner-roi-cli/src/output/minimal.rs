use serde_json::Value;

use super::format_value;

/// Print just the headline figure.
///
/// Projections print the breakeven month (`never` when the horizon ends in
/// deficit); other outputs print the first field of the result.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_line(value));
}

fn minimal_line(value: &Value) -> String {
    let result_obj = value.get("result").unwrap_or(value);

    if let Some(summary) = result_obj.get("summary") {
        return match summary.get("breakeven_month") {
            Some(Value::Number(n)) => n.to_string(),
            _ => "never".to_string(),
        };
    }

    if let Some(Value::Array(rows)) = result_obj.get("results") {
        return rows
            .iter()
            .map(|row| {
                let name = row.get("preset").map(format_value).unwrap_or_default();
                match row.get("breakeven_month") {
                    Some(Value::Number(n)) => format!("{}: {}", name, n),
                    _ => format!("{}: never", name),
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
    }

    match result_obj {
        Value::Object(map) => map
            .iter()
            .next()
            .map(|(key, val)| format!("{}: {}", key, format_value(val)))
            .unwrap_or_default(),
        other => format_value(other),
    }
}
