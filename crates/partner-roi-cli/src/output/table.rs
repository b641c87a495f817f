use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{format_value, monthly_series};

/// Format output as tables using the tabled crate.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(series) = monthly_series(value) {
                print_projection(series, map);
            } else if let Some(Value::Array(rows)) = map.get("results") {
                print_array_table(rows);
            } else if let Some(result) = map.get("result") {
                print_field_table(result);
                print_envelope_notes(map);
            } else {
                print_field_table(value);
            }
        }
        Value::Array(arr) => print_array_table(arr),
        _ => println!("{}", value),
    }
}

fn print_projection(series: &[Value], envelope: &Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Month", "Revenue", "Expenses", "Net Monthly", "Cumulative Cash"]);
    for row in series {
        builder.push_record(
            ["month", "revenue", "expenses", "net_monthly", "cumulative_cash"]
                .map(|k| row.get(k).map(format_value).unwrap_or_default()),
        );
    }
    println!("{}", Table::from(builder));

    if let Some(summary) = envelope.get("result").and_then(|r| r.get("summary")) {
        println!("\nSummary:");
        print_field_table(summary);
    }
    print_envelope_notes(envelope);
}

fn print_field_table(value: &Value) {
    let Value::Object(map) = value else {
        println!("{}", format_value(value));
        return;
    };

    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        let cell = if val.is_null() {
            "n/a".to_string()
        } else {
            format_value(val)
        };
        builder.push_record([key.clone(), cell]);
    }
    println!("{}", Table::from(builder));
}

fn print_envelope_notes(envelope: &Map<String, Value>) {
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    let Some(Value::Object(first)) = arr.first() else {
        for item in arr {
            println!("{}", format_value(item));
        }
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(headers.clone());

    for item in arr {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(h.as_str()).map(format_value).unwrap_or_default())
                .collect();
            builder.push_record(row);
        }
    }

    println!("{}", Table::from(builder));
}
