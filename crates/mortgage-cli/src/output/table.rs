use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{format_cell, split_schedule};

/// Format output as tables: the headline figures, then the schedule when
/// present, then warnings and methodology from the envelope.
pub fn print_table(value: &Value) {
    let Value::Object(envelope) = value else {
        println!("{}", value);
        return;
    };

    match envelope.get("result") {
        Some(Value::Object(result)) => {
            let (fields, schedule) = split_schedule(result);
            print_fields(&fields);
            if let Some(rows) = schedule {
                println!();
                print_schedule(rows);
            }
        }
        _ => {
            let fields: Vec<(&str, &Value)> =
                envelope.iter().map(|(k, v)| (k.as_str(), v)).collect();
            print_fields(&fields);
            return;
        }
    }

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
    if let Some(Value::String(formula)) = value.pointer("/metadata/formula") {
        println!("Formula: {}", formula);
    }
}

fn print_fields(fields: &[(&str, &Value)]) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in fields {
        builder.push_record([key.to_string(), format_cell(val)]);
    }
    println!("{}", Table::from(builder));
}

fn print_schedule(rows: &[Value]) {
    let mut builder = Builder::default();
    builder.push_record(["Month", "Principal", "Interest", "Balance"]);
    for row in rows {
        builder.push_record(
            ["month", "principal_payment", "interest_payment", "remaining_balance"]
                .map(|key| row.get(key).map(format_cell).unwrap_or_default()),
        );
    }
    println!("{}", Table::from(builder));
}
