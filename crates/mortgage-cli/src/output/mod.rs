pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::{Map, Value};

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Split a result object into its scalar fields and its `schedule` rows.
pub(crate) fn split_schedule(result: &Map<String, Value>) -> (Vec<(&str, &Value)>, Option<&[Value]>) {
    let fields = result
        .iter()
        .filter(|(key, _)| key.as_str() != "schedule")
        .map(|(key, val)| (key.as_str(), val))
        .collect();
    let schedule = result
        .get("schedule")
        .and_then(Value::as_array)
        .map(Vec::as_slice);
    (fields, schedule)
}

/// Render a JSON value as a single table or CSV cell.
pub(crate) fn format_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_split_schedule() {
        let result = json!({
            "monthly_payment": "856.07",
            "total_interest": "272.89",
            "schedule": [{"month": 1}, {"month": 2}]
        });
        let (fields, schedule) = split_schedule(result.as_object().unwrap());
        assert_eq!(fields.len(), 2);
        assert!(fields.iter().all(|(k, _)| *k != "schedule"));
        assert_eq!(schedule.map(|rows| rows.len()), Some(2));
    }

    #[test]
    fn test_split_without_schedule() {
        let result = json!({"monthly_payment": "843.21"});
        let (fields, schedule) = split_schedule(result.as_object().unwrap());
        assert_eq!(fields, vec![("monthly_payment", &json!("843.21"))]);
        assert!(schedule.is_none());
    }

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell(&json!("1072.32")), "1072.32");
        assert_eq!(format_cell(&json!(180)), "180");
        assert_eq!(format_cell(&Value::Null), "");
        assert_eq!(format_cell(&json!(true)), "true");
    }
}
