use serde_json::Value;

use super::format_cell;

/// Print just the headline figure: the monthly payment with its currency,
/// or the first field when the result carries no payment.
pub fn print_minimal(value: &Value) {
    println!("{}", headline(value));
}

fn headline(value: &Value) -> String {
    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let Value::Object(map) = result else {
        return format_cell(result);
    };

    match map.get("monthly_payment").filter(|v| !v.is_null()) {
        Some(payment) => match map.get("currency").and_then(Value::as_str) {
            Some(currency) => format!("{} {}", format_cell(payment), currency),
            None => format_cell(payment),
        },
        None => map
            .iter()
            .next()
            .map(|(key, val)| format!("{}: {}", key, format_cell(val)))
            .unwrap_or_default(),
    }
}
