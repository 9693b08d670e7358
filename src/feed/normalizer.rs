use crate::feed::models::*;
use serde_json::{Map, Value};

/// Turn one loosely shaped feed record into a Unit.
///
/// Never fails. Each field is reconciled independently and every anomaly
/// falls back to a default, so the rules can be applied in any order.
pub fn normalize_record(raw: &Map<String, Value>) -> Unit {
    let unit_type = text_field(raw, &["type"]);
    let rent = normalize_rent(raw.get("rent"));

    let hpd_type = unit_type
        .as_deref()
        .is_some_and(|t| t.trim().eq_ignore_ascii_case(HPD));

    let formatted_rent = if rent == Rent::Hpd || hpd_type {
        HPD.to_string()
    } else {
        match rent {
            Rent::Amount(value) => format_currency(value),
            _ => String::new(),
        }
    };

    Unit {
        id: normalize_id(text_field(raw, &["unit", "id"])),
        building: normalize_building(raw.get("building")),
        bed_bath: text_field(raw, &["bedBath", "bedbath"]).unwrap_or_else(|| "N/A".to_string()),
        unit_type,
        rent,
        formatted_rent,
        outdoor: match raw.get("outdoor").and_then(scalar_text) {
            Some(outdoor) => fix_view_typo(&outdoor),
            None => "none".to_string(),
        },
        view: text_field(raw, &["view"]).map(|v| fix_view_typo(&v)),
        images: normalize_images(raw.get("images")),
        description: normalize_description(raw.get("description")),
        is_leased: normalize_leased(
            ["isleased", "isLeased"]
                .iter()
                .filter_map(|key| raw.get(*key))
                .find(|v| !v.is_null()),
        ),
        sqft: normalize_sqft(raw.get("sqft")),
    }
}

/// Normalize any JSON value; only objects are unit records.
pub fn normalize_value(value: &Value) -> Option<Unit> {
    value.as_object().map(normalize_record)
}

// First key holding a non-empty string or a number
fn text_field(raw: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| raw.get(*key))
        .filter_map(scalar_text)
        .find(|text| !text.is_empty())
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn normalize_id(label: Option<String>) -> String {
    match label {
        Some(label) if label.starts_with(UNIT_PREFIX) => label,
        Some(label) => format!("{}{}", UNIT_PREFIX, label),
        None => format!("{}N/A", UNIT_PREFIX),
    }
}

fn normalize_building(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(true)) => "true".to_string(),
        _ => String::new(),
    }
}

fn normalize_rent(value: Option<&Value>) -> Rent {
    match value {
        Some(Value::String(s)) if s.trim().eq_ignore_ascii_case(HPD) => Rent::Hpd,
        Some(Value::String(s)) => parse_amount(s).map(Rent::Amount).unwrap_or(Rent::Unpriced),
        Some(Value::Number(n)) => n
            .as_f64()
            .and_then(|v| parse_amount(&v.to_string()))
            .map(Rent::Amount)
            .unwrap_or(Rent::Unpriced),
        _ => Rent::Unpriced,
    }
}

fn normalize_images(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

fn normalize_description(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(s)) => s
            .split('.')
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .map(|sentence| format!("{}.", sentence))
            .collect(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

fn normalize_leased(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        Some(Value::String(s)) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "1" | "leased"
        ),
        _ => false,
    }
}

fn normalize_sqft(value: Option<&Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => parse_amount(s),
        _ => None,
    }
}

// The upstream sheet misspells "view" in free text
fn fix_view_typo(text: &str) -> String {
    text.replace("veiw", "view").replace("Veiw", "View")
}
