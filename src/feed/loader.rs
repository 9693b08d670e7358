use crate::error::LoadError;
use crate::feed::models::Unit;
use crate::feed::normalizer::normalize_value;
use serde_json::{json, Value};

/// Parse a feed body (a JSON array of raw unit records) into normalized units.
///
/// Entries that are not objects are skipped with a warning; everything else
/// becomes exactly one Unit.
pub fn load_units_from_str(body: &str) -> Result<Vec<Unit>, LoadError> {
    let value: Value = serde_json::from_str(body).map_err(|e| LoadError::Parse(e.to_string()))?;
    load_units_from_value(&value)
}

pub fn load_units_from_value(value: &Value) -> Result<Vec<Unit>, LoadError> {
    let records = value.as_array().ok_or(LoadError::NotAnArray)?;
    log::info!("Successfully loaded {} units from feed", records.len());

    let mut units = Vec::with_capacity(records.len());
    for (idx, record) in records.iter().enumerate() {
        match normalize_value(record) {
            Some(unit) => units.push(unit),
            None => log::warn!("Skipping feed entry {}: not an object", idx),
        }
    }

    log::info!("Processed {} units successfully", units.len());
    Ok(units)
}

/// Response body of the server-side pass-through: the normalized array, or an
/// error object describing why the upstream feed could not be used.
pub fn proxy_response(result: &Result<Vec<Unit>, LoadError>) -> Value {
    match result {
        Ok(units) => json!(units),
        Err(e) => json!({ "error": format!("Failed to load unit data: {}", e) }),
    }
}
