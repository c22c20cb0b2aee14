use std::collections::BTreeMap;

use super::patterns::{field_specs, FieldSpec};
use super::types::{Category, FieldValues};

/// Run every field cascade of a category against the normalized text.
/// Fields whose cascades all miss are simply absent from the mapping;
/// absence is data, not failure.
pub fn extract_fields(category: Category, normalized_text: &str) -> FieldValues {
    let mut fields = BTreeMap::new();
    for field in field_specs(category) {
        if let Some(value) = run_cascade(field, normalized_text) {
            fields.insert(field.name.to_string(), value);
        }
    }
    fields
}

/// Try patterns strictly in declared order; the first match whose capture
/// coerces to a number wins and the rest of the cascade is skipped. A
/// textual match with a garbled numeric token counts as a miss and the
/// cascade continues.
fn run_cascade(field: &FieldSpec, text: &str) -> Option<f64> {
    field.cascade.iter().find_map(|re| {
        re.captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| coerce_numeric(m.as_str()))
    })
}

/// Strip thousands separators and internal spaces, then parse. None when
/// the cleaned token is empty or does not parse to a finite number.
pub fn coerce_numeric(token: &str) -> Option<f64> {
    let cleaned: String = token
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
