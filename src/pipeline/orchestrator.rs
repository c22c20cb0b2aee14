//! One-shot extraction pipeline: boundary validation → no-text
//! short-circuit → normalize → detect → extract → score → assemble.
//!
//! Stateless and allocation-local; every call is independent and safe to
//! run concurrently. Observability goes through the `tracing` facade;
//! hosts and tests install their own subscriber.

use std::collections::BTreeMap;

use super::confidence::score_token_confidences;
use super::detect::detect_categories;
use super::extract::extract_fields;
use super::normalize::normalize_for_matching;
use super::report::{assemble, no_text_report};
use super::types::{ParsedReport, ReportInput};
use super::EngineError;

/// Turn one report's text into a structured result.
///
/// Field and category misses are ordinary outcomes, never errors; the only
/// `Err` is structurally invalid input (a token confidence outside [0,1]).
pub fn parse_report(input: &ReportInput) -> Result<ParsedReport, EngineError> {
    validate_token_confidences(input.token_confidences.as_deref())?;

    if input.raw_text.trim().is_empty() {
        tracing::info!(
            source = input.source.as_str(),
            hint = %input.report_type_hint,
            "No extractable text; emitting terminal report"
        );
        return Ok(no_text_report(&input.report_type_hint, input.source));
    }

    let normalized = normalize_for_matching(&input.raw_text);
    let active = detect_categories(&normalized, &input.report_type_hint);
    tracing::debug!(
        hint = %input.report_type_hint,
        active = active.len(),
        "Detected active categories"
    );

    let mut results = BTreeMap::new();
    for category in active {
        let fields = extract_fields(category, &normalized);
        tracing::debug!(
            category = category.wire_key(),
            fields = fields.len(),
            "Extracted category fields"
        );
        results.insert(category, fields);
    }

    let confidence = score_token_confidences(input.token_confidences.as_deref());
    Ok(assemble(
        &input.raw_text,
        &input.report_type_hint,
        results,
        confidence,
        input.source,
    ))
}

/// Reject structurally invalid confidence data at the boundary rather than
/// letting a NaN or out-of-range value poison the mean.
fn validate_token_confidences(tokens: Option<&[f32]>) -> Result<(), EngineError> {
    if let Some(tokens) = tokens {
        for (index, &value) in tokens.iter().enumerate() {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(EngineError::InvalidTokenConfidence { index, value });
            }
        }
    }
    Ok(())
}
