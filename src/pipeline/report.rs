use std::collections::BTreeMap;

use super::types::{Category, FieldValues, ParsedReport, TextSource};

/// Audit excerpt cap, in characters.
pub const RAW_EXCERPT_MAX_CHARS: usize = 1000;

/// Compose the final report from per-category extraction results.
/// Categories with no extracted fields are dropped, never emitted empty.
/// Purely structural; field values are not validated here.
pub fn assemble(
    raw_text: &str,
    report_type_hint: &str,
    category_results: BTreeMap<Category, FieldValues>,
    confidence: f64,
    source: TextSource,
) -> ParsedReport {
    let categories = category_results
        .into_iter()
        .filter(|(_, fields)| !fields.is_empty())
        .collect();

    ParsedReport {
        report_type: report_type_hint.to_string(),
        categories,
        confidence,
        raw_text_excerpt: excerpt(raw_text),
        source,
        error: None,
    }
}

/// Terminal outcome for input with no extractable text: zero categories,
/// confidence 0, an explanatory marker. Not an error: callers render it
/// as "could not read this document" without exception handling.
pub fn no_text_report(report_type_hint: &str, source: TextSource) -> ParsedReport {
    ParsedReport {
        report_type: report_type_hint.to_string(),
        categories: BTreeMap::new(),
        confidence: 0.0,
        raw_text_excerpt: String::new(),
        source,
        error: Some(no_text_marker(source).to_string()),
    }
}

fn no_text_marker(source: TextSource) -> &'static str {
    match source {
        TextSource::PdfText => "no text layer found; document appears to be image-based",
        TextSource::Ocr => "no text recognized in document",
    }
}

/// First `RAW_EXCERPT_MAX_CHARS` characters of the raw input. Character
/// count, not bytes, so multi-byte input is never split.
fn excerpt(raw: &str) -> String {
    raw.chars().take(RAW_EXCERPT_MAX_CHARS).collect()
}
