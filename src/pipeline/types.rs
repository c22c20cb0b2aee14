use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Where the report text came from. Echoed into the output; also selects
/// the confidence default when no per-token scores exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextSource {
    #[serde(rename = "ocr")]
    Ocr,
    #[serde(rename = "pdf-text")]
    PdfText,
}

impl TextSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ocr => "ocr",
            Self::PdfText => "pdf-text",
        }
    }
}

/// Clinical categories the engine knows how to extract.
/// Declaration order is the processing and output order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    #[serde(rename = "bloodTest")]
    BloodCount,
    #[serde(rename = "lipidProfile")]
    LipidProfile,
    #[serde(rename = "kidneyFunction")]
    KidneyFunction,
    #[serde(rename = "liverFunction")]
    LiverFunction,
    #[serde(rename = "diabetesMarkers")]
    DiabetesMarkers,
    #[serde(rename = "thyroidFunction")]
    ThyroidFunction,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::BloodCount,
        Category::LipidProfile,
        Category::KidneyFunction,
        Category::LiverFunction,
        Category::DiabetesMarkers,
        Category::ThyroidFunction,
    ];

    /// Block name under which this category's fields appear in the
    /// assembled report.
    pub fn wire_key(&self) -> &'static str {
        match self {
            Self::BloodCount => "bloodTest",
            Self::LipidProfile => "lipidProfile",
            Self::KidneyFunction => "kidneyFunction",
            Self::LiverFunction => "liverFunction",
            Self::DiabetesMarkers => "diabetesMarkers",
            Self::ThyroidFunction => "thyroidFunction",
        }
    }
}

/// Extracted field values for one category, keyed by field name.
pub type FieldValues = BTreeMap<String, f64>;

/// Input handed to the engine by an upstream extraction collaborator.
///
/// The engine performs no I/O: it receives finalized text plus optional
/// per-token OCR confidences, and nothing else.
#[derive(Debug, Clone)]
pub struct ReportInput {
    pub raw_text: String,
    /// Free-form, case-insensitive report type hint (e.g. "blood_test").
    pub report_type_hint: String,
    /// Per-token OCR confidences in [0,1]. None for text-layer sources.
    pub token_confidences: Option<Vec<f32>>,
    pub source: TextSource,
}

impl ReportInput {
    /// Text recognized by an OCR collaborator, with per-token confidences.
    pub fn ocr(
        raw_text: impl Into<String>,
        token_confidences: Vec<f32>,
        report_type_hint: impl Into<String>,
    ) -> Self {
        Self {
            raw_text: raw_text.into(),
            report_type_hint: report_type_hint.into(),
            token_confidences: Some(token_confidences),
            source: TextSource::Ocr,
        }
    }

    /// Text read from a PDF text layer. No per-token signal exists.
    pub fn pdf_text(raw_text: impl Into<String>, report_type_hint: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            report_type_hint: report_type_hint.into(),
            token_confidences: None,
            source: TextSource::PdfText,
        }
    }

    /// The PDF collaborator's "no extractable text" sentinel. Produces the
    /// terminal report without attempting field extraction.
    pub fn no_text_layer(report_type_hint: impl Into<String>) -> Self {
        Self {
            raw_text: String::new(),
            report_type_hint: report_type_hint.into(),
            token_confidences: None,
            source: TextSource::PdfText,
        }
    }
}

/// The assembled result of one extraction request. Never mutated after
/// construction; the caller owns its storage.
///
/// Category blocks flatten to top-level keys on the wire, so the JSON
/// shape is `{"reportType": …, "bloodTest": {…}, "confidence": …, …}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedReport {
    /// Echo of the caller's report type hint.
    pub report_type: String,
    /// Only categories with at least one extracted field appear here.
    #[serde(flatten)]
    pub categories: BTreeMap<Category, FieldValues>,
    /// Overall confidence in [0,100].
    pub confidence: f64,
    /// First 1000 characters of the raw input, for audit.
    pub raw_text_excerpt: String,
    pub source: TextSource,
    /// Explanatory marker, present only on the no-text terminal outcome.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ParsedReport {
    /// Field values for a category, if the category produced any.
    pub fn category(&self, category: Category) -> Option<&FieldValues> {
        self.categories.get(&category)
    }

    /// Single field lookup, e.g. `report.field(Category::BloodCount, "hemoglobin")`.
    pub fn field(&self, category: Category, name: &str) -> Option<f64> {
        self.categories.get(&category).and_then(|f| f.get(name)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_source_wire_names() {
        assert_eq!(TextSource::Ocr.as_str(), "ocr");
        assert_eq!(TextSource::PdfText.as_str(), "pdf-text");
        assert_eq!(serde_json::to_string(&TextSource::Ocr).unwrap(), "\"ocr\"");
        assert_eq!(
            serde_json::to_string(&TextSource::PdfText).unwrap(),
            "\"pdf-text\""
        );
    }

    #[test]
    fn category_wire_keys_match_serde_renames() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.wire_key()));
        }
    }

    #[test]
    fn category_order_follows_declaration() {
        let mut sorted = Category::ALL;
        sorted.sort();
        assert_eq!(sorted, Category::ALL);
    }

    #[test]
    fn ocr_input_carries_confidences() {
        let input = ReportInput::ocr("Hb 13.5", vec![0.9, 0.8], "blood_test");
        assert_eq!(input.source, TextSource::Ocr);
        assert_eq!(input.token_confidences.as_deref(), Some(&[0.9, 0.8][..]));
    }

    #[test]
    fn pdf_input_has_no_confidences() {
        let input = ReportInput::pdf_text("Cholesterol report", "lipid_profile");
        assert_eq!(input.source, TextSource::PdfText);
        assert!(input.token_confidences.is_none());
    }

    #[test]
    fn no_text_sentinel_is_blank_pdf_input() {
        let input = ReportInput::no_text_layer("blood_test");
        assert!(input.raw_text.is_empty());
        assert_eq!(input.source, TextSource::PdfText);
        assert!(input.token_confidences.is_none());
    }

    #[test]
    fn report_serializes_categories_at_top_level() {
        let mut blood = FieldValues::new();
        blood.insert("hemoglobin".into(), 13.5);
        let mut categories = BTreeMap::new();
        categories.insert(Category::BloodCount, blood);

        let report = ParsedReport {
            report_type: "blood_test".into(),
            categories,
            confidence: 85.0,
            raw_text_excerpt: "Hemoglobin: 13.5".into(),
            source: TextSource::PdfText,
            error: None,
        };

        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["reportType"], "blood_test");
        assert_eq!(json["bloodTest"]["hemoglobin"], 13.5);
        assert_eq!(json["source"], "pdf-text");
        assert!(json.get("error").is_none(), "error key must be omitted");
        assert!(json.get("categories").is_none(), "no nested categories key");
    }

    #[test]
    fn report_round_trips_through_json() {
        let mut lipid = FieldValues::new();
        lipid.insert("ldl".into(), 110.0);
        lipid.insert("hdl".into(), 45.0);
        let mut categories = BTreeMap::new();
        categories.insert(Category::LipidProfile, lipid);

        let report = ParsedReport {
            report_type: "lipid_profile".into(),
            categories,
            confidence: 91.25,
            raw_text_excerpt: "LDL 110 HDL 45".into(),
            source: TextSource::Ocr,
            error: None,
        };

        let json = serde_json::to_string(&report).unwrap();
        let back: ParsedReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn field_lookup_helpers() {
        let mut blood = FieldValues::new();
        blood.insert("wbc".into(), 7200.0);
        let mut categories = BTreeMap::new();
        categories.insert(Category::BloodCount, blood);

        let report = ParsedReport {
            report_type: "blood_test".into(),
            categories,
            confidence: 85.0,
            raw_text_excerpt: String::new(),
            source: TextSource::PdfText,
            error: None,
        };

        assert_eq!(report.field(Category::BloodCount, "wbc"), Some(7200.0));
        assert_eq!(report.field(Category::BloodCount, "rbc"), None);
        assert_eq!(report.field(Category::ThyroidFunction, "tsh"), None);
        assert!(report.category(Category::LipidProfile).is_none());
    }
}
