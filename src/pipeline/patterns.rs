//! Declarative field pattern tables: `Category → [FieldSpec]`, each field
//! carrying an ordered regex cascade. The most specific labeled phrasing
//! comes first; looser abbreviation patterns come last because they risk
//! matching unrelated numbers. A single generic interpreter in
//! `extract.rs` walks these tables; there is no per-field control flow.
//!
//! All patterns run against normalized (lowercased, whitespace-collapsed)
//! text, so they are written in lowercase and never need `(?i)`.

use std::sync::LazyLock;

use regex::Regex;

use super::types::Category;

/// One named field and its ordered pattern cascade. Every pattern has
/// exactly one capture group: the numeric token.
pub struct FieldSpec {
    pub name: &'static str,
    pub cascade: Vec<Regex>,
}

/// Numeric token: plain integers ("7200"), decimals ("13.5"), and regional
/// comma grouping ("2,50,000"). Substituted for `{num}` at compile time.
const NUM: &str = r"(\d+(?:,\d+)*(?:\.\d+)?)";

fn spec(name: &'static str, patterns: &[&str]) -> FieldSpec {
    FieldSpec {
        name,
        cascade: patterns
            .iter()
            .map(|p| Regex::new(&p.replace("{num}", NUM)).expect("invalid field pattern"))
            .collect(),
    }
}

static BLOOD_COUNT: LazyLock<Vec<FieldSpec>> = LazyLock::new(|| {
    vec![
        spec(
            "hemoglobin",
            &[
                // OCR-tolerant vowels: hemoglobin / haemoglobin / hemaglobin
                r"h[ae]?[eo]?moglobin[\s:]*{num}",
                r"h[be][\s:]*{num}",
                r"hgb[\s:]*{num}",
                r"hb[\s:]+{num}",
            ],
        ),
        spec(
            "wbc",
            &[
                r"wbc[\s:]*{num}",
                r"white[\s\w]*cell[\s:]*{num}",
                r"w[\s.]?b[\s.]?c[\s:]*{num}",
                r"total[\s\w]*wbc[\s:]*{num}",
            ],
        ),
        spec(
            "rbc",
            &[
                r"rbc[\s:]*{num}",
                r"red[\s\w]*cell[\s:]*{num}",
                r"r[\s.]?b[\s.]?c[\s:]*{num}",
            ],
        ),
        spec(
            "platelets",
            &[
                r"platelet[\w\s]*count[\s:]*{num}",
                r"platelet[\s:]*{num}",
                r"plt[\s:]*{num}",
            ],
        ),
        spec(
            "hematocrit",
            &[
                r"h[ae]?matocrit[\s:]*{num}",
                r"hct[\s:]*{num}",
                // packed cell volume
                r"pcv[\s:]*{num}",
            ],
        ),
        spec(
            "mcv",
            &[
                r"mcv[\s:]*{num}",
                r"mean[\s\w]*corpuscular[\s\w]*volume[\s:]*{num}",
            ],
        ),
        spec(
            "mch",
            &[
                // Separator is mandatory so "mchc" can never be captured.
                r"mch[\s:]+{num}",
                r"mean[\s\w]*corpuscular[\s\w]*hemoglobin[^c][\s:]*{num}",
            ],
        ),
        spec(
            "mchc",
            &[
                r"mchc[\s:]*{num}",
                r"mean[\s\w]*corpuscular[\s\w]*hemoglobin[\s\w]*concentration[\s:]*{num}",
            ],
        ),
    ]
});

static LIPID_PROFILE: LazyLock<Vec<FieldSpec>> = LazyLock::new(|| {
    vec![
        spec(
            "totalCholesterol",
            &[
                r"total[\s\w]*cholesterol[\s:]*{num}",
                r"cholesterol[\s\w]*total[\s:]*{num}",
                r"chol[\s:]*{num}",
            ],
        ),
        spec(
            "ldl",
            &[
                r"ldl[\s\w]*cholesterol[\s:]*{num}",
                r"low[\s\w]*density[\s\w]*lipoprotein[\s:]*{num}",
                r"ldl[\s:]*{num}",
            ],
        ),
        spec(
            "hdl",
            &[
                r"hdl[\s\w]*cholesterol[\s:]*{num}",
                r"high[\s\w]*density[\s\w]*lipoprotein[\s:]*{num}",
                r"hdl[\s:]*{num}",
            ],
        ),
        spec(
            "triglycerides",
            &[
                r"triglycerides?[\s:]*{num}",
                r"trig[\s:]*{num}",
                r"tg[\s:]*{num}",
            ],
        ),
        spec(
            "vldl",
            &[
                r"vldl[\s\w]*cholesterol[\s:]*{num}",
                r"very[\s\w]*low[\s\w]*density[\s:]*{num}",
                r"vldl[\s:]*{num}",
            ],
        ),
    ]
});

static KIDNEY_FUNCTION: LazyLock<Vec<FieldSpec>> = LazyLock::new(|| {
    vec![
        spec(
            "creatinine",
            &[r"creatinine[\s:]*{num}", r"creat[\s:]*{num}"],
        ),
        spec(
            "urea",
            &[
                r"blood[\s\w]*urea[\s:]*{num}",
                r"urea[\s:]*{num}",
                r"bun[\s:]*{num}",
            ],
        ),
        spec(
            "uricAcid",
            &[r"uric[\s\w]*acid[\s:]*{num}", r"urate[\s:]*{num}"],
        ),
        spec(
            "bun",
            &[r"bun.*?{num}", r"blood\s*urea\s*nitrogen.*?{num}"],
        ),
    ]
});

static LIVER_FUNCTION: LazyLock<Vec<FieldSpec>> = LazyLock::new(|| {
    vec![
        // "ast" alone is ambiguous; the sgot label is tried first.
        spec("sgot", &[r"sgot.*?{num}", r"ast.*?{num}"]),
        spec("sgpt", &[r"sgpt.*?{num}", r"alt.*?{num}"]),
        spec(
            "alkalinePhosphatase",
            &[r"alkaline\s*phosphatase.*?{num}", r"alp.*?{num}"],
        ),
        spec("totalBilirubin", &[r"total\s*bilirubin.*?{num}"]),
        spec("directBilirubin", &[r"direct\s*bilirubin.*?{num}"]),
        spec("totalProtein", &[r"total\s*protein.*?{num}"]),
        spec("albumin", &[r"albumin.*?{num}"]),
        spec("globulin", &[r"globulin.*?{num}"]),
    ]
});

static DIABETES_MARKERS: LazyLock<Vec<FieldSpec>> = LazyLock::new(|| {
    vec![
        spec(
            "fastingGlucose",
            &[
                r"fasting\s*glucose.*?{num}",
                r"fasting\s*blood\s*sugar.*?{num}",
            ],
        ),
        spec("randomGlucose", &[r"random\s*glucose.*?{num}"]),
        spec(
            "hba1c",
            &[r"hba1c.*?{num}", r"glycated\s*hemoglobin.*?{num}"],
        ),
        spec(
            "postprandialGlucose",
            &[
                r"postprandial\s*glucose.*?{num}",
                r"pp\s*glucose.*?{num}",
            ],
        ),
    ]
});

static THYROID_FUNCTION: LazyLock<Vec<FieldSpec>> = LazyLock::new(|| {
    vec![
        spec("tsh", &[r"tsh.*?{num}"]),
        spec("t3", &[r"t3.*?{num}"]),
        spec("t4", &[r"t4.*?{num}"]),
        spec("freeT3", &[r"free\s*t3.*?{num}"]),
        spec("freeT4", &[r"free\s*t4.*?{num}"]),
    ]
});

/// Field table for one category. Order within the table and within each
/// cascade is normative.
pub fn field_specs(category: Category) -> &'static [FieldSpec] {
    match category {
        Category::BloodCount => &BLOOD_COUNT,
        Category::LipidProfile => &LIPID_PROFILE,
        Category::KidneyFunction => &KIDNEY_FUNCTION,
        Category::LiverFunction => &LIVER_FUNCTION,
        Category::DiabetesMarkers => &DIABETES_MARKERS,
        Category::ThyroidFunction => &THYROID_FUNCTION,
    }
}
