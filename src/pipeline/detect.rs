use super::types::Category;

/// Activation signals for one category: a token looked up in the caller's
/// report type hint, and keywords sniffed in the normalized text.
struct CategoryTriggers {
    category: Category,
    hint_token: &'static str,
    keywords: &'static [&'static str],
}

/// Categories are evaluated independently; no priority, no suppression.
const TRIGGERS: [CategoryTriggers; 6] = [
    CategoryTriggers {
        category: Category::BloodCount,
        hint_token: "blood",
        keywords: &["cbc", "hemoglobin", "haemoglobin"],
    },
    CategoryTriggers {
        category: Category::LipidProfile,
        hint_token: "lipid",
        keywords: &["cholesterol"],
    },
    CategoryTriggers {
        category: Category::KidneyFunction,
        hint_token: "kidney",
        keywords: &["kidney", "creatinine", "urea"],
    },
    CategoryTriggers {
        category: Category::LiverFunction,
        hint_token: "liver",
        keywords: &["liver", "sgot", "sgpt"],
    },
    CategoryTriggers {
        category: Category::DiabetesMarkers,
        hint_token: "diabetes",
        keywords: &["diabetes", "glucose", "hba1c"],
    },
    CategoryTriggers {
        category: Category::ThyroidFunction,
        hint_token: "thyroid",
        keywords: &["thyroid", "tsh"],
    },
];

/// Decide which categories are active for this text. A category is active
/// iff the hint contains its token (case-insensitive) or any trigger
/// keyword occurs as a substring of the normalized text. Result follows
/// `Category` declaration order; may be empty, may contain all six.
pub fn detect_categories(normalized_text: &str, report_type_hint: &str) -> Vec<Category> {
    let hint = report_type_hint.to_lowercase();
    TRIGGERS
        .iter()
        .filter(|t| {
            hint.contains(t.hint_token) || t.keywords.iter().any(|k| normalized_text.contains(k))
        })
        .map(|t| t.category)
        .collect()
}
