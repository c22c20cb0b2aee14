/// Lowercased, whitespace-collapsed copy of the raw text, used only for
/// pattern matching. The raw text itself is preserved for the audit excerpt.
/// Digits and the punctuation numeric matching relies on (decimal points,
/// colons, commas) pass through unchanged.
pub fn normalize_for_matching(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_input() {
        assert_eq!(normalize_for_matching("Hemoglobin"), "hemoglobin");
        assert_eq!(normalize_for_matching("WBC"), "wbc");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(
            normalize_for_matching("Hemoglobin:   13.5\t\tg/dL\n\nWBC: 7200"),
            "hemoglobin: 13.5 g/dl wbc: 7200"
        );
    }

    #[test]
    fn trims_leading_and_trailing_whitespace() {
        assert_eq!(normalize_for_matching("  TSH: 2.5  "), "tsh: 2.5");
    }

    #[test]
    fn preserves_numeric_punctuation() {
        assert_eq!(
            normalize_for_matching("Platelet Count: 2,50,000"),
            "platelet count: 2,50,000"
        );
        assert_eq!(normalize_for_matching("HbA1c: 6.5%"), "hba1c: 6.5%");
    }

    #[test]
    fn empty_input_returns_empty() {
        assert_eq!(normalize_for_matching(""), "");
        assert_eq!(normalize_for_matching("   \n\t "), "");
    }

    #[test]
    fn idempotent_on_already_normalized_text() {
        let once = normalize_for_matching("Total Cholesterol: 185");
        assert_eq!(normalize_for_matching(&once), once);
    }
}
