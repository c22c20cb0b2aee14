/// Fixed scores used when the source carries no per-token signal.
pub mod defaults {
    /// Text-layer extraction is trusted highly without token scores.
    pub const TEXT_LAYER_CONFIDENCE: f64 = 85.0;

    /// An OCR pass that produced zero tokens has nothing to vouch for.
    pub const NO_SIGNAL_CONFIDENCE: f64 = 0.0;
}

/// Overall confidence percentage in [0,100].
///
/// `Some(tokens)`: arithmetic mean of the per-token confidences (each in
/// [0,1]) scaled to a percentage and rounded to two decimals; an empty
/// slice yields 0.0. `None` (text-layer source): the fixed constant.
pub fn score_token_confidences(tokens: Option<&[f32]>) -> f64 {
    match tokens {
        None => defaults::TEXT_LAYER_CONFIDENCE,
        Some([]) => defaults::NO_SIGNAL_CONFIDENCE,
        Some(tokens) => {
            let mean = tokens.iter().map(|c| f64::from(*c)).sum::<f64>() / tokens.len() as f64;
            round2(mean * 100.0)
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_scaled_to_percentage() {
        let score = score_token_confidences(Some(&[0.9, 0.8, 0.7]));
        assert!((score - 80.0).abs() < 1e-9, "expected 80.0, got {score}");
    }

    #[test]
    fn rounded_to_two_decimals() {
        // Mean of 1/3 → 33.333…% → 33.33
        let score = score_token_confidences(Some(&[0.0, 0.0, 1.0]));
        assert!((score - 33.33).abs() < 1e-9, "expected 33.33, got {score}");
    }

    #[test]
    fn empty_tokens_score_zero() {
        assert_eq!(score_token_confidences(Some(&[])), 0.0);
    }

    #[test]
    fn absent_tokens_use_text_layer_constant() {
        assert_eq!(
            score_token_confidences(None),
            defaults::TEXT_LAYER_CONFIDENCE
        );
    }

    #[test]
    fn perfect_tokens_score_one_hundred() {
        assert_eq!(score_token_confidences(Some(&[1.0, 1.0])), 100.0);
    }

    #[test]
    fn all_zero_tokens_score_zero() {
        assert_eq!(score_token_confidences(Some(&[0.0, 0.0, 0.0])), 0.0);
    }

    #[test]
    fn single_token_passes_through() {
        let score = score_token_confidences(Some(&[0.42]));
        assert!((score - 42.0).abs() < 1e-9);
    }

    #[test]
    fn score_always_within_percentage_bounds() {
        for tokens in [&[0.0_f32][..], &[1.0][..], &[0.5, 0.25, 0.75][..], &[0.999][..]] {
            let score = score_token_confidences(Some(tokens));
            assert!((0.0..=100.0).contains(&score), "out of bounds: {score}");
        }
    }
}
