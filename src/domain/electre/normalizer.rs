//! Weight Normalizer - Raw criterion weights to a probability-like vector.

/// Normalization of raw ELECTRE weight entries.
pub struct WeightNormalizer;

impl WeightNormalizer {
    /// Divides every raw weight by their sum, preserving order and length.
    ///
    /// For a vector with positive sum the result sums to 1 and preserves
    /// the ratios between entries. When the sum is zero the division is
    /// mathematically undefined and every entry comes back NaN; the
    /// normalizer does not detect that case, callers are expected to guard
    /// against an all-zero vector before submitting.
    pub fn normalize(raw: &[f64]) -> Vec<f64> {
        let sum: f64 = raw.iter().sum();
        raw.iter().map(|w| w / sum).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn equal_weights_normalize_to_equal_shares() {
        assert_eq!(WeightNormalizer::normalize(&[2.0, 2.0]), vec![0.5, 0.5]);
    }

    #[test]
    fn normalized_weights_sum_to_one() {
        let normalized = WeightNormalizer::normalize(&[1.0, 2.0, 3.0, 4.0]);
        let sum: f64 = normalized.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn normalization_preserves_ratios() {
        let normalized = WeightNormalizer::normalize(&[3.0, 1.0]);
        assert!((normalized[0] / normalized[1] - 3.0).abs() < 1e-9);
    }

    #[test]
    fn order_and_length_are_preserved() {
        let normalized = WeightNormalizer::normalize(&[0.0, 5.0, 0.0]);
        assert_eq!(normalized.len(), 3);
        assert_eq!(normalized[0], 0.0);
        assert_eq!(normalized[1], 1.0);
        assert_eq!(normalized[2], 0.0);
    }

    #[test]
    fn zero_sum_yields_indeterminate_entries() {
        let normalized = WeightNormalizer::normalize(&[0.0, 0.0]);
        assert!(normalized.iter().all(|w| w.is_nan()));
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(WeightNormalizer::normalize(&[]).is_empty());
    }

    proptest! {
        #[test]
        fn positive_vectors_normalize_to_unit_sum(
            raw in proptest::collection::vec(0.01f64..100.0, 1..8)
        ) {
            let normalized = WeightNormalizer::normalize(&raw);
            let sum: f64 = normalized.iter().sum();
            prop_assert!((sum - 1.0).abs() < 1e-9);
        }

        #[test]
        fn normalization_preserves_pairwise_ratios(
            a in 0.01f64..100.0,
            b in 0.01f64..100.0,
        ) {
            let normalized = WeightNormalizer::normalize(&[a, b]);
            prop_assert!((normalized[0] / normalized[1] - a / b).abs() < 1e-9);
        }
    }
}
