//! Excess kurtosis of the chi-squared distribution
//!
//! For `k` degrees of freedom the excess kurtosis is `12 / k`. The
//! distribution is only defined for positive `k`; everything else maps to NaN.

/// Numerator of the closed form
const NUMERATOR: f64 = 12.0;

/// Excess kurtosis of a chi-squared distribution with `k` degrees of freedom
///
/// Returns NaN unless `k` is positive and finite.
///
/// ```rust
/// use chisq_ekurtosis::excess_kurtosis;
///
/// assert_eq!(excess_kurtosis(4.0), 3.0);
/// assert!(excess_kurtosis(0.0).is_nan());
/// ```
#[inline]
pub fn excess_kurtosis(k: f64) -> f64 {
    if !(k > 0.0 && k.is_finite()) {
        return f64::NAN;
    }
    NUMERATOR / k
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_known_values() {
        assert_relative_eq!(excess_kurtosis(2.0), 6.0, epsilon = 1e-5);
        assert_relative_eq!(excess_kurtosis(4.0), 3.0, epsilon = 1e-5);
        assert_relative_eq!(excess_kurtosis(8.0), 1.5, epsilon = 1e-5);
        assert_relative_eq!(excess_kurtosis(16.0), 0.75, epsilon = 1e-5);
        assert_relative_eq!(excess_kurtosis(0.1), 120.0, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_domain_is_nan() {
        for k in [0.0, -0.0, -1.0, f64::NEG_INFINITY, f64::INFINITY, f64::NAN] {
            assert!(excess_kurtosis(k).is_nan(), "k = {k}");
        }
    }

    #[test]
    fn test_tiny_k_stays_finite_or_infinite_but_not_nan() {
        assert!(!excess_kurtosis(f64::MIN_POSITIVE).is_nan());
    }

    proptest! {
        #[test]
        fn prop_matches_closed_form(k in 1e-6f64..1e6) {
            prop_assert!((excess_kurtosis(k) - 12.0 / k).abs() <= 1e-9 * (12.0 / k));
        }

        #[test]
        fn prop_non_positive_is_nan(k in -1e6f64..=0.0) {
            prop_assert!(excess_kurtosis(k).is_nan());
        }
    }
}
