/// Round to the nearest whole number, with halves rounding towards +∞.
///
/// Matches the weather provider's display convention (-2.5 → -2, 2.5 → 3),
/// which differs from `f64::round` for negative halves.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to two decimal places using [`round_half_up`]
pub fn round_hundredths(value: f64) -> f64 {
    round_half_up(value * 100.0) / 100.0
}

/// Map an optional reading through [`round_half_up`], treating zero as absent.
///
/// The provider reports unavailable derived values (wind chill, gusts, ...)
/// as 0, so a zero never reaches the report.
pub fn round_present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0).map(round_half_up)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_half_up_known_values() {
        assert_eq!(round_half_up(27.4), 27.0);
        assert_eq!(round_half_up(27.5), 28.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(0.0), 0.0);
    }

    #[test]
    fn round_hundredths_known_values() {
        assert_eq!(round_hundredths(15.333), 15.33);
        assert_eq!(round_hundredths(22.1), 22.1);
        assert_eq!(round_hundredths(0.456), 0.46);
    }

    #[test]
    fn round_present_drops_zero() {
        assert_eq!(round_present(None), None);
        assert_eq!(round_present(Some(0.0)), None);
        assert_eq!(round_present(Some(25.6)), Some(26.0));
        assert_eq!(round_present(Some(-3.2)), Some(-3.0));
    }
}
