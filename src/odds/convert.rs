//! Conversions between American odds, contract prices and implied probability

use rust_decimal::prelude::ToPrimitive;

use super::OddsError;

/// Convert American odds to implied probability
///
/// +150 -> 0.4000, -200 -> 0.6667. Values inside (-100, 100) are computed
/// by the same formula; only zero is rejected.
pub fn american_to_implied(odds: i32) -> Result<f64, OddsError> {
    if odds == 0 {
        return Err(OddsError::ZeroAmericanOdds);
    }

    let odds = f64::from(odds);
    if odds > 0.0 {
        Ok(100.0 / (odds + 100.0))
    } else {
        Ok(odds.abs() / (odds.abs() + 100.0))
    }
}

/// Convert implied probability to American odds
///
/// 0.40 -> +150, 0.667 -> -200. Probabilities at or above 0.5 take the
/// favourite branch, so 0.5 maps to -100. Longshots whose odds do not fit
/// in an i32 (below roughly 4.7e-8) are rejected.
pub fn implied_to_american(prob: f64) -> Result<i32, OddsError> {
    if !(prob > 0.0 && prob < 1.0) {
        return Err(OddsError::ProbabilityOutOfRange(prob));
    }

    let american = if prob < 0.5 {
        100.0 / prob - 100.0
    } else {
        -100.0 * prob / (1.0 - prob)
    };

    round_half_up(american)
        .to_i32()
        .ok_or(OddsError::ProbabilityOutOfRange(prob))
}

/// Convert a prediction-market price in cents to implied probability
pub fn cents_to_implied(cents: f64) -> Result<f64, OddsError> {
    if !(cents > 0.0 && cents <= 100.0) {
        return Err(OddsError::PriceOutOfRange(cents));
    }
    Ok(cents / 100.0)
}

/// Format American odds for display
///
/// 150 -> "+150", -200 -> "-200", 0 -> "0"
pub fn format_odds(odds: i32) -> String {
    if odds > 0 {
        format!("+{odds}")
    } else {
        odds.to_string()
    }
}

/// Format a probability as a one-decimal percentage, e.g. 0.4 -> "40.0%"
pub fn format_probability(prob: f64) -> String {
    format!("{:.1}%", prob * 100.0)
}

// Ties round toward positive infinity: -100.5 -> -100, 100.5 -> 101
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_american_to_implied_underdog() {
        let prob = american_to_implied(150).unwrap();
        assert!((prob - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_american_to_implied_favourite() {
        let prob = american_to_implied(-200).unwrap();
        assert!((prob - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_american_to_implied_even_money() {
        assert_eq!(american_to_implied(100).unwrap(), 0.5);
        assert_eq!(american_to_implied(-100).unwrap(), 0.5);
    }

    #[test]
    fn test_american_to_implied_inside_band_is_computed() {
        // Not conventional odds, but the formula still applies
        let prob = american_to_implied(50).unwrap();
        assert!((prob - 100.0 / 150.0).abs() < 1e-12);
    }

    #[test]
    fn test_american_to_implied_zero() {
        assert_eq!(american_to_implied(0), Err(OddsError::ZeroAmericanOdds));
    }

    #[test]
    fn test_implied_to_american() {
        assert_eq!(implied_to_american(0.40).unwrap(), 150);
        assert_eq!(implied_to_american(0.45).unwrap(), 122);
        assert_eq!(implied_to_american(2.0 / 3.0).unwrap(), -200);
        assert_eq!(implied_to_american(0.5).unwrap(), -100);
    }

    #[test]
    fn test_implied_to_american_rejects_bounds() {
        for prob in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            assert!(matches!(
                implied_to_american(prob),
                Err(OddsError::ProbabilityOutOfRange(_))
            ));
        }
    }

    #[test]
    fn test_implied_to_american_rejects_unrepresentable_odds() {
        // True values are about +99999999900 and -99999999900
        for prob in [1e-9, 1.0 - 1e-9] {
            assert_eq!(
                implied_to_american(prob),
                Err(OddsError::ProbabilityOutOfRange(prob))
            );
        }
        // Still inside i32
        assert_eq!(implied_to_american(1e-7).unwrap(), 999_999_900);
    }

    #[test]
    fn test_round_trip() {
        for odds in [101, 110, 150, 250, 1000, 5000, -101, -110, -200, -350, -1200] {
            let prob = american_to_implied(odds).unwrap();
            assert_eq!(implied_to_american(prob).unwrap(), odds, "odds {odds}");
        }
    }

    #[test]
    fn test_round_trip_boundary() {
        // Even money lands on the favourite branch from either side
        let from_plus = american_to_implied(100).unwrap();
        let from_minus = american_to_implied(-100).unwrap();
        assert_eq!(implied_to_american(from_plus).unwrap(), -100);
        assert_eq!(implied_to_american(from_minus).unwrap(), -100);
    }

    #[test]
    fn test_continuity_near_even() {
        let below = implied_to_american(0.4999).unwrap();
        let above = implied_to_american(0.5001).unwrap();
        assert_eq!(below, 100);
        assert_eq!(above, -100);
    }

    #[test]
    fn test_cents_to_implied() {
        assert_eq!(cents_to_implied(58.0).unwrap(), 0.58);
        assert_eq!(cents_to_implied(100.0).unwrap(), 1.0);
        assert!(cents_to_implied(0.0).is_err());
        assert!(cents_to_implied(100.5).is_err());
    }

    #[test]
    fn test_format_odds() {
        assert_eq!(format_odds(150), "+150");
        assert_eq!(format_odds(-200), "-200");
        assert_eq!(format_odds(0), "0");
    }

    #[test]
    fn test_format_probability() {
        assert_eq!(format_probability(0.4), "40.0%");
        assert_eq!(format_probability(2.0 / 3.0), "66.7%");
    }
}
