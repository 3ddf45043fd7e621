//! Gap calculation
//!
//! Difference between sportsbook consensus and prediction-market consensus
//! implied probability, in percentage points

use std::cmp::Ordering;

use rust_decimal::Decimal;

use super::aggregate::{Consensus, Mean, Sample};
use super::{Direction, EdgeCalculation, GameGap, SideGap};
use crate::odds::{american_to_implied, implied_to_american, OddsError, OddsQuote, Outcome};
use crate::telemetry;

/// Unrounded gap in percentage points (4.2 means 4.2%)
pub fn team_gap(sportsbook_implied: f64, prediction_implied: f64) -> f64 {
    (sportsbook_implied - prediction_implied).abs() * 100.0
}

/// Round percentage points to one decimal, ties away from zero
///
/// The result always carries scale 1 so it displays as e.g. "5.0".
pub fn round_gap(points: f64) -> Decimal {
    let rounded = (points * 10.0).round() / 10.0;
    let mut gap = Decimal::try_from(rounded)
        .unwrap_or(Decimal::ZERO)
        .round_dp(1);
    gap.rescale(1);
    gap
}

/// Compare one sportsbook line against one contract price
///
/// Fails when the contract trades at exactly 0 or 100 cents (or outside
/// that range), since no fair American price exists there.
pub fn calculate_edge(
    sportsbook_odds: i32,
    prediction_price_cents: f64,
) -> Result<EdgeCalculation, OddsError> {
    let sportsbook_implied = american_to_implied(sportsbook_odds)?;
    let prediction_implied = prediction_price_cents / 100.0;
    let fair_value_american = implied_to_american(prediction_implied)?;

    Ok(EdgeCalculation {
        gap: round_gap(team_gap(sportsbook_implied, prediction_implied)),
        sportsbook_implied,
        prediction_implied,
        direction: Direction::from_implied(sportsbook_implied, prediction_implied),
        fair_value_american,
    })
}

/// Maximum side gap for a fixture, averaging quotes per side
pub fn max_gap_for_game(sportsbook: &[OddsQuote], prediction: &[OddsQuote]) -> GameGap {
    max_gap_for_game_with(&Mean, sportsbook, prediction)
}

/// Maximum side gap for a fixture using the given consensus
///
/// A side missing quotes on either source is skipped. Quotes whose value
/// cannot be converted are dropped with a warning.
pub fn max_gap_for_game_with(
    consensus: &dyn Consensus,
    sportsbook: &[OddsQuote],
    prediction: &[OddsQuote],
) -> GameGap {
    let mut sides = Vec::new();
    let mut max_gap = 0.0_f64;

    for outcome in Outcome::ALL {
        let sb_samples = side_samples(sportsbook, outcome);
        let pm_samples = side_samples(prediction, outcome);
        if sb_samples.is_empty() || pm_samples.is_empty() {
            continue;
        }

        let (Some(sb_avg), Some(pm_avg)) = (
            consensus.consensus(&sb_samples),
            consensus.consensus(&pm_samples),
        ) else {
            continue;
        };

        let gap = team_gap(sb_avg, pm_avg);
        max_gap = max_gap.max(gap);
        sides.push(SideGap {
            outcome,
            sportsbook_implied: sb_avg,
            prediction_implied: pm_avg,
            gap: round_gap(gap),
        });
    }

    if sides.is_empty() {
        return GameGap::no_data();
    }

    GameGap {
        gap: round_gap(max_gap),
        has_data: true,
        sides,
    }
}

/// Sort comparator: highest gap first, computed gaps before no-data
pub fn by_max_gap_desc(a: &GameGap, b: &GameGap) -> Ordering {
    b.gap.cmp(&a.gap).then(b.has_data.cmp(&a.has_data))
}

/// Implied probabilities quoted for one outcome, skipping unusable quotes
pub(crate) fn side_samples(quotes: &[OddsQuote], outcome: Outcome) -> Vec<Sample<'_>> {
    quotes
        .iter()
        .filter(|q| q.outcome == outcome)
        .filter_map(|q| match q.implied_probability() {
            Ok(p) => Some(Sample::new(&q.source, p)),
            Err(e) => {
                tracing::warn!(source = %q.source, outcome = %outcome, error = %e, "Skipping quote");
                telemetry::record_invalid_quote(q.venue);
                None
            }
        })
        .collect()
}
