//! End-to-end edge scenarios through the public API

use drip_edge::devig::devig_power;
use drip_edge::edge::{calculate_edge, max_gap_for_game, Direction};
use drip_edge::insight::{get_confidence, Confidence, InsightEngine};
use drip_edge::odds::{
    american_to_implied, format_odds, implied_to_american, Fixture, OddsError, OddsQuote, Outcome,
};
use rust_decimal_macros::dec;

#[test]
fn test_underdog_priced_higher_on_market() {
    let edge = calculate_edge(150, 45.0).unwrap();
    assert!((edge.sportsbook_implied - 0.4).abs() < 1e-4);
    assert!((edge.prediction_implied - 0.45).abs() < 1e-12);
    assert_eq!(edge.gap, dec!(5.0));
    assert_eq!(edge.direction, Direction::PredictionHigh);
    assert_eq!(format_odds(edge.fair_value_american), "+122");
}

#[test]
fn test_favourite_priced_lower_on_market() {
    let edge = calculate_edge(-200, 58.0).unwrap();
    assert!((edge.sportsbook_implied - 0.6667).abs() < 1e-4);
    assert_eq!(edge.gap, dec!(8.7));
    assert_eq!(edge.direction, Direction::SportsbookHigh);
}

#[test]
fn test_three_way_devig() {
    let fair = devig_power(&[0.50, 0.35, 0.20]);
    assert!((fair.iter().sum::<f64>() - 1.0).abs() < 0.001);
    assert!(fair[0] > fair[1] && fair[0] > fair[2]);
}

#[test]
fn test_missing_sportsbook_side() {
    let game = max_gap_for_game(&[], &[OddsQuote::prediction_market("kalshi", Outcome::Home, 50.0)]);
    assert_eq!(game.gap, dec!(0));
    assert!(!game.has_data);

    // Same call shape, but a side that is quoted on both sources and aligned
    let aligned = max_gap_for_game(
        &[OddsQuote::sportsbook("fanduel", Outcome::Away, 100)],
        &[
            OddsQuote::prediction_market("kalshi", Outcome::Home, 50.0),
            OddsQuote::prediction_market("kalshi", Outcome::Away, 50.0),
        ],
    );
    assert_eq!(aligned.gap, dec!(0));
    assert!(aligned.has_data);
}

#[test]
fn test_round_trip_both_branches() {
    for odds in [150, -200, 120, -115, 2500] {
        let prob = american_to_implied(odds).unwrap();
        assert_eq!(implied_to_american(prob).unwrap(), odds);
    }
}

#[test]
fn test_boundary_continuity() {
    assert_eq!(american_to_implied(100).unwrap(), 0.5);
    assert_eq!(american_to_implied(-100).unwrap(), 0.5);
    assert_eq!(implied_to_american(0.5).unwrap(), -100);
}

#[test]
fn test_settled_contract_is_invalid_input() {
    let err = calculate_edge(-200, 100.0).unwrap_err();
    assert!(err.is_invalid_input());
    assert!(matches!(err, OddsError::ProbabilityOutOfRange(_)));
}

#[test]
fn test_confidence_monotonic() {
    assert_eq!(get_confidence(dec!(1), 3), Confidence::Low);
    assert_eq!(get_confidence(dec!(3), 3), Confidence::Medium);
    assert_eq!(get_confidence(dec!(6), 3), Confidence::High);
}

#[test]
fn test_rank_sample_fixtures() {
    let fixtures: Vec<Fixture> =
        serde_json::from_str(include_str!("../../fixtures.example.json")).unwrap();
    let ranked = InsightEngine::new().rank(&fixtures);
    assert_eq!(ranked.len(), fixtures.len());

    for pair in ranked.windows(2) {
        assert!(pair[0].max_gap.gap >= pair[1].max_gap.gap);
    }
    for fixture in &ranked {
        if let Some(best) = &fixture.best {
            assert!(best.recommended_actions.len() <= 2);
            assert_eq!(best.gap_percentage_points, fixture.max_gap.gap);
        }
    }
    assert!(ranked.iter().any(|r| r.featured));
    assert!(ranked.iter().any(|r| !r.max_gap.has_data));
}
