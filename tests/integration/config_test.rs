//! Configuration loading tests

use drip_edge::config::Config;
use drip_edge::devig::DevigMethod;
use drip_edge::insight::InsightEngine;
use drip_edge::odds::{OddsQuote, Outcome};
use rust_decimal_macros::dec;

#[test]
fn test_config_example_loads() {
    let config: Config = toml::from_str(include_str!("../../config.toml.example")).unwrap();
    assert_eq!(config.engine.intl_threshold, dec!(1.5));
    assert_eq!(config.engine.min_featured_gap, dec!(2.0));
    assert_eq!(config.engine.devig, DevigMethod::None);
}

#[test]
fn test_config_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
            [engine]
            devig = "power"
            min_featured_gap = 1.0
        "#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.engine.devig, DevigMethod::Power);

    // -110 / -110 against a 50c contract: devigged away entirely
    let quotes = vec![
        OddsQuote::sportsbook("fanduel", Outcome::Home, -110),
        OddsQuote::sportsbook("fanduel", Outcome::Away, -110),
        OddsQuote::prediction_market("kalshi", Outcome::Home, 50.0),
    ];
    let insight = InsightEngine::from_config(&config).edge_insight("A", "B", Outcome::Home, &quotes);
    assert_eq!(insight.gap_percentage_points, dec!(0.0));
}

#[test]
fn test_config_load_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[engine]\nintl_threshold = \"wide\"\n").unwrap();
    assert!(Config::load(&path).is_err());
}
