//! Quote and fixture types

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::convert::{american_to_implied, cents_to_implied};

/// Odds conversion errors
///
/// Every variant is a domain (invalid input) error: deterministic for a
/// given input and never worth retrying.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum OddsError {
    /// American odds of zero have no implied probability
    #[error("Invalid input: American odds cannot be zero")]
    ZeroAmericanOdds,
    /// American odds inside the (-100, 100) band or beyond the i32 range
    #[error("Invalid input: American odds {0} must satisfy 100 <= |odds| <= 2147483647")]
    AmericanOddsOutOfRange(f64),
    /// Probability outside the open interval (0, 1)
    #[error("Invalid input: probability {0} must be strictly between 0 and 1")]
    ProbabilityOutOfRange(f64),
    /// Prediction-market price outside (0, 100] cents
    #[error("Invalid input: contract price {0} must be in (0, 100] cents")]
    PriceOutOfRange(f64),
}

impl OddsError {
    /// Always true: every odds error is an input validation failure
    pub fn is_invalid_input(&self) -> bool {
        true
    }
}

/// Which side of the comparison a quote belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Sportsbook,
    PredictionMarket,
}

/// Venue classification of a book or market
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VenueType {
    /// US state-regulated sportsbook
    UsRegulated,
    /// Offshore / international sportsbook
    International,
    /// Contract exchange quoting 0-100 cents
    PredictionMarket,
}

impl VenueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VenueType::UsRegulated => "us_regulated",
            VenueType::International => "international",
            VenueType::PredictionMarket => "prediction_market",
        }
    }

    /// Anything that is not a prediction market is priced as a sportsbook
    pub fn source_type(&self) -> SourceType {
        match self {
            VenueType::PredictionMarket => SourceType::PredictionMarket,
            VenueType::UsRegulated | VenueType::International => SourceType::Sportsbook,
        }
    }
}

/// Match outcome a quote prices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Home,
    Away,
    Draw,
}

impl Outcome {
    /// Evaluation order for three-way markets
    pub const ALL: [Outcome; 3] = [Outcome::Home, Outcome::Away, Outcome::Draw];

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Home => "home",
            Outcome::Away => "away",
            Outcome::Draw => "draw",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A single price observation for one outcome from one source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OddsQuote {
    /// Book or market identifier
    pub source: String,
    /// Venue classification
    pub venue: VenueType,
    /// Outcome being priced
    pub outcome: Outcome,
    /// American odds for sportsbooks, cents (0-100] for prediction markets
    pub raw_value: f64,
    /// Observation time
    pub timestamp: DateTime<Utc>,
    /// Deep link used for calls to action
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl OddsQuote {
    /// Create a sportsbook quote from American odds
    pub fn sportsbook(source: impl Into<String>, outcome: Outcome, american: i32) -> Self {
        Self {
            source: source.into(),
            venue: VenueType::UsRegulated,
            outcome,
            raw_value: f64::from(american),
            timestamp: Utc::now(),
            url: None,
        }
    }

    /// Create a prediction-market quote from a price in cents
    pub fn prediction_market(source: impl Into<String>, outcome: Outcome, cents: f64) -> Self {
        Self {
            source: source.into(),
            venue: VenueType::PredictionMarket,
            outcome,
            raw_value: cents,
            timestamp: Utc::now(),
            url: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_venue(mut self, venue: VenueType) -> Self {
        self.venue = venue;
        self
    }

    pub fn source_type(&self) -> SourceType {
        self.venue.source_type()
    }

    pub fn is_sportsbook(&self) -> bool {
        self.source_type() == SourceType::Sportsbook
    }

    pub fn is_prediction_market(&self) -> bool {
        self.source_type() == SourceType::PredictionMarket
    }

    /// Sportsbook value as integral American odds
    ///
    /// Fails for values that do not round into the i32 range.
    pub fn american_odds(&self) -> Result<i32, OddsError> {
        self.raw_value
            .round()
            .to_i32()
            .ok_or(OddsError::AmericanOddsOutOfRange(self.raw_value))
    }

    /// Implied probability of this quote
    pub fn implied_probability(&self) -> Result<f64, OddsError> {
        match self.source_type() {
            SourceType::Sportsbook => american_to_implied(self.american_odds()?),
            SourceType::PredictionMarket => cents_to_implied(self.raw_value),
        }
    }

    /// Check the stored value against its notation's valid range.
    ///
    /// American odds must satisfy |odds| >= 100; prices must be in (0, 100].
    pub fn validate(&self) -> Result<(), OddsError> {
        match self.source_type() {
            SourceType::Sportsbook => {
                let odds = self.american_odds()?;
                if odds == 0 {
                    return Err(OddsError::ZeroAmericanOdds);
                }
                if odds.abs() < 100 {
                    return Err(OddsError::AmericanOddsOutOfRange(f64::from(odds)));
                }
                Ok(())
            }
            SourceType::PredictionMarket => cents_to_implied(self.raw_value).map(|_| ()),
        }
    }
}

/// One book's three-way line for a fixture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OddsLine {
    pub book: String,
    #[serde(rename = "type")]
    pub venue: VenueType,
    /// American odds or contract price (cents)
    pub home: f64,
    pub away: f64,
    #[serde(default)]
    pub draw: Option<f64>,
    pub updated: DateTime<Utc>,
    #[serde(default)]
    pub url: Option<String>,
}

impl OddsLine {
    /// Flatten into one quote per priced outcome
    pub fn quotes(&self) -> Vec<OddsQuote> {
        let sides = [
            (Outcome::Home, Some(self.home)),
            (Outcome::Away, Some(self.away)),
            (Outcome::Draw, self.draw),
        ];

        sides
            .into_iter()
            .filter_map(|(outcome, value)| {
                value.map(|raw_value| OddsQuote {
                    source: self.book.clone(),
                    venue: self.venue,
                    outcome,
                    raw_value,
                    timestamp: self.updated,
                    url: self.url.clone(),
                })
            })
            .collect()
    }
}

/// A scheduled match and the lines quoted on it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: String,
    pub slug: String,
    pub home_team: String,
    pub away_team: String,
    pub kickoff: DateTime<Utc>,
    #[serde(default)]
    pub lines: Vec<OddsLine>,
}

impl Fixture {
    /// All quotes across every line
    pub fn quotes(&self) -> Vec<OddsQuote> {
        self.lines.iter().flat_map(OddsLine::quotes).collect()
    }

    /// Display name for an outcome
    pub fn team_name(&self, outcome: Outcome) -> &str {
        match outcome {
            Outcome::Home => &self.home_team,
            Outcome::Away => &self.away_team,
            Outcome::Draw => "Draw",
        }
    }
}
