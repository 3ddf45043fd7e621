//! Insight types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::edge::{Direction, GameGap};
use crate::odds::Outcome;

/// How actionable a gap is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Kind of call to action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CtaAction {
    /// Place the bet at the sportsbook
    BetSportsbook,
    /// Buy the contract on the prediction market
    BuyContract,
}

/// A call to action pointing at one book or market
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cta {
    pub label: String,
    pub url: String,
    pub book: String,
    pub action: CtaAction,
}

/// Gap analysis for one side of a fixture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeInsight {
    pub outcome: Outcome,
    /// Absolute divergence in percentage points, one decimal
    pub gap_percentage_points: Decimal,
    pub direction: Direction,
    pub confidence: Confidence,
    /// At most two, most actionable first
    pub recommended_actions: Vec<Cta>,
    pub summary: String,
    /// False when either source had no usable quote for the side
    pub has_data: bool,
    pub sportsbook_implied: Option<f64>,
    pub prediction_implied: Option<f64>,
    /// Sources to display for this side
    pub sources: Vec<String>,
}

impl EdgeInsight {
    pub const INSUFFICIENT_DATA: &'static str = "Insufficient data to compute edge.";

    /// Neutral result for a side lacking quotes on one or both sources
    pub fn insufficient(outcome: Outcome) -> Self {
        Self {
            outcome,
            gap_percentage_points: Decimal::ZERO,
            direction: Direction::SportsbookHigh,
            confidence: Confidence::Low,
            recommended_actions: Vec::new(),
            summary: Self::INSUFFICIENT_DATA.to_string(),
            has_data: false,
            sportsbook_implied: None,
            prediction_implied: None,
            sources: Vec::new(),
        }
    }
}

/// A fixture placed on the edge board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedFixture {
    pub fixture_id: String,
    pub slug: String,
    pub home_team: String,
    pub away_team: String,
    pub kickoff: DateTime<Utc>,
    pub max_gap: GameGap,
    /// Insight for the widest side
    pub best: Option<EdgeInsight>,
    /// Gap clears the featured threshold
    pub featured: bool,
    /// Gap clears the international-books threshold
    pub show_intl: bool,
}
