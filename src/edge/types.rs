//! Edge computation types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::odds::Outcome;

/// Which side implies the higher probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Sportsbooks imply more than the prediction market
    SportsbookHigh,
    /// Prediction market implies at least as much as sportsbooks
    PredictionHigh,
}

impl Direction {
    /// Exact equality resolves to `PredictionHigh`
    pub fn from_implied(sportsbook: f64, prediction: f64) -> Self {
        if sportsbook > prediction {
            Direction::SportsbookHigh
        } else {
            Direction::PredictionHigh
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::SportsbookHigh => "sportsbook_high",
            Direction::PredictionHigh => "prediction_high",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Single-quote comparison between a sportsbook line and a contract price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeCalculation {
    /// Absolute divergence in percentage points, one decimal
    pub gap: Decimal,
    pub sportsbook_implied: f64,
    pub prediction_implied: f64,
    pub direction: Direction,
    /// American odds implied by the prediction-market probability
    pub fair_value_american: i32,
}

/// Consensus comparison for one side of a fixture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideGap {
    pub outcome: Outcome,
    pub sportsbook_implied: f64,
    pub prediction_implied: f64,
    pub gap: Decimal,
}

/// Largest side gap for a fixture
///
/// `has_data` separates "no side quoted on both sources" from a computed
/// zero gap; both report `gap == 0` in the first case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameGap {
    pub gap: Decimal,
    pub has_data: bool,
    /// Sides quoted on both sources, in home/away/draw order
    pub sides: Vec<SideGap>,
}

impl GameGap {
    pub fn no_data() -> Self {
        Self {
            gap: Decimal::ZERO,
            has_data: false,
            sides: Vec::new(),
        }
    }

    /// Side with the largest gap; earliest side wins ties
    pub fn widest_side(&self) -> Option<&SideGap> {
        self.sides
            .iter()
            .fold(None::<&SideGap>, |best, side| match best {
                Some(b) if b.gap >= side.gap => Some(b),
                _ => Some(side),
            })
    }
}
