//! Odds module
//!
//! Quote data model and conversions between American odds,
//! prediction-market prices and implied probability

mod convert;
mod types;

pub use convert::{
    american_to_implied, cents_to_implied, format_odds, format_probability, implied_to_american,
};
pub use types::{Fixture, OddsError, OddsLine, OddsQuote, Outcome, SourceType, VenueType};
