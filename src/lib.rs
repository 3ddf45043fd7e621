//! drip-edge: sportsbook vs prediction-market edge engine for World Cup matches
//!
//! This library provides:
//! - Conversion between American odds, contract prices and implied probability
//! - Vig removal (power and linear methods)
//! - Gap computation between sportsbook and prediction-market consensus
//! - Confidence classification and call-to-action selection
//! - Fixture ranking for featured edge listings

pub mod cli;
pub mod config;
pub mod devig;
pub mod edge;
pub mod insight;
pub mod odds;
pub mod telemetry;
