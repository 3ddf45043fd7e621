//! Gap / edge module
//!
//! Compares sportsbook and prediction-market implied probabilities for the
//! same outcome

mod aggregate;
mod gap;
mod types;

pub use aggregate::{consensus_for, Consensus, Mean, Sample, WeightedMean};
pub use gap::{
    by_max_gap_desc, calculate_edge, max_gap_for_game, max_gap_for_game_with, round_gap, team_gap,
};
pub use types::{Direction, EdgeCalculation, GameGap, SideGap};

pub(crate) use gap::side_samples;
