//! Edge command implementation

use clap::Args;

use crate::edge::calculate_edge;
use crate::odds::{format_odds, format_probability};

#[derive(Args, Debug)]
pub struct EdgeArgs {
    /// Sportsbook American odds
    #[arg(long, allow_hyphen_values = true)]
    pub odds: i32,

    /// Prediction-market price in cents
    #[arg(long)]
    pub price: f64,
}

impl EdgeArgs {
    pub fn execute(&self) -> anyhow::Result<()> {
        let edge = calculate_edge(self.odds, self.price)?;

        println!(
            "Sportsbook {}: {}",
            format_odds(self.odds),
            format_probability(edge.sportsbook_implied)
        );
        println!(
            "Prediction market {}c: {}",
            self.price,
            format_probability(edge.prediction_implied)
        );
        println!("Gap: {:.1} pts ({})", edge.gap, edge.direction);
        println!("Fair value: {}", format_odds(edge.fair_value_american));
        Ok(())
    }
}
