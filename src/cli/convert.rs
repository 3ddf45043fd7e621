//! Convert command implementation

use clap::Args;

use crate::odds::{american_to_implied, format_odds, format_probability, implied_to_american};

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct ConvertArgs {
    /// American odds to convert to implied probability
    #[arg(long, allow_hyphen_values = true)]
    pub american: Option<i32>,

    /// Implied probability (0-1) to convert to American odds
    #[arg(long)]
    pub probability: Option<f64>,
}

impl ConvertArgs {
    pub fn execute(&self) -> anyhow::Result<()> {
        if let Some(odds) = self.american {
            let prob = american_to_implied(odds)?;
            println!("{} -> {:.4} ({})", format_odds(odds), prob, format_probability(prob));
        }
        if let Some(prob) = self.probability {
            let odds = implied_to_american(prob)?;
            println!("{prob} -> {}", format_odds(odds));
        }
        Ok(())
    }
}
