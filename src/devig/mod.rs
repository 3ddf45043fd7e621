//! Vig removal module
//!
//! Normalizes sportsbook implied probabilities, which sum above 1.0 by the
//! book's overround, into a fair distribution summing to 1.0

mod linear;
mod power;

pub use linear::LinearMethod;
pub use power::{devig_power, PowerMethod};

use serde::{Deserialize, Serialize};

/// Fair probabilities produced by a devig pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevigResult {
    /// Fair probabilities, same order as the input
    pub fair: Vec<f64>,
    /// Exponent applied to each input (1.0 when unchanged)
    pub exponent: f64,
    /// Solver iterations spent
    pub iterations: u32,
    /// Whether the solver met its tolerance
    pub converged: bool,
}

impl DevigResult {
    /// Input returned as-is
    pub fn unchanged(implied: &[f64]) -> Self {
        Self {
            fair: implied.to_vec(),
            exponent: 1.0,
            iterations: 0,
            converged: true,
        }
    }
}

/// Trait for devig method implementations
pub trait Devigger: Send + Sync {
    /// Remove the overround from a market's implied probabilities
    fn devig(&self, implied: &[f64]) -> Vec<f64>;
}

/// Configurable devig method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DevigMethod {
    /// Compare raw implied probabilities
    #[default]
    None,
    /// Common exponent so that sum(p^k) = 1
    Power,
    /// Divide each probability by the sum
    Linear,
}

impl std::fmt::Display for DevigMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DevigMethod::None => "none",
            DevigMethod::Power => "power",
            DevigMethod::Linear => "linear",
        };
        f.pad(name)
    }
}

/// Overround of a market: how far its implied probabilities sum above 1.0
pub fn overround(implied: &[f64]) -> f64 {
    implied.iter().sum::<f64>() - 1.0
}
