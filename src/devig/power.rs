//! Power (multiplicative) devig method
//!
//! Finds k such that sum(p_i ^ k) = 1 and returns p_i ^ k. Since every
//! p_i < 1, the sum falls as k grows, so a root above k = 1 is bracketed by
//! doubling and then bisected. Both phases are capped.

use super::{DevigResult, Devigger};
use crate::telemetry;

/// Maximum bracket doublings (k up to 2^64)
const MAX_BRACKET_STEPS: u32 = 64;

/// Power method solver
#[derive(Debug, Clone)]
pub struct PowerMethod {
    /// Bisection iteration cap
    pub max_iterations: u32,
    /// Accepted |sum(p^k) - 1|
    pub tolerance: f64,
}

impl PowerMethod {
    pub fn new(max_iterations: u32, tolerance: f64) -> Self {
        Self {
            max_iterations,
            tolerance,
        }
    }

    /// Solve for the exponent and return the full result
    pub fn solve(&self, implied: &[f64]) -> DevigResult {
        let sum: f64 = implied.iter().sum();
        if implied.len() < 2 || !(sum > 1.0) {
            return DevigResult::unchanged(implied);
        }

        // Outside (0, 1] the exponent has no root to find
        if implied.iter().any(|&p| p.is_finite() && p > 1.0) {
            tracing::warn!(?implied, "Probability above 1, skipping devig");
            let mut result = DevigResult::unchanged(implied);
            result.converged = false;
            return result;
        }

        let excess = |k: f64| -> f64 {
            implied
                .iter()
                .filter(|&&p| contributes(p))
                .map(|p| p.powf(k))
                .sum::<f64>()
                - 1.0
        };

        let mut iterations = 0u32;

        let mut lo = 1.0;
        let mut hi = 2.0;
        while excess(hi) > 0.0 && iterations < MAX_BRACKET_STEPS {
            lo = hi;
            hi *= 2.0;
            iterations += 1;
        }

        let mut k = hi;
        let mut converged = excess(hi).abs() <= self.tolerance;
        let mut bisections = 0u32;
        while !converged && bisections < self.max_iterations {
            k = 0.5 * (lo + hi);
            let e = excess(k);
            if e.abs() <= self.tolerance {
                converged = true;
            } else if e > 0.0 {
                lo = k;
            } else {
                hi = k;
            }
            bisections += 1;
        }
        iterations += bisections;

        if !converged {
            tracing::debug!(exponent = k, iterations, "Devig did not meet tolerance");
        }
        telemetry::record_devig(iterations, converged);

        DevigResult {
            fair: implied
                .iter()
                .map(|&p| if contributes(p) { p.powf(k) } else { p })
                .collect(),
            exponent: k,
            iterations,
            converged,
        }
    }
}

impl Default for PowerMethod {
    fn default() -> Self {
        Self::new(100, 1e-9)
    }
}

impl Devigger for PowerMethod {
    fn devig(&self, implied: &[f64]) -> Vec<f64> {
        self.solve(implied).fair
    }
}

/// Devig with the power method and default solver settings
pub fn devig_power(implied: &[f64]) -> Vec<f64> {
    PowerMethod::default().devig(implied)
}

// Zero and non-finite entries pass through unscaled
fn contributes(p: f64) -> bool {
    p.is_finite() && p > 0.0
}
