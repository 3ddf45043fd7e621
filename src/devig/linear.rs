//! Linear devig: divide each probability by the market sum

use super::Devigger;

/// Proportional rescaling
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearMethod;

impl Devigger for LinearMethod {
    fn devig(&self, implied: &[f64]) -> Vec<f64> {
        let sum: f64 = implied.iter().sum();
        if implied.len() < 2 || !(sum > 1.0) {
            return implied.to_vec();
        }
        implied.iter().map(|p| p / sum).collect()
    }
}
