//! Consensus aggregation of several quotes for one side

use std::collections::HashMap;

/// One implied probability and the source that quoted it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<'a> {
    pub source: &'a str,
    pub probability: f64,
}

impl<'a> Sample<'a> {
    pub fn new(source: &'a str, probability: f64) -> Self {
        Self {
            source,
            probability,
        }
    }
}

/// Trait for combining same-side quotes into a consensus probability
pub trait Consensus: Send + Sync {
    /// `None` when there is nothing to aggregate
    fn consensus(&self, samples: &[Sample<'_>]) -> Option<f64>;
}

/// Arithmetic mean of all samples
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean;

impl Consensus for Mean {
    fn consensus(&self, samples: &[Sample<'_>]) -> Option<f64> {
        if samples.is_empty() {
            return None;
        }
        let total: f64 = samples.iter().map(|s| s.probability).sum();
        Some(total / samples.len() as f64)
    }
}

/// Mean weighted per source; unlisted sources weigh 1.0
#[derive(Debug, Clone, Default)]
pub struct WeightedMean {
    weights: HashMap<String, f64>,
}

impl WeightedMean {
    pub fn new(weights: HashMap<String, f64>) -> Self {
        Self { weights }
    }

    pub fn weight(&self, source: &str) -> f64 {
        self.weights.get(source).copied().unwrap_or(1.0)
    }
}

impl Consensus for WeightedMean {
    fn consensus(&self, samples: &[Sample<'_>]) -> Option<f64> {
        let (weighted, total_weight) = samples
            .iter()
            .map(|s| (s.probability, self.weight(s.source)))
            // Zero, negative or NaN weights drop the sample
            .filter(|(_, w)| w.is_finite() && *w > 0.0)
            .fold((0.0, 0.0), |(acc, tw), (p, w)| (acc + p * w, tw + w));

        if total_weight > 0.0 {
            Some(weighted / total_weight)
        } else {
            None
        }
    }
}

/// Build the consensus for a set of source weights
pub fn consensus_for(weights: &HashMap<String, f64>) -> Box<dyn Consensus> {
    if weights.is_empty() {
        Box::new(Mean)
    } else {
        Box::new(WeightedMean::new(weights.clone()))
    }
}
