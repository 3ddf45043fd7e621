//! Engine metrics
//!
//! Recorded through the `metrics` facade; nothing is exported unless the
//! embedding process installs a recorder.

use ::metrics::{counter, histogram};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::insight::Confidence;
use crate::odds::VenueType;

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum CounterMetric {
    /// Insights computed
    InsightsComputed,
    /// Quotes skipped for invalid values
    InvalidQuotes,
    /// Devig solves that hit the iteration cap
    DevigNotConverged,
}

impl CounterMetric {
    pub fn name(&self) -> &'static str {
        match self {
            CounterMetric::InsightsComputed => "dripedge_insights_total",
            CounterMetric::InvalidQuotes => "dripedge_invalid_quotes_total",
            CounterMetric::DevigNotConverged => "dripedge_devig_not_converged_total",
        }
    }
}

/// Record a computed insight
pub fn record_insight(confidence: Confidence, gap: Decimal) {
    counter!(
        CounterMetric::InsightsComputed.name(),
        "confidence" => confidence.as_str()
    )
    .increment(1);
    histogram!("dripedge_gap_percentage_points").record(gap.to_f64().unwrap_or(0.0));
}

/// Record a quote dropped because its value could not be converted
pub fn record_invalid_quote(venue: VenueType) {
    counter!(CounterMetric::InvalidQuotes.name(), "venue" => venue.as_str()).increment(1);
}

/// Record a power-method solve
pub fn record_devig(iterations: u32, converged: bool) {
    histogram!("dripedge_devig_iterations").record(f64::from(iterations));
    if !converged {
        counter!(CounterMetric::DevigNotConverged.name()).increment(1);
    }
}
