//! Display thresholds applied to computed gaps

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::odds::{OddsQuote, VenueType};

/// Minimum gap to show international sportsbooks (percentage points)
pub const INTL_THRESHOLD: Decimal = dec!(1.5);

/// Minimum gap to feature on the landing page (percentage points)
pub const MIN_FEATURED_GAP: Decimal = dec!(2.0);

/// Whether international sportsbooks should be shown for a gap
pub fn should_show_intl(gap: Decimal) -> bool {
    gap >= INTL_THRESHOLD
}

/// Whether a gap qualifies for the featured edges section
pub fn is_featured_edge(gap: Decimal) -> bool {
    gap >= MIN_FEATURED_GAP
}

/// Threshold filter with configurable cut-offs
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureFilter {
    pub intl_threshold: Decimal,
    pub min_featured_gap: Decimal,
}

impl FeatureFilter {
    pub fn new(intl_threshold: Decimal, min_featured_gap: Decimal) -> Self {
        Self {
            intl_threshold,
            min_featured_gap,
        }
    }

    pub fn should_show_intl(&self, gap: Decimal) -> bool {
        gap >= self.intl_threshold
    }

    pub fn is_featured_edge(&self, gap: Decimal) -> bool {
        gap >= self.min_featured_gap
    }

    /// Distinct source names to display, hiding international books below
    /// the international threshold
    pub fn visible_sources<'a, I>(&self, gap: Decimal, quotes: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a OddsQuote>,
    {
        let show_intl = self.should_show_intl(gap);
        let mut sources: Vec<String> = Vec::new();
        for quote in quotes {
            if quote.venue == VenueType::International && !show_intl {
                continue;
            }
            if !sources.contains(&quote.source) {
                sources.push(quote.source.clone());
            }
        }
        sources
    }
}

impl Default for FeatureFilter {
    fn default() -> Self {
        Self::new(INTL_THRESHOLD, MIN_FEATURED_GAP)
    }
}
