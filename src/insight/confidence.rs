//! Confidence classification

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::Confidence;

/// Minimum gap (percentage points) for high confidence
pub const HIGH_MIN_GAP: Decimal = dec!(5);
/// Minimum corroborating sources for high confidence
pub const HIGH_MIN_SOURCES: usize = 3;
/// Minimum gap (percentage points) for medium confidence
pub const MEDIUM_MIN_GAP: Decimal = dec!(2);
/// Minimum corroborating sources for medium confidence
pub const MEDIUM_MIN_SOURCES: usize = 2;

/// Classify a gap by magnitude and number of quoting sources
pub fn get_confidence(gap: Decimal, source_count: usize) -> Confidence {
    if gap >= HIGH_MIN_GAP && source_count >= HIGH_MIN_SOURCES {
        Confidence::High
    } else if gap >= MEDIUM_MIN_GAP && source_count >= MEDIUM_MIN_SOURCES {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}
