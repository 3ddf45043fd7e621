//! Insight module
//!
//! Confidence classification, call-to-action selection and the engine
//! that assembles per-side edge insights

mod confidence;
mod cta;
mod engine;
mod filter;
mod types;

pub use confidence::{
    get_confidence, HIGH_MIN_GAP, HIGH_MIN_SOURCES, MEDIUM_MIN_GAP, MEDIUM_MIN_SOURCES,
};
pub use cta::{best_market_quote, best_sportsbook_quote, build_ctas, MAX_CTAS};
pub use engine::InsightEngine;
pub use filter::{
    is_featured_edge, should_show_intl, FeatureFilter, INTL_THRESHOLD, MIN_FEATURED_GAP,
};
pub use types::{Confidence, Cta, CtaAction, EdgeInsight, RankedFixture};
