//! Edge insight engine
//!
//! Turns the quotes for a fixture into per-side insights with summary
//! text, confidence and calls to action, and ranks fixtures by gap

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::{
    best_market_quote, best_sportsbook_quote, build_ctas, get_confidence, EdgeInsight,
    FeatureFilter, RankedFixture,
};
use crate::config::Config;
use crate::devig::{DevigMethod, Devigger, LinearMethod, PowerMethod};
use crate::edge::{
    by_max_gap_desc, consensus_for, round_gap, side_samples, team_gap, Consensus, Direction,
    GameGap, Mean, Sample, SideGap,
};
use crate::odds::{format_probability, Fixture, OddsQuote, Outcome};
use crate::telemetry;

/// Computes edge insights from raw quotes
pub struct InsightEngine {
    consensus: Box<dyn Consensus>,
    devigger: Option<Box<dyn Devigger>>,
    filter: FeatureFilter,
}

impl InsightEngine {
    /// Mean consensus, raw sportsbook probabilities, default thresholds
    pub fn new() -> Self {
        Self {
            consensus: Box::new(Mean),
            devigger: None,
            filter: FeatureFilter::default(),
        }
    }

    /// Build an engine from configuration
    pub fn from_config(config: &Config) -> Self {
        let devigger: Option<Box<dyn Devigger>> = match config.engine.devig {
            DevigMethod::None => None,
            DevigMethod::Power => Some(Box::new(PowerMethod::new(
                config.devig.max_iterations,
                config.devig.tolerance,
            ))),
            DevigMethod::Linear => Some(Box::new(LinearMethod)),
        };

        Self {
            consensus: consensus_for(&config.engine.source_weights),
            devigger,
            filter: FeatureFilter::new(
                config.engine.intl_threshold,
                config.engine.min_featured_gap,
            ),
        }
    }

    pub fn with_consensus(mut self, consensus: Box<dyn Consensus>) -> Self {
        self.consensus = consensus;
        self
    }

    pub fn with_devigger(mut self, devigger: Box<dyn Devigger>) -> Self {
        self.devigger = Some(devigger);
        self
    }

    pub fn with_filter(mut self, filter: FeatureFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn filter(&self) -> &FeatureFilter {
        &self.filter
    }

    /// Gap analysis for one side of a fixture
    pub fn edge_insight(
        &self,
        away_team: &str,
        home_team: &str,
        side: Outcome,
        all_quotes: &[OddsQuote],
    ) -> EdgeInsight {
        let (sportsbook, prediction): (Vec<OddsQuote>, Vec<OddsQuote>) =
            all_quotes.iter().cloned().partition(OddsQuote::is_sportsbook);

        let sb_samples = self.sportsbook_samples(&sportsbook, side);
        let pm_samples = side_samples(&prediction, side);
        if sb_samples.is_empty() || pm_samples.is_empty() {
            return EdgeInsight::insufficient(side);
        }

        let (Some(sb_implied), Some(pm_implied)) = (
            self.consensus.consensus(&sb_samples),
            self.consensus.consensus(&pm_samples),
        ) else {
            return EdgeInsight::insufficient(side);
        };

        let gap = round_gap(team_gap(sb_implied, pm_implied));
        let direction = Direction::from_implied(sb_implied, pm_implied);

        let team = match side {
            Outcome::Home => home_team,
            Outcome::Away => away_team,
            Outcome::Draw => "Draw",
        };
        // Whole-point gaps print without a trailing ".0"
        let gap_text = gap.normalize();
        let sb_pct = format_probability(sb_implied);
        let pm_pct = format_probability(pm_implied);
        let summary = match direction {
            Direction::SportsbookHigh => format!(
                "Sportsbooks imply {sb_pct} for {team} while prediction markets price at {pm_pct}. {gap_text}% gap favors the prediction market side."
            ),
            Direction::PredictionHigh => format!(
                "Prediction markets imply {pm_pct} for {team} while sportsbooks price at {sb_pct}. {gap_text}% gap favors the sportsbook side."
            ),
        };

        let side_sb = sportsbook.iter().filter(|q| q.outcome == side);
        let side_pm = prediction.iter().filter(|q| q.outcome == side);
        let recommended_actions = build_ctas(
            direction,
            best_sportsbook_quote(side_sb.clone()),
            best_market_quote(side_pm.clone()),
        );
        let sources = self.filter.visible_sources(gap, side_sb.chain(side_pm));

        let confidence = get_confidence(gap, sb_samples.len() + pm_samples.len());
        telemetry::record_insight(confidence, gap);
        tracing::debug!(
            side = %side,
            gap = %gap,
            direction = %direction,
            confidence = %confidence,
            "Computed edge insight"
        );

        EdgeInsight {
            outcome: side,
            gap_percentage_points: gap,
            direction,
            confidence,
            recommended_actions,
            summary,
            has_data: true,
            sportsbook_implied: Some(sb_implied),
            prediction_implied: Some(pm_implied),
            sources,
        }
    }

    /// Insights for every side quoted on the fixture, home/away/draw order
    pub fn fixture_insights(&self, fixture: &Fixture) -> Vec<EdgeInsight> {
        let quotes = fixture.quotes();
        Outcome::ALL
            .into_iter()
            .filter(|side| quotes.iter().any(|q| q.outcome == *side))
            .map(|side| self.edge_insight(&fixture.away_team, &fixture.home_team, side, &quotes))
            .collect()
    }

    /// Largest side gap across a set of insights
    pub fn game_gap(insights: &[EdgeInsight]) -> GameGap {
        let sides: Vec<SideGap> = insights
            .iter()
            .filter(|i| i.has_data)
            .filter_map(|i| {
                Some(SideGap {
                    outcome: i.outcome,
                    sportsbook_implied: i.sportsbook_implied?,
                    prediction_implied: i.prediction_implied?,
                    gap: i.gap_percentage_points,
                })
            })
            .collect();

        match sides.iter().map(|s| s.gap).max() {
            Some(gap) => GameGap {
                gap,
                has_data: true,
                sides,
            },
            None => GameGap::no_data(),
        }
    }

    /// Rank fixtures by largest gap, highest first
    pub fn rank(&self, fixtures: &[Fixture]) -> Vec<RankedFixture> {
        let mut ranked: Vec<RankedFixture> = fixtures
            .iter()
            .map(|fixture| {
                let insights = self.fixture_insights(fixture);
                let max_gap = Self::game_gap(&insights);
                let best = max_gap.widest_side().and_then(|widest| {
                    insights
                        .iter()
                        .find(|i| i.outcome == widest.outcome)
                        .cloned()
                });

                RankedFixture {
                    fixture_id: fixture.id.clone(),
                    slug: fixture.slug.clone(),
                    home_team: fixture.home_team.clone(),
                    away_team: fixture.away_team.clone(),
                    kickoff: fixture.kickoff,
                    featured: max_gap.has_data && self.filter.is_featured_edge(max_gap.gap),
                    show_intl: max_gap.has_data && self.filter.should_show_intl(max_gap.gap),
                    max_gap,
                    best,
                }
            })
            .collect();

        ranked.sort_by(|a, b| by_max_gap_desc(&a.max_gap, &b.max_gap));
        tracing::info!(
            fixtures = ranked.len(),
            featured = ranked.iter().filter(|r| r.featured).count(),
            "Ranked fixtures"
        );
        ranked
    }

    // Per-book devig across the book's latest quote per outcome, then keep `side`
    fn sportsbook_samples<'a>(&self, sportsbook: &'a [OddsQuote], side: Outcome) -> Vec<Sample<'a>> {
        let Some(devigger) = &self.devigger else {
            return side_samples(sportsbook, side);
        };

        // Repeated lines from one book must not be pooled into one market
        let mut books: BTreeMap<&str, BTreeMap<Outcome, (DateTime<Utc>, f64)>> = BTreeMap::new();
        for quote in sportsbook {
            match quote.implied_probability() {
                Ok(p) => {
                    let latest = books
                        .entry(quote.source.as_str())
                        .or_default()
                        .entry(quote.outcome)
                        .or_insert((quote.timestamp, p));
                    if quote.timestamp >= latest.0 {
                        *latest = (quote.timestamp, p);
                    }
                }
                Err(e) if quote.outcome == side => {
                    tracing::warn!(source = %quote.source, outcome = %side, error = %e, "Skipping quote");
                    telemetry::record_invalid_quote(quote.venue);
                }
                Err(_) => {}
            }
        }

        let mut samples = Vec::new();
        for (source, latest) in books {
            let implied: Vec<f64> = latest.values().map(|(_, p)| *p).collect();
            let fair = devigger.devig(&implied);
            samples.extend(
                latest
                    .keys()
                    .zip(fair)
                    .filter(|(outcome, _)| **outcome == side)
                    .map(|(_, p)| Sample::new(source, p)),
            );
        }
        samples
    }
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}
