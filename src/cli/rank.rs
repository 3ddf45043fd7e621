//! Rank command implementation

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, ValueEnum};

use crate::config::Config;
use crate::insight::{InsightEngine, RankedFixture};
use crate::odds::Fixture;

/// Output format for ranked fixtures
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Args, Debug)]
pub struct RankArgs {
    /// JSON file containing an array of fixtures
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Only list fixtures above the featured threshold
    #[arg(long)]
    pub featured_only: bool,

    /// Maximum fixtures to list
    #[arg(long)]
    pub limit: Option<usize>,
}

impl RankArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let content = std::fs::read_to_string(&self.input)
            .with_context(|| format!("reading fixtures {}", self.input.display()))?;
        let fixtures: Vec<Fixture> = serde_json::from_str(&content)
            .with_context(|| format!("parsing fixtures {}", self.input.display()))?;
        tracing::info!(count = fixtures.len(), input = ?self.input, "Loaded fixtures");

        let engine = InsightEngine::from_config(config);
        let ranked: Vec<RankedFixture> = engine
            .rank(&fixtures)
            .into_iter()
            .filter(|r| !self.featured_only || r.featured)
            .take(self.limit.unwrap_or(usize::MAX))
            .collect();

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ranked)?),
            OutputFormat::Table => print!("{}", format_table(&ranked)),
        }
        Ok(())
    }
}

/// Format ranked fixtures as a table for CLI output
pub fn format_table(ranked: &[RankedFixture]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "══════════════════════════════════════════════════════════════════════");
    let _ = writeln!(out, "                          EDGE BOARD");
    let _ = writeln!(out, "══════════════════════════════════════════════════════════════════════");
    let _ = writeln!(
        out,
        "{:<36} {:>7}  {:<6} {:<16} {}",
        "MATCH", "GAP", "SIDE", "DIRECTION", "CONF"
    );
    let _ = writeln!(out, "──────────────────────────────────────────────────────────────────────");

    for fixture in ranked {
        let name = format!("{} vs {}", fixture.home_team, fixture.away_team);
        let marker = if fixture.featured { "*" } else { " " };
        match (&fixture.best, fixture.max_gap.has_data) {
            (Some(best), true) => {
                let _ = writeln!(
                    out,
                    "{marker}{:<35} {:>7}  {:<6} {:<16} {}",
                    name,
                    format!("{:.1}", fixture.max_gap.gap),
                    best.outcome,
                    best.direction,
                    best.confidence
                );
            }
            _ => {
                let _ = writeln!(out, "{marker}{:<35} {:>7}", name, "n/a");
            }
        }
    }

    let _ = writeln!(out, "══════════════════════════════════════════════════════════════════════");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odds::{OddsLine, VenueType};
    use chrono::{TimeZone, Utc};

    fn fixture(id: &str, home: f64, pm_home: f64) -> Fixture {
        let updated = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        Fixture {
            id: id.to_string(),
            slug: id.to_string(),
            home_team: "Canada".to_string(),
            away_team: "Qatar".to_string(),
            kickoff: Utc.with_ymd_and_hms(2026, 6, 12, 19, 0, 0).unwrap(),
            lines: vec![
                OddsLine {
                    book: "fanduel".to_string(),
                    venue: VenueType::UsRegulated,
                    home,
                    away: 300.0,
                    draw: None,
                    updated,
                    url: None,
                },
                OddsLine {
                    book: "kalshi".to_string(),
                    venue: VenueType::PredictionMarket,
                    home: pm_home,
                    away: 25.0,
                    draw: None,
                    updated,
                    url: None,
                },
            ],
        }
    }

    #[test]
    fn test_format_table() {
        let ranked = InsightEngine::new().rank(&[fixture("a", -200.0, 58.0), Fixture {
            lines: vec![],
            ..fixture("b", 100.0, 50.0)
        }]);
        let table = format_table(&ranked);
        assert!(table.contains("EDGE BOARD"));
        assert!(table.contains("*Canada vs Qatar"));
        assert!(table.contains("8.7"));
        assert!(table.contains("sportsbook_high"));
        assert!(table.contains("n/a"));
    }

    #[test]
    fn test_execute_reads_fixtures() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixtures.json");
        let fixtures = vec![fixture("a", -200.0, 58.0)];
        std::fs::write(&path, serde_json::to_string(&fixtures).unwrap()).unwrap();

        let args = RankArgs {
            input: path,
            format: OutputFormat::Json,
            featured_only: true,
            limit: Some(5),
        };
        assert!(args.execute(&Config::default()).is_ok());
    }

    #[test]
    fn test_execute_missing_file() {
        let args = RankArgs {
            input: PathBuf::from("/nonexistent/fixtures.json"),
            format: OutputFormat::Table,
            featured_only: false,
            limit: None,
        };
        assert!(args.execute(&Config::default()).is_err());
    }
}
