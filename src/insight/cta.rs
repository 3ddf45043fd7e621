//! Call-to-action selection

use super::{Cta, CtaAction};
use crate::edge::Direction;
use crate::odds::OddsQuote;

/// Maximum calls to action per insight
pub const MAX_CTAS: usize = 2;

/// Sportsbook quote with the lowest implied probability (longest odds)
///
/// Unusable quotes are ignored; the first of equal quotes wins.
pub fn best_sportsbook_quote<'a, I>(quotes: I) -> Option<&'a OddsQuote>
where
    I: IntoIterator<Item = &'a OddsQuote>,
{
    quotes
        .into_iter()
        .filter_map(|q| q.implied_probability().ok().map(|p| (q, p)))
        .fold(None::<(&OddsQuote, f64)>, |best, (q, p)| match best {
            Some((_, best_p)) if best_p <= p => best,
            _ => Some((q, p)),
        })
        .map(|(q, _)| q)
}

/// Prediction-market quote with the lowest price in cents
pub fn best_market_quote<'a, I>(quotes: I) -> Option<&'a OddsQuote>
where
    I: IntoIterator<Item = &'a OddsQuote>,
{
    quotes
        .into_iter()
        .filter(|q| q.validate().is_ok())
        .fold(None::<&OddsQuote>, |best, q| match best {
            Some(b) if b.raw_value <= q.raw_value => Some(b),
            _ => Some(q),
        })
}

/// Build calls to action, most actionable side first
///
/// A quote without a URL produces no CTA.
pub fn build_ctas(
    direction: Direction,
    best_sportsbook: Option<&OddsQuote>,
    best_market: Option<&OddsQuote>,
) -> Vec<Cta> {
    let bet = best_sportsbook.and_then(|q| cta(q, CtaAction::BetSportsbook));
    let buy = best_market.and_then(|q| cta(q, CtaAction::BuyContract));

    let ordered = match direction {
        Direction::SportsbookHigh => [bet, buy],
        Direction::PredictionHigh => [buy, bet],
    };

    ordered.into_iter().flatten().take(MAX_CTAS).collect()
}

fn cta(quote: &OddsQuote, action: CtaAction) -> Option<Cta> {
    let url = quote.url.as_ref()?;
    let verb = match action {
        CtaAction::BetSportsbook => "Bet on",
        CtaAction::BuyContract => "Buy on",
    };
    Some(Cta {
        label: format!("{verb} {}", quote.source),
        url: url.clone(),
        book: quote.source.clone(),
        action,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odds::Outcome;

    fn sb(source: &str, odds: i32) -> OddsQuote {
        OddsQuote::sportsbook(source, Outcome::Home, odds)
            .with_url(format!("https://{source}.example"))
    }

    fn pm(source: &str, cents: f64) -> OddsQuote {
        OddsQuote::prediction_market(source, Outcome::Home, cents)
            .with_url(format!("https://{source}.example"))
    }

    #[test]
    fn test_best_sportsbook_is_longest_odds() {
        let quotes = [sb("draftkings", 140), sb("fanduel", 165), sb("betmgm", 150)];
        assert_eq!(best_sportsbook_quote(&quotes).unwrap().source, "fanduel");

        let favourites = [sb("draftkings", -250), sb("fanduel", -180)];
        assert_eq!(best_sportsbook_quote(&favourites).unwrap().source, "fanduel");
    }

    #[test]
    fn test_best_sportsbook_tie_keeps_first() {
        let quotes = [sb("draftkings", 150), sb("fanduel", 150)];
        assert_eq!(best_sportsbook_quote(&quotes).unwrap().source, "draftkings");
    }

    #[test]
    fn test_best_sportsbook_skips_invalid() {
        let quotes = [sb("broken", 0), sb("fanduel", -120)];
        assert_eq!(best_sportsbook_quote(&quotes).unwrap().source, "fanduel");
        assert!(best_sportsbook_quote(&Vec::<OddsQuote>::new()).is_none());
    }

    #[test]
    fn test_best_market_is_cheapest() {
        let quotes = [pm("kalshi", 44.0), pm("polymarket", 41.5), pm("robinhood", 43.0)];
        assert_eq!(best_market_quote(&quotes).unwrap().source, "polymarket");
    }

    #[test]
    fn test_sportsbook_high_order() {
        let (s, p) = (sb("fanduel", -200), pm("kalshi", 58.0));
        let ctas = build_ctas(Direction::SportsbookHigh, Some(&s), Some(&p));
        assert_eq!(ctas.len(), 2);
        assert_eq!(ctas[0].action, CtaAction::BetSportsbook);
        assert_eq!(ctas[0].label, "Bet on fanduel");
        assert_eq!(ctas[1].action, CtaAction::BuyContract);
        assert_eq!(ctas[1].label, "Buy on kalshi");
    }

    #[test]
    fn test_prediction_high_order() {
        let (s, p) = (sb("fanduel", 150), pm("kalshi", 45.0));
        let ctas = build_ctas(Direction::PredictionHigh, Some(&s), Some(&p));
        assert_eq!(ctas[0].action, CtaAction::BuyContract);
        assert_eq!(ctas[1].action, CtaAction::BetSportsbook);
    }

    #[test]
    fn test_missing_url_omitted() {
        let s = OddsQuote::sportsbook("offshore", Outcome::Home, 150);
        let p = pm("kalshi", 45.0);
        let ctas = build_ctas(Direction::SportsbookHigh, Some(&s), Some(&p));
        assert_eq!(ctas.len(), 1);
        assert_eq!(ctas[0].book, "kalshi");
    }

    #[test]
    fn test_missing_quotes() {
        assert!(build_ctas(Direction::PredictionHigh, None, None).is_empty());
        let s = sb("fanduel", 150);
        let ctas = build_ctas(Direction::PredictionHigh, Some(&s), None);
        assert_eq!(ctas.len(), 1);
        assert_eq!(ctas[0].action, CtaAction::BetSportsbook);
    }
}
