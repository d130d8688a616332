use regex::Regex;
use std::sync::LazyLock;

use crate::errors::ParserError;

/// Position recorded when Hero's seat line carries no parenthesized label,
/// i.e. Hero was neither a blind nor on the button.
pub const UNLABELED_POSITION: &str = "UTG/MP/CO";

static WON_AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"won \(?([\d,]+)\)?").expect("valid won amount regex"));

/// What Hero's summary seat line says about the hand.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct SeatOutcome {
    pub position: Option<String>,
    pub won: bool,
    pub amount: Option<i64>,
}

/// Matches Hero's `Seat <n>: <hero> ...` line in a summary body.
#[derive(Debug, Clone)]
pub struct SummaryResolver {
    seat_line: Regex,
}

impl SummaryResolver {
    pub fn new(hero: &str) -> Result<Self, ParserError> {
        let pattern = format!(
            r"Seat \d+: {} (.*?)(folded|showed|won|lost)(.*)",
            regex::escape(hero)
        );
        let seat_line = Regex::new(&pattern).map_err(|e| ParserError::Pattern {
            hero: hero.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { seat_line })
    }

    /// Reads position and win information from Hero's seat line.
    ///
    /// Returns `None` when the summary has no line for Hero.
    pub fn resolve(&self, summary: &str) -> Option<SeatOutcome> {
        let caps = self.seat_line.captures(summary)?;
        let label = caps.get(1).map_or("", |m| m.as_str()).trim();
        let outcome = caps.get(2)?;
        let details = caps.get(3).map_or("", |m| m.as_str());

        let position = if label.is_empty() {
            UNLABELED_POSITION.to_string()
        } else {
            label.trim_matches(|c: char| c == '(' || c == ')').to_string()
        };

        let won = outcome.as_str() == "won" || details.contains("won (");
        let amount = if won {
            // The amount may follow the outcome token itself or a later "won".
            parse_won_amount(&summary[outcome.start()..caps.get(0)?.end()])
        } else {
            None
        };

        Some(SeatOutcome {
            position: Some(position),
            won,
            amount,
        })
    }
}

/// Parses the comma-grouped integer after `won`, e.g. `won (1,250)` → 1250.
pub fn parse_won_amount(text: &str) -> Option<i64> {
    let digits = WON_AMOUNT_RE.captures(text)?.get(1)?.as_str().replace(',', "");
    digits.parse().ok()
}
