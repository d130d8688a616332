use serde::{Deserialize, Serialize};

/// Structured record of one hand from Hero's point of view.
///
/// Built once per hand block and never mutated afterwards. Serialized as one
/// JSON object per line for hand-history exports and stored one row per hand.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ParsedHand {
    /// Unique hand identifier from the header
    pub game_no: String,
    #[serde(default)]
    pub table_name: Option<String>,
    #[serde(default)]
    pub game_type: Option<String>,
    #[serde(default)]
    pub stakes: Option<String>,
    /// Hole cards as dealt, e.g. `Ah Kd`
    #[serde(default)]
    pub hero_cards: Option<String>,
    /// Seat label from the summary (`button`, `big blind`, ...)
    #[serde(default)]
    pub hero_position: Option<String>,
    /// Chips won in this hand; 0 when nothing was won or the amount was unreadable
    #[serde(default)]
    pub hero_result: i64,

    // Pre-flop
    #[serde(default)]
    pub hero_vpip: bool,
    #[serde(default)]
    pub hero_pfr: bool,
    #[serde(default)]
    pub hero_three_bet: bool,
    #[serde(default)]
    pub hero_fold_to_three_bet: bool,

    // Post-flop
    #[serde(default)]
    pub hero_saw_flop: bool,
    #[serde(default)]
    pub hero_c_bet_opp: bool,
    #[serde(default)]
    pub hero_c_bet: bool,

    // Aggression, summed over every betting street
    #[serde(default)]
    pub hero_af_bets: u32,
    #[serde(default)]
    pub hero_af_calls: u32,

    // Showdown
    #[serde(default)]
    pub hero_saw_showdown: bool,
    #[serde(default)]
    pub hero_won_at_showdown: bool,

    /// The hand block exactly as it appeared in the log (trimmed)
    #[serde(default)]
    pub raw_text: String,
}

impl ParsedHand {
    /// Checks the implications between Hero's flags.
    ///
    /// Returns the name of the first violated implication, if any.
    pub fn check_invariants(&self) -> Result<(), &'static str> {
        let rules: [(bool, bool, &'static str); 6] = [
            (self.hero_three_bet, self.hero_pfr, "three_bet implies pfr"),
            (self.hero_pfr, self.hero_vpip, "pfr implies vpip"),
            (self.hero_c_bet, self.hero_c_bet_opp, "c_bet implies c_bet_opp"),
            (self.hero_c_bet_opp, self.hero_pfr, "c_bet_opp implies pfr"),
            (self.hero_c_bet_opp, self.hero_saw_flop, "c_bet_opp implies saw_flop"),
            (
                self.hero_won_at_showdown,
                self.hero_saw_showdown,
                "won_at_showdown implies saw_showdown",
            ),
        ];
        match rules.iter().find(|(premise, conclusion, _)| *premise && !*conclusion) {
            Some((_, _, name)) => Err(*name),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_satisfies_invariants() {
        assert_eq!(ParsedHand::default().check_invariants(), Ok(()));
    }

    #[test]
    fn detects_three_bet_without_pfr() {
        let hand = ParsedHand {
            hero_vpip: true,
            hero_three_bet: true,
            ..ParsedHand::default()
        };
        assert_eq!(hand.check_invariants(), Err("three_bet implies pfr"));
    }

    #[test]
    fn detects_showdown_win_without_showdown() {
        let hand = ParsedHand {
            hero_won_at_showdown: true,
            ..ParsedHand::default()
        };
        assert_eq!(
            hand.check_invariants(),
            Err("won_at_showdown implies saw_showdown")
        );
    }

    #[test]
    fn missing_optional_fields_deserialize_to_defaults() {
        let hand: ParsedHand = serde_json::from_str(r#"{"game_no":"G1"}"#).unwrap();
        assert_eq!(hand.game_no, "G1");
        assert_eq!(hand.hero_result, 0);
        assert!(!hand.hero_vpip);
        assert!(hand.raw_text.is_empty());
    }
}
