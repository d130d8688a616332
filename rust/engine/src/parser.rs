use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::behavior;
use crate::errors::ParserError;
use crate::metadata;
use crate::record::ParsedHand;
use crate::splitter::split_hands;
use crate::street::Sections;
use crate::summary::SummaryResolver;

/// Screen name the poker client gives the observing player.
pub const DEFAULT_HERO: &str = "Hero";

static DEFAULT_PARSER: LazyLock<HandParser> =
    LazyLock::new(|| HandParser::new(DEFAULT_HERO).expect("default hero patterns compile"));

/// Converts hand-history text into [`ParsedHand`] records for one Hero.
///
/// Holds only compiled patterns, so one parser can be shared freely across
/// threads and reused for any number of logs.
#[derive(Debug, Clone)]
pub struct HandParser {
    hero: String,
    dealt_to_hero: Regex,
    summary: SummaryResolver,
}

/// Outcome of parsing one log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub hands: Vec<ParsedHand>,
    /// Blocks that started with a hand marker but yielded no `game_no`
    pub dropped: usize,
}

impl Default for HandParser {
    fn default() -> Self {
        DEFAULT_PARSER.clone()
    }
}

impl HandParser {
    /// Builds a parser for the player named `hero`.
    ///
    /// # Errors
    ///
    /// [`ParserError::EmptyHero`] for a blank name and
    /// [`ParserError::MultilineHero`] when the name spans lines.
    pub fn new(hero: &str) -> Result<Self, ParserError> {
        if hero.trim().is_empty() {
            return Err(ParserError::EmptyHero);
        }
        if hero.contains(|c: char| c == '\n' || c == '\r') {
            return Err(ParserError::MultilineHero {
                name: hero.to_string(),
            });
        }
        let dealt_to_hero = Regex::new(&format!(r"Dealt to {} \[(.*?)\]", regex::escape(hero)))
            .map_err(|e| ParserError::Pattern {
                hero: hero.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            hero: hero.to_string(),
            dealt_to_hero,
            summary: SummaryResolver::new(hero)?,
        })
    }

    pub fn hero(&self) -> &str {
        &self.hero
    }

    /// Parses a single hand block.
    ///
    /// Returns `None` when no hand id can be found; such blocks are dropped.
    pub fn parse_block(&self, block: &str) -> Option<ParsedHand> {
        let raw = block.trim();
        let meta = metadata::extract(raw, &self.dealt_to_hero);
        let Some(game_no) = meta.game_no else {
            debug!(bytes = raw.len(), "dropping hand block without game number");
            return None;
        };

        let sections = Sections::split(raw);
        let flags = behavior::analyze(&sections, &self.hero);

        let mut hand = ParsedHand {
            game_no,
            table_name: meta.table_name,
            game_type: meta.game_type,
            stakes: meta.stakes,
            hero_cards: meta.hero_cards,
            hero_position: None,
            hero_result: 0,
            hero_vpip: flags.vpip,
            hero_pfr: flags.pfr,
            hero_three_bet: flags.three_bet,
            hero_fold_to_three_bet: flags.fold_to_three_bet,
            hero_saw_flop: flags.saw_flop,
            hero_c_bet_opp: flags.c_bet_opp,
            hero_c_bet: flags.c_bet,
            hero_af_bets: flags.af_bets,
            hero_af_calls: flags.af_calls,
            hero_saw_showdown: flags.saw_showdown,
            hero_won_at_showdown: false,
            raw_text: raw.to_string(),
        };

        if let Some(seat) = self.summary.resolve(sections.summary) {
            hand.hero_position = seat.position;
            if seat.won {
                hand.hero_won_at_showdown = hand.hero_saw_showdown;
                hand.hero_result = seat.amount.unwrap_or(0);
            }
        }

        debug!(game_no = %hand.game_no, vpip = hand.hero_vpip, pfr = hand.hero_pfr, "parsed hand");
        Some(hand)
    }

    /// Lazily parses every hand in `text`, in log order.
    pub fn parse_iter<'a>(&'a self, text: &'a str) -> impl Iterator<Item = ParsedHand> + 'a {
        split_hands(text).filter_map(move |block| self.parse_block(block))
    }

    pub fn parse(&self, text: &str) -> Vec<ParsedHand> {
        self.parse_iter(text).collect()
    }

    /// Like [`HandParser::parse`], also counting dropped blocks.
    pub fn parse_with_report(&self, text: &str) -> ParseReport {
        let mut report = ParseReport::default();
        for block in split_hands(text) {
            match self.parse_block(block) {
                Some(hand) => report.hands.push(hand),
                None => report.dropped += 1,
            }
        }
        report
    }
}

/// Parses a hand-history log for the default `Hero` player.
///
/// ```
/// use actiontrack_engine::parse_hand_history;
///
/// let log = "Poker Hand #G1: No Limit Hold'em - $0.05/$0.10 - 2026/01/02\n";
/// let hands = parse_hand_history(log);
/// assert_eq!(hands.len(), 1);
/// assert_eq!(hands[0].game_no, "G1");
/// ```
pub fn parse_hand_history(text: &str) -> Vec<ParsedHand> {
    DEFAULT_PARSER.parse(text)
}
