//! HUD statistics over a collection of parsed hands.
//!
//! Every rate is a percentage rounded to two decimal places. Rates whose
//! denominator is zero are reported as `0.0` rather than omitted.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::record::ParsedHand;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroStats {
    pub summary: SummaryStats,
    pub preflop: PreflopStats,
    pub postflop: PostflopStats,
    pub showdown: ShowdownStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_hands: u64,
    /// Share of hands with a positive result
    pub win_rate: f64,
    pub net_result: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreflopStats {
    pub vpip: f64,
    pub pfr: f64,
    pub three_bet: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostflopStats {
    /// C-bets per c-bet opportunity
    pub cbet: f64,
    /// Aggression factor: (bets + raises) / calls, or the raw count when there are no calls
    pub af: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowdownStats {
    /// Went to showdown, per flop seen
    pub wtsd: f64,
    /// Won at showdown, per showdown
    pub wsd: f64,
}

#[derive(Debug, Default)]
struct Tally {
    total: u64,
    winning: u64,
    net: i64,
    vpip: u64,
    pfr: u64,
    three_bet: u64,
    saw_flop: u64,
    c_bet_opp: u64,
    c_bet: u64,
    bets: u64,
    calls: u64,
    saw_showdown: u64,
    won_at_showdown: u64,
}

impl Tally {
    fn add(&mut self, hand: &ParsedHand) {
        self.total += 1;
        self.winning += u64::from(hand.hero_result > 0);
        self.net += hand.hero_result;
        self.vpip += u64::from(hand.hero_vpip);
        self.pfr += u64::from(hand.hero_pfr);
        self.three_bet += u64::from(hand.hero_three_bet);
        self.saw_flop += u64::from(hand.hero_saw_flop);
        self.c_bet_opp += u64::from(hand.hero_c_bet_opp);
        self.c_bet += u64::from(hand.hero_c_bet);
        self.bets += u64::from(hand.hero_af_bets);
        self.calls += u64::from(hand.hero_af_calls);
        self.saw_showdown += u64::from(hand.hero_saw_showdown);
        self.won_at_showdown += u64::from(hand.hero_won_at_showdown);
    }

    fn finish(&self) -> Option<HeroStats> {
        if self.total == 0 {
            return None;
        }
        let af = if self.calls > 0 {
            round2(self.bets as f64 / self.calls as f64)
        } else {
            self.bets as f64
        };
        Some(HeroStats {
            summary: SummaryStats {
                total_hands: self.total,
                win_rate: percent(self.winning, self.total),
                net_result: self.net,
            },
            preflop: PreflopStats {
                vpip: percent(self.vpip, self.total),
                pfr: percent(self.pfr, self.total),
                three_bet: percent(self.three_bet, self.total),
            },
            postflop: PostflopStats {
                cbet: percent(self.c_bet, self.c_bet_opp),
                af,
            },
            showdown: ShowdownStats {
                wtsd: percent(self.saw_showdown, self.saw_flop),
                wsd: percent(self.won_at_showdown, self.saw_showdown),
            },
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn percent(count: u64, of: u64) -> f64 {
    if of == 0 {
        0.0
    } else {
        round2(count as f64 / of as f64 * 100.0)
    }
}

/// Aggregates Hero's HUD statistics. Returns `None` for an empty collection.
pub fn hero_stats<'a, I>(hands: I) -> Option<HeroStats>
where
    I: IntoIterator<Item = &'a ParsedHand>,
{
    let mut tally = Tally::default();
    for hand in hands {
        tally.add(hand);
    }
    tally.finish()
}

/// Statistics per resolved position; hands without a position are skipped.
pub fn positional_stats<'a, I>(hands: I) -> BTreeMap<String, HeroStats>
where
    I: IntoIterator<Item = &'a ParsedHand>,
{
    let mut tallies: BTreeMap<String, Tally> = BTreeMap::new();
    for hand in hands {
        if let Some(pos) = hand.hero_position.as_deref().filter(|p| !p.is_empty()) {
            tallies.entry(pos.to_string()).or_default().add(hand);
        }
    }
    tallies
        .into_iter()
        .filter_map(|(pos, tally)| tally.finish().map(|s| (pos, s)))
        .collect()
}

/// Keeps the first record for each `game_no`, preserving order.
pub fn dedup_by_game_no<I>(hands: I) -> Vec<ParsedHand>
where
    I: IntoIterator<Item = ParsedHand>,
{
    let mut seen = HashSet::new();
    hands
        .into_iter()
        .filter(|h| seen.insert(h.game_no.clone()))
        .collect()
}
