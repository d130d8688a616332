//! Hero's HUD flags derived from the street bodies of one hand.

use crate::actions::{ActionKind, StreetActions};
use crate::street::Sections;

/// Flags and counters for one hand, before summary resolution.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct BehaviorFlags {
    pub vpip: bool,
    pub pfr: bool,
    pub three_bet: bool,
    pub fold_to_three_bet: bool,
    pub saw_flop: bool,
    pub c_bet_opp: bool,
    pub c_bet: bool,
    pub af_bets: u32,
    pub af_calls: u32,
    pub saw_showdown: bool,
}

const VOLUNTARY: [ActionKind; 2] = [ActionKind::Calls, ActionKind::Raises];

/// Walks the betting streets and showdown body for `hero`.
pub fn analyze(sections: &Sections<'_>, hero: &str) -> BehaviorFlags {
    let mut flags = BehaviorFlags::default();
    let preflop = StreetActions::scan(sections.preflop);

    match preflop.first_of(hero, &VOLUNTARY) {
        Some(first) if first.kind == ActionKind::Raises => {
            flags.vpip = true;
            flags.pfr = true;
        }
        Some(_) => flags.vpip = true,
        None => {}
    }

    if flags.pfr {
        if let (Some(opponent), Some(hero_raise)) = (
            preflop.first_by_other(hero, ActionKind::Raises),
            preflop.first_by(hero, ActionKind::Raises),
        ) {
            flags.three_bet = hero_raise > opponent;
        }
        flags.fold_to_three_bet = preflop.has_sequence(
            hero,
            ActionKind::Raises,
            ActionKind::Raises,
            ActionKind::Folds,
        );
    }

    if !sections.flop.is_empty() {
        flags.saw_flop = true;
        if flags.pfr {
            flags.c_bet_opp = true;
            flags.c_bet = StreetActions::scan(sections.flop)
                .first_by(hero, ActionKind::Bets)
                .is_some();
        }
    }

    for body in sections.betting() {
        if body.is_empty() {
            continue;
        }
        let street = StreetActions::scan(body);
        flags.af_bets +=
            street.count(hero, ActionKind::Raises) + street.count(hero, ActionKind::Bets);
        flags.af_calls += street.count(hero, ActionKind::Calls);
    }

    flags.saw_showdown = !sections.showdown.is_empty();
    flags
}
