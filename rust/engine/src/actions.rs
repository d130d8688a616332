use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static ACTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*([^:\r\n]+?): (folds|checks|calls|bets|raises)\b")
        .expect("valid action regex")
});

/// Verb of one action line, e.g. the `raises` in `Hero: raises $4 to $6`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum ActionKind {
    Folds,
    Checks,
    Calls,
    Bets,
    Raises,
}

impl ActionKind {
    fn from_verb(verb: &str) -> Option<ActionKind> {
        match verb {
            "folds" => Some(ActionKind::Folds),
            "checks" => Some(ActionKind::Checks),
            "calls" => Some(ActionKind::Calls),
            "bets" => Some(ActionKind::Bets),
            "raises" => Some(ActionKind::Raises),
            _ => None,
        }
    }

    /// Bets and raises count as aggressive actions.
    pub fn is_aggressive(self) -> bool {
        matches!(self, ActionKind::Bets | ActionKind::Raises)
    }
}

/// One recognized action token within a street body.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Action<'a> {
    /// Order of this action within its street, starting at 0
    pub index: usize,
    pub actor: &'a str,
    pub kind: ActionKind,
}

/// Scans a street body for `<player>: <verb>` lines in text order.
///
/// Recognition is textual only: whose turn it is is never checked, and
/// lines that do not look like an action (dealing, posting blinds, chat)
/// are skipped.
pub fn scan(body: &str) -> Vec<Action<'_>> {
    ACTION_RE
        .captures_iter(body)
        .filter_map(|caps| {
            let actor = caps.get(1)?.as_str();
            let kind = ActionKind::from_verb(caps.get(2)?.as_str())?;
            Some((actor, kind))
        })
        .enumerate()
        .map(|(index, (actor, kind))| Action { index, actor, kind })
        .collect()
}

/// Action tokens of one street with helpers for Hero-relative queries.
#[derive(Debug, Clone, Default)]
pub struct StreetActions<'a> {
    actions: Vec<Action<'a>>,
}

impl<'a> StreetActions<'a> {
    pub fn scan(body: &'a str) -> Self {
        Self {
            actions: scan(body),
        }
    }

    pub fn actions(&self) -> &[Action<'a>] {
        &self.actions
    }

    pub fn first_by(&self, hero: &str, kind: ActionKind) -> Option<usize> {
        self.actions
            .iter()
            .find(|a| a.actor == hero && a.kind == kind)
            .map(|a| a.index)
    }

    pub fn first_by_other(&self, hero: &str, kind: ActionKind) -> Option<usize> {
        self.actions
            .iter()
            .find(|a| a.actor != hero && a.kind == kind)
            .map(|a| a.index)
    }

    /// Earliest Hero action among `kinds`.
    pub fn first_of(&self, hero: &str, kinds: &[ActionKind]) -> Option<Action<'a>> {
        self.actions
            .iter()
            .find(|a| a.actor == hero && kinds.contains(&a.kind))
            .copied()
    }

    pub fn count(&self, hero: &str, kind: ActionKind) -> u32 {
        self.actions
            .iter()
            .filter(|a| a.actor == hero && a.kind == kind)
            .count() as u32
    }

    /// True when the street contains, in order, a Hero action of `first`,
    /// a later `second` by another player, then a later Hero `third`.
    pub fn has_sequence(
        &self,
        hero: &str,
        first: ActionKind,
        second: ActionKind,
        third: ActionKind,
    ) -> bool {
        let mut stage = 0;
        for a in &self.actions {
            match stage {
                0 if a.actor == hero && a.kind == first => stage = 1,
                1 if a.actor != hero && a.kind == second => stage = 2,
                2 if a.actor == hero && a.kind == third => return true,
                _ => {}
            }
        }
        false
    }
}
