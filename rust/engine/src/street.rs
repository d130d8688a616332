use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static SECTION_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*\* (HOLE CARDS|FLOP|TURN|RIVER|SHOWDOWN|SUMMARY) \*\*\*")
        .expect("valid section marker regex")
});

/// Named section of a hand, as delimited by `*** NAME ***` markers.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Street {
    /// Pre-flop betting, introduced by `*** HOLE CARDS ***`
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
    Summary,
}

impl Street {
    /// The four streets on which betting happens, in play order.
    pub const BETTING: [Street; 4] = [Street::Preflop, Street::Flop, Street::Turn, Street::River];

    /// Marker text between the `***` delimiters.
    pub fn marker(self) -> &'static str {
        match self {
            Street::Preflop => "HOLE CARDS",
            Street::Flop => "FLOP",
            Street::Turn => "TURN",
            Street::River => "RIVER",
            Street::Showdown => "SHOWDOWN",
            Street::Summary => "SUMMARY",
        }
    }

    pub fn from_marker(name: &str) -> Option<Street> {
        match name {
            "HOLE CARDS" => Some(Street::Preflop),
            "FLOP" => Some(Street::Flop),
            "TURN" => Some(Street::Turn),
            "RIVER" => Some(Street::River),
            "SHOWDOWN" => Some(Street::Showdown),
            "SUMMARY" => Some(Street::Summary),
            _ => None,
        }
    }
}

/// Raw body text of every section in one hand.
///
/// An empty body means the section did not occur in the hand.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Sections<'a> {
    pub preflop: &'a str,
    pub flop: &'a str,
    pub turn: &'a str,
    pub river: &'a str,
    pub showdown: &'a str,
    pub summary: &'a str,
}

impl<'a> Sections<'a> {
    /// Locates each section marker in `hand` and slices out its body.
    ///
    /// A body runs from just after its marker to just before the next
    /// recognized marker. When a marker repeats, the first body wins.
    pub fn split(hand: &'a str) -> Self {
        let mut sections = Sections::default();
        let mut seen: Vec<Street> = Vec::with_capacity(6);
        let mut markers = SECTION_MARKER_RE.captures_iter(hand).peekable();

        while let Some(caps) = markers.next() {
            let (Some(whole), Some(street)) = (
                caps.get(0),
                caps.get(1).and_then(|m| Street::from_marker(m.as_str())),
            ) else {
                continue;
            };
            let body_end = markers
                .peek()
                .and_then(|next| next.get(0))
                .map(|m| m.start())
                .unwrap_or(hand.len());
            if seen.contains(&street) {
                continue;
            }
            seen.push(street);
            *sections.slot(street) = &hand[whole.end()..body_end];
        }
        sections
    }

    pub fn get(&self, street: Street) -> &'a str {
        match street {
            Street::Preflop => self.preflop,
            Street::Flop => self.flop,
            Street::Turn => self.turn,
            Street::River => self.river,
            Street::Showdown => self.showdown,
            Street::Summary => self.summary,
        }
    }

    fn slot(&mut self, street: Street) -> &mut &'a str {
        match street {
            Street::Preflop => &mut self.preflop,
            Street::Flop => &mut self.flop,
            Street::Turn => &mut self.turn,
            Street::River => &mut self.river,
            Street::Showdown => &mut self.showdown,
            Street::Summary => &mut self.summary,
        }
    }

    /// Bodies of the four betting streets, in play order.
    pub fn betting(&self) -> [&'a str; 4] {
        Street::BETTING.map(|s| self.get(s))
    }
}
