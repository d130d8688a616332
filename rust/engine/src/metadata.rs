//! Identifying fields pulled from a hand's header and body.
//!
//! Two header styles are understood. The primary one is a single line
//! `Poker Hand #<id>: <game type> - <stakes> - <rest>`; the `#Game No : `
//! export style instead carries one `#Key : value` line per field and is only
//! consulted for fields the primary patterns left unset.

use regex::Regex;
use std::sync::LazyLock;

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Poker Hand #(\w+): (.*?) - (.*?) - (.*)").expect("valid header regex")
});

static TABLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Table '(.*?)'").expect("valid table regex"));

static KEYED_GAME_NO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#Game No : (\w+)").expect("valid game no regex"));

static KEYED_TABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^#Table Name : (.*?)\s*$").expect("valid table name regex")
});

static KEYED_GAME_TYPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^#Game Type : (.*?)\s*$").expect("valid game type regex")
});

static KEYED_STAKES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#Stakes : (.*?)\s*$").expect("valid stakes regex"));

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct HandMetadata {
    pub game_no: Option<String>,
    pub game_type: Option<String>,
    pub stakes: Option<String>,
    pub table_name: Option<String>,
    pub hero_cards: Option<String>,
}

/// Extracts header fields, table name and Hero's hole cards.
///
/// `dealt_to_hero` must capture the card text in group 1. Every lookup is
/// best-effort: a pattern that does not match leaves its field `None`.
pub fn extract(hand: &str, dealt_to_hero: &Regex) -> HandMetadata {
    let mut meta = HandMetadata::default();

    if let Some(caps) = HEADER_RE.captures(hand) {
        meta.game_no = caps.get(1).map(|m| m.as_str().to_string());
        meta.game_type = caps.get(2).map(|m| m.as_str().trim().to_string());
        meta.stakes = caps.get(3).map(|m| m.as_str().trim().to_string());
    }
    meta.table_name = first_group(&TABLE_RE, hand);
    meta.hero_cards = first_group(dealt_to_hero, hand);

    if meta.game_no.is_none() {
        meta.game_no = first_group(&KEYED_GAME_NO_RE, hand);
    }
    if meta.game_type.is_none() {
        meta.game_type = first_group(&KEYED_GAME_TYPE_RE, hand);
    }
    if meta.stakes.is_none() {
        meta.stakes = first_group(&KEYED_STAKES_RE, hand);
    }
    if meta.table_name.is_none() {
        meta.table_name = first_group(&KEYED_TABLE_RE, hand);
    }
    meta
}

fn first_group(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
