use regex::Regex;
use std::sync::LazyLock;

/// Header prefix used by the `#Game No : ` export style.
pub const GAME_NO_MARKER: &str = "#Game No : ";
/// Header prefix used by the `Poker Hand #` export style.
pub const POKER_HAND_MARKER: &str = "Poker Hand #";

static HAND_START_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "{}|{}",
        regex::escape(GAME_NO_MARKER),
        regex::escape(POKER_HAND_MARKER)
    ))
    .expect("valid hand start regex")
});

/// Lazy, forward-only sequence of hand blocks within one log.
///
/// Each yielded block starts at a hand-start marker and runs up to the next
/// marker (or end of input), trimmed of surrounding whitespace. Text before
/// the first marker is never yielded.
#[derive(Debug, Clone)]
pub struct HandBlocks<'a> {
    text: &'a str,
    next_start: Option<usize>,
}

impl<'a> HandBlocks<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            next_start: HAND_START_RE.find(text).map(|m| m.start()),
        }
    }
}

impl<'a> Iterator for HandBlocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            let start = self.next_start?;
            // Skip past this marker before looking for the next one.
            let search_from = start + 1;
            let end = HAND_START_RE
                .find_at(self.text, search_from)
                .map(|m| m.start());
            self.next_start = end;
            let block = self.text[start..end.unwrap_or(self.text.len())].trim();
            if !block.is_empty() {
                return Some(block);
            }
        }
    }
}

impl std::iter::FusedIterator for HandBlocks<'_> {}

/// Splits a raw hand-history log into per-hand blocks.
///
/// ```
/// use actiontrack_engine::splitter::split_hands;
///
/// let log = "Poker Hand #A1: x\n\nPoker Hand #A2: y\n";
/// let blocks: Vec<&str> = split_hands(log).collect();
/// assert_eq!(blocks, vec!["Poker Hand #A1: x", "Poker Hand #A2: y"]);
/// ```
pub fn split_hands(text: &str) -> HandBlocks<'_> {
    HandBlocks::new(text)
}
