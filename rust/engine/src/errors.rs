use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParserError {
    #[error("Hero name must not be empty")]
    EmptyHero,
    #[error("Hero name {name:?} contains a line break")]
    MultilineHero { name: String },
    #[error("Invalid pattern for hero {hero:?}: {reason}")]
    Pattern { hero: String, reason: String },
}
