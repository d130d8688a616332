//! # actiontrack-engine: Hand-History Parsing Core
//!
//! Turns raw poker-room hand-history logs into one structured [`ParsedHand`]
//! per hand, describing the observing player's ("Hero") behavior: VPIP, PFR,
//! 3-bet, fold to 3-bet, c-bet, aggression counters and showdown results.
//! The engine does no I/O; it takes text already in memory.
//!
//! ## Core Modules
//!
//! - [`splitter`] - Splits a log into per-hand blocks at hand-start markers
//! - [`street`] - Street markers and the per-section body record
//! - [`metadata`] - Hand id, game type, stakes, table and hole cards
//! - [`actions`] - Ordered `<player>: <verb>` action tokens of a street
//! - [`behavior`] - Hero's pre-flop, post-flop and aggression flags
//! - [`summary`] - Position and winnings from Hero's summary seat line
//! - [`record`] - The [`ParsedHand`] output record
//! - [`parser`] - [`HandParser`], tying the pieces together
//! - [`stats`] - HUD rates aggregated over many hands
//! - [`errors`] - Error types for parser construction
//!
//! ## Quick Start
//!
//! ```rust
//! use actiontrack_engine::parse_hand_history;
//!
//! let log = "Poker Hand #G1: No Limit Hold'em - $0.05/$0.10 - 2026/01/02 10:00:00
//! Table 'Blue' 6-max Seat #1 is the button
//! *** HOLE CARDS ***
//! Dealt to Hero [Ah Kd]
//! Villain: raises $0.20 to $0.30
//! Hero: raises $0.60 to $0.90
//! Villain: calls $0.60
//! *** FLOP *** [2c 7d 9s]
//! Villain: checks
//! Hero: bets $1
//! Villain: folds
//! *** SUMMARY ***
//! Seat 1: Hero (button) won (215)
//! ";
//!
//! let hands = parse_hand_history(log);
//! let hand = &hands[0];
//! assert_eq!(hand.game_no, "G1");
//! assert!(hand.hero_three_bet && hand.hero_c_bet);
//! assert_eq!(hand.hero_position.as_deref(), Some("button"));
//! assert_eq!(hand.hero_result, 215);
//! ```
//!
//! ## Other Heroes
//!
//! Logs exported under a real screen name can be parsed by naming the player:
//!
//! ```rust
//! use actiontrack_engine::HandParser;
//!
//! let parser = HandParser::new("river_rat").expect("valid name");
//! assert!(parser.parse("no hands here").is_empty());
//! ```

pub mod actions;
pub mod behavior;
pub mod errors;
pub mod metadata;
pub mod parser;
pub mod record;
pub mod splitter;
pub mod stats;
pub mod street;
pub mod summary;

pub use errors::ParserError;
pub use parser::{parse_hand_history, HandParser, ParseReport, DEFAULT_HERO};
pub use record::ParsedHand;
