//! SQLite persistence for parsed hands.
//!
//! One row per hand in table `hands`, keyed by an autoincrement id with
//! `game_no` unique. Re-importing a log never duplicates rows: hands whose
//! `game_no` is already stored are counted as duplicates and skipped.

use actiontrack_engine::ParsedHand;
use chrono::{SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params};
use serde::Serialize;
use std::path::Path;
use std::time::Duration;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS hands (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    game_no TEXT NOT NULL UNIQUE,
    table_name TEXT,
    game_type TEXT,
    stakes TEXT,
    hero_cards TEXT,
    hero_position TEXT,
    hero_result INTEGER NOT NULL DEFAULT 0,
    hero_vpip INTEGER NOT NULL DEFAULT 0,
    hero_pfr INTEGER NOT NULL DEFAULT 0,
    hero_three_bet INTEGER NOT NULL DEFAULT 0,
    hero_fold_to_three_bet INTEGER NOT NULL DEFAULT 0,
    hero_saw_flop INTEGER NOT NULL DEFAULT 0,
    hero_c_bet_opp INTEGER NOT NULL DEFAULT 0,
    hero_c_bet INTEGER NOT NULL DEFAULT 0,
    hero_af_bets INTEGER NOT NULL DEFAULT 0,
    hero_af_calls INTEGER NOT NULL DEFAULT 0,
    hero_saw_showdown INTEGER NOT NULL DEFAULT 0,
    hero_won_at_showdown INTEGER NOT NULL DEFAULT 0,
    raw_text TEXT NOT NULL,
    processed_at TEXT NOT NULL
)";

const COLUMNS: &str = "id, processed_at, game_no, table_name, game_type, stakes, hero_cards, \
    hero_position, hero_result, hero_vpip, hero_pfr, hero_three_bet, hero_fold_to_three_bet, \
    hero_saw_flop, hero_c_bet_opp, hero_c_bet, hero_af_bets, hero_af_calls, hero_saw_showdown, \
    hero_won_at_showdown, raw_text";

/// A hand as stored, with its row id and import timestamp.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StoredHand {
    pub id: i64,
    pub processed_at: String,
    #[serde(flatten)]
    pub hand: ParsedHand,
}

/// Outcome of one [`HandStore::insert_new`] call.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    /// `game_no` of every newly stored hand, in input order
    pub inserted: Vec<String>,
    pub duplicates: usize,
}

pub struct HandStore {
    conn: Connection,
}

impl HandStore {
    /// Opens (creating if needed) the database at `path`.
    pub fn open(path: &Path) -> rusqlite::Result<Self> {
        let conn = Connection::open(path)?;
        conn.busy_timeout(Duration::from_secs(5))?;
        Self::init(conn)
    }

    pub fn open_in_memory() -> rusqlite::Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> rusqlite::Result<Self> {
        conn.execute(SCHEMA, [])?;
        Ok(Self { conn })
    }

    /// Stores every hand whose `game_no` is not yet present.
    ///
    /// All rows of one call share a `processed_at` timestamp and are written
    /// in a single transaction.
    pub fn insert_new(&mut self, hands: &[ParsedHand]) -> rusqlite::Result<ImportSummary> {
        let processed_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let tx = self.conn.transaction()?;
        let mut summary = ImportSummary::default();
        {
            let mut stmt = tx.prepare(
                "INSERT OR IGNORE INTO hands (game_no, table_name, game_type, stakes, hero_cards,
                    hero_position, hero_result, hero_vpip, hero_pfr, hero_three_bet,
                    hero_fold_to_three_bet, hero_saw_flop, hero_c_bet_opp, hero_c_bet,
                    hero_af_bets, hero_af_calls, hero_saw_showdown, hero_won_at_showdown,
                    raw_text, processed_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16,
                    ?17, ?18, ?19, ?20)",
            )?;
            for h in hands {
                let changed = stmt.execute(params![
                    h.game_no,
                    h.table_name,
                    h.game_type,
                    h.stakes,
                    h.hero_cards,
                    h.hero_position,
                    h.hero_result,
                    h.hero_vpip,
                    h.hero_pfr,
                    h.hero_three_bet,
                    h.hero_fold_to_three_bet,
                    h.hero_saw_flop,
                    h.hero_c_bet_opp,
                    h.hero_c_bet,
                    h.hero_af_bets,
                    h.hero_af_calls,
                    h.hero_saw_showdown,
                    h.hero_won_at_showdown,
                    h.raw_text,
                    processed_at,
                ])?;
                if changed == 0 {
                    summary.duplicates += 1;
                } else {
                    summary.inserted.push(h.game_no.clone());
                }
            }
        }
        tx.commit()?;
        Ok(summary)
    }

    /// Every stored hand in insertion order.
    pub fn load_all(&self) -> rusqlite::Result<Vec<StoredHand>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {COLUMNS} FROM hands ORDER BY id"))?;
        let rows = stmt.query_map([], stored_from_row)?;
        rows.collect()
    }

    /// The `limit` most recently stored hands, newest first.
    pub fn list(&self, limit: usize) -> rusqlite::Result<Vec<StoredHand>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {COLUMNS} FROM hands ORDER BY id DESC LIMIT ?1"
        ))?;
        let rows = stmt.query_map([limit], stored_from_row)?;
        rows.collect()
    }

    pub fn get(&self, game_no: &str) -> rusqlite::Result<Option<StoredHand>> {
        self.conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM hands WHERE game_no = ?1"),
                [game_no],
                stored_from_row,
            )
            .optional()
    }

    pub fn count(&self) -> rusqlite::Result<u64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM hands", [], |r| r.get::<_, i64>(0))
            .map(|n| n as u64)
    }
}

fn stored_from_row(row: &Row<'_>) -> rusqlite::Result<StoredHand> {
    Ok(StoredHand {
        id: row.get(0)?,
        processed_at: row.get(1)?,
        hand: ParsedHand {
            game_no: row.get(2)?,
            table_name: row.get(3)?,
            game_type: row.get(4)?,
            stakes: row.get(5)?,
            hero_cards: row.get(6)?,
            hero_position: row.get(7)?,
            hero_result: row.get(8)?,
            hero_vpip: row.get(9)?,
            hero_pfr: row.get(10)?,
            hero_three_bet: row.get(11)?,
            hero_fold_to_three_bet: row.get(12)?,
            hero_saw_flop: row.get(13)?,
            hero_c_bet_opp: row.get(14)?,
            hero_c_bet: row.get(15)?,
            hero_af_bets: row.get(16)?,
            hero_af_calls: row.get(17)?,
            hero_saw_showdown: row.get(18)?,
            hero_won_at_showdown: row.get(19)?,
            raw_text: row.get(20)?,
        },
    })
}
