use crate::helpers::{SESSION, clear_env, path_str, run_cli, write_file};
use serde_json::Value;
use serial_test::serial;

fn assert_session_stats(json: &Value) {
    assert_eq!(json["summary"]["total_hands"], 4);
    assert_eq!(json["summary"]["win_rate"], 50.0);
    assert_eq!(json["summary"]["net_result"], 353);
    assert_eq!(json["preflop"]["vpip"], 75.0);
    assert_eq!(json["preflop"]["pfr"], 50.0);
    assert_eq!(json["preflop"]["three_bet"], 25.0);
    assert_eq!(json["postflop"]["cbet"], 100.0);
    assert_eq!(json["postflop"]["af"], 5.0);
    assert_eq!(json["showdown"]["wtsd"], 50.0);
    assert_eq!(json["showdown"]["wsd"], 100.0);
}

#[test]
#[serial]
fn stats_from_logs_deduplicates_repeated_hands() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "a.txt", SESSION);
    write_file(dir.path(), "b.txt", SESSION);

    let res = run_cli(&["stats", "--input", path_str(dir.path())]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_session_stats(&json);
}

#[test]
#[serial]
fn stats_from_database_matches_logs() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let log = write_file(dir.path(), "session.txt", SESSION);
    let db = dir.path().join("hands.db");
    assert_eq!(
        run_cli(&["import", "--input", path_str(&log), "--db", path_str(&db)]).exit_code,
        0
    );

    let res = run_cli(&["stats", "--db", path_str(&db)]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_session_stats(&json);
}

#[test]
#[serial]
fn stats_by_position_groups_hands() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let log = write_file(dir.path(), "session.txt", SESSION);

    let res = run_cli(&["stats", "--input", path_str(&log), "--by-position"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    let positions: Vec<&String> = json.as_object().unwrap().keys().collect();
    assert_eq!(
        positions,
        ["UTG/MP/CO", "big blind", "button", "small blind"]
    );
    assert_eq!(json["button"]["summary"]["net_result"], 231);
    assert_eq!(json["big blind"]["postflop"]["af"], 1.0);
    assert_eq!(json["UTG/MP/CO"]["preflop"]["vpip"], 0.0);
}

#[test]
#[serial]
fn stats_without_hands_prints_empty_object() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let log = write_file(dir.path(), "empty.txt", "no hands in here\n");

    let res = run_cli(&["stats", "--input", path_str(&log)]);
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.stdout.trim(), "{}");
}
