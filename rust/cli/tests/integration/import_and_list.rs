use crate::helpers::{SESSION, clear_env, path_str, run_cli, write_file};
use serde_json::Value;
use serial_test::serial;

#[test]
#[serial]
fn import_twice_stores_each_hand_once() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let log = write_file(dir.path(), "session.txt", SESSION);
    let db = dir.path().join("data").join("hands.db");

    let first = run_cli(&["import", "--input", path_str(&log), "--db", path_str(&db)]);
    assert_eq!(first.exit_code, 0, "stderr={}", first.stderr);
    let json: Value = serde_json::from_str(&first.stdout).unwrap();
    assert_eq!(json["count"], 4);
    assert_eq!(json["duplicates"], 0);
    assert_eq!(
        json["hand_ids"],
        serde_json::json!(["HD1001", "HD1002", "HD1003", "HD1004"])
    );

    let second = run_cli(&["import", "--input", path_str(&log), "--db", path_str(&db)]);
    assert_eq!(second.exit_code, 0);
    let json: Value = serde_json::from_str(&second.stdout).unwrap();
    assert_eq!(json["count"], 0);
    assert_eq!(json["duplicates"], 4);
    assert_eq!(json["hand_ids"], serde_json::json!([]));
}

#[test]
#[serial]
fn hands_lists_newest_first_without_raw_text() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let log = write_file(dir.path(), "session.txt", SESSION);
    let db = dir.path().join("hands.db");
    let db_arg = path_str(&db);
    assert_eq!(
        run_cli(&["import", "--input", path_str(&log), "--db", db_arg]).exit_code,
        0
    );

    let res = run_cli(&["hands", "--db", db_arg, "--limit", "2"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let listed: Vec<Value> = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["game_no"], "HD1004");
    assert_eq!(listed[1]["game_no"], "HD1003");
    assert_eq!(listed[1]["hero_result"], 122);
    assert!(listed[0].get("raw_text").is_none());
    assert!(listed[0]["processed_at"].as_str().unwrap().ends_with('Z'));
}

#[test]
#[serial]
fn database_comes_from_env_when_no_flag() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let log = write_file(dir.path(), "session.txt", SESSION);
    let db = dir.path().join("env.db");
    unsafe {
        std::env::set_var("ACTIONTRACK_DB", &db);
    }

    let imported = run_cli(&["import", "--input", path_str(&log)]);
    let listed = run_cli(&["hands"]);
    clear_env();

    assert_eq!(imported.exit_code, 0, "stderr={}", imported.stderr);
    assert!(db.is_file());
    let hands: Vec<Value> = serde_json::from_str(&listed.stdout).unwrap();
    assert_eq!(hands.len(), 4);
}

#[test]
#[serial]
fn hands_on_missing_database_is_an_error() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("absent.db");

    let res = run_cli(&["hands", "--db", path_str(&db)]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Database not found"));
    assert!(!db.exists());
}
