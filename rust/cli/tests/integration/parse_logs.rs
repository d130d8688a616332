use crate::helpers::{SESSION, clear_env, path_str, run_cli, write_file};
use actiontrack_engine::ParsedHand;
use serial_test::serial;

fn parse_lines(stdout: &str) -> Vec<ParsedHand> {
    stdout
        .lines()
        .map(|l| serde_json::from_str(l).expect("json line"))
        .collect()
}

#[test]
#[serial]
fn parse_file_emits_json_lines_and_warns_about_dropped_blocks() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let log = write_file(dir.path(), "session.txt", SESSION);

    let res = run_cli(&["parse", "--input", path_str(&log)]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);

    let hands = parse_lines(&res.stdout);
    let ids: Vec<_> = hands.iter().map(|h| h.game_no.as_str()).collect();
    assert_eq!(ids, ["HD1001", "HD1002", "HD1003", "HD1004"]);
    assert!(hands.iter().all(|h| h.check_invariants().is_ok()));
    assert!(res.stderr.contains("WARNING: Skipped 1 block(s) without a hand number"));
}

#[test]
#[serial]
fn parse_directory_reads_plain_and_compressed_logs_in_order() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let (first, second) = SESSION.split_at(SESSION.find("Poker Hand #HD1003").unwrap());
    write_file(dir.path(), "a_morning.txt", first);
    let packed = zstd::stream::encode_all(second.as_bytes(), 3).unwrap();
    std::fs::write(dir.path().join("b_evening.txt.zst"), packed).unwrap();
    write_file(dir.path(), "readme.md", "Poker Hand #IGNORED: x - y - z");

    let res = run_cli(&["parse", "--input", path_str(dir.path())]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);

    let ids: Vec<_> = parse_lines(&res.stdout)
        .into_iter()
        .map(|h| h.game_no)
        .collect();
    assert_eq!(ids, ["HD1001", "HD1002", "HD1003", "HD1004"]);
}

#[test]
#[serial]
fn parse_directory_skips_unreadable_file_with_warning() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "good.txt", SESSION);
    std::fs::write(dir.path().join("bad.zst"), b"not zstd at all").unwrap();

    let res = run_cli(&["parse", "--input", path_str(dir.path())]);
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.stdout.lines().count(), 4);
    assert!(res.stderr.contains("WARNING: Skipped"));
    assert!(res.stderr.contains("bad.zst"));
}

#[test]
#[serial]
fn parse_with_output_writes_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let log = write_file(dir.path(), "session.txt", SESSION);
    let target = dir.path().join("export").join("hands.jsonl");

    let res = run_cli(&[
        "parse",
        "--input",
        path_str(&log),
        "--output",
        path_str(&target),
    ]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.starts_with("Wrote 4 hands to"));

    let written = std::fs::read_to_string(&target).unwrap();
    assert_eq!(parse_lines(&written).len(), 4);
}

#[test]
#[serial]
fn hero_flag_switches_the_observed_player() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let log = write_file(dir.path(), "session.txt", SESSION);

    let res = run_cli(&["--hero", "Villain1", "parse", "--input", path_str(&log)]);
    assert_eq!(res.exit_code, 0);

    let hands = parse_lines(&res.stdout);
    let hd1002 = hands.iter().find(|h| h.game_no == "HD1002").unwrap();
    assert!(hd1002.hero_vpip && hd1002.hero_pfr);
    // "collected" is not a recognized seat outcome.
    assert!(hd1002.hero_position.is_none());
    assert_eq!(hd1002.hero_result, 0);
    assert!(hd1002.hero_cards.is_none());
}

#[test]
#[serial]
fn missing_input_exits_with_error() {
    clear_env();
    let res = run_cli(&["parse", "--input", "no/such/session.txt"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.is_empty());
    assert!(res.stderr.starts_with("Error: Invalid input: Input not found"));
}
