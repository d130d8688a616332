use crate::helpers::{clear_env, run_cli, write_file};
use serde_json::Value;
use serial_test::serial;

#[test]
#[serial]
fn cfg_shows_defaults() {
    clear_env();
    let res = run_cli(&["cfg"]);
    assert_eq!(res.exit_code, 0);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["hero"]["value"], "Hero");
    assert_eq!(json["hero"]["source"], "default");
    assert_eq!(json["database"]["value"], "action_tracker.db");
    assert_eq!(json["database"]["source"], "default");
}

#[test]
#[serial]
fn precedence_flag_over_env_over_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let cfg = write_file(
        dir.path(),
        "actiontrack.toml",
        "hero = \"FileHero\"\ndatabase = \"file.db\"\n",
    );
    unsafe {
        std::env::set_var("ACTIONTRACK_CONFIG", &cfg);
    }

    let from_file = run_cli(&["cfg"]);
    unsafe {
        std::env::set_var("ACTIONTRACK_HERO", "EnvHero");
    }
    let from_env = run_cli(&["cfg"]);
    let from_flag = run_cli(&["--hero", "FlagHero", "cfg"]);
    clear_env();

    let json: Value = serde_json::from_str(&from_file.stdout).unwrap();
    assert_eq!(json["hero"]["value"], "FileHero");
    assert_eq!(json["hero"]["source"], "file");
    assert_eq!(json["database"]["source"], "file");

    let json: Value = serde_json::from_str(&from_env.stdout).unwrap();
    assert_eq!(json["hero"]["value"], "EnvHero");
    assert_eq!(json["hero"]["source"], "env");

    let json: Value = serde_json::from_str(&from_flag.stdout).unwrap();
    assert_eq!(json["hero"]["value"], "FlagHero");
    assert_eq!(json["hero"]["source"], "flag");
    assert_eq!(json["database"]["value"], "file.db");
}

#[test]
#[serial]
fn invalid_config_file_fails_every_command() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let cfg = write_file(dir.path(), "broken.toml", "hero = [1, 2\n");
    unsafe {
        std::env::set_var("ACTIONTRACK_CONFIG", &cfg);
    }

    let cfg_res = run_cli(&["cfg"]);
    let stats_res = run_cli(&["stats", "--input", "whatever.txt"]);
    clear_env();

    assert_eq!(cfg_res.exit_code, 2);
    assert!(cfg_res.stderr.starts_with("Error: Configuration error"));
    assert_eq!(stats_res.exit_code, 2);
    assert!(stats_res.stderr.contains("Configuration error"));
}

#[test]
#[serial]
fn blank_hero_flag_is_rejected_by_the_parser() {
    clear_env();
    let res = run_cli(&["--hero", "", "stats", "--input", "whatever.txt"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Hero name must not be empty"));
}
