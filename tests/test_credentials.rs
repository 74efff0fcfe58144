//! Credential resolution order: environment variable first, file second.

use pan_reward_bot::config::{resolve_checkin_credential, secret_from, CheckinCredential};
use std::env;
use std::fs;
use tempfile::TempDir;

#[test]
fn env_var_wins_over_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("cookie.txt");
    fs::write(&file, "cookie-from-file").unwrap();

    env::set_var("TEST_COOKIE_ENV_WINS", "cookie-from-env");
    let resolved = secret_from("TEST_COOKIE_ENV_WINS", &file);
    env::remove_var("TEST_COOKIE_ENV_WINS");

    assert_eq!(resolved.as_deref(), Some("cookie-from-env"));
}

#[test]
fn file_fallback_when_var_unset() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("cookie.txt");
    fs::write(&file, "cookie-from-file\n").unwrap();

    let resolved = secret_from("TEST_COOKIE_UNSET_VAR", &file);
    assert_eq!(resolved.as_deref(), Some("cookie-from-file"));
}

#[test]
fn blank_env_var_falls_back_to_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("cookie.txt");
    fs::write(&file, "cookie-from-file").unwrap();

    env::set_var("TEST_COOKIE_BLANK", "   ");
    let resolved = secret_from("TEST_COOKIE_BLANK", &file);
    env::remove_var("TEST_COOKIE_BLANK");

    assert_eq!(resolved.as_deref(), Some("cookie-from-file"));
}

#[test]
fn missing_everywhere_is_none() {
    let dir = TempDir::new().unwrap();
    let resolved = secret_from("TEST_COOKIE_MISSING", &dir.path().join("nope.txt"));
    assert!(resolved.is_none());

    let empty = dir.path().join("empty.txt");
    fs::write(&empty, "  \n").unwrap();
    assert!(secret_from("TEST_COOKIE_MISSING", &empty).is_none());
}

#[test]
fn config_file_yields_password_credential() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{"username": "alice", "password": "s3cret"}"#).unwrap();

    match resolve_checkin_credential(&config) {
        Some(CheckinCredential::Password { username, password }) => {
            assert_eq!(username, "alice");
            assert_eq!(password, "s3cret");
        }
        other => panic!("expected password credential, got {:?}", other),
    }
}

#[test]
fn config_file_session_pair_wins_over_password_fields() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    fs::write(
        &config,
        r#"{"cookie": "session=abc", "user_id": "9", "username": "alice", "password": "s3cret"}"#,
    )
    .unwrap();

    match resolve_checkin_credential(&config) {
        Some(CheckinCredential::Session { cookie, user_id }) => {
            assert_eq!(cookie, "session=abc");
            assert_eq!(user_id, "9");
        }
        other => panic!("expected session credential, got {:?}", other),
    }
}

#[test]
fn malformed_config_file_yields_nothing() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, "not json at all").unwrap();
    assert!(resolve_checkin_credential(&config).is_none());

    assert!(resolve_checkin_credential(&dir.path().join("absent.json")).is_none());
}
