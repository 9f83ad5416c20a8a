//! Profile save/load round-trips through the binary, isolated under a
//! temporary XDG config dir per test.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn run_primetop(args: &[&str], xdg: &Path) -> (bool, String, String) {
    let exe = env!("CARGO_BIN_EXE_primetop");
    let output = Command::new(exe)
        .args(args)
        .env_remove("COORDINATOR_HOST")
        .env_remove("COORDINATOR_PORT")
        .env("XDG_CONFIG_HOME", xdg)
        .output()
        .expect("run primetop");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

fn profiles_path(xdg: &Path) -> PathBuf {
    xdg.join("primetop").join("profiles.json")
}

#[test]
fn profile_created_on_first_use() {
    let td = tempfile::tempdir().unwrap();
    let (ok, _out, _err) = run_primetop(
        &["--profile", "unittest", "--host", "node1", "--port", "9001", "--dry-run"],
        td.path(),
    );
    assert!(ok);
    let data = fs::read_to_string(profiles_path(td.path())).expect("profiles.json created");
    assert!(data.contains("unittest"), "missing profile entry: {data}");
    assert!(data.contains("node1"));
}

#[test]
fn saved_profile_resolves_endpoint() {
    let td = tempfile::tempdir().unwrap();
    run_primetop(
        &["--profile", "prod", "--host", "node1", "--port", "9001", "--dry-run"],
        td.path(),
    );

    // loading by name alone resolves the saved endpoint
    let (ok, out, _err) = run_primetop(&["--profile", "prod", "--dry-run"], td.path());
    assert!(ok);
    assert_eq!(out.trim(), "http://node1:9001/api/status");
}

#[test]
fn profile_overwrite_only_when_saved() {
    let td = tempfile::tempdir().unwrap();
    run_primetop(
        &["--profile", "prod", "--host", "one", "--dry-run"],
        td.path(),
    );
    let first = fs::read_to_string(profiles_path(td.path())).unwrap();

    // identical input: no rewrite
    run_primetop(
        &["--profile", "prod", "--host", "one", "--dry-run"],
        td.path(),
    );
    let second = fs::read_to_string(profiles_path(td.path())).unwrap();
    assert_eq!(first, second, "profile file changed despite identical input");

    // changed endpoint without --save: left alone
    run_primetop(
        &["--profile", "prod", "--host", "two", "--dry-run"],
        td.path(),
    );
    let third = fs::read_to_string(profiles_path(td.path())).unwrap();
    assert!(third.contains("one") && !third.contains("\"two\""));

    // changed endpoint with --save: overwritten
    run_primetop(
        &["--profile", "prod", "--host", "two", "--save", "--dry-run"],
        td.path(),
    );
    let fourth = fs::read_to_string(profiles_path(td.path())).unwrap();
    assert!(fourth.contains("two"), "updated host not written: {fourth}");
}

#[test]
fn relay_url_profile_round_trips() {
    let td = tempfile::tempdir().unwrap();
    run_primetop(
        &["--profile", "relay", "https://relay.example.com/api/status", "--dry-run"],
        td.path(),
    );
    let (ok, out, _err) = run_primetop(&["--profile", "relay", "--dry-run"], td.path());
    assert!(ok);
    assert_eq!(out.trim(), "https://relay.example.com/api/status");
}

#[test]
fn unknown_profile_without_endpoint_errors() {
    let td = tempfile::tempdir().unwrap();
    let (_ok, out, err) = run_primetop(&["--profile", "ghost", "--dry-run"], td.path());
    assert!(out.trim().is_empty());
    assert!(err.contains("ghost"), "expected a profile error, got: {err}");
}
