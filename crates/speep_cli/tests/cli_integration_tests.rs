//! CLI integration tests
//!
//! These tests run the built `speep` binary against a temporary store and
//! check exit status, stdout and the persisted JSON file.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn speep(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_speep"))
        .env_remove("SPEEP_STORE")
        .env_remove("SPEEP_LOG_LEVEL")
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn speep_at(store: &Path, args: &[&str]) -> Output {
    let home = store.parent().unwrap();
    let mut full = vec!["--store", store.to_str().unwrap()];
    full.extend_from_slice(args);
    speep(home, &full)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn store_in(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("shortcuts.json")
}

#[test]
fn add_then_get_all_prints_table() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);

    let added = speep_at(
        &store,
        &["add", "--category", "shell", "--name", "copy", "--key", "Ctrl+C"],
    );
    assert!(added.status.success(), "stderr: {}", stderr(&added));

    let listed = speep_at(&store, &["get", "--all"]);
    assert!(listed.status.success(), "stderr: {}", stderr(&listed));
    let out = stdout(&listed);
    assert!(out.starts_with("Category"), "stdout: {out}");
    assert!(out.contains("shell"));
    assert!(out.contains("Ctrl+C"));

    let persisted: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&store).unwrap()).unwrap();
    assert_eq!(
        persisted,
        serde_json::json!([{ "category": "shell", "name": "copy", "key": "Ctrl+C" }])
    );
}

#[test]
fn duplicate_add_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);
    let args = ["add", "--category", "shell", "--name", "copy", "--key", "Ctrl+C"];

    assert!(speep_at(&store, &args).status.success());
    let second = speep_at(&store, &args);

    assert_eq!(second.status.code(), Some(1));
    assert!(stderr(&second).contains("already exists in category `shell`"));
}

#[test]
fn delete_missing_pair_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);

    let output = speep_at(&store, &["delete", "--category", "vim", "--name", "quit"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("no shortcut `quit` in category `vim`"));
}

#[test]
fn delete_pair_and_delete_all() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);
    for (category, name, key) in [("shell", "copy", "Ctrl+C"), ("vim", "quit", ":q")] {
        let output = speep_at(
            &store,
            &["add", "--category", category, "--name", name, "--key", key],
        );
        assert!(output.status.success());
    }

    let removed = speep_at(&store, &["delete", "--category", "vim", "--name", "quit"]);
    assert!(removed.status.success(), "stderr: {}", stderr(&removed));
    let remaining = stdout(&speep_at(&store, &["get", "--all"]));
    assert!(!remaining.contains("quit"));
    assert!(remaining.contains("copy"));

    let cleared = speep_at(&store, &["delete", "--all"]);
    assert!(cleared.status.success());
    assert!(!store.exists());
    assert_eq!(
        stdout(&speep_at(&store, &["get", "--all"])),
        "No shortcuts found\n"
    );
}

#[test]
fn get_by_name_and_keyword_filter_rows() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);
    for (category, name, key) in [
        ("editor", "save", "Ctrl+S"),
        ("editor", "save all", "Ctrl+Alt+S"),
        ("vim", "write", ":w"),
    ] {
        speep_at(
            &store,
            &["add", "--category", category, "--name", name, "--key", key],
        );
    }

    let by_name = stdout(&speep_at(&store, &["get", "--name", "save"]));
    assert_eq!(by_name.lines().count(), 4, "stdout: {by_name}");

    let by_key = stdout(&speep_at(&store, &["get", "--keyword", ":"]));
    assert!(by_key.contains("write"));
    assert!(!by_key.contains("save"));
}

#[test]
fn missing_flags_are_rejected_before_touching_store() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);

    let output = speep_at(&store, &["add", "--category", "shell", "--name", "copy"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("--key"));
    assert!(!store.exists());

    let get = speep_at(&store, &["get"]);
    assert!(!get.status.success());
}

#[test]
fn default_store_lives_under_xdg_config_home() {
    let temp_dir = TempDir::new().unwrap();
    let home = temp_dir.path();

    let output = speep(
        home,
        &["add", "--category", "shell", "--name", "copy", "--key", "Ctrl+C"],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(home
        .join("config")
        .join("speep")
        .join("shortcuts.json")
        .is_file());
}

#[test]
fn help_lists_subcommands() {
    let temp_dir = TempDir::new().unwrap();
    let output = speep(temp_dir.path(), &["help"]);

    assert!(output.status.success());
    let out = stdout(&output);
    for subcommand in ["get", "add", "delete"] {
        assert!(out.contains(subcommand), "stdout: {out}");
    }
}

#[test]
fn commands_leave_no_logs_directory_by_default() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);

    let listed = speep_at(&store, &["get", "--all"]);
    assert!(listed.status.success(), "stderr: {}", stderr(&listed));
    assert!(!temp_dir.path().join("logs").exists());

    let quiet = speep_at(&store, &["--log-level", "off", "get", "--all"]);
    assert!(quiet.status.success(), "stderr: {}", stderr(&quiet));
    assert!(!temp_dir.path().join("logs").exists());
}

#[test]
fn relative_store_does_not_litter_working_directory() {
    let temp_dir = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_speep"))
        .env_remove("SPEEP_STORE")
        .env_remove("SPEEP_LOG_LEVEL")
        .env("HOME", temp_dir.path())
        .current_dir(temp_dir.path())
        .args(["--store", "s.json", "get", "--all"])
        .output()
        .expect("Failed to execute CLI");
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let entries: Vec<_> = std::fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert!(entries.is_empty(), "unexpected entries: {entries:?}");
}

#[test]
fn log_level_writes_logs_next_to_the_store() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);

    let added = speep_at(
        &store,
        &[
            "--log-level",
            "info",
            "add",
            "--category",
            "shell",
            "--name",
            "copy",
            "--key",
            "Ctrl+C",
        ],
    );
    assert!(added.status.success(), "stderr: {}", stderr(&added));

    let log_dir = temp_dir.path().join("logs");
    assert!(log_dir.is_dir());
    let logged: String = std::fs::read_dir(&log_dir)
        .unwrap()
        .map(|entry| std::fs::read_to_string(entry.unwrap().path()).unwrap())
        .collect();
    assert!(logged.contains("event=store_save"), "log: {logged}");
    assert!(!logged.contains("Ctrl+C"), "log must not carry shortcut keys");
}
