//! Integration tests for the credstore CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! Passwords are passed inline or piped on stdin so no test ever hits an
//! interactive prompt.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Helper: a Command pointing at the credstore binary, rooted in `dir`.
fn credstore(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("credstore").expect("binary should exist");
    cmd.current_dir(dir.path()).env_remove("CREDSTORE_PASSWORD");
    cmd
}

#[test]
fn help_flag_shows_usage() {
    let tmp = TempDir::new().unwrap();
    credstore(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("password digests"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("store"))
        .stdout(predicate::str::contains("verify"))
        .stdout(predicate::str::contains("backup"))
        .stdout(predicate::str::contains("load"));
}

#[test]
fn no_args_shows_help() {
    let tmp = TempDir::new().unwrap();
    credstore(&tmp)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn generate_prints_requested_passwords() {
    let tmp = TempDir::new().unwrap();
    let output = credstore(&tmp)
        .args(["generate", "--length", "12", "--count", "3"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in lines {
        assert_eq!(line.len(), 12);
        assert!(line.bytes().all(|b| b.is_ascii_alphanumeric()));
    }

    // Generating never creates the store file.
    tmp.child("passwords.txt").assert(predicate::path::missing());
}

#[test]
fn generate_uses_configured_default_length() {
    let tmp = TempDir::new().unwrap();
    tmp.child(".credstore.toml")
        .write_str("password_length = 5\n")
        .unwrap();

    credstore(&tmp)
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::is_match("^[A-Za-z0-9]{5}\n$").unwrap());
}

#[test]
fn hash_prints_md5_digest() {
    let tmp = TempDir::new().unwrap();
    credstore(&tmp)
        .args(["hash", "hunter2"])
        .assert()
        .success()
        .stdout("2ab96390c7dbe3439de74d0c9b0b1767\n");
}

#[test]
fn store_then_verify() {
    let tmp = TempDir::new().unwrap();

    credstore(&tmp)
        .args(["store", "alice"])
        .write_stdin("hunter2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("added"));

    tmp.child("passwords.txt")
        .assert("alice:2ab96390c7dbe3439de74d0c9b0b1767\n");

    credstore(&tmp)
        .args(["verify", "alice"])
        .write_stdin("hunter2\n")
        .assert()
        .success();

    credstore(&tmp)
        .args(["verify", "alice"])
        .write_stdin("wrong\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("verification failed"));

    credstore(&tmp)
        .args(["verify", "bob"])
        .write_stdin("anything\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("verification failed"));
}

#[test]
fn store_overwrites_existing_user() {
    let tmp = TempDir::new().unwrap();

    credstore(&tmp)
        .args(["store", "u", "p1"])
        .assert()
        .success();
    credstore(&tmp)
        .args(["store", "u", "p2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("updated"));

    credstore(&tmp).args(["verify", "u", "p1"]).assert().failure();
    credstore(&tmp).args(["verify", "u", "p2"]).assert().success();
}

#[test]
fn store_with_generate_prints_password_that_verifies() {
    let tmp = TempDir::new().unwrap();

    let output = credstore(&tmp)
        .args(["store", "carol", "--generate", "--length", "16"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    let password = text.lines().last().unwrap().trim();
    assert_eq!(password.len(), 16);

    credstore(&tmp)
        .args(["verify", "carol", password])
        .assert()
        .success();
}

#[test]
fn list_json_shows_digests_in_order() {
    let tmp = TempDir::new().unwrap();
    tmp.child("passwords.txt")
        .write_str("zed:1111\namy:2222\n")
        .unwrap();

    let output = credstore(&tmp)
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    assert!(text.find("zed").unwrap() < text.find("amy").unwrap());
    assert!(text.contains("\"2222\""));
}

#[test]
fn list_rejects_unknown_format() {
    let tmp = TempDir::new().unwrap();
    credstore(&tmp)
        .args(["list", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown list format"));
}

#[test]
fn backup_and_load_between_files() {
    let tmp = TempDir::new().unwrap();

    credstore(&tmp)
        .args(["store", "alice", "hunter2"])
        .assert()
        .success();
    credstore(&tmp)
        .args(["backup", "copy.txt"])
        .assert()
        .success();

    tmp.child("copy.txt")
        .assert("alice:2ab96390c7dbe3439de74d0c9b0b1767\n");

    credstore(&tmp)
        .args(["--file", "other.txt", "load", "copy.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 1 entries"));

    credstore(&tmp)
        .args(["--file", "other.txt", "verify", "alice", "hunter2"])
        .assert()
        .success();
}

#[test]
fn load_resolves_source_like_backup() {
    let tmp = TempDir::new().unwrap();
    tmp.child("passwords.txt").write_str("alice:aaa\n").unwrap();
    tmp.child("saved/copy.txt").write_str("bob:bbb\n").unwrap();

    credstore(&tmp)
        .args(["load", "saved/copy.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 1 entries"));

    tmp.child("passwords.txt").assert("alice:aaa\nbob:bbb\n");

    credstore(&tmp)
        .args(["load", "passwords.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("store file itself"));

    credstore(&tmp)
        .args(["backup", "passwords.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("store file itself"));
}

#[test]
fn list_table_shows_hash_and_generator() {
    let tmp = TempDir::new().unwrap();
    tmp.child(".credstore.toml")
        .write_str("generator = \"secure\"\n")
        .unwrap();
    tmp.child("passwords.txt").write_str("alice:aaa\n").unwrap();

    credstore(&tmp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 user(s), md5, generator: secure"));
}

#[test]
fn load_malformed_file_fails_and_leaves_store_untouched() {
    let tmp = TempDir::new().unwrap();
    tmp.child("passwords.txt").write_str("alice:aaa\n").unwrap();
    tmp.child("bad.txt")
        .write_str("bob:bbb\nno delimiter\n")
        .unwrap();

    credstore(&tmp)
        .args(["load", "bad.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed backup line 2"));

    tmp.child("passwords.txt").assert("alice:aaa\n");
}

#[test]
fn corrupt_store_file_is_reported() {
    let tmp = TempDir::new().unwrap();
    tmp.child("passwords.txt").write_str("garbage\n").unwrap();

    credstore(&tmp)
        .args(["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed"));
}

#[test]
fn delete_removes_user() {
    let tmp = TempDir::new().unwrap();
    tmp.child("passwords.txt")
        .write_str("alice:aaa\nbob:bbb\n")
        .unwrap();

    credstore(&tmp)
        .args(["delete", "alice", "--force"])
        .assert()
        .success();

    tmp.child("passwords.txt").assert("bob:bbb\n");

    credstore(&tmp)
        .args(["delete", "alice", "--force"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn argon2_config_produces_phc_digests() {
    let tmp = TempDir::new().unwrap();
    tmp.child(".credstore.toml")
        .write_str("hash_algorithm = \"argon2\"\nargon2_memory_kib = 1024\nargon2_iterations = 1\n")
        .unwrap();

    credstore(&tmp)
        .args(["store", "alice", "hunter2"])
        .assert()
        .success();

    let content = std::fs::read_to_string(tmp.child("passwords.txt").path()).unwrap();
    assert!(content.starts_with("alice:$argon2id$"), "got: {content}");

    credstore(&tmp)
        .args(["verify", "alice", "hunter2"])
        .assert()
        .success();
}

#[test]
fn completions_for_bash() {
    let tmp = TempDir::new().unwrap();
    credstore(&tmp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("credstore"));
}

#[cfg(feature = "audit-log")]
#[test]
fn audit_records_operations() {
    let tmp = TempDir::new().unwrap();

    credstore(&tmp)
        .args(["store", "alice", "hunter2"])
        .assert()
        .success();
    credstore(&tmp)
        .args(["verify", "alice", "nope"])
        .assert()
        .failure();

    credstore(&tmp)
        .args(["audit", "--last", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 audit entries"))
        .stdout(predicate::str::contains("mismatch"))
        .stdout(predicate::str::contains("hunter2").not());
}
