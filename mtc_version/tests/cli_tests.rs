use std::process::{Command, Output};

extern crate mtc_version;

use mtc_version::*;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mtc-version"))
        .args(args)
        .output()
        .expect("cannot run mtc-version")
}

fn stdout(args: &[&str]) -> String {
    let out = run(args);
    assert!(out.status.success(), "mtc-version {args:?} failed: {out:?}");
    String::from_utf8(out.stdout).expect("stdout is not utf-8")
}

#[test]
fn test_cli_prints_version_line() {
    let text = stdout(&[]);
    assert_eq!(text, format!("{}\n", format_version()));
    assert_eq!(text.lines().count(), 1);
}

#[test]
fn test_cli_renderings() {
    let info = VersionInfo::current();
    assert_eq!(stdout(&["--schema"]), format!("{}\n", SchemaVersion::DEFAULT));
    assert_eq!(stdout(&["--full"]), format!("{}\n", info.format_full()));
    assert_eq!(stdout(&["--banner"]), format!("{}\n", info.banner()));
}

#[test]
fn test_cli_verbose_logs_to_stderr() {
    let out = run(&["-v"]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        format!("{}\n", format_version())
    );
    let err = String::from_utf8(out.stderr).unwrap();
    assert!(err.contains(&VersionInfo::current().banner()));
}

#[test]
fn test_cli_rejects_conflicting_flags() {
    assert!(!run(&["--full", "--schema"]).status.success());
}
