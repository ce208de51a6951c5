use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use rusqlite::Connection;
use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_ridelog"))
}

/// A private home with a settings file pointing at a temp database.
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir should be available");
        let settings = format!(
            "# test settings\nhost = localhost\ndb = {}\n",
            dir.path().join("data").join("rides.db").display()
        );
        std::fs::write(dir.path().join("ridelog.params"), settings).expect("write settings");
        Self { dir }
    }

    fn db_path(&self) -> PathBuf {
        self.dir.path().join("data").join("rides.db")
    }

    fn settings_path(&self) -> PathBuf {
        self.dir.path().join("ridelog.params")
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(bin());
        cmd.args(args)
            .env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join("config"))
            .env("XDG_DATA_HOME", self.dir.path().join("share"))
            .env("RIDELOG_SETTINGS", self.settings_path())
            .env("NO_COLOR", "1")
            .env_remove("RIDELOG_LOG");
        cmd
    }

    fn run(&self, args: &[&str], stdin: &str) -> Output {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("spawn ridelog");
        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(stdin.as_bytes())
            .expect("write stdin");
        child.wait_with_output().expect("wait for ridelog")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn ride_count(path: &Path) -> i64 {
    let conn = Connection::open(path).expect("open db");
    conn.query_row("SELECT COUNT(*) FROM fahrrad_rides", [], |row| row.get(0))
        .expect("count rides")
}

#[test]
fn test_entry_run_stores_ride() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&[], "9-12-23\n1\n25.5\n1:01:30\n10000\n400:15\n");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let out = stdout(&output);
    assert!(out.contains("Start with which option:"));
    assert!(out.contains("status=ok"));
    assert!(out.contains("date=2023-12-09"));
    assert!(out.contains("day_time=01:01:30"));
    assert!(out.contains("total_time=400:15:00"));

    let conn = Connection::open(sandbox.db_path()).expect("open db");
    let (date, day_km, day_seconds, total_km, total_seconds): (String, f64, i64, f64, i64) = conn
        .query_row(
            "SELECT Date, DayKM, DaySeconds, TotalKM, TotalSeconds FROM fahrrad_rides",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?)),
        )
        .expect("one ride stored");
    assert_eq!(date, "2023-12-09");
    assert_eq!(day_km, 25.5);
    assert_eq!(day_seconds, 3690);
    assert_eq!(total_km, 10000.0);
    assert_eq!(total_seconds, 1_440_900);
}

#[test]
fn test_invalid_answers_are_asked_again() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(
        &[],
        "31-02-24\n9-12-23\n5\n3\nlots\n10000\n400:15:00\n400:15\n25.5\n90\n",
    );
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("Expect d, d-m or d-m-y"));
    assert!(out.contains("Expect a number between 1 and 4"));
    assert!(out.contains("Expect a float"));
    assert!(out.contains("day_time=00:01:30"));
    assert_eq!(ride_count(&sandbox.db_path()), 1);
}

#[test]
fn test_input_ending_early_stores_nothing() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&[], "9-12-23\n1\n25.5\n");
    assert_eq!(output.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Input ended"));
    assert_eq!(ride_count(&sandbox.db_path()), 0);
}

#[test]
fn test_list_json_after_entry() {
    let sandbox = Sandbox::new();
    for script in [
        "9-12-23\n1\n25.5\n1:01:30\n10000\n400:15\n",
        "10-12-23\n4\n401\n30\n1:00:00\n10030\n",
    ] {
        assert!(sandbox.run(&[], script).status.success());
    }

    let output = sandbox.run(&["list", "--json"], "");
    assert!(output.status.success());
    let rides: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("list --json prints JSON");
    let rides = rides.as_array().expect("array of rides");
    assert_eq!(rides.len(), 2);
    assert_eq!(rides[0]["date"], "2023-12-10");
    assert_eq!(rides[0]["day_kmh"], 30.0);
    assert_eq!(rides[1]["date"], "2023-12-09");

    let limited = sandbox.run(&["list", "--json", "--limit", "1"], "");
    let limited: serde_json::Value = serde_json::from_slice(&limited.stdout).expect("JSON");
    assert_eq!(limited.as_array().map(Vec::len), Some(1));
}

#[test]
fn test_list_date_range_and_period_totals() {
    let sandbox = Sandbox::new();
    for script in [
        "9-12-23\n1\n25.5\n1:01:30\n10000\n400:15\n",
        "10-12-23\n1\n30\n1:00:00\n10030\n401\n",
        "2-1-24\n1\n20\n40:00\n10050\n402\n",
    ] {
        assert!(sandbox.run(&[], script).status.success());
    }

    let ranged = sandbox.run(&["list", "--json", "--from", "10-12-23", "--to", "31-12-23"], "");
    assert!(ranged.status.success());
    let ranged: serde_json::Value = serde_json::from_slice(&ranged.stdout).expect("JSON");
    let ranged = ranged.as_array().expect("array of rides");
    assert_eq!(ranged.len(), 1);
    assert_eq!(ranged[0]["date"], "2023-12-10");

    let monthly = sandbox.run(&["list", "--json", "--by", "month"], "");
    assert!(monthly.status.success());
    let monthly: serde_json::Value = serde_json::from_slice(&monthly.stdout).expect("JSON");
    let monthly = monthly.as_array().expect("array of totals");
    assert_eq!(monthly.len(), 2);
    assert_eq!(monthly[0]["start"], "2024-01-01");
    assert_eq!(monthly[0]["rides"], 1);
    assert_eq!(monthly[1]["start"], "2023-12-01");
    assert_eq!(monthly[1]["rides"], 2);
    assert_eq!(monthly[1]["km"], 55.5);
    assert_eq!(monthly[1]["time"], "02:01:30");

    let yearly = sandbox.run(&["list", "--by", "year", "--to", "31-12-23"], "");
    assert!(yearly.status.success());
    let out = stdout(&yearly);
    assert!(out.contains("2023-01-01 2 55.50 02:01:30"));
    assert!(!out.contains("2024-01-01"));
}

#[test]
fn test_list_rejects_bad_range() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["list", "--from", "31-2-24"], "");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error=Invalid --from date"));
    assert!(stderr.contains("hint=Use d, d-m or d-m-y"));

    let reversed = sandbox.run(&["list", "--from", "2-1-24", "--to", "1-1-24"], "");
    assert_eq!(reversed.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&reversed.stderr).contains("is after --to"));
}

#[test]
fn test_list_plain_when_empty() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["list"], "");
    assert!(output.status.success());
    assert!(stdout(&output).contains("No rides found."));
}

#[test]
fn test_unusable_database_location_exits_with_storage_code() {
    let sandbox = Sandbox::new();
    let blocker = sandbox.dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").expect("write blocker");
    std::fs::write(
        sandbox.settings_path(),
        format!("db = {}\n", blocker.join("rides.db").display()),
    )
    .expect("rewrite settings");

    let output = sandbox.run(&[], "");
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error=Cannot open ride database"));
    assert!(stderr.contains("hint="));
}

#[test]
fn test_completions() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["completions", "bash"], "");
    assert!(output.status.success());
    assert!(stdout(&output).contains("ridelog"));
}
