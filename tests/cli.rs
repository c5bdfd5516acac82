use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("balance-history").unwrap();
    cmd.env("BALANCE_HISTORY_DIR", home.path())
        .env_remove("BALANCE_HISTORY_ENDPOINT")
        .env_remove("BALANCE_HISTORY_CSRF_TOKEN")
        .env_remove("BALANCE_HISTORY_COOKIE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn show_prints_statistics_table() {
    let home = TempDir::new().unwrap();

    cmd(&home)
        .args(["show", "-b", "Rent,Food", "--file"])
        .arg(fixture("history.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Difference"))
        .stdout(predicate::str::contains("40.00"))
        .stdout(predicate::str::contains("1.27x"))
        .stdout(predicate::str::contains("Balance History (01/01 to 01/08)"));
}

#[test]
fn show_html_prints_table_rows() {
    let home = TempDir::new().unwrap();

    cmd(&home)
        .args(["show", "--html", "--file"])
        .arg(fixture("history.json"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "<tr><th>Field</th><th>Value</th></tr><tr><td>Total Difference</td><td>40.00</td></tr>",
        ));
}

#[test]
fn error_payload_fails_with_message() {
    let home = TempDir::new().unwrap();

    cmd(&home)
        .args(["show", "--file"])
        .arg(fixture("error.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: Start date must be before end date",
        ))
        .stdout(predicate::str::contains("Total Difference").not());
}

#[test]
fn misaligned_response_is_not_drawn() {
    let home = TempDir::new().unwrap();

    cmd(&home)
        .args(["show", "--file"])
        .arg(fixture("misaligned.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn chart_writes_chartjs_config() {
    let home = TempDir::new().unwrap();
    let output = home.path().join("chart.json");

    cmd(&home)
        .args(["chart", "--file"])
        .arg(fixture("history.json"))
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Chart written to:"));

    let config: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(config["type"], "line");
    assert_eq!(config["data"]["labels"][1], "01/08");
    assert_eq!(config["data"]["datasets"][0]["label"], "Rent");
    assert_eq!(
        config["data"]["datasets"][0]["backgroundColor"][0],
        "rgba(255, 99, 132, 0.2)"
    );
    assert_eq!(
        config["options"]["scales"]["yAxes"][0]["ticks"]["beginAtZero"],
        true
    );
}

#[test]
fn chart_to_stdout_is_json() {
    let home = TempDir::new().unwrap();

    let assert = cmd(&home)
        .args(["chart", "--file"])
        .arg(fixture("history.json"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Total Difference"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let config: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(config["data"]["datasets"][1]["label"], "Food");
}

#[test]
fn export_csv_writes_file() {
    let home = TempDir::new().unwrap();
    let output = home.path().join("history.csv");

    cmd(&home)
        .args(["export", "--format", "csv", "--file"])
        .arg(fixture("history.json"))
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 budgets over 2 days"));

    let csv = std::fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with("Day,Rent,Food,Total"));
    assert!(csv.contains("01/08,150.00,40.00,190.00"));
}

#[test]
fn init_writes_settings() {
    let home = TempDir::new().unwrap();

    cmd(&home)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    let settings = std::fs::read_to_string(home.path().join("config.json")).unwrap();
    assert!(settings.contains("http://localhost:8000/api/graph/history"));

    cmd(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:      true"));
}
