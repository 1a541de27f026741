use assert_cmd::Command;
use indoc::indoc;
use std::fs;
use tempfile::TempDir;

fn pallet_roi(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pallet-roi"));
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_calculate_json_report() {
    let dir = TempDir::new().unwrap();
    let stdout = stdout_of(pallet_roi(&dir).args([
        "calculate",
        "--pallets-per-day",
        "100",
        "--workdays-per-year",
        "250",
        "--year1-cost",
        "20000",
        "--ongoing-cost",
        "5000",
        "--format",
        "json",
    ]));

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let total = json["results"]["totalAnnualSavings"].as_f64().unwrap();
    assert!((total - 192_844.44).abs() < 0.01);
    assert_eq!(json["results"]["chargebackSavings"], 140_625.0);
    assert_eq!(
        json["narrative"][0],
        "Payback ≤ 3 months—clears in Q1."
    );
    assert_eq!(json["warnings"].as_array().unwrap().len(), 0);
}

#[test]
fn test_calculate_without_volume_prints_empty_state() {
    let dir = TempDir::new().unwrap();
    let stdout = stdout_of(pallet_roi(&dir).args(["calculate", "--format", "json"]));
    assert_eq!(
        stdout.trim(),
        "Enter pallets/day and workdays/year to see results"
    );

    let stdout = stdout_of(pallet_roi(&dir).args(["calculate", "-p", "100", "-w", "abc"]));
    assert_eq!(
        stdout.trim(),
        "Enter pallets/day and workdays/year to see results"
    );
}

#[test]
fn test_calculate_csv_to_file_from_scenario() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("scenario.toml"),
        indoc! {r#"
            pallets_per_day = 100
            workdays_per_year = "250"
            year1_cost = 20000
            ongoing_cost = 5000
        "#},
    )
    .unwrap();

    pallet_roi(&dir)
        .args([
            "calculate",
            "--inputs",
            "scenario.toml",
            "--format",
            "csv",
            "--output",
            "reports/roi.csv",
        ])
        .assert()
        .success();

    let csv = fs::read_to_string(dir.path().join("reports").join("roi.csv")).unwrap();
    assert!(csv.starts_with("\"vMeasure ROI Calculator Results\""));
    assert!(csv.contains("\"Total Annual Savings\",\"192844\""));
    assert!(csv.contains("\"Payback (Months)\",\"1.2\""));
    assert!(csv.contains("\"Annual Chargebacks ($)\",\"Using estimator\""));
}

#[test]
fn test_negative_roi_terminal_report() {
    let dir = TempDir::new().unwrap();
    let stdout = stdout_of(pallet_roi(&dir).args([
        "calculate",
        "-p",
        "10",
        "-w",
        "5",
        "--manual-capture-time",
        "5",
        "--avg-chargeback-cost",
        "0",
        "--hours-per-dispute",
        "0",
        "--year1-cost",
        "15000",
        "--ongoing-cost",
        "2000",
        "--plain",
    ]));

    assert!(stdout.contains(
        "No payback period—projected savings do not cover costs; raise chargeback reduction or revisit Year-1 cost."
    ));
    assert!(stdout.contains("Year-1 not net positive—tune average $ per chargeback and reduction."));
    assert!(stdout.contains("Near break-even—tighten dispute time or increase reduction."));
    assert!(stdout.contains("Results show limited ROI."));
}

#[test]
fn test_small_savings_against_large_cost_narrative() {
    let dir = TempDir::new().unwrap();
    let stdout = stdout_of(pallet_roi(&dir).args([
        "calculate",
        "-p",
        "2",
        "-w",
        "250",
        "--year1-cost",
        "250000",
        "--ongoing-cost",
        "90000",
        "--format",
        "json",
    ]));

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(json["results"]["totalAnnualSavings"].as_f64().unwrap() > 0.0);
    assert!(json["results"]["paybackMonths"].as_f64().unwrap() > 6.0);
    assert_eq!(
        json["narrative"],
        serde_json::json!([
            "H2 payback—raise chargeback reduction or revisit Year-1 cost.",
            "Year-1 not net positive—tune average $ per chargeback and reduction.",
            "Near break-even—tighten dispute time or increase reduction.",
            "Partial FTE freed—pool across shifts.",
        ])
    );
}

#[test]
fn test_config_defaults_and_format_are_used() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".pallet-roi.toml"),
        indoc! {r#"
            [defaults]
            pallets_per_day = 100
            workdays_per_year = 250

            [output]
            default_format = "markdown"
            brand = "Pallet Ultima"
        "#},
    )
    .unwrap();

    let stdout = stdout_of(pallet_roi(&dir).arg("calculate"));
    assert!(stdout.starts_with("# Pallet Ultima ROI Calculator Results"));
    assert!(stdout.contains("| Chargeback Savings | $140,625 |"));
}

#[test]
fn test_email_prints_body_and_mailto() {
    let dir = TempDir::new().unwrap();
    let stdout = stdout_of(pallet_roi(&dir).args([
        "email",
        "--to",
        "ops@example.com",
        "--name",
        "Dana",
        "-p",
        "100",
        "-w",
        "250",
        "--year1-cost",
        "20000",
    ]));

    assert!(stdout.contains("Subject: Your vMeasure ROI Calculator Results"));
    assert!(stdout.contains("Hi Dana,"));
    assert!(stdout.contains("Total Annual Savings: $192,844"));
    assert!(stdout.contains("mailto:ops%40example.com?subject=Your%20vMeasure"));
}

#[test]
fn test_init_creates_config_once() {
    let dir = TempDir::new().unwrap();

    pallet_roi(&dir).arg("init").assert().success();
    let config = fs::read_to_string(dir.path().join(".pallet-roi.toml")).unwrap();
    assert!(config.contains("[defaults]"));

    pallet_roi(&dir).arg("init").assert().failure();
    pallet_roi(&dir).args(["init", "--force"]).assert().success();
}

#[test]
fn test_unreadable_scenario_fails() {
    let dir = TempDir::new().unwrap();
    pallet_roi(&dir)
        .args(["calculate", "--inputs", "missing.toml"])
        .assert()
        .failure();
}
