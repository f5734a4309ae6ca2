use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const VALID_LEDGER: &str = concat!(
    "years:\n",
    "  2025:\n",
    "    opening_balance: 1000\n",
    "    closing_balance: 1020\n",
    "    months:\n",
    "      1:\n",
    "        opening_balance: 1000\n",
    "        closing_balance: 1020\n",
    "        accounts:\n",
    "          Checking:\n",
    "            opening_balance: 600\n",
    "            closing_balance: 650\n",
    "            entries:\n",
    "              - amount: 20\n",
    "                internal: false\n",
    "                note: Salary\n",
    "                date: \"2025-01-28\"\n",
    "                tag: income\n",
    "              - amount: 30\n",
    "                internal: true\n",
    "                note: From savings\n",
    "                tag: transfer\n",
    "          Savings:\n",
    "            opening_balance: 400\n",
    "            closing_balance: 370\n",
    "            entries:\n",
    "              - amount: -30\n",
    "                internal: true\n",
    "                note: To checking\n",
    "                tag: transfer\n",
);

const VALID_LEGACY: &str = concat!(
    "years:\n",
    "  - number: 2024\n",
    "    starting_balance: 0\n",
    "    ending_balance: 400\n",
    "    months:\n",
    "      - number: 1\n",
    "        starting_balance: 0\n",
    "        ending_balance: 500\n",
    "        wallets:\n",
    "          - name: Cash\n",
    "            starting_balance: 0\n",
    "            ending_balance: 400\n",
    "            transactions:\n",
    "              - amount: 500\n",
    "                comment: Salary\n",
    "                date: \"2024-01-05\"\n",
    "                category: income\n",
    "              - amount: -100\n",
    "                is_internal: true\n",
    "                comment: To savings\n",
    "          - name: Savings\n",
    "            starting_balance: 0\n",
    "            ending_balance: 100\n",
    "            transactions:\n",
    "              - amount: 100\n",
    "                is_internal: true\n",
    "                comment: From cash\n",
    "      - number: 2\n",
    "        starting_balance: 500\n",
    "        ending_balance: 400\n",
    "        wallets:\n",
    "          - name: Cash\n",
    "            starting_balance: 400\n",
    "            ending_balance: 300\n",
    "            transactions:\n",
    "              - amount: -100\n",
    "                comment: Rent\n",
    "          - name: Savings\n",
    "            starting_balance: 100\n",
    "            ending_balance: 100\n",
);

fn olf() -> Command {
    Command::cargo_bin("olf").expect("binary")
}

fn write(path: &Path, content: &str) {
    fs::write(path, content).expect("write fixture");
}

#[test]
fn validate_accepts_a_valid_ledger_and_prints_totals() {
    let dir = tempdir().expect("tempdir");
    let file = dir.path().join("ledger.yaml");
    write(&file, VALID_LEDGER);

    olf()
        .arg("validate")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Ledger is valid"))
        .stdout(predicate::str::contains("Total income: 0.02"))
        .stdout(predicate::str::contains("Total expenses: 0.00"));
}

#[test]
fn validate_reports_the_full_error_path_and_exits_nonzero() {
    let dir = tempdir().expect("tempdir");
    let file = dir.path().join("ledger.yaml");
    write(
        &file,
        &VALID_LEDGER.replace("closing_balance: 650", "closing_balance: 655"),
    );

    olf()
        .arg("validate")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("year 2025"))
        .stderr(predicate::str::contains("month 1"))
        .stderr(predicate::str::contains("account Checking"));
}

#[test]
fn unsupported_extension_is_a_hard_error() {
    let dir = tempdir().expect("tempdir");
    let file = dir.path().join("ledger.toml");
    write(&file, "years: {}\n");

    olf()
        .arg("validate")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported file format"));
}

#[test]
fn report_renders_a_monthly_table() {
    let dir = tempdir().expect("tempdir");
    let file = dir.path().join("ledger.yaml");
    write(&file, VALID_LEDGER);

    olf()
        .arg("report")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Opening"))
        .stdout(predicate::str::contains("2025"));
}

#[test]
fn short_report_prints_one_expense_line_per_month() {
    let dir = tempdir().expect("tempdir");
    let file = dir.path().join("ledger.yaml");
    write(&file, VALID_LEDGER);

    olf()
        .arg("report")
        .arg(&file)
        .arg("--short")
        .assert()
        .success()
        .stdout("0.0\n");
}

#[test]
fn report_refuses_an_invalid_ledger() {
    let dir = tempdir().expect("tempdir");
    let file = dir.path().join("ledger.yaml");
    write(
        &file,
        &VALID_LEDGER.replace("closing_balance: 1020", "closing_balance: 1021"),
    );

    olf().arg("report").arg(&file).assert().failure();
}

#[test]
fn v1_validate_accepts_a_valid_legacy_ledger() {
    let dir = tempdir().expect("tempdir");
    let file = dir.path().join("legacy.yaml");
    write(&file, VALID_LEGACY);

    olf()
        .arg("v1")
        .arg("validate")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Legacy ledger is valid"));
}

#[test]
fn v1_report_renders_a_monthly_table() {
    let dir = tempdir().expect("tempdir");
    let file = dir.path().join("legacy.yaml");
    write(&file, VALID_LEGACY);

    olf()
        .arg("v1")
        .arg("report")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Expenses"));
}

#[test]
fn migrate_writes_a_ledger_that_validates_on_its_own() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("legacy.yaml");
    let output = dir.path().join("ledger.json");
    write(&input, VALID_LEGACY);

    olf()
        .arg("v1")
        .arg("migrate")
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Migrated"));
    assert!(output.exists());

    olf()
        .arg("validate")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total income: 0.50"));
}

#[test]
fn migrate_writes_nothing_when_the_input_is_invalid() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("legacy.yaml");
    let output = dir.path().join("ledger.json");
    write(
        &input,
        &VALID_LEGACY.replace("ending_balance: 300", "ending_balance: 301"),
    );

    olf()
        .arg("v1")
        .arg("migrate")
        .arg(&input)
        .arg(&output)
        .assert()
        .failure();
    assert!(!output.exists());
}
