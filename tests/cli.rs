use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tally(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.env("TALLY_CONFIG_DIR", config_dir.path())
        .env_remove("TALLY_LOG")
        .current_dir(config_dir.path());
    cmd
}

#[test]
fn balance_of_sample_ledger() {
    let dir = TempDir::new().unwrap();
    tally(&dir)
        .args(["--sample", "balance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Balance:"))
        .stdout(predicate::str::contains("$400.00"));
}

#[test]
fn shell_session_adds_and_filters() {
    let dir = TempDir::new().unwrap();
    tally(&dir)
        .args(["--sample", "shell"])
        .write_stdin(
            "add --date 2023-01-10 --amount 50 --type expense --category bills\n\
             list --category bills\n\
             balance\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction added: #3 2023-01-10 expense bills $50.00"))
        .stdout(predicate::str::contains("Showing 1 of 3 transactions"))
        .stdout(predicate::str::contains("$350.00"));
}

#[test]
fn shell_reports_missing_fields_and_continues() {
    let dir = TempDir::new().unwrap();
    tally(&dir)
        .write_stdin("add --amount 20\nadd --date 2023-01-01 --amount 20\nbalance\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Please fill in all fields"))
        .stdout(predicate::str::contains("Transaction added: #1"))
        .stdout(predicate::str::contains("-$20.00"));
}

#[test]
fn one_shot_update_of_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    tally(&dir)
        .args(["--sample", "edit", "9", "--amount", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Transaction not found: 9"));
}

#[test]
fn unknown_category_is_rejected() {
    let dir = TempDir::new().unwrap();
    tally(&dir)
        .args(["add", "--date", "2023-01-01", "--amount", "5", "--category", "travel"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category 'travel'"));
}

#[test]
fn export_then_seed_round_trip() {
    let dir = TempDir::new().unwrap();
    tally(&dir)
        .write_stdin(
            "add --date 2023-01-01 --amount 500 --type income --category salary\n\
             add --date 2023-01-05 --amount 100 --category groceries\n\
             export\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 transactions to: transactions.json"));

    let exported = std::fs::read_to_string(dir.path().join("transactions.json")).unwrap();
    assert_eq!(
        exported,
        concat!(
            r#"[{"id":1,"date":"2023-01-01","amount":500,"type":"income","category":"salary"},"#,
            r#"{"id":2,"date":"2023-01-05","amount":100,"type":"expense","category":"groceries"}]"#
        )
    );

    tally(&dir)
        .args(["--seed", "transactions.json", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("salary"))
        .stdout(predicate::str::contains("Total Balance: $400.00"));
}

#[test]
fn export_to_stdout_as_csv() {
    let dir = TempDir::new().unwrap();
    tally(&dir)
        .args(["--sample", "export", "--stdout", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("id,date,amount,type,category"))
        .stdout(predicate::str::contains("2,2023-01-05,100,expense,groceries"));
}

#[test]
fn delete_then_filter_is_empty() {
    let dir = TempDir::new().unwrap();
    tally(&dir)
        .args(["--sample", "shell"])
        .write_stdin("delete 2\ndelete 2\nlist --category groceries\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction deleted: #2"))
        .stdout(predicate::str::contains("No transaction #2; nothing deleted."))
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn configured_categories_are_used() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"categories": ["rent", "travel"], "default_category": "rent", "currency_symbol": "€"}"#,
    )
    .unwrap();

    tally(&dir)
        .write_stdin("categories\nadd --date 2023-03-01 --amount 12 --category travel\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("travel"))
        .stdout(predicate::str::contains("€12.00"));
}

#[test]
fn init_writes_settings() {
    let dir = TempDir::new().unwrap();
    tally(&dir).arg("init").assert().success();
    assert!(dir.path().join("config.json").exists());

    tally(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("groceries, bills, salary, entertainment, other"));
}

#[test]
fn invalid_date_format_fails_at_startup() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{"date_format": "%Q"}"#).unwrap();

    tally(&dir)
        .args(["--sample", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format '%Q'"));
}
