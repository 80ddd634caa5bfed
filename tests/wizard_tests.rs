use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

fn ppv(data_file: &str) -> Command {
    let mut cmd = Command::cargo_bin("ppv").unwrap();
    cmd.env_remove("PPV_DATA_FILE")
        .env_remove("RUST_LOG")
        .args(["--data-file", data_file]);
    cmd
}

#[test]
fn salary_wizard_computes_and_persists_allocation() {
    let temp = assert_fs::TempDir::new().unwrap();
    let data_file = temp.child("ppv_data.json");
    let data_arg = data_file.path().to_str().unwrap();

    ppv(data_arg)
        .args(["entreprise", "-r", "100000", "120000", "140000", "-m", "400"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bonus ceiling (1%): 1200.00"));

    ppv(data_arg)
        .args(["employes", "-e", "2", "-p", "salaire", "--salaire", "1000", "--salaire", "3000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("next step: synthese"));

    ppv(data_arg)
        .arg("synthese")
        .assert()
        .success()
        .stdout(predicate::str::contains("Employé 1 | 100.00"))
        .stdout(predicate::str::contains("Employé 2 | 300.00"))
        .stdout(predicate::str::contains("Total distributed: 400.00"));

    let document = std::fs::read_to_string(data_file.path()).unwrap();
    assert!(document.contains("\"mode_partage\": \"salaire\""));
    assert!(document.contains("\"seuil_max_prime\": 1200.0"));
    assert!(document.contains("\"prime\": 300.0"));

    ppv(data_arg)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Workflow state: simulation computed"));
}

#[test]
fn work_time_wizard_outputs_json() {
    let temp = assert_fs::TempDir::new().unwrap();
    let data_file = temp.child("ppv_data.json");
    let data_arg = data_file.path().to_str().unwrap();

    ppv(data_arg)
        .args(["entreprise", "-r", "0", "100", "200", "-m", "300"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Average revenue: 0.00"));

    ppv(data_arg)
        .args(["employes", "-e", "2", "-p", "temps_travail", "-s", "2000", "-t", "50", "-t", "100"])
        .assert()
        .success();

    ppv(data_arg)
        .args(["synthese", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"prime\": 100.0"))
        .stdout(predicate::str::contains("\"prime\": 200.0"));
}

#[test]
fn summary_before_company_is_an_incomplete_workflow() {
    let temp = assert_fs::TempDir::new().unwrap();
    let data_file = temp.child("ppv_data.json");

    ppv(data_file.path().to_str().unwrap())
        .arg("synthese")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "incomplete workflow: company data must be entered first",
        ));
}

#[test]
fn zero_headcount_reports_division_by_zero() {
    let temp = assert_fs::TempDir::new().unwrap();
    let data_file = temp.child("ppv_data.json");
    let data_arg = data_file.path().to_str().unwrap();

    ppv(data_arg)
        .args(["entreprise", "-r", "1", "2", "3", "-m", "1000"])
        .assert()
        .success();
    ppv(data_arg)
        .args(["employes", "-e", "0", "-p", "uniforme", "-s", "2000"])
        .assert()
        .success();

    ppv(data_arg)
        .arg("synthese")
        .assert()
        .failure()
        .stderr(predicate::str::contains("division by zero"));
}

#[test]
fn non_numeric_revenue_is_rejected() {
    let temp = assert_fs::TempDir::new().unwrap();
    let data_file = temp.child("ppv_data.json");

    ppv(data_file.path().to_str().unwrap())
        .args(["entreprise", "-r", "100", "beaucoup", "300", "-m", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a number: beaucoup"));

    data_file.assert(predicate::path::missing());
}

#[test]
fn reads_document_written_by_earlier_versions() {
    let temp = assert_fs::TempDir::new().unwrap();
    let data_file = temp.child("ppv_data.json");
    data_file
        .write_str(
            r#"{
    "entreprise": {
        "chiffres_affaires": [1000.0, 1000.0, 1000.0],
        "ca_moyen": 1000.0,
        "seuil_max_prime": 10.0,
        "montant_ppv": 1000.0
    },
    "salaries": [{"salaire_moyen": 2500.0}],
    "mode_partage": "uniforme",
    "effectif": 4
}"#,
        )
        .unwrap();

    ppv(data_file.path().to_str().unwrap())
        .arg("synthese")
        .assert()
        .success()
        .stdout(predicate::str::contains("Employé 4 | 250.00"))
        .stdout(predicate::str::contains("Warning: bonus amount exceeds the ceiling"));
}

#[test]
fn data_file_can_come_from_config() {
    let temp = assert_fs::TempDir::new().unwrap();
    let data_file = temp.child("from_config.json");
    let config = temp.child("ppv.yaml");
    config
        .write_str(&format!("data_file: {}\n", data_file.path().display()))
        .unwrap();

    let mut cmd = Command::cargo_bin("ppv").unwrap();
    cmd.env_remove("PPV_DATA_FILE")
        .args(["--config", config.path().to_str().unwrap()])
        .args(["entreprise", "-r", "1", "2", "3", "-m", "1"])
        .assert()
        .success();

    data_file.assert(predicate::str::contains("\"montant_ppv\": 1.0"));
}

#[test]
fn reset_clears_the_document() {
    let temp = assert_fs::TempDir::new().unwrap();
    let data_file = temp.child("ppv_data.json");
    let data_arg = data_file.path().to_str().unwrap();

    ppv(data_arg)
        .args(["entreprise", "-r", "1", "2", "3", "-m", "1"])
        .assert()
        .success();
    ppv(data_arg).arg("reset").assert().success();

    data_file.assert("{}");
    ppv(data_arg)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Workflow state: empty"));
}

#[test]
fn synthese_writes_allocation_chart() {
    let temp = assert_fs::TempDir::new().unwrap();
    let data_file = temp.child("ppv_data.json");
    let data_arg = data_file.path().to_str().unwrap();
    let chart = temp.child("allocation.png");
    let chart_arg = chart.path().to_str().unwrap();

    ppv(data_arg)
        .args(["entreprise", "-r", "1000", "2000", "3000", "-m", "400"])
        .assert()
        .success();
    ppv(data_arg)
        .args(["employes", "-e", "2", "-p", "salaire", "--salaire", "1000", "--salaire", "3000"])
        .assert()
        .success();

    ppv(data_arg)
        .args(["synthese", "--chart", chart_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Allocation chart written to {chart_arg}"
        )));

    chart.assert(predicate::path::is_file());
    assert!(std::fs::metadata(chart.path()).unwrap().len() > 0);
}

#[test]
fn headcount_above_maximum_is_rejected() {
    let temp = assert_fs::TempDir::new().unwrap();
    let data_file = temp.child("ppv_data.json");

    ppv(data_file.path().to_str().unwrap())
        .args(["employes", "-e", "18446744073709551615", "-p", "uniforme", "-s", "2000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the supported maximum"));
}
