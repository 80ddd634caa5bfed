use assert_fs::prelude::*;

use ppv::domain::roster::{AllocationMode, Roster};
use ppv::domain::session::WorkflowState;
use ppv::services::intake::{CompanyForm, EmployeeForm};
use ppv::services::session_store::{JsonFileRepository, SessionRepository};
use ppv::services::workflow::{compute_simulation, submit_company, submit_employees};

#[test]
fn wizard_steps_share_one_json_document() {
    let temp = assert_fs::TempDir::new().unwrap();
    let data_file = temp.child("session.json");
    let repository = JsonFileRepository::new(data_file.path());

    submit_company(
        &repository,
        &CompanyForm {
            revenues: vec![10_000.0, 20_000.0, 30_000.0],
            bonus_amount: 300.0,
        },
    )
    .unwrap();
    submit_employees(
        &repository,
        &EmployeeForm {
            headcount: 2,
            mode: AllocationMode::TempsTravail,
            average_salary: Some(1800.0),
            salaries: Vec::new(),
            work_time_percentages: vec![50.0, 100.0],
        },
    )
    .unwrap();

    let reloaded = JsonFileRepository::new(data_file.path()).load().unwrap();
    assert_eq!(reloaded.state(), WorkflowState::EmployeesEntered);
    assert_eq!(
        reloaded.employees.unwrap().roster,
        Roster::WorkTime {
            average_salary: 1800.0,
            work_time: vec![0.5, 1.0],
        }
    );

    let (_, first) = compute_simulation(&repository).unwrap();
    let (session, second) = compute_simulation(&repository).unwrap();
    assert_eq!(first, second);
    assert_eq!(session.state(), WorkflowState::SimulationComputed);
    let amounts: Vec<f64> = second.employees.iter().map(|e| e.amount).collect();
    assert_eq!(amounts, vec![100.0, 200.0]);
}
