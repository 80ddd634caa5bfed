use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::services::intake::EmployeeForm;
use crate::services::session_store::SessionRepository;
use crate::services::workflow::submit_employees;

pub fn employes_command(cmd: Commands, repository: &dyn SessionRepository) -> ExitCode {
    if let Commands::Employes {
        effectif,
        mode_partage,
        salaire_moyen,
        salaires,
        temps_travail,
    } = cmd
    {
        let form = EmployeeForm {
            headcount: effectif,
            mode: mode_partage,
            average_salary: salaire_moyen,
            salaries: salaires,
            work_time_percentages: temps_travail,
        };
        match submit_employees(repository, &form) {
            Ok(_) => {
                println!("Employee data saved ({effectif} employees, mode {mode_partage}), next step: synthese");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Failed to save employee data: {e}");
                ExitCode::FAILURE
            }
        }
    } else {
        ExitCode::FAILURE
    }
}
