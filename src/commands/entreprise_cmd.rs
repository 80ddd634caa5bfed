use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::services::intake::CompanyForm;
use crate::services::session_store::SessionRepository;
use crate::services::workflow::submit_company;

pub fn entreprise_command(cmd: Commands, repository: &dyn SessionRepository) -> ExitCode {
    if let Commands::Entreprise {
        chiffres_affaires,
        montant_ppv,
    } = cmd
    {
        let form = CompanyForm {
            revenues: chiffres_affaires,
            bonus_amount: montant_ppv,
        };
        match submit_company(repository, &form) {
            Ok(session) => {
                if let Some(company) = session.company {
                    println!("Average revenue: {:.2}", company.average_revenue);
                    println!("Bonus ceiling (1%): {:.2}", company.bonus_ceiling);
                }
                println!("Company data saved, next step: employes");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Failed to save company data: {e}");
                ExitCode::FAILURE
            }
        }
    } else {
        ExitCode::FAILURE
    }
}
