use tracing::warn;

use crate::domain::company::Company;
use crate::domain::roster::{AllocationMode, EmployeeData, Roster};
use crate::services::form::FormError;

/// Company step as submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyForm {
    pub revenues: Vec<f64>,
    pub bonus_amount: f64,
}

/// Employee step as submitted. Work-time figures are percentages (0-100).
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeForm {
    pub headcount: usize,
    pub mode: AllocationMode,
    pub average_salary: Option<f64>,
    pub salaries: Vec<f64>,
    pub work_time_percentages: Vec<f64>,
}

pub fn build_company(form: &CompanyForm) -> Result<Company, FormError> {
    let revenues: [f64; 3] = form
        .revenues
        .as_slice()
        .try_into()
        .map_err(|_| FormError::RevenueCount(form.revenues.len()))?;
    let company = Company::from_revenues(revenues, form.bonus_amount);
    if company.average_revenue == 0.0 {
        warn!("at least one revenue year is zero, mean revenue and ceiling are set to 0");
    }
    if company.exceeds_ceiling() {
        warn!(
            bonus_amount = company.bonus_amount,
            bonus_ceiling = company.bonus_ceiling,
            "bonus amount exceeds the 1% revenue ceiling"
        );
    }
    Ok(company)
}

/// Builds the roster for the selected mode.
///
/// Figures are kept verbatim: neither their sign nor their count against
/// the headcount is enforced.
pub fn build_employee_data(form: &EmployeeForm) -> Result<EmployeeData, FormError> {
    let roster = match form.mode {
        AllocationMode::Uniforme => {
            ignore_unused("salaire", &form.salaries);
            ignore_unused("temps_travail", &form.work_time_percentages);
            Roster::Uniform {
                average_salary: form
                    .average_salary
                    .ok_or(FormError::MissingField("salaire_moyen"))?,
            }
        }
        AllocationMode::Salaire => {
            ignore_unused("temps_travail", &form.work_time_percentages);
            if form.average_salary.is_some() {
                warn!("salaire_moyen is not used by the salaire mode and is ignored");
            }
            warn_on_count_mismatch(form.headcount, form.salaries.len());
            Roster::Salary {
                salaries: form.salaries.clone(),
            }
        }
        AllocationMode::TempsTravail => {
            ignore_unused("salaire", &form.salaries);
            warn_on_count_mismatch(form.headcount, form.work_time_percentages.len());
            Roster::WorkTime {
                average_salary: form
                    .average_salary
                    .ok_or(FormError::MissingField("salaire_moyen"))?,
                work_time: form
                    .work_time_percentages
                    .iter()
                    .map(|percentage| percentage / 100.0)
                    .collect(),
            }
        }
    };

    Ok(EmployeeData {
        headcount: form.headcount,
        roster,
    })
}

fn ignore_unused(field: &str, values: &[f64]) {
    if !values.is_empty() {
        warn!(field, count = values.len(), "figures do not apply to the selected mode and are ignored");
    }
}

fn warn_on_count_mismatch(headcount: usize, figures: usize) {
    if headcount != figures {
        warn!(headcount, figures, "headcount does not match the number of submitted figures");
    }
}
