use crate::domain::roster::AllocationMode;
use crate::services::intake::{CompanyForm, EmployeeForm};

pub fn company_form(bonus_amount: f64) -> CompanyForm {
    CompanyForm {
        revenues: vec![100_000.0, 120_000.0, 140_000.0],
        bonus_amount,
    }
}

pub fn uniform_form(headcount: usize, average_salary: f64) -> EmployeeForm {
    EmployeeForm {
        headcount,
        mode: AllocationMode::Uniforme,
        average_salary: Some(average_salary),
        salaries: Vec::new(),
        work_time_percentages: Vec::new(),
    }
}

pub fn salary_form(salaries: &[f64]) -> EmployeeForm {
    EmployeeForm {
        headcount: salaries.len(),
        mode: AllocationMode::Salaire,
        average_salary: None,
        salaries: salaries.to_vec(),
        work_time_percentages: Vec::new(),
    }
}
