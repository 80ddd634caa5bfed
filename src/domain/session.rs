use std::fmt;

use crate::domain::company::Company;
use crate::domain::roster::EmployeeData;
use crate::domain::simulation::Simulation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    Empty,
    CompanyEntered,
    EmployeesEntered,
    SimulationComputed,
}

impl fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WorkflowState::Empty => "empty",
            WorkflowState::CompanyEntered => "company entered",
            WorkflowState::EmployeesEntered => "employees entered",
            WorkflowState::SimulationComputed => "simulation computed",
        };
        f.write_str(name)
    }
}

/// The single in-flight simulation document.
///
/// Mutating an upstream section always drops the stored simulation so it is
/// never shown against inputs it was not computed from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub company: Option<Company>,
    pub employees: Option<EmployeeData>,
    pub simulation: Option<Simulation>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> WorkflowState {
        match (&self.company, &self.employees, &self.simulation) {
            (Some(_), Some(_), Some(_)) => WorkflowState::SimulationComputed,
            (Some(_), Some(_), None) => WorkflowState::EmployeesEntered,
            (Some(_), None, _) => WorkflowState::CompanyEntered,
            (None, _, _) => WorkflowState::Empty,
        }
    }

    pub fn set_company(&mut self, company: Company) {
        self.company = Some(company);
        self.simulation = None;
    }

    pub fn set_employees(&mut self, employees: EmployeeData) {
        self.employees = Some(employees);
        self.simulation = None;
    }

    pub fn set_simulation(&mut self, simulation: Simulation) {
        self.simulation = Some(simulation);
    }
}
