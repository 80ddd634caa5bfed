use thiserror::Error;
use tracing::info;

use crate::domain::session::{Session, WorkflowState};
use crate::domain::simulation::Simulation;
use crate::services::allocation::{AllocationError, allocate};
use crate::services::form::FormError;
use crate::services::intake::{CompanyForm, EmployeeForm, build_company, build_employee_data};
use crate::services::session_store::{SessionRepository, SessionStoreError};

#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] FormError),
    #[error("incomplete workflow: {0} must be entered first")]
    Incomplete(&'static str),
    #[error("allocation failed: {0}")]
    Allocation(#[from] AllocationError),
    #[error(transparent)]
    Store(#[from] SessionStoreError),
}

/// Stores the company step and returns the updated session.
pub fn submit_company<R: SessionRepository + ?Sized>(
    repository: &R,
    form: &CompanyForm,
) -> Result<Session, WorkflowError> {
    let company = build_company(form)?;
    let mut session = repository.load()?;
    session.set_company(company);
    repository.save(&session)?;
    info!(state = %session.state(), "company data saved");
    Ok(session)
}

/// Stores the employee step. Company data has to exist already.
pub fn submit_employees<R: SessionRepository + ?Sized>(
    repository: &R,
    form: &EmployeeForm,
) -> Result<Session, WorkflowError> {
    let employees = build_employee_data(form)?;
    let mut session = repository.load()?;
    if session.company.is_none() {
        return Err(WorkflowError::Incomplete("company data"));
    }
    session.set_employees(employees);
    repository.save(&session)?;
    info!(state = %session.state(), "employee data saved");
    Ok(session)
}

/// Recomputes the allocation from the stored sections and overwrites the
/// stored simulation with it.
pub fn compute_simulation<R: SessionRepository + ?Sized>(
    repository: &R,
) -> Result<(Session, Simulation), WorkflowError> {
    let mut session = repository.load()?;
    let company = session
        .company
        .as_ref()
        .ok_or(WorkflowError::Incomplete("company data"))?;
    let employees = session
        .employees
        .as_ref()
        .ok_or(WorkflowError::Incomplete("employee data"))?;

    let simulation = allocate(company.bonus_amount, employees)?;
    session.set_simulation(simulation.clone());
    repository.save(&session)?;
    info!(employees = simulation.employees.len(), "simulation computed");
    Ok((session, simulation))
}

pub fn workflow_state<R: SessionRepository + ?Sized>(
    repository: &R,
) -> Result<WorkflowState, WorkflowError> {
    Ok(repository.load()?.state())
}

pub fn reset_session<R: SessionRepository + ?Sized>(repository: &R) -> Result<(), WorkflowError> {
    repository.save(&Session::new())?;
    info!("session reset");
    Ok(())
}
