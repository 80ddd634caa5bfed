use std::process::ExitCode;

use crate::services::session_store::SessionRepository;
use crate::services::workflow::{reset_session, workflow_state};

pub fn status_command(repository: &dyn SessionRepository) -> ExitCode {
    match workflow_state(repository) {
        Ok(state) => {
            println!("Workflow state: {state}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to read session: {e}");
            ExitCode::FAILURE
        }
    }
}

pub fn reset_command(repository: &dyn SessionRepository) -> ExitCode {
    match reset_session(repository) {
        Ok(()) => {
            println!("Session reset");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to reset session: {e}");
            ExitCode::FAILURE
        }
    }
}
