use std::process::ExitCode;

use chrono::Local;

use crate::commands::base_commands::{Commands, ReportFormat};
use crate::commands::report_format::format_simulation_report;
use crate::services::allocation_chart::write_allocation_chart_png;
use crate::services::session_json::serialize_simulation_to_json_string;
use crate::services::session_store::SessionRepository;
use crate::services::workflow::compute_simulation;

pub fn synthese_command(cmd: Commands, repository: &dyn SessionRepository) -> ExitCode {
    if let Commands::Synthese { format, chart } = cmd {
        let (session, simulation) = match compute_simulation(repository) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Failed to compute simulation: {e}");
                return ExitCode::FAILURE;
            }
        };

        match format {
            ReportFormat::Text => {
                let today = Local::now().date_naive();
                println!("{}", format_simulation_report(&session, &simulation, today));
            }
            ReportFormat::Json => match serialize_simulation_to_json_string(&simulation) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Failed to serialize simulation: {e}");
                    return ExitCode::FAILURE;
                }
            },
        }

        if let Some(chart_path) = chart {
            if let Err(e) = write_allocation_chart_png(&chart_path, &simulation.employees) {
                eprintln!("Failed to write allocation chart: {e}");
                return ExitCode::FAILURE;
            }
            println!("Allocation chart written to {chart_path}");
        }
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
