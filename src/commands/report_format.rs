use chrono::NaiveDate;

use crate::domain::session::Session;
use crate::domain::simulation::Simulation;

pub fn format_simulation_report(session: &Session, simulation: &Simulation, date: NaiveDate) -> String {
    let mut lines = Vec::new();
    lines.push("PPV Simulation".to_string());
    lines.push(format!("Date: {}", date.format("%Y-%m-%d")));

    if let Some(company) = &session.company {
        let revenues: Vec<String> = company
            .revenues
            .iter()
            .map(|revenue| format!("{revenue:.2}"))
            .collect();
        lines.push(format!("Revenues: {}", revenues.join(" / ")));
        lines.push(format!("Average revenue: {:.2}", company.average_revenue));
        lines.push(format!("Bonus ceiling (1%): {:.2}", company.bonus_ceiling));
        lines.push(format!("Bonus amount: {:.2}", company.bonus_amount));
        if company.exceeds_ceiling() {
            lines.push("Warning: bonus amount exceeds the ceiling".to_string());
        }
    }
    if let Some(employees) = &session.employees {
        lines.push(format!("Allocation mode: {}", employees.mode()));
        lines.push(format!("Headcount: {}", employees.headcount));
    }

    lines.push(String::new());
    lines.push("Employee | Bonus".to_string());
    lines.push("---------|------".to_string());
    for employee in &simulation.employees {
        lines.push(format!("{} | {:.2}", employee.label, employee.amount));
    }
    lines.push(String::new());
    lines.push(format!("Total distributed: {:.2}", simulation.total()));

    lines.join("\n")
}
