use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::domain::company::Company;
use crate::domain::roster::{AllocationMode, EmployeeData, Roster};
use crate::domain::session::Session;
use crate::domain::simulation::{EmployeeBonus, Simulation};

#[derive(Error, Debug)]
pub enum SessionJsonError {
    #[error("failed to parse session json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("expected 3 revenue figures in entreprise.chiffres_affaires, got {0}")]
    RevenueCount(usize),
    #[error("employee section is incomplete: mode_partage, effectif and salaries must be set together")]
    IncompleteEmployees,
    #[error("salaries do not have the shape expected by mode {0}")]
    RosterShape(AllocationMode),
    #[error("{0} is not a finite number and cannot be stored")]
    NonFinite(&'static str),
}

#[derive(Serialize, Deserialize, Default)]
struct SessionRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    entreprise: Option<CompanyRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mode_partage: Option<AllocationMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    effectif: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    salaries: Option<SalariesRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    simulation: Option<SimulationRecord>,
}

#[derive(Serialize, Deserialize)]
struct CompanyRecord {
    chiffres_affaires: Vec<f64>,
    ca_moyen: f64,
    seuil_max_prime: f64,
    montant_ppv: f64,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SalariesRecord {
    WorkTime {
        salaire_moyen: f64,
        employees: Vec<WorkTimeRecord>,
    },
    List(Vec<SalaryEntryRecord>),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SalaryEntryRecord {
    Salary { salaire: f64 },
    Average { salaire_moyen: f64 },
}

#[derive(Serialize, Deserialize)]
struct WorkTimeRecord {
    temps_travail: f64,
}

#[derive(Serialize, Deserialize)]
struct SimulationRecord {
    employees: Vec<EmployeeBonusRecord>,
}

#[derive(Serialize, Deserialize)]
struct EmployeeBonusRecord {
    employe: String,
    prime: f64,
}

/// Reads a session document. Blank input is the empty session.
pub fn deserialize_session_from_json_str(input: &str) -> Result<Session, SessionJsonError> {
    if input.trim().is_empty() {
        return Ok(Session::new());
    }
    let record: SessionRecord = serde_json::from_str(input)?;

    let company = record.entreprise.map(company_from_record).transpose()?;
    let employees = match (record.mode_partage, record.effectif, record.salaries) {
        (None, None, None) => None,
        (Some(mode), Some(headcount), Some(salaries)) => Some(EmployeeData {
            headcount,
            roster: roster_from_record(mode, salaries)?,
        }),
        _ => return Err(SessionJsonError::IncompleteEmployees),
    };
    let simulation = record.simulation.map(|simulation| Simulation {
        employees: simulation
            .employees
            .into_iter()
            .map(|employee| EmployeeBonus {
                label: employee.employe,
                amount: employee.prime,
            })
            .collect(),
    });

    Ok(Session {
        company,
        employees,
        simulation,
    })
}

pub fn serialize_session_to_json_string(session: &Session) -> Result<String, SessionJsonError> {
    ensure_session_finite(session)?;
    let record = SessionRecord {
        entreprise: session.company.as_ref().map(|company| CompanyRecord {
            chiffres_affaires: company.revenues.to_vec(),
            ca_moyen: company.average_revenue,
            seuil_max_prime: company.bonus_ceiling,
            montant_ppv: company.bonus_amount,
        }),
        mode_partage: session.employees.as_ref().map(EmployeeData::mode),
        effectif: session.employees.as_ref().map(|employees| employees.headcount),
        salaries: session
            .employees
            .as_ref()
            .map(|employees| roster_to_record(&employees.roster)),
        simulation: session.simulation.as_ref().map(|simulation| SimulationRecord {
            employees: simulation
                .employees
                .iter()
                .map(|employee| EmployeeBonusRecord {
                    employe: employee.label.clone(),
                    prime: employee.amount,
                })
                .collect(),
        }),
    };
    Ok(serde_json::to_string_pretty(&record)?)
}

/// Renders only the simulation section, as persisted.
pub fn serialize_simulation_to_json_string(
    simulation: &Simulation,
) -> Result<String, SessionJsonError> {
    ensure_simulation_finite(simulation)?;
    let record = SimulationRecord {
        employees: simulation
            .employees
            .iter()
            .map(|employee| EmployeeBonusRecord {
                employe: employee.label.clone(),
                prime: employee.amount,
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&record)?)
}

fn company_from_record(record: CompanyRecord) -> Result<Company, SessionJsonError> {
    let revenues: [f64; 3] = record
        .chiffres_affaires
        .as_slice()
        .try_into()
        .map_err(|_| SessionJsonError::RevenueCount(record.chiffres_affaires.len()))?;
    let company = Company::from_revenues(revenues, record.montant_ppv);
    if !nearly_equal(company.average_revenue, record.ca_moyen)
        || !nearly_equal(company.bonus_ceiling, record.seuil_max_prime)
    {
        warn!(
            stored_mean = record.ca_moyen,
            stored_ceiling = record.seuil_max_prime,
            mean = company.average_revenue,
            ceiling = company.bonus_ceiling,
            "stored mean revenue or ceiling does not match the revenues, using recomputed values"
        );
    }
    Ok(company)
}

fn nearly_equal(left: f64, right: f64) -> bool {
    (left - right).abs() <= 1e-9 * left.abs().max(right.abs()).max(1.0)
}

fn ensure_finite(field: &'static str, values: &[f64]) -> Result<(), SessionJsonError> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(SessionJsonError::NonFinite(field))
    }
}

fn ensure_session_finite(session: &Session) -> Result<(), SessionJsonError> {
    if let Some(company) = &session.company {
        ensure_finite("entreprise.chiffres_affaires", &company.revenues)?;
        ensure_finite("entreprise.ca_moyen", &[company.average_revenue])?;
        ensure_finite("entreprise.seuil_max_prime", &[company.bonus_ceiling])?;
        ensure_finite("entreprise.montant_ppv", &[company.bonus_amount])?;
    }
    if let Some(employees) = &session.employees {
        match &employees.roster {
            Roster::Uniform { average_salary } => {
                ensure_finite("salaries.salaire_moyen", &[*average_salary])?
            }
            Roster::Salary { salaries } => ensure_finite("salaries.salaire", salaries)?,
            Roster::WorkTime {
                average_salary,
                work_time,
            } => {
                ensure_finite("salaries.salaire_moyen", &[*average_salary])?;
                ensure_finite("salaries.employees.temps_travail", work_time)?;
            }
        }
    }
    if let Some(simulation) = &session.simulation {
        ensure_simulation_finite(simulation)?;
    }
    Ok(())
}

fn ensure_simulation_finite(simulation: &Simulation) -> Result<(), SessionJsonError> {
    if simulation.employees.iter().all(|employee| employee.amount.is_finite()) {
        Ok(())
    } else {
        Err(SessionJsonError::NonFinite("simulation.employees.prime"))
    }
}

fn roster_from_record(
    mode: AllocationMode,
    salaries: SalariesRecord,
) -> Result<Roster, SessionJsonError> {
    match (mode, salaries) {
        (AllocationMode::Uniforme, SalariesRecord::List(entries)) => match entries.as_slice() {
            [SalaryEntryRecord::Average { salaire_moyen }] => Ok(Roster::Uniform {
                average_salary: *salaire_moyen,
            }),
            _ => Err(SessionJsonError::RosterShape(mode)),
        },
        (AllocationMode::Salaire, SalariesRecord::List(entries)) => entries
            .into_iter()
            .map(|entry| match entry {
                SalaryEntryRecord::Salary { salaire } => Ok(salaire),
                SalaryEntryRecord::Average { .. } => Err(SessionJsonError::RosterShape(mode)),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|salaries| Roster::Salary { salaries }),
        (
            AllocationMode::TempsTravail,
            SalariesRecord::WorkTime {
                salaire_moyen,
                employees,
            },
        ) => Ok(Roster::WorkTime {
            average_salary: salaire_moyen,
            work_time: employees.into_iter().map(|e| e.temps_travail).collect(),
        }),
        _ => Err(SessionJsonError::RosterShape(mode)),
    }
}

fn roster_to_record(roster: &Roster) -> SalariesRecord {
    match roster {
        Roster::Uniform { average_salary } => SalariesRecord::List(vec![SalaryEntryRecord::Average {
            salaire_moyen: *average_salary,
        }]),
        Roster::Salary { salaries } => SalariesRecord::List(
            salaries
                .iter()
                .map(|salaire| SalaryEntryRecord::Salary { salaire: *salaire })
                .collect(),
        ),
        Roster::WorkTime {
            average_salary,
            work_time,
        } => SalariesRecord::WorkTime {
            salaire_moyen: *average_salary,
            employees: work_time
                .iter()
                .map(|temps_travail| WorkTimeRecord {
                    temps_travail: *temps_travail,
                })
                .collect(),
        },
    }
}
