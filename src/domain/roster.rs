use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest roster the uniform split will materialise.
pub const MAX_HEADCOUNT: usize = 1_000_000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown allocation mode: {0} (expected uniforme, salaire or temps_travail)")]
pub struct UnknownModeError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationMode {
    Uniforme,
    Salaire,
    TempsTravail,
}

impl AllocationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AllocationMode::Uniforme => "uniforme",
            AllocationMode::Salaire => "salaire",
            AllocationMode::TempsTravail => "temps_travail",
        }
    }
}

impl fmt::Display for AllocationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AllocationMode {
    type Err = UnknownModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "uniforme" => Ok(AllocationMode::Uniforme),
            "salaire" => Ok(AllocationMode::Salaire),
            "temps_travail" => Ok(AllocationMode::TempsTravail),
            other => Err(UnknownModeError(other.to_string())),
        }
    }
}

/// Employee-level inputs, one variant per allocation mode.
#[derive(Debug, Clone, PartialEq)]
pub enum Roster {
    /// The average salary is informational only.
    Uniform { average_salary: f64 },
    Salary { salaries: Vec<f64> },
    /// Work-time fractions are 0-1 ratios.
    WorkTime {
        average_salary: f64,
        work_time: Vec<f64>,
    },
}

impl Roster {
    pub fn mode(&self) -> AllocationMode {
        match self {
            Roster::Uniform { .. } => AllocationMode::Uniforme,
            Roster::Salary { .. } => AllocationMode::Salaire,
            Roster::WorkTime { .. } => AllocationMode::TempsTravail,
        }
    }

    /// Per-employee weights, `None` for the uniform split.
    pub fn weights(&self) -> Option<&[f64]> {
        match self {
            Roster::Uniform { .. } => None,
            Roster::Salary { salaries } => Some(salaries),
            Roster::WorkTime { work_time, .. } => Some(work_time),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeData {
    pub headcount: usize,
    pub roster: Roster,
}

impl EmployeeData {
    pub fn mode(&self) -> AllocationMode {
        self.roster.mode()
    }
}
