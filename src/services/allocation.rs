use thiserror::Error;
use tracing::debug;

use crate::domain::roster::{AllocationMode, EmployeeData, MAX_HEADCOUNT};
use crate::domain::simulation::{EmployeeBonus, Simulation, employee_label};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AllocationError {
    #[error("cannot split the bonus uniformly across a headcount of zero (division by zero)")]
    ZeroHeadcount,
    #[error("{mode} weights sum to zero (division by zero)")]
    ZeroWeightSum { mode: AllocationMode },
    #[error("total bonus amount is not a finite number: {0}")]
    InvalidTotal(f64),
    #[error("{mode} weights sum to a non-finite value")]
    NonFiniteWeights { mode: AllocationMode },
    #[error("headcount {0} exceeds the supported maximum of {max}", max = MAX_HEADCOUNT)]
    HeadcountTooLarge(usize),
    #[error("share of {label} is not a finite number")]
    NonFiniteShare { label: String },
}

/// Splits `total_amount` across the roster.
///
/// Every amount is rounded to cents on its own, so the rounded amounts may
/// drift from the total by up to half a cent per employee.
pub fn allocate(total_amount: f64, employees: &EmployeeData) -> Result<Simulation, AllocationError> {
    if !total_amount.is_finite() {
        return Err(AllocationError::InvalidTotal(total_amount));
    }

    let amounts = match employees.roster.weights() {
        None => split_uniform(total_amount, employees.headcount)?,
        Some(weights) => split_weighted(total_amount, weights, employees.mode())?,
    };
    debug!(
        mode = %employees.mode(),
        employees = amounts.len(),
        total_amount,
        "allocated bonus"
    );

    let employees = amounts
        .into_iter()
        .enumerate()
        .map(|(index, amount)| {
            let label = employee_label(index);
            let amount = round_to_cents(amount);
            if amount.is_finite() {
                Ok(EmployeeBonus { label, amount })
            } else {
                Err(AllocationError::NonFiniteShare { label })
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Simulation { employees })
}

fn split_uniform(total_amount: f64, headcount: usize) -> Result<Vec<f64>, AllocationError> {
    if headcount == 0 {
        return Err(AllocationError::ZeroHeadcount);
    }
    if headcount > MAX_HEADCOUNT {
        return Err(AllocationError::HeadcountTooLarge(headcount));
    }
    let share = total_amount / headcount as f64;
    Ok(vec![share; headcount])
}

fn split_weighted(
    total_amount: f64,
    weights: &[f64],
    mode: AllocationMode,
) -> Result<Vec<f64>, AllocationError> {
    let weight_sum: f64 = weights.iter().sum();
    if !weight_sum.is_finite() {
        return Err(AllocationError::NonFiniteWeights { mode });
    }
    if weight_sum == 0.0 {
        return Err(AllocationError::ZeroWeightSum { mode });
    }
    Ok(weights
        .iter()
        .map(|weight| total_amount * (weight / weight_sum))
        .collect())
}

/// Values at or above 2^52 have no fractional part left and are returned
/// unchanged, which also keeps `value * 100.0` from overflowing.
pub fn round_to_cents(value: f64) -> f64 {
    if value.abs() >= 4_503_599_627_370_496.0 {
        return value;
    }
    (value * 100.0).round() / 100.0
}
