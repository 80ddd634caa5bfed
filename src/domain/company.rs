/// Share of the mean revenue used as the bonus ceiling.
pub const CEILING_RATE: f64 = 0.01;

#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub revenues: [f64; 3],
    pub average_revenue: f64,
    pub bonus_ceiling: f64,
    pub bonus_amount: f64,
}

impl Company {
    /// Builds the company section and its derived figures.
    ///
    /// A single zero revenue year zeroes the whole mean (and therefore the
    /// ceiling) instead of averaging the remaining years.
    pub fn from_revenues(revenues: [f64; 3], bonus_amount: f64) -> Self {
        let average_revenue = average_revenue(&revenues);
        Self {
            revenues,
            average_revenue,
            bonus_ceiling: CEILING_RATE * average_revenue,
            bonus_amount,
        }
    }

    pub fn exceeds_ceiling(&self) -> bool {
        self.bonus_amount > self.bonus_ceiling
    }
}

fn average_revenue(revenues: &[f64; 3]) -> f64 {
    if revenues.iter().any(|value| *value == 0.0) {
        return 0.0;
    }
    let count = revenues.len() as f64;
    let sum: f64 = revenues.iter().sum();
    if sum.is_finite() {
        sum / count
    } else {
        // The sum of finite revenues near f64::MAX can overflow, their mean cannot.
        revenues.iter().map(|value| value / count).sum()
    }
}
