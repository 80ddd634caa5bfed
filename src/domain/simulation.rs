#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeBonus {
    pub label: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Simulation {
    pub employees: Vec<EmployeeBonus>,
}

impl Simulation {
    pub fn total(&self) -> f64 {
        self.employees.iter().map(|employee| employee.amount).sum()
    }
}

pub fn employee_label(index: usize) -> String {
    format!("Employé {}", index + 1)
}
