use plotters::prelude::*;
use thiserror::Error;

use crate::domain::simulation::EmployeeBonus;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("failed to render allocation chart: {0}")]
    Render(String),
}

/// Writes one bar per employee. Nothing is written for an empty allocation.
pub fn write_allocation_chart_png(
    output_path: &str,
    employees: &[EmployeeBonus],
) -> Result<(), ChartError> {
    if employees.is_empty() {
        return Ok(());
    }

    let max_amount = employees
        .iter()
        .map(|employee| employee.amount)
        .fold(0.0_f64, f64::max);
    let min_amount = employees
        .iter()
        .map(|employee| employee.amount)
        .fold(0.0_f64, f64::min);
    let top = if max_amount > 0.0 { max_amount * 1.1 } else { 1.0 };

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::Render(e.to_string()))?;

    let count = employees.len() as i32;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("PPV allocation", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(75)
        .build_cartesian_2d(0..count, min_amount..top)
        .map_err(|e| ChartError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Employee")
        .y_desc("Bonus")
        .x_labels(employees.len().min(20))
        .x_label_formatter(&|index| format!("{}", index + 1))
        .y_label_formatter(&|amount| format!("{amount:.2}"))
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .draw()
        .map_err(|e| ChartError::Render(e.to_string()))?;

    let bar_color = RGBColor(30, 122, 204);
    let bar_style = ShapeStyle::from(&bar_color).filled();
    chart
        .draw_series(employees.iter().enumerate().map(|(index, employee)| {
            let x = index as i32;
            Rectangle::new([(x, 0.0), (x + 1, employee.amount)], bar_style)
        }))
        .map_err(|e| ChartError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| ChartError::Render(e.to_string()))?;
    Ok(())
}
