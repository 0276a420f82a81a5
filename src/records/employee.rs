// Employee records and queries
// Author: Gabriel Demetrios Lafis

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::query::{
    average, bottom_n_by_key, filter_records, group_and_aggregate, sorted_desc_by_key,
    SumAggregator,
};

/// An employee on the payroll
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub department: String,
    pub salary: f64,
    pub age: i64,
}

impl Employee {
    /// Create a new employee
    pub fn new(name: &str, department: &str, salary: f64, age: i64) -> Self {
        Employee {
            name: name.to_string(),
            department: department.to_string(),
            salary,
            age,
        }
    }
}

/// Employees earning strictly more than the threshold, best paid first
pub fn employees_earning_over(employees: &[Employee], threshold: f64) -> Vec<Employee> {
    let earners = filter_records(employees, |e| e.salary > threshold);
    sorted_desc_by_key(&earners, |e| e.salary)
}

/// Mean salary, or `None` when there are no employees
pub fn average_salary(employees: &[Employee]) -> Option<f64> {
    average(employees, |e| e.salary)
}

/// Total salary cost per department
pub fn salary_total_by_department(employees: &[Employee]) -> HashMap<String, f64> {
    group_and_aggregate(
        employees,
        |e| e.department.clone(),
        &SumAggregator::new(|e: &Employee| e.salary),
    )
}

/// Names of the `n` youngest employees, youngest first
pub fn youngest_names(employees: &[Employee], n: usize) -> Vec<String> {
    bottom_n_by_key(employees, n, |e| e.age)
        .into_iter()
        .map(|e| e.name)
        .collect()
}

/// Fixed sample data for the demo driver
pub fn sample_employees() -> Vec<Employee> {
    vec![
        Employee::new("Ana", "Ventas", 2500.0, 28),
        Employee::new("Carlos", "IT", 3200.0, 35),
        Employee::new("Beatriz", "RRHH", 1800.0, 30),
        Employee::new("Diego", "IT", 2800.0, 25),
        Employee::new("Elena", "Ventas", 2100.0, 22),
    ]
}
