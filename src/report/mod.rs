// Report module for rendering query results
// Author: Gabriel Demetrios Lafis

//! Console and JSON rendering for the four demo domains.
//!
//! The query library keeps full float precision; rounding to two decimal
//! digits happens here and only here. Absent aggregates (empty input)
//! render as an explicit "no data" marker, never as zero. Group keys are
//! sorted before rendering so the output is deterministic even though the
//! underlying grouping is unordered.

use std::collections::HashMap;

use serde_json::{json, Value};

use crate::records::{
    average_pages, average_price, average_price_by_category, average_salary, average_score,
    books_per_author, employees_earning_over, group_by_course, long_book_titles, most_expensive,
    name_price_listing, passing_names_upper_sorted, products_priced_over, salary_total_by_department,
    stock_by_category, top_students_by_score, youngest_names, Book, Employee, Product, Student,
};

/// Price threshold for the expensive-products report
pub const PRICE_THRESHOLD: f64 = 100.0;

/// Page threshold for the long-books report
pub const MIN_PAGES: i64 = 300;

/// Salary threshold for the top-earners report
pub const SALARY_THRESHOLD: f64 = 2000.0;

/// How many students the top-scores report shows
pub const TOP_STUDENTS: usize = 3;

/// How many employees the youngest report shows
pub const YOUNGEST_EMPLOYEES: usize = 2;

/// One of the four demo report cases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportCase {
    Students,
    Products,
    Books,
    Employees,
}

impl ReportCase {
    /// All cases, in demo order
    pub fn all() -> [ReportCase; 4] {
        [
            ReportCase::Students,
            ReportCase::Products,
            ReportCase::Books,
            ReportCase::Employees,
        ]
    }

    /// Parse a case name as accepted by the CLI and the config file
    pub fn parse(name: &str) -> Option<ReportCase> {
        match name.to_lowercase().as_str() {
            "students" => Some(ReportCase::Students),
            "products" => Some(ReportCase::Products),
            "books" => Some(ReportCase::Books),
            "employees" => Some(ReportCase::Employees),
            _ => None,
        }
    }

    /// Get the case name
    pub fn name(&self) -> &'static str {
        match self {
            ReportCase::Students => "students",
            ReportCase::Products => "products",
            ReportCase::Books => "books",
            ReportCase::Employees => "employees",
        }
    }
}

/// Format an optional aggregate with two decimals, or the "no data" marker
pub fn format_optional(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "no data".to_string(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn optional_json(value: Option<f64>) -> Value {
    match value {
        Some(v) => json!(round2(v)),
        None => Value::Null,
    }
}

// Keys sorted for stable output; HashMap iteration order is arbitrary.
fn sorted_keys<V>(map: &HashMap<String, V>) -> Vec<&String> {
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();
    keys
}

/// Render the student report as console text
pub fn students_report_text(students: &[Student]) -> String {
    let mut lines = vec!["=== STUDENTS ===".to_string()];

    lines.push(format!(
        "1) Passing students (upper, sorted): {:?}",
        passing_names_upper_sorted(students)
    ));
    lines.push(format!(
        "2) Average score: {}",
        format_optional(average_score(students))
    ));

    lines.push("3) Students by course:".to_string());
    let by_course = group_by_course(students);
    for course in sorted_keys(&by_course) {
        let names: Vec<&str> = by_course[course].iter().map(|s| s.name.as_str()).collect();
        lines.push(format!("   {} -> {:?}", course, names));
    }

    lines.push(format!("4) Top {} students by score:", TOP_STUDENTS));
    for student in top_students_by_score(students, TOP_STUDENTS) {
        lines.push(format!(
            "   {} - {:.2} (course {})",
            student.name, student.score, student.course
        ));
    }

    lines.join("\n")
}

/// Render the student report as JSON
pub fn students_report_json(students: &[Student]) -> Value {
    let by_course: HashMap<String, Vec<String>> = group_by_course(students)
        .into_iter()
        .map(|(course, group)| {
            let names: Vec<String> = group.into_iter().map(|s| s.name).collect();
            (course, names)
        })
        .collect();

    json!({
        "passing_names": passing_names_upper_sorted(students),
        "average_score": optional_json(average_score(students)),
        "by_course": by_course,
        "top_by_score": top_students_by_score(students, TOP_STUDENTS),
    })
}

/// Render the product report as console text
pub fn products_report_text(products: &[Product]) -> String {
    let mut lines = vec!["=== PRODUCTS ===".to_string()];

    lines.push(format!(
        "1) Products priced over {:.2}, descending:",
        PRICE_THRESHOLD
    ));
    for product in products_priced_over(products, PRICE_THRESHOLD) {
        lines.push(format!(
            "   {} - {:.2} (cat {}) stock={}",
            product.name, product.price, product.category, product.stock
        ));
    }

    lines.push("2) Stock per category:".to_string());
    let stock = stock_by_category(products);
    for category in sorted_keys(&stock) {
        lines.push(format!("   {} -> {}", category, stock[category]));
    }

    lines.push(format!("3) Name:price listing: {}", name_price_listing(products)));
    lines.push(format!(
        "4) Average price: {}",
        format_optional(average_price(products))
    ));

    lines.push("5) Average price per category:".to_string());
    let averages = average_price_by_category(products);
    for category in sorted_keys(&averages) {
        lines.push(format!("   {} -> {:.2}", category, averages[category]));
    }

    lines.join("\n")
}

/// Render the product report as JSON
pub fn products_report_json(products: &[Product]) -> Value {
    let averages: HashMap<String, f64> = average_price_by_category(products)
        .into_iter()
        .map(|(category, avg)| (category, round2(avg)))
        .collect();

    json!({
        "priced_over_threshold": products_priced_over(products, PRICE_THRESHOLD),
        "stock_by_category": stock_by_category(products),
        "name_price_listing": name_price_listing(products),
        "average_price": optional_json(average_price(products)),
        "average_price_by_category": averages,
    })
}

/// Render the book report as console text
pub fn books_report_text(books: &[Book]) -> String {
    let mut lines = vec!["=== BOOKS ===".to_string()];

    lines.push(format!(
        "1) Titles over {} pages: {:?}",
        MIN_PAGES,
        long_book_titles(books, MIN_PAGES)
    ));
    lines.push(format!(
        "2) Average pages: {}",
        format_optional(average_pages(books))
    ));

    lines.push("3) Books per author:".to_string());
    let per_author = books_per_author(books);
    for author in sorted_keys(&per_author) {
        lines.push(format!("   {} -> {}", author, per_author[author]));
    }

    match most_expensive(books) {
        Some(book) => lines.push(format!(
            "4) Most expensive: {} ({:.2})",
            book.title, book.price
        )),
        None => lines.push("4) Most expensive: no data".to_string()),
    }

    lines.join("\n")
}

/// Render the book report as JSON
pub fn books_report_json(books: &[Book]) -> Value {
    json!({
        "long_titles": long_book_titles(books, MIN_PAGES),
        "average_pages": optional_json(average_pages(books)),
        "books_per_author": books_per_author(books),
        "most_expensive": most_expensive(books),
    })
}

/// Render the employee report as console text
pub fn employees_report_text(employees: &[Employee]) -> String {
    let mut lines = vec!["=== EMPLOYEES ===".to_string()];

    lines.push(format!(
        "1) Employees earning over {:.2}, descending:",
        SALARY_THRESHOLD
    ));
    for employee in employees_earning_over(employees, SALARY_THRESHOLD) {
        lines.push(format!(
            "   {} - {:.2} ({})",
            employee.name, employee.salary, employee.department
        ));
    }

    lines.push(format!(
        "2) Average salary: {}",
        format_optional(average_salary(employees))
    ));

    lines.push("3) Salary total per department:".to_string());
    let totals = salary_total_by_department(employees);
    for department in sorted_keys(&totals) {
        lines.push(format!("   {} -> {:.2}", department, totals[department]));
    }

    lines.push(format!(
        "4) {} youngest employees: {:?}",
        YOUNGEST_EMPLOYEES,
        youngest_names(employees, YOUNGEST_EMPLOYEES)
    ));

    lines.join("\n")
}

/// Render the employee report as JSON
pub fn employees_report_json(employees: &[Employee]) -> Value {
    let totals: HashMap<String, f64> = salary_total_by_department(employees)
        .into_iter()
        .map(|(department, total)| (department, round2(total)))
        .collect();

    json!({
        "earning_over_threshold": employees_earning_over(employees, SALARY_THRESHOLD),
        "average_salary": optional_json(average_salary(employees)),
        "salary_total_by_department": totals,
        "youngest": youngest_names(employees, YOUNGEST_EMPLOYEES),
    })
}
