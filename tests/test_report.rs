// Report rendering tests
// Author: Gabriel Demetrios Lafis

use rust_record_query_engine::{
    records::{sample_books, sample_employees, sample_products, sample_students, Book, Student},
    report::{
        books_report_json, books_report_text, employees_report_text, format_optional,
        products_report_text, students_report_json, students_report_text, ReportCase,
    },
};

#[test]
fn test_format_optional_two_decimals() {
    assert_eq!(format_optional(Some(7.333333)), "7.33");
    assert_eq!(format_optional(Some(135.0)), "135.00");
}

#[test]
fn test_format_optional_no_data_marker() {
    assert_eq!(format_optional(None), "no data");
}

#[test]
fn test_students_text_report() {
    let students = sample_students();
    let report = students_report_text(&students);

    assert!(report.contains("=== STUDENTS ==="));
    assert!(report.contains("[\"ANA\", \"BEATRIZ\", \"DIEGO\", \"ELENA\"]"));
    assert!(report.contains("Average score: 7.33"));
    assert!(report.contains("Beatriz - 9.00 (course B1)"));
}

#[test]
fn test_empty_students_report_says_no_data() {
    let students: Vec<Student> = Vec::new();
    let report = students_report_text(&students);

    assert!(report.contains("Average score: no data"));
}

#[test]
fn test_products_text_report() {
    let products = sample_products();
    let report = products_report_text(&products);

    assert!(report.contains("Televisor - 450.00 (cat Electrónica) stock=5"));
    assert!(report.contains("Electrónica -> 70"));
    assert!(report.contains("Electrónica -> 195.00"));
    assert!(report.contains("Average price: 155.83"));
}

#[test]
fn test_employees_text_report() {
    let employees = sample_employees();
    let report = employees_report_text(&employees);

    assert!(report.contains("Carlos - 3200.00 (IT)"));
    assert!(report.contains("IT -> 6000.00"));
    assert!(report.contains("2 youngest employees: [\"Elena\", \"Diego\"]"));
}

#[test]
fn test_books_text_report() {
    let books = sample_books();
    let report = books_report_text(&books);

    assert!(report.contains("Orwell -> 2"));
    assert!(report.contains("Most expensive: Cien Años de Soledad (30.00)"));
}

#[test]
fn test_students_json_report() {
    let students = sample_students();
    let report = students_report_json(&students);

    assert_eq!(report["passing_names"][0], "ANA");
    assert_eq!(report["average_score"], 7.33);
    assert_eq!(report["top_by_score"][0]["name"], "Beatriz");
}

#[test]
fn test_empty_books_json_report_has_null_aggregates() {
    let books: Vec<Book> = Vec::new();
    let report = books_report_json(&books);

    assert!(report["average_pages"].is_null());
    assert!(report["most_expensive"].is_null());
    assert_eq!(report["long_titles"].as_array().map(|a| a.len()), Some(0));
}

#[test]
fn test_report_case_parsing() {
    assert_eq!(ReportCase::parse("students"), Some(ReportCase::Students));
    assert_eq!(ReportCase::parse("BOOKS"), Some(ReportCase::Books));
    assert_eq!(ReportCase::parse("nonsense"), None);
    assert_eq!(ReportCase::all().len(), 4);
}
