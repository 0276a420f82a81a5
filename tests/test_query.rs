// Query library tests
// Author: Gabriel Demetrios Lafis

use rust_record_query_engine::{
    query::{
        average, bottom_n_by_key, filter_map_sorted, filter_records, group_and_aggregate,
        group_by, join_to_string, max_by_key, min_by_key, top_n_by_key, SumAggregator,
    },
    records::{sample_products, sample_students, Book, Employee, Product, Student},
};

#[test]
fn test_average_empty_is_no_value() {
    let students: Vec<Student> = Vec::new();

    // "No data" must stay distinguishable from "average is zero"
    assert_eq!(average(&students, |s| s.score), None);
}

#[test]
fn test_average_matches_sum_over_count() {
    let students = sample_students();

    let sum: f64 = students.iter().map(|s| s.score).sum();
    let expected = sum / students.len() as f64;

    let avg = average(&students, |s| s.score).unwrap();
    assert!((avg - expected).abs() < 1e-9);
}

#[test]
fn test_average_is_order_independent() {
    let students = sample_students();
    let mut reversed = students.clone();
    reversed.reverse();

    let forward = average(&students, |s| s.score).unwrap();
    let backward = average(&reversed, |s| s.score).unwrap();

    assert!((forward - backward).abs() < 1e-9);
}

#[test]
fn test_filter_map_sorted_is_sorted_and_deduped() {
    // Two passing students share a name; it must appear once
    let students = vec![
        Student::new("Ana", 9.0, "A1"),
        Student::new("Carlos", 8.0, "A1"),
        Student::new("Ana", 7.5, "B1"),
        Student::new("Berta", 3.0, "B1"),
    ];

    let names = filter_map_sorted(
        &students,
        |s| s.score >= 7.0,
        |s| s.name.to_uppercase(),
        true,
    );

    assert_eq!(names, vec!["ANA", "CARLOS"]);

    // Sorted ascending
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn test_filter_records_preserves_order() {
    let products = sample_products();
    let cheap = filter_records(&products, |p| p.price < 100.0);

    let names: Vec<&str> = cheap.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Cargador", "Libro Java"]);
}

#[test]
fn test_top_n_returns_largest_in_descending_order() {
    // Six products with distinct prices
    let products = sample_products();

    let top = top_n_by_key(&products, 3, |p| p.price);

    let names: Vec<&str> = top.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Televisor", "Licuadora", "Cafetera"]);
}

#[test]
fn test_top_n_over_short_input_returns_all() {
    let products = vec![
        Product::new("A", "X", 10.0, 1),
        Product::new("B", "X", 30.0, 1),
    ];

    let top = top_n_by_key(&products, 5, |p| p.price);

    assert_eq!(top.len(), 2);
    assert_eq!(top[0].name, "B");
    assert_eq!(top[1].name, "A");
}

#[test]
fn test_top_n_ties_keep_input_order() {
    let students = vec![
        Student::new("First", 9.0, "A1"),
        Student::new("Low", 5.0, "A1"),
        Student::new("Second", 9.0, "B1"),
        Student::new("Third", 9.0, "C1"),
    ];

    let top = top_n_by_key(&students, 2, |s| s.score);

    let names: Vec<&str> = top.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second"]);
}

#[test]
fn test_bottom_n_is_ascending() {
    let employees = vec![
        Employee::new("Ana", "Ventas", 2500.0, 28),
        Employee::new("Carlos", "IT", 3200.0, 35),
        Employee::new("Elena", "Ventas", 2100.0, 22),
    ];

    let youngest = bottom_n_by_key(&employees, 2, |e| e.age);

    assert_eq!(youngest[0].name, "Elena");
    assert_eq!(youngest[1].name, "Ana");
}

#[test]
fn test_group_by_preserves_order_within_groups() {
    let students = sample_students();
    let by_course = group_by(&students, |s| s.course.clone());

    let a1: Vec<&str> = by_course["A1"].iter().map(|s| s.name.as_str()).collect();
    assert_eq!(a1, vec!["Ana", "Carlos", "Diego"]);
}

#[test]
fn test_group_sums_partition_the_total() {
    let employees = vec![
        Employee::new("Ana", "Ventas", 2500.0, 28),
        Employee::new("Carlos", "IT", 3200.0, 35),
        Employee::new("Beatriz", "RRHH", 1800.0, 30),
        Employee::new("Diego", "IT", 2800.0, 25),
        Employee::new("Elena", "Ventas", 2100.0, 22),
    ];

    let by_department = group_and_aggregate(
        &employees,
        |e| e.department.clone(),
        &SumAggregator::new(|e: &Employee| e.salary),
    );

    let total: f64 = employees.iter().map(|e| e.salary).sum();
    let partitioned: f64 = by_department.values().sum();

    assert!((total - partitioned).abs() < 1e-9);
}

#[test]
fn test_max_returns_unique_maximum() {
    let books = vec![
        Book::new("Cheap", "A", 100, 10.0),
        Book::new("Priciest", "B", 100, 42.0),
        Book::new("Mid", "C", 100, 20.0),
    ];

    let best = max_by_key(&books, |b| b.price).unwrap();
    assert_eq!(best.title, "Priciest");
}

#[test]
fn test_max_tie_resolves_to_first_in_input() {
    let books = vec![
        Book::new("First Max", "A", 100, 30.0),
        Book::new("Cheap", "B", 100, 10.0),
        Book::new("Second Max", "C", 100, 30.0),
    ];

    let best = max_by_key(&books, |b| b.price).unwrap();
    assert_eq!(best.title, "First Max");
}

#[test]
fn test_extrema_of_empty_are_none() {
    let books: Vec<Book> = Vec::new();

    assert!(max_by_key(&books, |b| b.price).is_none());
    assert!(min_by_key(&books, |b| b.price).is_none());
}

#[test]
fn test_join_to_string_empty_is_empty_string() {
    let products: Vec<Product> = Vec::new();

    let joined = join_to_string(&products, |p| p.name.clone(), " ; ");
    assert_eq!(joined, "");
}

#[test]
fn test_join_to_string_uses_separator() {
    let products = vec![
        Product::new("A", "X", 1.0, 1),
        Product::new("B", "X", 2.0, 1),
        Product::new("C", "X", 3.0, 1),
    ];

    let joined = join_to_string(&products, |p| p.name.clone(), " ; ");
    assert_eq!(joined, "A ; B ; C");
}
