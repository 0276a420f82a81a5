// Basic queries example
// Author: Gabriel Demetrios Lafis

use rust_record_query_engine::{
    query::{average, group_and_aggregate, join_to_string, max_by_key, AvgAggregator},
    records::{sample_books, sample_products, sample_students, top_students_by_score, Product},
};

fn main() {
    // Students: top scorers and the overall mean
    let students = sample_students();

    println!("Top 3 students:");
    for student in top_students_by_score(&students, 3) {
        println!("   {} - {:.2} (course {})", student.name, student.score, student.course);
    }

    match average(&students, |s| s.score) {
        Some(avg) => println!("Average score: {:.2}", avg),
        None => println!("Average score: no data"),
    }

    // Products: mean price per category in a single pass
    let products = sample_products();

    println!("\nAverage price per category:");
    let averages = group_and_aggregate(
        &products,
        |p| p.category.clone(),
        &AvgAggregator::new(|p: &Product| p.price),
    );
    for (category, avg) in &averages {
        println!("   {} -> {:.2}", category, avg);
    }

    println!(
        "Catalog: {}",
        join_to_string(&products, |p| format!("{}:{:.2}", p.name, p.price), " ; ")
    );

    // Books: stable maximum by price
    let books = sample_books();
    if let Some(book) = max_by_key(&books, |b| b.price) {
        println!("\nMost expensive book: {} ({:.2})", book.title, book.price);
    }
}
