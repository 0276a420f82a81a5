// Rust Record Query Engine
// Author: Gabriel Demetrios Lafis

//! # Rust Record Query Engine
//!
//! A lightweight in-memory record query engine written in Rust.
//!
//! ## Features
//!
//! - Generic query primitives: filter, filter-map-sort, average, group-by,
//!   group-and-aggregate, top-N/bottom-N, stable extrema, join-to-string
//! - Four demo record domains (students, products, books, employees) with
//!   their query surface and fixed sample data
//! - Console and JSON report rendering with two-decimal aggregates
//! - Explicit "no data" results for aggregates over empty input
//!
//! ## Example
//!
//! ```rust
//! use rust_record_query_engine::{
//!     query::{average, top_n_by_key},
//!     records::{passing_names_upper_sorted, sample_students},
//! };
//!
//! let students = sample_students();
//!
//! // Passing students, uppercased and sorted
//! let passing = passing_names_upper_sorted(&students);
//! assert_eq!(passing, vec!["ANA", "BEATRIZ", "DIEGO", "ELENA"]);
//!
//! // Top scorer
//! let top = top_n_by_key(&students, 1, |s| s.score);
//! assert_eq!(top[0].name, "Beatriz");
//!
//! // Average over an empty slice is "no data", not zero
//! let empty: Vec<rust_record_query_engine::records::Student> = Vec::new();
//! assert_eq!(average(&empty, |s| s.score), None);
//! ```

pub mod query;
pub mod records;
pub mod report;
pub mod utils;

// Re-export main types
pub use records::{Book, Employee, Product, Student};
pub use report::ReportCase;
pub use utils::{AppError, AppResult, Config};
