// Student records and queries
// Author: Gabriel Demetrios Lafis

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::query::{average, filter_map_sorted, group_by, top_n_by_key};

/// Score (0-10 scale) at or above which a student counts as passing
pub const PASSING_SCORE: f64 = 7.0;

/// A student with a score on a 0-10 scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub score: f64,
    pub course: String,
}

impl Student {
    /// Create a new student
    pub fn new(name: &str, score: f64, course: &str) -> Self {
        Student {
            name: name.to_string(),
            score,
            course: course.to_string(),
        }
    }
}

/// Names of passing students, uppercased, deduplicated and sorted ascending
pub fn passing_names_upper_sorted(students: &[Student]) -> Vec<String> {
    filter_map_sorted(
        students,
        |s| s.score >= PASSING_SCORE,
        |s| s.name.to_uppercase(),
        true,
    )
}

/// Mean score across all students, or `None` when there are no students
pub fn average_score(students: &[Student]) -> Option<f64> {
    average(students, |s| s.score)
}

/// Students grouped by course, input order preserved within each course
pub fn group_by_course(students: &[Student]) -> HashMap<String, Vec<Student>> {
    group_by(students, |s| s.course.clone())
}

/// The `n` highest-scoring students, best first
pub fn top_students_by_score(students: &[Student], n: usize) -> Vec<Student> {
    top_n_by_key(students, n, |s| s.score)
}

/// Fixed sample data for the demo driver
pub fn sample_students() -> Vec<Student> {
    vec![
        Student::new("Ana", 8.5, "A1"),
        Student::new("Carlos", 6.0, "A1"),
        Student::new("Beatriz", 9.0, "B1"),
        Student::new("Diego", 7.0, "A1"),
        Student::new("Elena", 8.0, "B1"),
        Student::new("Fede", 5.5, "C1"),
    ]
}
