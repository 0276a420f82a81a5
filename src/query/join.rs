// Join-to-string operation for record queries
// Author: Gabriel Demetrios Lafis

/// Format each record and concatenate the pieces with a separator
///
/// Empty input yields the empty string.
pub fn join_to_string<T, F>(records: &[T], format_fn: F, separator: &str) -> String
where
    F: Fn(&T) -> String,
{
    records
        .iter()
        .map(|r| format_fn(r))
        .collect::<Vec<String>>()
        .join(separator)
}
