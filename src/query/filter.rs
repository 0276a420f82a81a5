// Filter operations for record queries
// Author: Gabriel Demetrios Lafis

/// Filter records by a predicate, preserving input order
pub fn filter_records<T, P>(records: &[T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    records.iter().filter(|r| predicate(r)).cloned().collect()
}

/// Filter records by a predicate, map each survivor to a derived value
/// and sort the result ascending by the value's natural order.
///
/// With `dedupe` set, duplicate values are removed after sorting, so the
/// result contains each value at most once. Empty input yields an empty
/// vector.
pub fn filter_map_sorted<T, U, P, F>(records: &[T], predicate: P, map_fn: F, dedupe: bool) -> Vec<U>
where
    U: Ord,
    P: Fn(&T) -> bool,
    F: Fn(&T) -> U,
{
    let mut values: Vec<U> = records
        .iter()
        .filter(|r| predicate(r))
        .map(|r| map_fn(r))
        .collect();

    values.sort();

    if dedupe {
        values.dedup();
    }

    values
}
