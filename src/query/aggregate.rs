// Aggregate operations for record queries
// Author: Gabriel Demetrios Lafis

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::AddAssign;

/// Represents an aggregation over records of type `T`
///
/// An aggregator is a small state machine: `init` produces a fresh state,
/// `update` folds one record into it and `finalize` turns the state into
/// the aggregate result. Grouped aggregation keeps one state per group and
/// feeds records to it in input order, so a single pass over the input is
/// enough.
pub trait Aggregator<T> {
    /// Accumulation state for one group
    type State;

    /// Final aggregate value
    type Output;

    /// Get the name of the aggregation
    fn name(&self) -> &str;

    /// Initialize the aggregation state
    fn init(&self) -> Self::State;

    /// Update the aggregation state with a record
    fn update(&self, state: &mut Self::State, record: &T);

    /// Finalize the aggregation and return the result
    fn finalize(&self, state: Self::State) -> Self::Output;
}

/// Sum aggregation over a numeric field
///
/// Generic over the summed type, so integer fields stay integers and
/// float fields stay floats.
pub struct SumAggregator<F> {
    field_fn: F,
}

impl<F> SumAggregator<F> {
    /// Create a sum aggregator from a field extractor
    pub fn new(field_fn: F) -> Self {
        SumAggregator { field_fn }
    }
}

impl<T, N, F> Aggregator<T> for SumAggregator<F>
where
    N: Copy + Default + AddAssign,
    F: Fn(&T) -> N,
{
    type State = N;
    type Output = N;

    fn name(&self) -> &str {
        "sum"
    }

    fn init(&self) -> N {
        N::default()
    }

    fn update(&self, state: &mut N, record: &T) {
        *state += (self.field_fn)(record);
    }

    fn finalize(&self, state: N) -> N {
        state
    }
}

/// Count aggregation
pub struct CountAggregator;

impl<T> Aggregator<T> for CountAggregator {
    type State = u64;
    type Output = u64;

    fn name(&self) -> &str {
        "count"
    }

    fn init(&self) -> u64 {
        0
    }

    fn update(&self, state: &mut u64, _record: &T) {
        *state += 1;
    }

    fn finalize(&self, state: u64) -> u64 {
        state
    }
}

/// Average aggregation over a float field
///
/// The state keeps the full-precision sum and the count; rounding for
/// display is left to the caller. A group always holds at least one
/// record, so grouped averages never see an empty state.
pub struct AvgAggregator<F> {
    field_fn: F,
}

impl<F> AvgAggregator<F> {
    /// Create an average aggregator from a field extractor
    pub fn new(field_fn: F) -> Self {
        AvgAggregator { field_fn }
    }
}

impl<T, F> Aggregator<T> for AvgAggregator<F>
where
    F: Fn(&T) -> f64,
{
    type State = (f64, u64);
    type Output = f64;

    fn name(&self) -> &str {
        "avg"
    }

    fn init(&self) -> (f64, u64) {
        (0.0, 0)
    }

    fn update(&self, state: &mut (f64, u64), record: &T) {
        state.0 += (self.field_fn)(record);
        state.1 += 1;
    }

    fn finalize(&self, state: (f64, u64)) -> f64 {
        state.0 / state.1 as f64
    }
}

/// Arithmetic mean of a numeric field across all records
///
/// Returns `None` for an empty slice: "no data" and "average is zero" are
/// different answers and must stay distinguishable.
pub fn average<T, F>(records: &[T], field_fn: F) -> Option<f64>
where
    F: Fn(&T) -> f64,
{
    if records.is_empty() {
        return None;
    }

    let sum: f64 = records.iter().map(|r| field_fn(r)).sum();
    Some(sum / records.len() as f64)
}

/// Group records by a key, materializing each group as a list
///
/// Key iteration order is unspecified; within each group the original
/// relative input order is preserved.
pub fn group_by<T, K, F>(records: &[T], key_fn: F) -> HashMap<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();

    for record in records {
        groups.entry(key_fn(record)).or_default().push(record.clone());
    }

    groups
}

/// Group records by a key and reduce each group to a scalar in one pass
///
/// Accumulates one aggregator state per key while scanning the input, so
/// groups are never materialized. A key only exists once at least one
/// record carried it, which is why group aggregates never face an empty
/// group.
pub fn group_and_aggregate<T, K, F, A>(
    records: &[T],
    key_fn: F,
    aggregator: &A,
) -> HashMap<K, A::Output>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
    A: Aggregator<T>,
{
    let mut states: HashMap<K, A::State> = HashMap::new();

    for record in records {
        let state = states
            .entry(key_fn(record))
            .or_insert_with(|| aggregator.init());
        aggregator.update(state, record);
    }

    states
        .into_iter()
        .map(|(key, state)| (key, aggregator.finalize(state)))
        .collect()
}
