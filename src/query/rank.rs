// Ranking operations for record queries
// Author: Gabriel Demetrios Lafis

use std::cmp::Ordering;

// Float keys are only PartialOrd; incomparable keys (NaN) rank as equal
// so sorting never panics.
fn compare_keys<K: PartialOrd>(a: &K, b: &K) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Sort records descending by a key, keeping input order among ties
pub fn sorted_desc_by_key<T, K, F>(records: &[T], key_fn: F) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare_keys(&key_fn(b), &key_fn(a)));
    sorted
}

/// Sort records ascending by a key, keeping input order among ties
pub fn sorted_asc_by_key<T, K, F>(records: &[T], key_fn: F) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare_keys(&key_fn(a), &key_fn(b)));
    sorted
}

/// Take the `n` records with the largest keys, in descending key order
///
/// Ties keep their original relative order (stable sort). If the input
/// holds fewer than `n` records, all of them are returned.
pub fn top_n_by_key<T, K, F>(records: &[T], n: usize, key_fn: F) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let mut sorted = sorted_desc_by_key(records, key_fn);
    sorted.truncate(n);
    sorted
}

/// Take the `n` records with the smallest keys, in ascending key order
///
/// Same contract as [`top_n_by_key`] with the order reversed.
pub fn bottom_n_by_key<T, K, F>(records: &[T], n: usize, key_fn: F) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let mut sorted = sorted_asc_by_key(records, key_fn);
    sorted.truncate(n);
    sorted
}

/// Record with the largest key, or `None` for an empty slice
///
/// When several records share the maximum, the first one in input order
/// wins: a later record only replaces the current best on a strictly
/// greater key.
pub fn max_by_key<T, K, F>(records: &[T], key_fn: F) -> Option<&T>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    extremum_by(records, key_fn, Ordering::Greater)
}

/// Record with the smallest key, or `None` for an empty slice
///
/// Ties resolve to the first record in input order, as in [`max_by_key`].
pub fn min_by_key<T, K, F>(records: &[T], key_fn: F) -> Option<&T>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    extremum_by(records, key_fn, Ordering::Less)
}

fn extremum_by<T, K, F>(records: &[T], key_fn: F, wanted: Ordering) -> Option<&T>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let mut best: Option<(&T, K)> = None;

    for record in records {
        let key = key_fn(record);

        let replace = match &best {
            None => true,
            Some((_, best_key)) => compare_keys(&key, best_key) == wanted,
        };

        if replace {
            best = Some((record, key));
        }
    }

    best.map(|(record, _)| record)
}
