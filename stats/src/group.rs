//! Grouping and ranking primitives shared by every statistics operation.
//!
//! All rankings follow the same shape: group records by a key, reduce each
//! group to one scalar metric, stable-sort descending, truncate. Grouping
//! preserves first-encounter order, and the stable sort keeps that order for
//! equal metrics, which fixes the tie-break policy to "first encountered in
//! the source sequence".

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

/// Groups items by a key, preserving the order in which keys first appear.
pub(crate) fn group_by<K, T, F>(items: impl IntoIterator<Item = T>, mut key_of: F) -> Vec<(K, Vec<T>)>
where
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    let mut index_of: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();

    for item in items {
        let key = key_of(&item);
        match index_of.get(&key) {
            Some(&index) => groups[index].1.push(item),
            None => {
                index_of.insert(key.clone(), groups.len());
                groups.push((key, vec![item]));
            }
        }
    }

    groups
}

/// Stable-sorts entries descending by the given comparison and keeps the
/// first `n`. `n` larger than the entry count returns everything.
pub(crate) fn take_top_by<T, F>(mut entries: Vec<T>, n: usize, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    // Reversed operands give descending order; sort_by is stable, so ties
    // keep their first-encountered position.
    entries.sort_by(|a, b| compare(b, a));
    entries.truncate(n);
    entries
}

/// Mean of an integer rating sequence; 0.0 for an empty sequence.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn mean_rating(ratings: &[i32]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    sum as f64 / ratings.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_preserves_first_encounter_order() {
        let groups = group_by(vec!["b", "a", "b", "c", "a"], |s| (*s).to_string());
        let keys: Vec<&str> = groups.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].1.len(), 2);
        assert_eq!(groups[2].1.len(), 1);
    }

    #[test]
    fn test_take_top_by_is_stable_on_ties() {
        let entries = vec![("first", 2), ("second", 2), ("third", 3)];
        let top = take_top_by(entries, 2, |a, b| a.1.cmp(&b.1));
        assert_eq!(top, vec![("third", 3), ("first", 2)]);
    }

    #[test]
    fn test_take_top_by_clamps_oversized_n() {
        let top = take_top_by(vec![1, 2], 10, i32::cmp);
        assert_eq!(top, vec![2, 1]);
    }

    #[test]
    fn test_mean_rating() {
        assert!((mean_rating(&[4, 5, 3]) - 4.0).abs() < f64::EPSILON);
        assert!(mean_rating(&[]).abs() < f64::EPSILON);
    }
}
