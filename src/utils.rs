//! Shared utility functions

use std::cmp::Reverse;

/// Orders `(key, count)` pairs by descending count.
///
/// Ties are broken by ascending key so the output is reproducible across
/// runs, whatever order the pairs arrive in.
///
/// # Example
///
/// ```
/// use keyfreq::utils::sorted_by_count;
///
/// let sorted = sorted_by_count(vec![("b", 1), ("a", 3), ("c", 1)]);
/// assert_eq!(sorted, vec![("a", 3), ("b", 1), ("c", 1)]);
///
/// // Already sorted input comes back unchanged
/// assert_eq!(sorted_by_count(sorted.clone()), sorted);
/// ```
pub fn sorted_by_count<K, I>(entries: I) -> Vec<(K, u64)>
where
    K: Ord,
    I: IntoIterator<Item = (K, u64)>,
{
    let mut entries: Vec<(K, u64)> = entries.into_iter().collect();
    entries.sort_unstable_by(|(ka, ca), (kb, cb)| {
        Reverse(*ca).cmp(&Reverse(*cb)).then_with(|| ka.cmp(kb))
    });
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_by_count_descending() {
        let sorted = sorted_by_count(vec![("a", 1), ("b", 5), ("c", 3)]);
        assert_eq!(sorted, vec![("b", 5), ("c", 3), ("a", 1)]);
    }

    #[test]
    fn ties_break_on_ascending_key() {
        let sorted = sorted_by_count(vec![("z", 2), ("m", 2), ("a", 2)]);
        assert_eq!(sorted, vec![("a", 2), ("m", 2), ("z", 2)]);
    }

    #[test]
    fn sort_is_idempotent() {
        let once = sorted_by_count(vec![("q", 4), ("w", 9), ("e", 4), ("r", 1)]);
        let twice = sorted_by_count(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn input_order_does_not_matter() {
        let forward = sorted_by_count(vec![("x", 1), ("y", 1), ("z", 2)]);
        let backward = sorted_by_count(vec![("z", 2), ("y", 1), ("x", 1)]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn empty_input() {
        let sorted: Vec<(&str, u64)> = sorted_by_count(Vec::new());
        assert!(sorted.is_empty());
    }

    #[test]
    fn owned_keys() {
        let sorted = sorted_by_count(vec![("¨a".to_string(), 1), (" ".to_string(), 7)]);
        assert_eq!(sorted[0].0, " ");
        assert_eq!(sorted[1].0, "¨a");
    }
}
