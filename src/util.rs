/// Sorts and deduplicates a collection of keys so it can be handed to
/// [`Tree::from_sorted`][crate::Tree::from_sorted].
///
/// # Examples
///
/// ```
/// use balanced_bst::sorted_unique;
///
/// assert_eq!(sorted_unique(vec![4, 1, 4, 3, 1]), vec![1, 3, 4]);
/// ```
pub fn sorted_unique<K, I>(keys: I) -> Vec<K>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    let mut keys: Vec<K> = keys.into_iter().collect();
    keys.sort_unstable();
    keys.dedup();
    keys
}

/// Whether every key is strictly larger than the one before it.
pub(crate) fn is_strictly_ascending<K: Ord>(keys: &[K]) -> bool {
    keys.windows(2).all(|pair| pair[0] < pair[1])
}
