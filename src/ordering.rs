//! Key-driven three-way comparison.

use std::cmp::Ordering;

/// Compares two items by the keys a mapping function extracts from them.
///
/// Applies `key_fn` to each item and returns [`Ordering::Less`],
/// [`Ordering::Equal`], or [`Ordering::Greater`] according to the natural
/// order of the extracted keys. The key type must be totally ordered
/// ([`Ord`]); the items themselves never need to be comparable.
///
/// Ties are decided by key equality alone. Callers wanting a secondary
/// criterion compose it into `key_fn`, typically by returning a tuple.
/// `key_fn` is assumed pure; it is called exactly once per item.
pub fn compare_by_key<T, K, F>(key_fn: F, item1: &T, item2: &T) -> Ordering
where
    K: Ord,
    F: Fn(&T) -> K,
{
    key_fn(item1).cmp(&key_fn(item2))
}
