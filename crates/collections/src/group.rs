//! Grouping, keying, counting and prefix/suffix dropping.

use crate::iteration::{backward, forward, seek, visit};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::hash::Hash;

/// Group elements by key. Each group keeps the elements' original order;
/// the order of the groups themselves is unspecified.
pub fn group_by<'a, T, U, E, F>(
    collection: &'a [T],
    mut iteratee: F,
) -> Result<HashMap<U, Vec<T>>, E>
where
    T: Clone,
    U: Eq + Hash,
    F: FnMut(&'a T) -> Result<U, E>,
{
    let mut result: HashMap<U, Vec<T>> = HashMap::new();
    visit(forward(collection), "group_by", |_, item| {
        result.entry(iteratee(item)?).or_default().push(item.clone());
        Ok(())
    })?;
    Ok(result)
}

/// Split elements into groups ordered by the first appearance of each key.
///
/// The deterministic counterpart of [`group_by`].
pub fn partition_by<'a, T, K, E, F>(collection: &'a [T], mut iteratee: F) -> Result<Vec<Vec<T>>, E>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&'a T) -> Result<K, E>,
{
    let mut groups: IndexMap<K, Vec<T>> = IndexMap::new();
    visit(forward(collection), "partition_by", |_, item| {
        groups.entry(iteratee(item)?).or_default().push(item.clone());
        Ok(())
    })?;
    Ok(groups.into_values().collect())
}

/// Index elements by key. On a key collision the later element wins.
pub fn key_by<'a, K, V, E, F>(collection: &'a [V], mut iteratee: F) -> Result<HashMap<K, V>, E>
where
    K: Eq + Hash,
    V: Clone,
    F: FnMut(&'a V) -> Result<K, E>,
{
    let mut result = HashMap::with_capacity(collection.len());
    visit(forward(collection), "key_by", |_, item| {
        result.insert(iteratee(item)?, item.clone());
        Ok(())
    })?;
    Ok(result)
}

/// Build a map from the key/value pairs produced by `transform`.
///
/// On a key collision the pair produced last wins.
pub fn associate<'a, T, K, V, E, F>(
    collection: &'a [T],
    mut transform: F,
) -> Result<HashMap<K, V>, E>
where
    K: Eq + Hash,
    F: FnMut(&'a T) -> Result<(K, V), E>,
{
    let mut result = HashMap::with_capacity(collection.len());
    visit(forward(collection), "associate", |_, item| {
        let (key, value) = transform(item)?;
        result.insert(key, value);
        Ok(())
    })?;
    Ok(result)
}

/// Alias of [`associate`].
pub fn slice_to_map<'a, T, K, V, E, F>(
    collection: &'a [T],
    transform: F,
) -> Result<HashMap<K, V>, E>
where
    K: Eq + Hash,
    F: FnMut(&'a T) -> Result<(K, V), E>,
{
    associate(collection, transform)
}

/// Drop the leading elements the predicate holds for and copy the rest.
pub fn drop_while<'a, T, E, F>(collection: &'a [T], mut predicate: F) -> Result<Vec<T>, E>
where
    T: Clone,
    F: FnMut(&'a T) -> Result<bool, E>,
{
    let start = seek(forward(collection), "drop_while", |index, item| {
        Ok((!predicate(item)?).then_some(index))
    })?
    .unwrap_or(collection.len());
    Ok(collection[start..].to_vec())
}

/// Drop the trailing elements the predicate holds for and copy the rest.
pub fn drop_right_while<'a, T, E, F>(collection: &'a [T], mut predicate: F) -> Result<Vec<T>, E>
where
    T: Clone,
    F: FnMut(&'a T) -> Result<bool, E>,
{
    let end = seek(backward(collection), "drop_right_while", |index, item| {
        Ok((!predicate(item)?).then_some(index + 1))
    })?
    .unwrap_or(0);
    Ok(collection[..end].to_vec())
}

/// Count the elements the predicate holds for.
pub fn count_by<'a, T, E, F>(collection: &'a [T], mut predicate: F) -> Result<usize, E>
where
    F: FnMut(&'a T) -> Result<bool, E>,
{
    let mut count = 0;
    visit(forward(collection), "count_by", |_, item| {
        if predicate(item)? {
            count += 1;
        }
        Ok(())
    })?;
    Ok(count)
}

/// Count how many elements map to each key.
pub fn count_values_by<'a, T, U, E, F>(
    collection: &'a [T],
    mut mapper: F,
) -> Result<HashMap<U, usize>, E>
where
    U: Eq + Hash,
    F: FnMut(&'a T) -> Result<U, E>,
{
    let mut result = HashMap::new();
    visit(forward(collection), "count_values_by", |_, item| {
        *result.entry(mapper(item)?).or_insert(0) += 1;
        Ok(())
    })?;
    Ok(result)
}
