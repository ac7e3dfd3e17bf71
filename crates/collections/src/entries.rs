//! Transforms over hash maps.
//!
//! Hash maps iterate in an unspecified order. When a transform maps two
//! entries to the same key, whichever entry happens to be processed last is
//! kept, so callers that care must make their key transform injective.

use crate::iteration::visit;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Rekey a map, keeping the values.
pub fn map_keys<'a, K, V, R, S, E, F>(
    input: &'a HashMap<K, V, S>,
    mut iteratee: F,
) -> Result<HashMap<R, V>, E>
where
    V: Clone,
    R: Eq + Hash,
    S: BuildHasher,
    F: FnMut(&'a V, &'a K) -> Result<R, E>,
{
    let mut result = HashMap::with_capacity(input.len());
    visit(input.iter().enumerate(), "map_keys", |_, (key, value)| {
        result.insert(iteratee(value, key)?, value.clone());
        Ok(())
    })?;
    Ok(result)
}

/// Transform the values of a map, keeping the keys.
pub fn map_values<'a, K, V, R, S, E, F>(
    input: &'a HashMap<K, V, S>,
    mut iteratee: F,
) -> Result<HashMap<K, R>, E>
where
    K: Clone + Eq + Hash,
    S: BuildHasher,
    F: FnMut(&'a V, &'a K) -> Result<R, E>,
{
    let mut result = HashMap::with_capacity(input.len());
    visit(input.iter().enumerate(), "map_values", |_, (key, value)| {
        result.insert(key.clone(), iteratee(value, key)?);
        Ok(())
    })?;
    Ok(result)
}

/// Transform every entry into a new key/value pair.
pub fn map_entries<'a, K1, V1, K2, V2, S, E, F>(
    input: &'a HashMap<K1, V1, S>,
    mut iteratee: F,
) -> Result<HashMap<K2, V2>, E>
where
    K2: Eq + Hash,
    S: BuildHasher,
    F: FnMut(&'a K1, &'a V1) -> Result<(K2, V2), E>,
{
    let mut result = HashMap::with_capacity(input.len());
    visit(input.iter().enumerate(), "map_entries", |_, (key, value)| {
        let (key, value) = iteratee(key, value)?;
        result.insert(key, value);
        Ok(())
    })?;
    Ok(result)
}

/// Flatten a map into a vector, one element per entry.
///
/// The vector follows the map's iteration order, which is unspecified.
pub fn map_to_slice<'a, K, V, R, S, E, F>(
    input: &'a HashMap<K, V, S>,
    mut iteratee: F,
) -> Result<Vec<R>, E>
where
    S: BuildHasher,
    F: FnMut(&'a K, &'a V) -> Result<R, E>,
{
    let mut result = Vec::with_capacity(input.len());
    visit(input.iter().enumerate(), "map_to_slice", |_, (key, value)| {
        result.push(iteratee(key, value)?);
        Ok(())
    })?;
    Ok(result)
}
