//! Uniqueness and duplicate detection by computed key.
//!
//! [`find_uniques_by`] and [`find_duplicates_by`] need to know whether a key
//! occurs again *later* before deciding about its first occurrence, so they
//! walk the slice twice and call the key extractor twice per element. The
//! extractor must therefore be pure.

use crate::iteration::{forward, visit};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Drop repeated elements, keeping the first occurrence of each key in order.
pub fn uniq_by<'a, T, U, E, F>(collection: &'a [T], mut iteratee: F) -> Result<Vec<T>, E>
where
    T: Clone,
    U: Eq + Hash,
    F: FnMut(&'a T) -> Result<U, E>,
{
    let mut result = Vec::with_capacity(collection.len());
    let mut seen = HashSet::with_capacity(collection.len());

    visit(forward(collection), "uniq_by", |_, item| {
        if seen.insert(iteratee(item)?) {
            result.push(item.clone());
        }
        Ok(())
    })?;

    Ok(result)
}

/// Tally which keys occur more than once. `true` marks a duplicated key.
fn tally_duplicates<'a, T, U, E, F>(
    collection: &'a [T],
    operation: &'static str,
    iteratee: &mut F,
) -> Result<HashMap<U, bool>, E>
where
    U: Eq + Hash,
    F: FnMut(&'a T) -> Result<U, E>,
{
    let mut duplicated = HashMap::with_capacity(collection.len());
    visit(forward(collection), operation, |_, item| {
        duplicated
            .entry(iteratee(item)?)
            .and_modify(|seen_again| *seen_again = true)
            .or_insert(false);
        Ok(())
    })?;
    Ok(duplicated)
}

/// Keep only the elements whose key occurs exactly once, in order.
///
/// Every copy of a repeated key is excluded, not just the later ones.
pub fn find_uniques_by<'a, T, U, E, F>(collection: &'a [T], mut iteratee: F) -> Result<Vec<T>, E>
where
    T: Clone,
    U: Eq + Hash,
    F: FnMut(&'a T) -> Result<U, E>,
{
    let duplicated = tally_duplicates(collection, "find_uniques_by", &mut iteratee)?;

    let mut result = Vec::new();
    visit(forward(collection), "find_uniques_by", |_, item| {
        let key = iteratee(item)?;
        if !duplicated.get(&key).copied().unwrap_or(false) {
            result.push(item.clone());
        }
        Ok(())
    })?;

    Ok(result)
}

/// Keep the first occurrence of every key that occurs more than once, ordered
/// by that first occurrence.
pub fn find_duplicates_by<'a, T, U, E, F>(
    collection: &'a [T],
    mut iteratee: F,
) -> Result<Vec<T>, E>
where
    T: Clone,
    U: Eq + Hash,
    F: FnMut(&'a T) -> Result<U, E>,
{
    let mut pending = tally_duplicates(collection, "find_duplicates_by", &mut iteratee)?;

    let mut result = Vec::new();
    visit(forward(collection), "find_duplicates_by", |_, item| {
        let key = iteratee(item)?;
        if let Some(emit) = pending.get_mut(&key) {
            if *emit {
                result.push(item.clone());
                *emit = false;
            }
        }
        Ok(())
    })?;

    Ok(result)
}
