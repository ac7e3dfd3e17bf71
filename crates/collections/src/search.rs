//! Searching slices and maps with fallible predicates.

use crate::iteration::{backward, forward, seek};
use lotry_core::{empty, NOT_FOUND_INDEX};
use std::collections::HashMap;
use std::hash::BuildHasher;

/// An element together with its position in the searched slice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Located<T> {
    pub item: T,
    pub index: usize,
}

impl<T> Located<T> {
    /// Drop the index and keep the element
    pub fn into_item(self) -> T {
        self.item
    }
}

/// Sentinel view of a search result
pub trait LocatedExt {
    /// The index of the hit, or [`NOT_FOUND_INDEX`] (`-1`) when there was none
    fn index_or_sentinel(&self) -> isize;
}

impl<T> LocatedExt for Option<Located<T>> {
    fn index_or_sentinel(&self) -> isize {
        // Slice lengths never exceed isize::MAX.
        self.as_ref()
            .map_or(NOT_FOUND_INDEX, |found| found.index as isize)
    }
}

/// Find the first element the predicate holds for.
pub fn find<'a, T, E, F>(collection: &'a [T], mut predicate: F) -> Result<Option<T>, E>
where
    T: Clone,
    F: FnMut(&'a T) -> Result<bool, E>,
{
    seek(forward(collection), "find", |_, item| {
        Ok(predicate(item)?.then(|| item.clone()))
    })
}

/// Like [`find`], but also reports where the element was found.
pub fn find_index_of<'a, T, E, F>(
    collection: &'a [T],
    mut predicate: F,
) -> Result<Option<Located<T>>, E>
where
    T: Clone,
    F: FnMut(&'a T) -> Result<bool, E>,
{
    seek(forward(collection), "find_index_of", |index, item| {
        Ok(predicate(item)?.then(|| Located {
            item: item.clone(),
            index,
        }))
    })
}

/// Find the last element the predicate holds for, searching from the end.
pub fn find_last_index_of<'a, T, E, F>(
    collection: &'a [T],
    mut predicate: F,
) -> Result<Option<Located<T>>, E>
where
    T: Clone,
    F: FnMut(&'a T) -> Result<bool, E>,
{
    seek(backward(collection), "find_last_index_of", |index, item| {
        Ok(predicate(item)?.then(|| Located {
            item: item.clone(),
            index,
        }))
    })
}

/// Find the first matching element, or return `fallback` when there is none.
pub fn find_or_else<'a, T, E, F>(collection: &'a [T], fallback: T, predicate: F) -> Result<T, E>
where
    T: Clone,
    F: FnMut(&'a T) -> Result<bool, E>,
{
    Ok(find(collection, predicate)?.unwrap_or(fallback))
}

/// Find the first matching element, or return the zero value of `T`.
pub fn find_or_default<'a, T, E, F>(collection: &'a [T], predicate: F) -> Result<T, E>
where
    T: Clone + Default,
    F: FnMut(&'a T) -> Result<bool, E>,
{
    Ok(find(collection, predicate)?.unwrap_or_else(empty))
}

/// Whether any element satisfies the predicate.
pub fn contains_by<'a, T, E, F>(collection: &'a [T], mut predicate: F) -> Result<bool, E>
where
    F: FnMut(&'a T) -> Result<bool, E>,
{
    let hit = seek(forward(collection), "contains_by", |_, item| {
        Ok(predicate(item)?.then_some(()))
    })?;
    Ok(hit.is_some())
}

/// Whether any element satisfies the predicate. False on empty input.
pub fn some_by<'a, T, E, F>(collection: &'a [T], mut predicate: F) -> Result<bool, E>
where
    F: FnMut(&'a T) -> Result<bool, E>,
{
    let hit = seek(forward(collection), "some_by", |_, item| {
        Ok(predicate(item)?.then_some(()))
    })?;
    Ok(hit.is_some())
}

/// Whether every element satisfies the predicate. True on empty input.
pub fn every_by<'a, T, E, F>(collection: &'a [T], mut predicate: F) -> Result<bool, E>
where
    F: FnMut(&'a T) -> Result<bool, E>,
{
    let miss = seek(forward(collection), "every_by", |_, item| {
        Ok((!predicate(item)?).then_some(()))
    })?;
    Ok(miss.is_none())
}

/// Whether no element satisfies the predicate. True on empty input.
pub fn none_by<'a, T, E, F>(collection: &'a [T], mut predicate: F) -> Result<bool, E>
where
    F: FnMut(&'a T) -> Result<bool, E>,
{
    let hit = seek(forward(collection), "none_by", |_, item| {
        Ok(predicate(item)?.then_some(()))
    })?;
    Ok(hit.is_none())
}

/// Find the key of the first entry the predicate holds for.
///
/// "First" follows the map's iteration order, which is unspecified.
pub fn find_key_by<'a, K, V, S, E, F>(
    object: &'a HashMap<K, V, S>,
    mut predicate: F,
) -> Result<Option<K>, E>
where
    K: Clone,
    S: BuildHasher,
    F: FnMut(&'a K, &'a V) -> Result<bool, E>,
{
    seek(object.iter().enumerate(), "find_key_by", |_, (key, value)| {
        Ok(predicate(key, value)?.then(|| key.clone()))
    })
}
