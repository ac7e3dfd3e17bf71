//! Sequence transforms: map, filter, fold and generate.

use crate::iteration::{backward, forward, visit};
use lotry_core::ShortCircuit;

/// Transform every element, producing a vector of the same length.
///
/// `result[i] == transform(&collection[i], i)`.
pub fn map<'a, T, R, E, F>(collection: &'a [T], mut transform: F) -> Result<Vec<R>, E>
where
    F: FnMut(&'a T, usize) -> Result<R, E>,
{
    let mut result = Vec::with_capacity(collection.len());
    visit(forward(collection), "map", |index, item| {
        result.push(transform(item, index)?);
        Ok(())
    })?;
    Ok(result)
}

/// Keep the elements the predicate holds for, in their original order.
pub fn filter<'a, T, E, F>(collection: &'a [T], mut predicate: F) -> Result<Vec<T>, E>
where
    T: Clone,
    F: FnMut(&'a T, usize) -> Result<bool, E>,
{
    let mut result = Vec::with_capacity(collection.len());
    visit(forward(collection), "filter", |index, item| {
        if predicate(item, index)? {
            result.push(item.clone());
        }
        Ok(())
    })?;
    Ok(result)
}

/// The opposite of [`filter`]: keep the elements the predicate does not hold for.
pub fn reject<'a, T, E, F>(collection: &'a [T], mut predicate: F) -> Result<Vec<T>, E>
where
    T: Clone,
    F: FnMut(&'a T, usize) -> Result<bool, E>,
{
    let mut result = Vec::new();
    visit(forward(collection), "reject", |index, item| {
        if !predicate(item, index)? {
            result.push(item.clone());
        }
        Ok(())
    })?;
    Ok(result)
}

/// Filter and transform in one pass.
///
/// The callback returns `Some(value)` to keep `value` and `None` to drop the
/// element.
pub fn filter_map<'a, T, R, E, F>(collection: &'a [T], mut callback: F) -> Result<Vec<R>, E>
where
    F: FnMut(&'a T, usize) -> Result<Option<R>, E>,
{
    let mut result = Vec::new();
    visit(forward(collection), "filter_map", |index, item| {
        if let Some(value) = callback(item, index)? {
            result.push(value);
        }
        Ok(())
    })?;
    Ok(result)
}

/// Transform every element into a sub-sequence and concatenate them in order.
///
/// Any `IntoIterator` works as the sub-sequence, so `None` or an empty
/// vector both contribute nothing.
pub fn flat_map<'a, T, R, I, E, F>(collection: &'a [T], mut iteratee: F) -> Result<Vec<R>, E>
where
    I: IntoIterator<Item = R>,
    F: FnMut(&'a T, usize) -> Result<I, E>,
{
    let mut result = Vec::with_capacity(collection.len());
    visit(forward(collection), "flat_map", |index, item| {
        result.extend(iteratee(item, index)?);
        Ok(())
    })?;
    Ok(result)
}

/// Fold the elements left to right, starting from `initial`.
pub fn reduce<'a, T, R, E, F>(collection: &'a [T], mut accumulator: F, initial: R) -> Result<R, E>
where
    F: FnMut(R, &'a T, usize) -> Result<R, E>,
{
    forward(collection).try_fold(initial, |agg, (index, item)| {
        accumulator(agg, item, index).halt_at("reduce", index)
    })
}

/// Fold the elements right to left, starting from `initial`.
///
/// The accumulator still receives each element's original index.
pub fn reduce_right<'a, T, R, E, F>(
    collection: &'a [T],
    mut accumulator: F,
    initial: R,
) -> Result<R, E>
where
    F: FnMut(R, &'a T, usize) -> Result<R, E>,
{
    backward(collection).try_fold(initial, |agg, (index, item)| {
        accumulator(agg, item, index).halt_at("reduce_right", index)
    })
}

/// Visit every element in order for its side effects.
pub fn for_each<'a, T, E, F>(collection: &'a [T], mut iteratee: F) -> Result<(), E>
where
    F: FnMut(&'a T, usize) -> Result<(), E>,
{
    visit(forward(collection), "for_each", |index, item| iteratee(item, index))
}

/// Call `iteratee` with `0..count` and collect the results.
pub fn times<T, E, F>(count: usize, mut iteratee: F) -> Result<Vec<T>, E>
where
    F: FnMut(usize) -> Result<T, E>,
{
    let mut result = Vec::with_capacity(count);
    for index in 0..count {
        result.push(iteratee(index).halt_at("times", index)?);
    }
    Ok(result)
}

/// Build a vector from `count` calls of `callback`.
///
/// Same results as [`times`]; the vector grows as values arrive instead of
/// being sized up front.
pub fn repeat_by<T, E, F>(count: usize, mut callback: F) -> Result<Vec<T>, E>
where
    F: FnMut(usize) -> Result<T, E>,
{
    (0..count)
        .map(|index| callback(index).halt_at("repeat_by", index))
        .collect()
}
