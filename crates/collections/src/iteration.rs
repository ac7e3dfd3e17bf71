//! The fallible iteration contract.
//!
//! Every operation in this crate walks its input through [`visit`] or
//! [`seek`] (or a `try_fold` that reports the same way), which gives them the
//! same behavior:
//!
//! - each callback runs at most once per element per pass;
//! - the first `Err` stops the walk, no later element is visited;
//! - the `Err` is returned as-is, and nothing collected so far escapes;
//! - the index handed to callbacks and to the short-circuit trace is the
//!   element's position in the original slice, also when walking backwards.

use lotry_core::ShortCircuit;
use std::iter::{Enumerate, Rev};
use std::slice::Iter;

/// Elements of `collection` with their indices, first to last
pub(crate) fn forward<T>(collection: &[T]) -> Enumerate<Iter<'_, T>> {
    collection.iter().enumerate()
}

/// Elements of `collection` with their original indices, last to first
pub(crate) fn backward<T>(collection: &[T]) -> Rev<Enumerate<Iter<'_, T>>> {
    collection.iter().enumerate().rev()
}

/// Run `step` on every element, halting on the first failure.
pub(crate) fn visit<X, I, E, F>(elements: I, operation: &'static str, mut step: F) -> Result<(), E>
where
    I: IntoIterator<Item = (usize, X)>,
    F: FnMut(usize, X) -> Result<(), E>,
{
    for (index, element) in elements {
        step(index, element).halt_at(operation, index)?;
    }
    Ok(())
}

/// Run `step` until it yields a value, halting on the first failure.
///
/// Returns `Ok(None)` when every element was visited without a hit.
pub(crate) fn seek<X, I, B, E, F>(
    elements: I,
    operation: &'static str,
    mut step: F,
) -> Result<Option<B>, E>
where
    I: IntoIterator<Item = (usize, X)>,
    F: FnMut(usize, X) -> Result<Option<B>, E>,
{
    for (index, element) in elements {
        if let Some(hit) = step(index, element).halt_at(operation, index)? {
            return Ok(Some(hit));
        }
    }
    Ok(None)
}
