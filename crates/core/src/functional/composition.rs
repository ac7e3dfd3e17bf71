//! Fallible composition utilities for building callbacks
//!
//! Every helper here keeps the failure of the wrapped callback intact: an
//! `Err` produced inside is returned as-is and nothing after it runs.

use std::convert::Infallible;

/// Forward composition of fallible functions (f >> g)
///
/// `g` only runs when `f` succeeds.
pub fn compose<A, B, C, E, F, G>(mut f: F, mut g: G) -> impl FnMut(A) -> Result<C, E>
where
    F: FnMut(A) -> Result<B, E>,
    G: FnMut(B) -> Result<C, E>,
{
    move |a| f(a).and_then(&mut g)
}

/// Identity callback
pub fn identity<T, E>(x: T) -> Result<T, E> {
    Ok(x)
}

/// Callback that ignores its input and always yields `value`
pub fn constant<T, U, E>(value: T) -> impl FnMut(U) -> Result<T, E>
where
    T: Clone,
{
    move |_| Ok(value.clone())
}

/// Flip the arguments of a two-argument callback
pub fn flip<A, B, C, E, F>(mut f: F) -> impl FnMut(B, A) -> Result<C, E>
where
    F: FnMut(A, B) -> Result<C, E>,
{
    move |b, a| f(a, b)
}

/// Invert a fallible predicate
pub fn negate<A, E, F>(mut predicate: F) -> impl FnMut(A) -> Result<bool, E>
where
    F: FnMut(A) -> Result<bool, E>,
{
    move |a| predicate(a).map(|holds| !holds)
}

/// Invert a fallible two-argument predicate, such as an `(element, index)` one
pub fn negate2<A, B, E, F>(mut predicate: F) -> impl FnMut(A, B) -> Result<bool, E>
where
    F: FnMut(A, B) -> Result<bool, E>,
{
    move |a, b| predicate(a, b).map(|holds| !holds)
}

/// Turn an infallible function into a callback that can never fail
pub fn lift<A, B, F>(mut f: F) -> impl FnMut(A) -> Result<B, Infallible>
where
    F: FnMut(A) -> B,
{
    move |a| Ok(f(a))
}

/// Two-argument variant of [`lift`]
pub fn lift2<A, B, C, F>(mut f: F) -> impl FnMut(A, B) -> Result<C, Infallible>
where
    F: FnMut(A, B) -> C,
{
    move |a, b| Ok(f(a, b))
}
