//! The zero value of a type.
//!
//! Operations that fail return `Err` and therefore never hand out a partial
//! result. Operations that succeed without finding anything (for example a
//! search that misses) use [`empty`] when the caller asked for a value rather
//! than an `Option`.

/// Returns the zero value of `T`: `0` for numbers, `""` for strings, an empty
/// collection for collections, `None` for options.
#[inline]
#[must_use]
pub fn empty<T: Default>() -> T {
    T::default()
}

/// Returns `true` when `value` equals the zero value of its type.
#[must_use]
pub fn is_empty<T: Default + PartialEq>(value: &T) -> bool {
    *value == empty::<T>()
}
