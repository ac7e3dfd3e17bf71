//! Partial application for fallible callbacks.
//!
//! Each helper binds the first argument of a callback and returns a callback
//! of the remaining arguments. The bound value is cloned into every call, so
//! the result can be handed to any collection operation that calls it once
//! per element.

/// Bind the first argument of a two-argument callback
pub fn partial<T1, T2, R, E, F>(mut f: F, arg1: T1) -> impl FnMut(T2) -> Result<R, E>
where
    F: FnMut(T1, T2) -> Result<R, E>,
    T1: Clone,
{
    move |t2| f(arg1.clone(), t2)
}

/// Alias of [`partial`]
pub fn partial1<T1, T2, R, E, F>(f: F, arg1: T1) -> impl FnMut(T2) -> Result<R, E>
where
    F: FnMut(T1, T2) -> Result<R, E>,
    T1: Clone,
{
    partial(f, arg1)
}

/// Bind the first argument of a three-argument callback
pub fn partial2<T1, T2, T3, R, E, F>(mut f: F, arg1: T1) -> impl FnMut(T2, T3) -> Result<R, E>
where
    F: FnMut(T1, T2, T3) -> Result<R, E>,
    T1: Clone,
{
    move |t2, t3| f(arg1.clone(), t2, t3)
}

/// Bind the first argument of a four-argument callback
pub fn partial3<T1, T2, T3, T4, R, E, F>(
    mut f: F,
    arg1: T1,
) -> impl FnMut(T2, T3, T4) -> Result<R, E>
where
    F: FnMut(T1, T2, T3, T4) -> Result<R, E>,
    T1: Clone,
{
    move |t2, t3, t4| f(arg1.clone(), t2, t3, t4)
}

/// Bind the first argument of a five-argument callback
pub fn partial4<T1, T2, T3, T4, T5, R, E, F>(
    mut f: F,
    arg1: T1,
) -> impl FnMut(T2, T3, T4, T5) -> Result<R, E>
where
    F: FnMut(T1, T2, T3, T4, T5) -> Result<R, E>,
    T1: Clone,
{
    move |t2, t3, t4, t5| f(arg1.clone(), t2, t3, t4, t5)
}

/// Bind the first argument of a six-argument callback
pub fn partial5<T1, T2, T3, T4, T5, T6, R, E, F>(
    mut f: F,
    arg1: T1,
) -> impl FnMut(T2, T3, T4, T5, T6) -> Result<R, E>
where
    F: FnMut(T1, T2, T3, T4, T5, T6) -> Result<R, E>,
    T1: Clone,
{
    move |t2, t3, t4, t5, t6| f(arg1.clone(), t2, t3, t4, t5, t6)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    fn checked_add(a: i64, b: i64) -> Result<i64, String> {
        a.checked_add(b).ok_or_else(|| "overflow".to_string())
    }

    #[test]
    fn test_partial_binds_first_argument() {
        let mut add_ten = partial(checked_add, 10);
        assert_eq!(add_ten(5), Ok(15));
        assert_eq!(add_ten(-10), Ok(0));
        assert!(add_ten(i64::MAX).is_err());
    }

    #[test]
    fn test_partial_clones_owned_argument() {
        let mut greet = partial1(
            |greeting: String, name: &str| Ok::<_, ()>(format!("{greeting}, {name}")),
            "hello".to_string(),
        );

        assert_eq!(greet("ada").unwrap(), "hello, ada");
        assert_eq!(greet("bob").unwrap(), "hello, bob");
    }

    #[test]
    fn test_higher_arities() {
        let mut sum3 = partial2(|a: i32, b: i32, c: i32| Ok::<_, ()>(a + b + c), 1);
        assert_eq!(sum3(2, 3), Ok(6));

        let mut sum4 = partial3(|a: i32, b: i32, c: i32, d: i32| Ok::<_, ()>(a + b + c + d), 1);
        assert_eq!(sum4(2, 3, 4), Ok(10));

        let mut sum5 = partial4(
            |a: i32, b: i32, c: i32, d: i32, e: i32| Ok::<_, ()>(a + b + c + d + e),
            1,
        );
        assert_eq!(sum5(2, 3, 4, 5), Ok(15));

        let mut sum6 = partial5(
            |a: i32, b: i32, c: i32, d: i32, e: i32, f: i32| Ok::<_, ()>(a + b + c + d + e + f),
            1,
        );
        assert_eq!(sum6(2, 3, 4, 5, 6), Ok(21));
    }

    #[test]
    fn test_partial_propagates_error_unchanged() {
        let mut fail = partial2(
            |prefix: &str, _: i32, _: i32| Err::<(), _>(format!("{prefix}: failed")),
            "ctx",
        );
        assert_eq!(fail(1, 2), Err("ctx: failed".to_string()));
    }

    quickcheck! {
        fn prop_partial_matches_direct_call(a: i64, b: i64) -> bool {
            let mut bound = partial(checked_add, a);
            bound(b) == checked_add(a, b)
        }
    }
}
