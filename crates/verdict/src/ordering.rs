//! Ordering helpers. All take `(expected, actual)` and test `actual OP expected`;
//! operands that do not compare (NaN) fail.

#![allow(clippy::neg_cmp_op_on_partial_ord)]

use std::fmt::Debug;

use verdict_core::{enforce, AssertionFailure};

fn ordering_failure<E: Debug, A: Debug>(
    code: &str,
    relation: &str,
    expected: &E,
    actual: &A,
) -> AssertionFailure {
    AssertionFailure::new(code, format!("{actual:?} is not {relation} {expected:?}"))
}

/// Checks `actual > expected`.
pub fn check_greater_than<E, A>(expected: E, actual: A) -> Result<(), AssertionFailure>
where
    E: Debug,
    A: PartialOrd<E> + Debug,
{
    if !(actual > expected) {
        return Err(ordering_failure(
            "verdict.greater_than",
            "greater than",
            &expected,
            &actual,
        ));
    }
    Ok(())
}

/// Checks `actual >= expected`.
pub fn check_greater_than_or_equal<E, A>(expected: E, actual: A) -> Result<(), AssertionFailure>
where
    E: Debug,
    A: PartialOrd<E> + Debug,
{
    if !(actual >= expected) {
        return Err(ordering_failure(
            "verdict.greater_than_or_equal",
            "greater than or equal to",
            &expected,
            &actual,
        ));
    }
    Ok(())
}

/// Checks `actual < expected`.
pub fn check_less_than<E, A>(expected: E, actual: A) -> Result<(), AssertionFailure>
where
    E: Debug,
    A: PartialOrd<E> + Debug,
{
    if !(actual < expected) {
        return Err(ordering_failure(
            "verdict.less_than",
            "less than",
            &expected,
            &actual,
        ));
    }
    Ok(())
}

/// Checks `actual <= expected`.
pub fn check_less_than_or_equal<E, A>(expected: E, actual: A) -> Result<(), AssertionFailure>
where
    E: Debug,
    A: PartialOrd<E> + Debug,
{
    if !(actual <= expected) {
        return Err(ordering_failure(
            "verdict.less_than_or_equal",
            "less than or equal to",
            &expected,
            &actual,
        ));
    }
    Ok(())
}

/// Asserts `actual > expected`.
#[track_caller]
pub fn assert_greater_than<E, A>(expected: E, actual: A)
where
    E: Debug,
    A: PartialOrd<E> + Debug,
{
    enforce(check_greater_than(expected, actual));
}

/// Asserts `actual >= expected`.
#[track_caller]
pub fn assert_greater_than_or_equal<E, A>(expected: E, actual: A)
where
    E: Debug,
    A: PartialOrd<E> + Debug,
{
    enforce(check_greater_than_or_equal(expected, actual));
}

/// Asserts `actual < expected`.
#[track_caller]
pub fn assert_less_than<E, A>(expected: E, actual: A)
where
    E: Debug,
    A: PartialOrd<E> + Debug,
{
    enforce(check_less_than(expected, actual));
}

/// Asserts `actual <= expected`.
#[track_caller]
pub fn assert_less_than_or_equal<E, A>(expected: E, actual: A)
where
    E: Debug,
    A: PartialOrd<E> + Debug,
{
    enforce(check_less_than_or_equal(expected, actual));
}
