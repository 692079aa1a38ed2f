//! Structural equality and reference identity. The two are never conflated:
//! `check_is` compares addresses, `check_equal` compares values.

use std::fmt::Debug;
use std::ptr;

use verdict_core::{enforce, AssertionFailure};

/// Checks `expected == actual`.
pub fn check_equal<E, A>(expected: E, actual: A) -> Result<(), AssertionFailure>
where
    E: PartialEq<A> + Debug,
    A: Debug,
{
    if expected != actual {
        return Err(AssertionFailure::new(
            "verdict.equal",
            format!("{expected:?} and {actual:?} are not equal"),
        ));
    }
    Ok(())
}

/// Checks `expected != actual`.
pub fn check_not_equal<E, A>(expected: E, actual: A) -> Result<(), AssertionFailure>
where
    E: PartialEq<A> + Debug,
    A: Debug,
{
    if expected == actual {
        return Err(AssertionFailure::new(
            "verdict.not_equal",
            format!("{expected:?} and {actual:?} are equal"),
        ));
    }
    Ok(())
}

fn addresses<T: ?Sized>(failure: AssertionFailure, expected: &T, actual: &T) -> AssertionFailure {
    failure
        .with_context("expected_address", format!("{:p}", expected))
        .with_context("actual_address", format!("{:p}", actual))
}

/// Checks that `expected` and `actual` are the same object.
///
/// Zero-sized values may share an address without being the same binding.
pub fn check_is<T: ?Sized + Debug>(expected: &T, actual: &T) -> Result<(), AssertionFailure> {
    if !ptr::eq(expected, actual) {
        let failure = AssertionFailure::new(
            "verdict.is",
            format!("{actual:?} is not {expected:?}"),
        );
        return Err(addresses(failure, expected, actual));
    }
    Ok(())
}

/// Checks that `expected` and `actual` are different objects.
pub fn check_is_not<T: ?Sized + Debug>(expected: &T, actual: &T) -> Result<(), AssertionFailure> {
    if ptr::eq(expected, actual) {
        let failure = AssertionFailure::new("verdict.is_not", format!("{actual:?} is {expected:?}"));
        return Err(addresses(failure, expected, actual));
    }
    Ok(())
}

/// Asserts `expected == actual`.
#[track_caller]
pub fn assert_equal<E, A>(expected: E, actual: A)
where
    E: PartialEq<A> + Debug,
    A: Debug,
{
    enforce(check_equal(expected, actual));
}

/// Asserts `expected != actual`.
#[track_caller]
pub fn assert_not_equal<E, A>(expected: E, actual: A)
where
    E: PartialEq<A> + Debug,
    A: Debug,
{
    enforce(check_not_equal(expected, actual));
}

/// Asserts that `expected` and `actual` are the same object.
#[track_caller]
pub fn assert_is<T: ?Sized + Debug>(expected: &T, actual: &T) {
    enforce(check_is(expected, actual));
}

/// Asserts that `expected` and `actual` are different objects.
#[track_caller]
pub fn assert_is_not<T: ?Sized + Debug>(expected: &T, actual: &T) {
    enforce(check_is_not(expected, actual));
}
