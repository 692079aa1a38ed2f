use std::fmt::Debug;

use verdict_core::{enforce, AssertionFailure};

use crate::nullability::Nullable;

/// Checks that no value in `values` is null.
pub fn check_all_not_none<T: Nullable + Debug>(values: &[T]) -> Result<(), AssertionFailure> {
    if let Some(index) = values.iter().position(Nullable::is_null) {
        return Err(AssertionFailure::new(
            "verdict.all_not_none",
            format!("Not all values in {values:?} are not None"),
        )
        .with_context("index", index.to_string()));
    }
    Ok(())
}

/// Checks that at least one value in `values` is not null.
pub fn check_any_not_none<T: Nullable + Debug>(values: &[T]) -> Result<(), AssertionFailure> {
    if values.iter().all(Nullable::is_null) {
        return Err(AssertionFailure::new(
            "verdict.any_not_none",
            format!("No values in {values:?} are not None"),
        ));
    }
    Ok(())
}

/// Checks that every value in `values` is null.
pub fn check_all_none<T: Nullable + Debug>(values: &[T]) -> Result<(), AssertionFailure> {
    if let Some(index) = values.iter().position(|value| !value.is_null()) {
        return Err(AssertionFailure::new(
            "verdict.all_none",
            format!("Not all values in {values:?} are None"),
        )
        .with_context("index", index.to_string()));
    }
    Ok(())
}

/// Asserts that no value in `values` is null.
#[track_caller]
pub fn assert_all_not_none<T: Nullable + Debug>(values: &[T]) {
    enforce(check_all_not_none(values));
}

/// Asserts that at least one value in `values` is not null.
#[track_caller]
pub fn assert_any_not_none<T: Nullable + Debug>(values: &[T]) {
    enforce(check_any_not_none(values));
}

/// Asserts that every value in `values` is null.
#[track_caller]
pub fn assert_all_none<T: Nullable + Debug>(values: &[T]) {
    enforce(check_all_none(values));
}
