use std::fmt::Debug;

use serde_json::Value;
use verdict_core::{enforce, AssertionFailure};

/// Values that can be null: `Option`, raw pointers and JSON `null`.
pub trait Nullable {
    /// Whether the value is the null value of its type.
    fn is_null(&self) -> bool;
}

impl<T: Nullable + ?Sized> Nullable for &T {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T> Nullable for Option<T> {
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nullable for *const T {
    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }
}

impl<T: ?Sized> Nullable for *mut T {
    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}

impl Nullable for Value {
    fn is_null(&self) -> bool {
        Value::is_null(self)
    }
}

/// Checks that `value` is null.
pub fn check_is_none<V: Nullable + Debug>(value: V) -> Result<(), AssertionFailure> {
    if !value.is_null() {
        return Err(AssertionFailure::new(
            "verdict.is_none",
            format!("{value:?} is not None"),
        ));
    }
    Ok(())
}

/// Checks that `value` is not null.
pub fn check_is_not_none<V: Nullable + Debug>(value: V) -> Result<(), AssertionFailure> {
    if value.is_null() {
        return Err(AssertionFailure::new(
            "verdict.is_not_none",
            format!("{value:?} is None"),
        ));
    }
    Ok(())
}

/// Asserts that `value` is null.
#[track_caller]
pub fn assert_is_none<V: Nullable + Debug>(value: V) {
    enforce(check_is_none(value));
}

/// Asserts that `value` is not null.
#[track_caller]
pub fn assert_is_not_none<V: Nullable + Debug>(value: V) {
    enforce(check_is_not_none(value));
}
