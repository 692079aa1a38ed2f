use verdict_core::{enforce, AssertionFailure};
use verdict_inspect::{Class, Introspect};

/// Checks that `actual` is an instance of `expected` or one of its subclasses.
pub fn check_is_instance<V: Introspect>(expected: &Class, actual: V) -> Result<(), AssertionFailure> {
    if !actual.class().is_subclass_of(expected) {
        return Err(AssertionFailure::new(
            "verdict.is_instance",
            format!("{actual:?} is not an instance of {expected:?}"),
        )
        .with_context("class", actual.class().name()));
    }
    Ok(())
}

/// Checks that `actual` is not an instance of `expected`.
pub fn check_is_not_instance<V: Introspect>(
    expected: &Class,
    actual: V,
) -> Result<(), AssertionFailure> {
    if actual.class().is_subclass_of(expected) {
        return Err(AssertionFailure::new(
            "verdict.is_not_instance",
            format!("{actual:?} is an instance of {expected:?}"),
        )
        .with_context("class", actual.class().name()));
    }
    Ok(())
}

/// Checks that `actual` is `expected` or derives from it.
pub fn check_is_subclass(expected: &Class, actual: &Class) -> Result<(), AssertionFailure> {
    if !actual.is_subclass_of(expected) {
        return Err(AssertionFailure::new(
            "verdict.is_subclass",
            format!("{actual:?} is not a subclass of {expected:?}"),
        ));
    }
    Ok(())
}

/// Checks that `actual` does not derive from `expected`.
pub fn check_not_is_subclass(expected: &Class, actual: &Class) -> Result<(), AssertionFailure> {
    if actual.is_subclass_of(expected) {
        return Err(AssertionFailure::new(
            "verdict.not_is_subclass",
            format!("{actual:?} is a subclass of {expected:?}"),
        ));
    }
    Ok(())
}

/// Asserts that `actual` is an instance of `expected`.
#[track_caller]
pub fn assert_is_instance<V: Introspect>(expected: &Class, actual: V) {
    enforce(check_is_instance(expected, actual));
}

/// Asserts that `actual` is not an instance of `expected`.
#[track_caller]
pub fn assert_is_not_instance<V: Introspect>(expected: &Class, actual: V) {
    enforce(check_is_not_instance(expected, actual));
}

/// Asserts that `actual` is a subclass of `expected`.
#[track_caller]
pub fn assert_is_subclass(expected: &Class, actual: &Class) {
    enforce(check_is_subclass(expected, actual));
}

/// Asserts that `actual` is not a subclass of `expected`.
#[track_caller]
pub fn assert_not_is_subclass(expected: &Class, actual: &Class) {
    enforce(check_not_is_subclass(expected, actual));
}
